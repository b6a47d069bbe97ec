use sqlx::PgPool;
use tracing::debug;

use crate::auth::dto::Credentials;
use crate::auth::password::verify_password;
use crate::auth::repo_types::User;

/// Result of a credential check. The failure variants exist so logs can tell
/// the causes apart; handlers flatten all of them into one generic
/// client-visible error.
#[derive(Debug)]
pub enum AuthOutcome {
    Ok(User),
    UnknownUser,
    BadPassword,
    EmailMismatch,
}

/// Verifies a credentials triple, short-circuiting at the first failure:
/// lookup by username, then password hash, then stored-email equality.
pub async fn authenticate(db: &PgPool, creds: &Credentials) -> anyhow::Result<AuthOutcome> {
    let Some(user) = User::find_by_username(db, &creds.username).await? else {
        return Ok(AuthOutcome::UnknownUser);
    };

    if !verify_password(&creds.password, &user.password_hash)? {
        return Ok(AuthOutcome::BadPassword);
    }

    if user.email != creds.email {
        return Ok(AuthOutcome::EmailMismatch);
    }

    debug!(user_id = %user.id, username = %user.username, "credentials verified");
    Ok(AuthOutcome::Ok(user))
}
