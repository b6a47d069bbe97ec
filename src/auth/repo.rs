use crate::auth::repo_types::User;
use sqlx::PgPool;

impl User {
    /// Find a user by username. The UNIQUE constraint guarantees at most one
    /// match.
    pub async fn find_by_username(db: &PgPool, username: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, is_active, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a new active user. Uniqueness is not pre-checked; a duplicate
    /// username surfaces as a database unique-violation error.
    pub async fn create(
        db: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, is_active)
            VALUES ($1, $2, $3, TRUE)
            RETURNING id, username, email, password_hash, is_active, created_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }
}
