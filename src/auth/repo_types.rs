use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database. Rows are inserted once and never updated or
/// deleted by this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                   // unique user ID, assigned by the database
    pub username: String,           // UNIQUE, login lookup key
    pub email: String,              // equality check at login, never a lookup key
    #[serde(skip_serializing)]
    pub password_hash: String,      // Argon2 hash, not exposed in JSON
    pub is_active: bool,            // true at creation, no deactivation path
    pub created_at: OffsetDateTime, // creation timestamp
}
