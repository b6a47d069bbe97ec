use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Raw request body shared by signup and login; both take the same triple.
#[derive(Debug, Deserialize)]
pub struct CredentialsPayload {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated credentials triple.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl CredentialsPayload {
    /// Checks fields in the order username, email, password; only the first
    /// missing one is reported.
    pub fn validate(self) -> Result<Credentials, ApiError> {
        let username = self.username.ok_or(ApiError::MissingField("username"))?;
        let email = self.email.ok_or(ApiError::MissingField("email"))?;
        let password = self.password.ok_or(ApiError::MissingField("password"))?;
        Ok(Credentials {
            username,
            email,
            password,
        })
    }
}

/// Response returned by signup and login. The capitalized `Msg` key is part
/// of the wire contract.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    #[serde(rename = "Msg")]
    pub msg: String,
    pub jwt_token: String,
}

/// Response returned by the protected route.
#[derive(Debug, Serialize)]
pub struct PrivateResponse {
    pub logged_in_as: String,
}
