use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;

use crate::auth::claims::Claims;
use crate::config::JwtConfig;
use crate::state::AppState;

/// Signing and verification keys plus the claim metadata baked into every
/// token. Tokens are stateless; nothing is stored server-side and there is
/// no revocation.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub issuer: String,
    pub audience: String,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            issuer,
            audience,
            ttl_minutes,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            audience,
            ttl: Duration::from_secs(ttl_minutes * 60),
        }
    }
}

impl JwtKeys {
    pub fn sign(&self, username: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            sub: username.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(username = %username, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(username = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_with_secret(secret: &str) -> JwtKeys {
        JwtKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            issuer: "test-issuer".into(),
            audience: "test-aud".into(),
            ttl: Duration::from_secs(300),
        }
    }

    #[test]
    fn sign_and_verify_roundtrip() {
        let keys = keys_with_secret("test-secret");
        let token = keys.sign("ana").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, "ana");
        assert_eq!(claims.iss, "test-issuer");
        assert_eq!(claims.aud, "test-aud");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn verify_rejects_other_secret() {
        let token = keys_with_secret("one").sign("ana").expect("sign");
        assert!(keys_with_secret("two").verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_garbage() {
        let keys = keys_with_secret("test-secret");
        assert!(keys.verify("not.a.jwt").is_err());
    }

    #[test]
    fn verify_rejects_wrong_audience() {
        let signer = keys_with_secret("shared");
        let mut verifier = keys_with_secret("shared");
        verifier.audience = "other-aud".into();
        let token = signer.sign("ana").expect("sign");
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_wrong_issuer() {
        let signer = keys_with_secret("shared");
        let mut verifier = keys_with_secret("shared");
        verifier.issuer = "other-issuer".into();
        let token = signer.sign("ana").expect("sign");
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_expired_token() {
        let keys = keys_with_secret("test-secret");
        // exp is set well past the default 60 s validation leeway.
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            sub: "ana".into(),
            iat: (now - 600) as usize,
            exp: (now - 120) as usize,
            iss: "test-issuer".into(),
            aud: "test-aud".into(),
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).expect("encode");
        assert!(keys.verify(&token).is_err());
    }
}
