use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use com360_application::SessionTokenVerifier;
use com360_core::{Actor, AppError, AppResult, EmpId, OrgId};

const EXPIRY_LEEWAY_SECONDS: u64 = 60;

/// Claims carried by the session cookie.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    orgid: i64,
    empid: String,
    iat: i64,
    exp: i64,
}

/// HS256 session token codec keyed by a server-held secret.
pub struct JwtSessionTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtSessionTokenCodec {
    /// Creates a codec for the secret; tokens it issues live `ttl_minutes`.
    pub fn new(secret: &str, ttl_minutes: i64) -> AppResult<Self> {
        if secret.trim().is_empty() {
            return Err(AppError::Validation(
                "session token secret must not be empty".to_owned(),
            ));
        }
        if ttl_minutes <= 0 {
            return Err(AppError::Validation(
                "session token ttl must be positive".to_owned(),
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = EXPIRY_LEEWAY_SECONDS;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::minutes(ttl_minutes),
        })
    }

    /// Issues a signed token for the actor, valid from now.
    pub fn issue(&self, actor: &Actor) -> AppResult<String> {
        self.issue_at(actor, Utc::now())
    }

    fn issue_at(&self, actor: &Actor, issued_at: DateTime<Utc>) -> AppResult<String> {
        let claims = SessionClaims {
            orgid: actor.org_id().as_i64(),
            empid: actor.emp_id().as_str().to_owned(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|error| AppError::Internal(format!("failed to sign session token: {error}")))
    }
}

impl SessionTokenVerifier for JwtSessionTokenCodec {
    fn verify(&self, token: &str) -> AppResult<Actor> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|error| {
                debug!(error = %error, "rejected session token");
                AppError::Unauthorized("invalid or expired session token".to_owned())
            })?;

        let emp_id = EmpId::new(token_data.claims.empid).map_err(|_| {
            AppError::Unauthorized("session token does not name an employee".to_owned())
        })?;

        Ok(Actor::new(OrgId::new(token_data.claims.orgid), emp_id))
    }
}
