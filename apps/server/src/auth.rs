use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher,
        PasswordVerifier, SaltString,
    },
    Argon2,
};
use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use spendtrack_core::errors::{Error as CoreError, Result as CoreResult};
use spendtrack_core::users::PasswordHasherTrait;

use crate::main_lib::AppState;

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: Vec<u8>,
    pub access_token_ttl: Duration,
}

/// Signs and validates the bearer tokens handed out at login.
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

/// The authenticated caller, inserted into request extensions by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
}

#[derive(Debug)]
pub enum AuthError {
    Unauthorized,
    Internal(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    code: u16,
    message: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
    iat: usize,
}

impl AuthManager {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            encoding_key: EncodingKey::from_secret(&config.jwt_secret),
            decoding_key: DecodingKey::from_secret(&config.jwt_secret),
            validation,
            token_ttl: config.access_token_ttl,
        }
    }

    pub fn issue_token(&self, user_id: &str) -> Result<String, AuthError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| AuthError::Internal("System clock is before UNIX_EPOCH".into()))?;
        let exp = now + self.token_ttl;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.as_secs() as usize,
            exp: exp.as_secs() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {e}")))
    }

    /// Returns the user id carried by a valid token.
    pub fn validate_token(&self, token: &str) -> Result<String, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|err| {
                tracing::debug!("Rejected bearer token: {}", err);
                AuthError::Unauthorized
            })
    }

    pub fn expires_in(&self) -> Duration {
        self.token_ttl
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AuthError::Internal(msg) => {
                tracing::error!("Authentication failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    crate::error::GENERIC_ERROR_MESSAGE.to_string(),
                )
            }
        };
        let body = Json(AuthErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

/// Accepts a base64 encoded 32-byte key, or a raw 32-character ASCII string.
pub fn decode_secret_key(raw: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("JWT secret cannot be empty");
    }
    let decoded = match BASE64.decode(trimmed) {
        Ok(bytes) => bytes,
        Err(_) if trimmed.len() == 32 => trimmed.as_bytes().to_vec(),
        Err(_) => {
            anyhow::bail!("JWT secret must be base64 encoded or a 32-byte ASCII string")
        }
    };

    if decoded.len() != 32 {
        anyhow::bail!("JWT secret must decode to exactly 32 bytes");
    }

    Ok(decoded)
}

/// argon2id password hashing in PHC string format.
#[derive(Default)]
pub struct Argon2PasswordHasher;

impl PasswordHasherTrait for Argon2PasswordHasher {
    fn hash_password(&self, password: &str) -> CoreResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CoreError::Unexpected(format!("Failed to hash password: {e}")))
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> CoreResult<bool> {
        let parsed = PasswordHash::new(password_hash)
            .map_err(|e| CoreError::Unexpected(format!("Stored password hash is invalid: {e}")))?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(other) => Err(CoreError::Unexpected(format!(
                "Password verification failed: {other}"
            ))),
        }
    }
}

/// Rejects requests without a valid `Authorization: Bearer <token>` header.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::Unauthorized)?;

    let mut parts = header.splitn(2, ' ');
    let (Some(scheme), Some(token)) = (parts.next(), parts.next()) else {
        return Err(AuthError::Unauthorized);
    };

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return Err(AuthError::Unauthorized);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::Unauthorized);
    }

    let user_id = state.auth.validate_token(token)?;
    request.extensions_mut().insert(AuthUser { id: user_id });
    Ok(next.run(request).await)
}
