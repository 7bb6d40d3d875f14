use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token issued by an unknown party")]
    InvalidIssuer,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Payload of a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

pub trait TokenProvider: Send + Sync {
    fn issue_session(&self, user_id: Uuid) -> Result<String, TokenError>;
    fn verify_session(&self, token: &str) -> Result<SessionClaims, TokenError>;
    /// Lifetime of freshly issued sessions, in seconds.
    fn session_lifetime_secs(&self) -> i64;
}
