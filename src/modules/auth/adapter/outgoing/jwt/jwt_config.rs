/// Signing settings for session tokens. Built once at startup and handed to
/// [`super::JwtTokenService`]; loading lives in `crate::config`.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_expiry: i64, // Expiration in seconds
}
