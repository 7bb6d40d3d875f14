use std::env;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_JWT_EXPIRY_SECS: i64 = 15 * 24 * 60 * 60;
const MAX_JWT_EXPIRY_SECS: i64 = 10 * 365 * 24 * 60 * 60;
const DEFAULT_JWT_ISSUER: &str = "imf-gadget-api";
const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("JWT_SECRET must be at least 32 characters long for HS256 algorithm")]
    WeakJwtSecret,
}

/// Which password hashing scheme new accounts get.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordHashing {
    Argon2 {
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    },
    Bcrypt {
        cost: u32,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub jwt: JwtConfig,
    pub cookie_secure: bool,
    pub password_hashing: PasswordHashing,
}

impl AppConfig {
    /// Load from the process environment. `.env` files must already be applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let db_max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;

        let jwt = jwt_from_lookup(&lookup)?;

        let production = lookup("RUST_ENV").as_deref() == Some("production");
        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool("COOKIE_SECURE", &raw)?,
            None => production,
        };

        let password_hashing = hashing_from_lookup(&lookup)?;

        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
            jwt,
            cookie_secure,
            password_hashing,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn jwt_from_lookup<F>(lookup: &F) -> Result<JwtConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let secret_key = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
    if secret_key.len() < MIN_JWT_SECRET_LEN {
        return Err(ConfigError::WeakJwtSecret);
    }

    let session_expiry = parse_or(lookup, "JWT_EXPIRY", DEFAULT_JWT_EXPIRY_SECS)?;
    if !(1..=MAX_JWT_EXPIRY_SECS).contains(&session_expiry) {
        return Err(ConfigError::Invalid {
            key: "JWT_EXPIRY",
            value: session_expiry.to_string(),
        });
    }

    let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| DEFAULT_JWT_ISSUER.to_string());

    Ok(JwtConfig {
        secret_key,
        issuer,
        session_expiry,
    })
}

fn hashing_from_lookup<F>(lookup: &F) -> Result<PasswordHashing, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let algorithm = lookup("PASSWORD_HASHER").unwrap_or_else(|| "argon2".to_string());

    match algorithm.to_ascii_lowercase().as_str() {
        "argon2" => Ok(PasswordHashing::Argon2 {
            memory_kib: parse_or(lookup, "ARGON2_MEMORY_KIB", 4 * 1024)?,
            iterations: parse_or(lookup, "ARGON2_ITERATIONS", 3)?,
            parallelism: parse_or(lookup, "ARGON2_PARALLELISM", 1)?,
        }),
        "bcrypt" => Ok(PasswordHashing::Bcrypt {
            cost: parse_or(lookup, "BCRYPT_COST", 10)?,
        }),
        _ => Err(ConfigError::Invalid {
            key: "PASSWORD_HASHER",
            value: algorithm,
        }),
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
        }),
    }
}
