use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::domain::entities::UserIdentity;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};
use crate::shared::validation::ValidationErrors;

use super::signup_user::MIN_PASSWORD_LEN;

// ========================= Signin Request =========================
#[derive(Debug, Clone)]
pub struct SigninRequest {
    email: String,
    password: String,
}

impl SigninRequest {
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let email = email.trim();
        if !EmailAddress::is_valid(email) {
            errors.push("email", "Invalid email format");
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            errors.push("password", "Password must be at least 6 characters");
        }

        errors.into_result(Self {
            email: email.to_lowercase(),
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Signin Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum SigninError {
    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone)]
pub struct SigninResponse {
    pub user: UserIdentity,
    pub token: String,
}

// ============================ Signin Use Case =============================
#[async_trait]
pub trait ISigninUserUseCase: Send + Sync {
    async fn execute(&self, request: SigninRequest) -> Result<SigninResponse, SigninError>;
}

#[derive(Clone)]
pub struct SigninUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> SigninUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ISigninUserUseCase for SigninUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: SigninRequest) -> Result<SigninResponse, SigninError> {
        // 1️⃣ Find user by email (already normalized)
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| SigninError::QueryError(e.to_string()))?
            .ok_or(SigninError::InvalidCredentials)?;

        // 2️⃣ Verify password
        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| SigninError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(SigninError::InvalidCredentials);
        }

        // 3️⃣ Issue session
        let token = self
            .token_provider
            .issue_session(user.id)
            .map_err(|e| SigninError::TokenGenerationFailed(e.to_string()))?;

        Ok(SigninResponse {
            user: UserIdentity::from(user),
            token,
        })
    }
}
