use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::domain::entities::UserIdentity;
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};
use crate::shared::validation::ValidationErrors;

pub const MIN_PASSWORD_LEN: usize = 6;
/// Widths of the `users.name` and `users.email` columns.
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 255;

// ========================= Signup Request =========================
/// Validated signup input. The email is trimmed and lower-cased.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    name: String,
    email: String,
    password: String,
}

impl SignupRequest {
    /// Collects every violation instead of stopping at the first one.
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = name.trim();
        if name.is_empty() {
            errors.push("name", "Name is required");
        } else if name.chars().count() > MAX_NAME_LEN {
            errors.push("name", "Name must be at most 100 characters");
        }

        let email = email.trim();
        if !EmailAddress::is_valid(email) {
            errors.push("email", "Invalid email format");
        } else if email.chars().count() > MAX_EMAIL_LEN {
            errors.push("email", "Email must be at most 255 characters");
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            errors.push("password", "Password should be at least 6 characters");
        }

        errors.into_result(Self {
            name: name.to_string(),
            email: email.to_lowercase(),
            password: password.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Signup Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum SignupError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// A freshly created account together with its first session token.
#[derive(Debug, Clone)]
pub struct SignupResponse {
    pub user: UserIdentity,
    pub token: String,
}

// ============================ Signup Use Case =============================
#[async_trait]
pub trait ISignupUserUseCase: Send + Sync {
    async fn execute(&self, request: SignupRequest) -> Result<SignupResponse, SignupError>;
}

#[derive(Clone)]
pub struct SignupUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> SignupUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> ISignupUserUseCase for SignupUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: SignupRequest) -> Result<SignupResponse, SignupError> {
        // 1️⃣ Reject a taken email before spending time on hashing
        let existing = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| SignupError::QueryError(e.to_string()))?;

        if existing.is_some() {
            return Err(SignupError::EmailAlreadyExists);
        }

        // 2️⃣ Hash password
        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| SignupError::HashingFailed(e.to_string()))?;

        // 3️⃣ Persist; the unique index catches a concurrent signup
        let user = self
            .repository
            .create_user(CreateUserData {
                name: request.name().to_string(),
                email: request.email().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => SignupError::EmailAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => SignupError::RepositoryError(msg),
            })?;

        // 4️⃣ Open a session
        let token = self
            .token_provider
            .issue_session(user.id)
            .map_err(|e| SignupError::TokenGenerationFailed(e.to_string()))?;

        Ok(SignupResponse {
            user: UserIdentity::from(user),
            token,
        })
    }
}
