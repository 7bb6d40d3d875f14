use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserIdentity;
use crate::auth::application::ports::outgoing::{TokenError, TokenProvider, UserQuery};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckSessionError {
    #[error("Invalid session token: {0}")]
    InvalidToken(TokenError),

    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Resolves a session token to the identity it belongs to.
#[async_trait]
pub trait ICheckSessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<UserIdentity, CheckSessionError>;
}

#[derive(Clone)]
pub struct CheckSessionUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> CheckSessionUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            query,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ICheckSessionUseCase for CheckSessionUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<UserIdentity, CheckSessionError> {
        let claims = self
            .token_provider
            .verify_session(token)
            .map_err(CheckSessionError::InvalidToken)?;

        let user = self
            .query
            .find_by_id(claims.user_id)
            .await
            .map_err(|e| CheckSessionError::QueryError(e.to_string()))?
            .ok_or(CheckSessionError::UserNotFound)?;

        Ok(UserIdentity::from(user))
    }
}
