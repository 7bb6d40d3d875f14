use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::session_cookie::SESSION_COOKIE;
use crate::auth::application::use_cases::check_session::CheckSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Identity of the caller, resolved from the session cookie on every
/// protected request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = req
            .cookie(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty());

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                tracing::error!("AppState missing from request data");
                create_api_error(ApiResponse::internal_error())
            })?;

            let token = token.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "Unauthorized - no token provided",
                ))
            })?;

            match state.check_session_use_case.execute(&token).await {
                Ok(identity) => Ok(AuthenticatedUser {
                    id: identity.id,
                    name: identity.name,
                    email: identity.email,
                }),
                Err(CheckSessionError::InvalidToken(e)) => {
                    tracing::warn!(error = %e, "Rejected session token");
                    Err(create_api_error(ApiResponse::unauthorized(
                        "Unauthorized - Invalid token provided",
                    )))
                }
                Err(CheckSessionError::UserNotFound) => {
                    tracing::warn!("Session refers to a user that no longer exists");
                    Err(create_api_error(ApiResponse::not_found("User not signed in")))
                }
                Err(CheckSessionError::QueryError(e)) => {
                    tracing::error!(error = %e, "Failed to load session user");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}
