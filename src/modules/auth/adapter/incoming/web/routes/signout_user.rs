use crate::api::schemas::MessageResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};

/// Sign out
///
/// Expires the `jwt` session cookie. Works without a session.
#[utoipa::path(
    post,
    path = "/auth/signout",
    tag = "auth",
    responses(
        (
            status = 200,
            description = "Session cookie cleared",
            body = MessageResponse,
            example = json!({ "message": "Successfully logged out" })
        ),
    )
)]
#[post("/auth/signout")]
pub async fn signout_user_handler(data: web::Data<AppState>) -> impl Responder {
    tracing::info!("Session cookie cleared");

    ApiResponse::success_with_cookie(
        MessageResponse {
            message: "Successfully logged out".to_string(),
        },
        data.session_cookie.clear(),
    )
}
