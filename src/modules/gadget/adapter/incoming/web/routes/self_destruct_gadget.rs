use actix_web::{route, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::gadget::adapter::incoming::web::dto::{parse_gadget_id, DestroyedGadgetEnvelope};
use crate::gadget::application::ports::incoming::use_cases::DestroyGadgetError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Trigger self-destruct
///
/// Marks the gadget `Destroyed` and stamps `destroyedAt`. Served on both
/// POST and PATCH.
#[utoipa::path(
    method(post, patch),
    path = "/gadgets/{id}/self-destruct",
    tag = "gadgets",
    params(("id" = String, Path, description = "Gadget id (UUID)")),
    responses(
        (status = 200, description = "Gadget destroyed", body = DestroyedGadgetEnvelope),
        (
            status = 400,
            description = "Invalid id or already destroyed",
            body = ErrorResponse,
            example = json!({ "message": "Gadget already destroyed" })
        ),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 404, description = "No gadget with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("jwt" = []))
)]
#[route("/gadgets/{id}/self-destruct", method = "POST", method = "PATCH")]
pub async fn self_destruct_gadget_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(id) = parse_gadget_id(&path.into_inner()) else {
        return ApiResponse::bad_request("Invalid gadget id");
    };

    match data.gadget.destroy.execute(id).await {
        Ok(gadget) => {
            info!(user_id = %user.id, gadget_id = %id, "Gadget self-destructed");
            ApiResponse::success(DestroyedGadgetEnvelope {
                message: "Gadget destroyed successfully".to_string(),
                destroyed_gadget: gadget.into(),
            })
        }

        Err(DestroyGadgetError::NotFound) => ApiResponse::not_found("Gadget not found"),

        Err(DestroyGadgetError::AlreadyDestroyed) => {
            ApiResponse::conflict("Gadget already destroyed")
        }

        Err(DestroyGadgetError::RepositoryError(e)) => {
            error!(gadget_id = %id, error = %e, "Failed to destroy gadget");
            ApiResponse::internal_error()
        }
    }
}
