use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::gadget::adapter::incoming::web::dto::{parse_gadget_id, GadgetEnvelope};
use crate::gadget::application::ports::incoming::use_cases::DecommissionGadgetError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Decommission a gadget
///
/// Gadgets are never removed; deleting one marks it `Decommissioned` and
/// stamps `decommissionedAt`.
#[utoipa::path(
    delete,
    path = "/gadgets/{id}",
    tag = "gadgets",
    params(("id" = String, Path, description = "Gadget id (UUID)")),
    responses(
        (status = 200, description = "Gadget decommissioned", body = GadgetEnvelope),
        (
            status = 400,
            description = "Invalid id or already decommissioned",
            body = ErrorResponse,
            example = json!({ "message": "Gadget already decommissioned" })
        ),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 404, description = "No gadget with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("jwt" = []))
)]
#[delete("/gadgets/{id}")]
pub async fn decommission_gadget_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(id) = parse_gadget_id(&path.into_inner()) else {
        return ApiResponse::bad_request("Invalid gadget id");
    };

    match data.gadget.decommission.execute(id).await {
        Ok(gadget) => {
            info!(user_id = %user.id, gadget_id = %id, "Gadget decommissioned via API");
            ApiResponse::success(GadgetEnvelope::new(
                "Gadget decommissioned successfully",
                gadget,
            ))
        }

        Err(DecommissionGadgetError::NotFound) => ApiResponse::not_found("Gadget not found"),

        Err(DecommissionGadgetError::AlreadyDecommissioned) => {
            ApiResponse::conflict("Gadget already decommissioned")
        }

        Err(DecommissionGadgetError::RepositoryError(e)) => {
            error!(gadget_id = %id, error = %e, "Failed to decommission gadget");
            ApiResponse::internal_error()
        }
    }
}
