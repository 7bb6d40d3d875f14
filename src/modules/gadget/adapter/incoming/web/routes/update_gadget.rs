use actix_web::{patch, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::gadget::adapter::incoming::web::dto::{
    parse_gadget_id, parse_status, GadgetEnvelope, UpdateGadgetRequest,
};
use crate::gadget::application::ports::incoming::use_cases::{
    UpdateGadgetCommand, UpdateGadgetError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update a gadget
///
/// Overwrites the supplied name and status. Any status is accepted here,
/// including moving a decommissioned or destroyed gadget back into service.
#[utoipa::path(
    patch,
    path = "/gadgets",
    tag = "gadgets",
    request_body = UpdateGadgetRequest,
    responses(
        (status = 200, description = "Gadget updated", body = GadgetEnvelope),
        (
            status = 400,
            description = "Invalid id, status or name, or name already taken",
            body = ErrorResponse,
            example = json!({ "message": "Invalid gadget id" })
        ),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (
            status = 404,
            description = "No gadget with this id",
            body = ErrorResponse,
            example = json!({ "message": "Gadget not found" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("jwt" = []))
)]
#[patch("/gadgets")]
pub async fn update_gadget_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateGadgetRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let Some(id) = parse_gadget_id(&req.id) else {
        return ApiResponse::bad_request("Invalid gadget id");
    };

    let status = match parse_status(req.status.as_deref()) {
        Ok(status) => status,
        Err(e) => {
            warn!(user_id = %user.id, gadget_id = %id, error = %e, "Rejected gadget status");
            return ApiResponse::bad_request("Invalid status");
        }
    };

    let command = match UpdateGadgetCommand::new(id, req.name, status) {
        Ok(command) => command,
        Err(errors) => {
            warn!(user_id = %user.id, gadget_id = %id, errors = %errors, "Rejected gadget input");
            return ApiResponse::validation_failed(errors);
        }
    };

    match data.gadget.update.execute(command).await {
        Ok(gadget) => {
            ApiResponse::success(GadgetEnvelope::new("Gadget updated successfully", gadget))
        }

        Err(UpdateGadgetError::NotFound) => ApiResponse::not_found("Gadget not found"),

        Err(UpdateGadgetError::NameAlreadyExists) => {
            warn!(gadget_id = %id, "Rename collides with an existing gadget");
            ApiResponse::conflict("You already have a gadget with this name")
        }

        Err(UpdateGadgetError::RepositoryError(e)) => {
            error!(gadget_id = %id, error = %e, "Failed to update gadget");
            ApiResponse::internal_error()
        }
    }
}
