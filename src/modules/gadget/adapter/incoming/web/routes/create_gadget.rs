use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::gadget::adapter::incoming::web::dto::{
    parse_status, CreateGadgetRequest, GadgetEnvelope,
};
use crate::gadget::application::ports::incoming::use_cases::{
    CreateGadgetCommand, CreateGadgetError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create a gadget
///
/// Without a name the gadget gets a random codename. Success probability is
/// rolled once here and never changes.
#[utoipa::path(
    post,
    path = "/gadgets",
    tag = "gadgets",
    request_body = CreateGadgetRequest,
    responses(
        (status = 201, description = "Gadget created", body = GadgetEnvelope),
        (
            status = 400,
            description = "Invalid status, overlong name or name already taken",
            body = ErrorResponse,
            example = json!({ "message": "You already have a gadget with this name" })
        ),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("jwt" = []))
)]
#[post("/gadgets")]
pub async fn create_gadget_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateGadgetRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let status = match parse_status(req.status.as_deref()) {
        Ok(status) => status,
        Err(e) => {
            warn!(user_id = %user.id, error = %e, "Rejected gadget status");
            return ApiResponse::bad_request("Invalid status");
        }
    };

    let command = match CreateGadgetCommand::new(req.name, status) {
        Ok(command) => command,
        Err(errors) => {
            warn!(user_id = %user.id, errors = %errors, "Rejected gadget input");
            return ApiResponse::validation_failed(errors);
        }
    };

    match data.gadget.create.execute(command).await {
        Ok(gadget) => {
            info!(user_id = %user.id, gadget_id = %gadget.id, "Gadget created via API");
            ApiResponse::created(GadgetEnvelope::new("Gadget created successfully!", gadget))
        }

        Err(CreateGadgetError::InvalidStatus) => ApiResponse::bad_request("Invalid status"),

        Err(CreateGadgetError::NameAlreadyExists) => {
            ApiResponse::conflict("You already have a gadget with this name")
        }

        Err(CreateGadgetError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create gadget");
            ApiResponse::internal_error()
        }
    }
}
