use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::gadget::adapter::incoming::web::dto::{parse_status, GadgetResponse, ListGadgetsQuery};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List gadgets
///
/// Every gadget, optionally narrowed to one exact status.
#[utoipa::path(
    get,
    path = "/gadgets",
    tag = "gadgets",
    params(ListGadgetsQuery),
    responses(
        (status = 200, description = "Gadgets", body = [GadgetResponse]),
        (
            status = 400,
            description = "Unknown status filter",
            body = ErrorResponse,
            example = json!({ "message": "Invalid status" })
        ),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("jwt" = []))
)]
#[get("/gadgets")]
pub async fn list_gadgets_handler(
    user: AuthenticatedUser,
    query: web::Query<ListGadgetsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let status = match parse_status(query.status.as_deref()) {
        Ok(status) => status,
        Err(e) => {
            warn!(user_id = %user.id, error = %e, "Rejected gadget filter");
            return ApiResponse::bad_request("Invalid status");
        }
    };

    match data.gadget.list.execute(status).await {
        Ok(gadgets) => ApiResponse::success(
            gadgets
                .into_iter()
                .map(GadgetResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(error = %e, "Failed to list gadgets");
            ApiResponse::internal_error()
        }
    }
}
