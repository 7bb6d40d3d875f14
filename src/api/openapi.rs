use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::shared::validation::FieldViolation;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    AuthUserResponse, SigninRequestDto, SignupRequestDto,
};
use crate::auth::application::domain::entities::UserIdentity;

// Gadgets
use crate::gadget::adapter::incoming::web::dto::{
    CreateGadgetRequest, DestroyedGadgetEnvelope, GadgetEnvelope, GadgetResponse,
    UpdateGadgetRequest,
};
use crate::gadget::application::domain::GadgetStatus;

// Health
use crate::health::{HealthResponse, ReadinessResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "IMF Gadget API",
        version = "1.0.0",
        description = "Inventory and lifecycle of IMF field gadgets. Every gadget endpoint requires the `jwt` session cookie set by signup or signin.",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::signup_user_handler,
        crate::auth::adapter::incoming::web::routes::signin_user_handler,
        crate::auth::adapter::incoming::web::routes::signout_user_handler,
        crate::auth::adapter::incoming::web::routes::check_session_handler,

        // Gadget endpoints
        crate::gadget::adapter::incoming::web::routes::list_gadgets_handler,
        crate::gadget::adapter::incoming::web::routes::create_gadget_handler,
        crate::gadget::adapter::incoming::web::routes::update_gadget_handler,
        crate::gadget::adapter::incoming::web::routes::decommission_gadget_handler,
        crate::gadget::adapter::incoming::web::routes::self_destruct_gadget_handler,

        // Probes
        crate::health::health,
        crate::health::readiness,
    ),
    components(
        schemas(
            // Shared bodies
            ErrorResponse,
            FieldViolation,
            MessageResponse,

            // Auth DTOs
            SignupRequestDto,
            SigninRequestDto,
            AuthUserResponse,
            UserIdentity,

            // Gadget DTOs
            GadgetStatus,
            GadgetResponse,
            GadgetEnvelope,
            DestroyedGadgetEnvelope,
            CreateGadgetRequest,
            UpdateGadgetRequest,

            HealthResponse,
            ReadinessResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Signup, signin and session endpoints"),
        (name = "gadgets", description = "Gadget inventory and lifecycle"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "jwt",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "jwt",
                    "Session token set by /auth/signup or /auth/signin",
                ))),
            )
        }
    }
}
