use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::UserIdentity;
use crate::auth::application::use_cases::signup_user::{SignupError, SignupRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct SignupRequestDto {
    #[serde(default)]
    #[schema(example = "Ethan Hunt")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "ethan@imf.gov")]
    pub email: String,

    /// At least 6 characters
    #[serde(default)]
    #[schema(example = "mission1")]
    pub password: String,
}

/// Body of a successful signup or signin
#[derive(Serialize, ToSchema)]
pub struct AuthUserResponse {
    #[schema(example = "Signin successful")]
    pub message: String,
    pub user: UserIdentity,
}

/// Create an account
///
/// Registers a new agent and opens a session right away via the `jwt` cookie.
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "auth",
    request_body = SignupRequestDto,
    responses(
        (
            status = 201,
            description = "Account created, session cookie set",
            body = AuthUserResponse,
            example = json!({
                "message": "Signup successful",
                "user": {
                    "id": "5b0f4a51-9a51-4c57-8b4e-0a2a1c9f2c11",
                    "name": "Ethan Hunt",
                    "email": "ethan@imf.gov"
                }
            })
        ),
        (
            status = 400,
            description = "Validation failed or email already taken",
            body = ErrorResponse,
            example = json!({
                "message": "Validation failed",
                "errors": [{ "field": "password", "message": "Password should be at least 6 characters" }]
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/auth/signup")]
pub async fn signup_user_handler(
    req: web::Json<SignupRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match SignupRequest::new(&dto.name, &dto.email, &dto.password) {
        Ok(request) => request,
        Err(errors) => {
            warn!(errors = %errors, "Signup rejected: invalid input");
            return ApiResponse::validation_failed(errors);
        }
    };

    match data.signup_user_use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User signed up");

            let cookie = data.session_cookie.issue(&response.token);
            ApiResponse::created_with_cookie(
                AuthUserResponse {
                    message: "Signup successful".to_string(),
                    user: response.user,
                },
                cookie,
            )
        }

        Err(SignupError::EmailAlreadyExists) => {
            warn!("Signup rejected: email already registered");
            ApiResponse::conflict("Email already exists")
        }

        Err(e) => {
            error!(error = %e, "Signup failed");
            ApiResponse::internal_error()
        }
    }
}
