use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::signin_user::{SigninError, SigninRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::signup_user::AuthUserResponse;

#[derive(Deserialize, ToSchema)]
pub struct SigninRequestDto {
    #[serde(default)]
    #[schema(example = "ethan@imf.gov")]
    pub email: String,

    #[serde(default)]
    #[schema(example = "mission1")]
    pub password: String,
}

/// Sign in
///
/// Checks the credentials and sets the `jwt` session cookie.
#[utoipa::path(
    post,
    path = "/auth/signin",
    tag = "auth",
    request_body = SigninRequestDto,
    responses(
        (
            status = 200,
            description = "Signed in, session cookie set",
            body = AuthUserResponse,
            example = json!({
                "message": "Signin successful",
                "user": {
                    "id": "5b0f4a51-9a51-4c57-8b4e-0a2a1c9f2c11",
                    "name": "Ethan Hunt",
                    "email": "ethan@imf.gov"
                }
            })
        ),
        (
            status = 400,
            description = "Validation failed or wrong credentials",
            body = ErrorResponse,
            example = json!({ "message": "Invalid email or password" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/auth/signin")]
pub async fn signin_user_handler(
    req: web::Json<SigninRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match SigninRequest::new(&dto.email, &dto.password) {
        Ok(request) => request,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    info!(email = %request.email(), "Signin attempt");

    match data.signin_user_use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User signed in");

            let cookie = data.session_cookie.issue(&response.token);
            ApiResponse::success_with_cookie(
                AuthUserResponse {
                    message: "Signin successful".to_string(),
                    user: response.user,
                },
                cookie,
            )
        }

        Err(SigninError::InvalidCredentials) => {
            warn!("Signin failed: invalid credentials");
            ApiResponse::bad_request("Invalid email or password")
        }

        Err(SigninError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(SigninError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(SigninError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserIdentity;
    use crate::auth::application::use_cases::signin_user::{ISigninUserUseCase, SigninResponse};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{cookie::SameSite, http::StatusCode, test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockSigninSuccess;

    #[async_trait]
    impl ISigninUserUseCase for MockSigninSuccess {
        async fn execute(&self, request: SigninRequest) -> Result<SigninResponse, SigninError> {
            Ok(SigninResponse {
                user: UserIdentity {
                    id: Uuid::new_v4(),
                    name: "Ethan Hunt".to_string(),
                    email: request.email().to_string(),
                },
                token: "signed.session.token".to_string(),
            })
        }
    }

    #[derive(Clone)]
    struct MockSigninInvalidCredentials;

    #[async_trait]
    impl ISigninUserUseCase for MockSigninInvalidCredentials {
        async fn execute(&self, _request: SigninRequest) -> Result<SigninResponse, SigninError> {
            Err(SigninError::InvalidCredentials)
        }
    }

    #[derive(Clone)]
    struct MockSigninQueryError;

    #[async_trait]
    impl ISigninUserUseCase for MockSigninQueryError {
        async fn execute(&self, _request: SigninRequest) -> Result<SigninResponse, SigninError> {
            Err(SigninError::QueryError("Connection pool exhausted".to_string()))
        }
    }

    fn credentials() -> serde_json::Value {
        serde_json::json!({ "email": "ethan@imf.gov", "password": "mission1" })
    }

    #[actix_web::test]
    async fn test_signin_success_sets_session_cookie() {
        let app_state = TestAppStateBuilder::default()
            .with_signin_user(MockSigninSuccess)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(signin_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/auth/signin")
            .set_json(credentials())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "jwt")
            .expect("session cookie should be set");
        assert_eq!(cookie.value(), "signed.session.token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert!(cookie.max_age().is_some());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Signin successful");
        assert_eq!(body["user"]["email"], "ethan@imf.gov");
    }

    #[actix_web::test]
    async fn test_signin_invalid_credentials() {
        let app_state = TestAppStateBuilder::default()
            .with_signin_user(MockSigninInvalidCredentials)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(signin_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/auth/signin")
            .set_json(credentials())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(resp.response().cookies().next().is_none());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid email or password");
    }

    #[actix_web::test]
    async fn test_signin_validation_failure() {
        let app_state = TestAppStateBuilder::default()
            .with_signin_user(MockSigninSuccess)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(signin_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/auth/signin")
            .set_json(serde_json::json!({ "email": "ethan@imf.gov" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"][0]["field"], "password");
    }

    #[actix_web::test]
    async fn test_signin_query_error_is_internal() {
        let app_state = TestAppStateBuilder::default()
            .with_signin_user(MockSigninQueryError)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(signin_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/auth/signin")
            .set_json(credentials())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
