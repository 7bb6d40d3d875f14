use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserIdentity;
use crate::shared::api::ApiResponse;
use actix_web::{get, Responder};

/// Current session
///
/// Returns the identity behind the `jwt` cookie.
#[utoipa::path(
    get,
    path = "/auth/check",
    tag = "auth",
    responses(
        (
            status = 200,
            description = "Session is valid",
            body = UserIdentity,
            example = json!({
                "id": "5b0f4a51-9a51-4c57-8b4e-0a2a1c9f2c11",
                "name": "Ethan Hunt",
                "email": "ethan@imf.gov"
            })
        ),
        (
            status = 401,
            description = "Missing or invalid session",
            body = ErrorResponse,
            example = json!({ "message": "Unauthorized - no token provided" })
        ),
        (
            status = 404,
            description = "Session user no longer exists",
            body = ErrorResponse,
            example = json!({ "message": "User not signed in" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("jwt" = []))
)]
#[get("/auth/check")]
pub async fn check_session_handler(user: AuthenticatedUser) -> impl Responder {
    ApiResponse::success(UserIdentity {
        id: user.id,
        name: user.name,
        email: user.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubCheckSessionUseCase;
    use actix_web::{cookie::Cookie, test, App};

    #[actix_web::test]
    async fn test_check_returns_bare_identity() {
        let identity = StubCheckSessionUseCase::agent();
        let app_state = TestAppStateBuilder::default()
            .with_check_session(StubCheckSessionUseCase::Valid(identity.clone()))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(check_session_handler))
                .await;

        let req = test::TestRequest::get()
            .uri("/auth/check")
            .cookie(Cookie::new("jwt", "good-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({
                "id": identity.id,
                "name": identity.name,
                "email": identity.email
            })
        );
    }

    #[actix_web::test]
    async fn test_check_without_cookie() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(check_session_handler))
                .await;

        let req = test::TestRequest::get().uri("/auth/check").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
