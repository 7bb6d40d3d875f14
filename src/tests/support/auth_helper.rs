use actix_web::cookie::Cookie;

use crate::auth::adapter::incoming::web::session_cookie::SESSION_COOKIE;

/// Session cookie accepted by `StubCheckSessionUseCase::Valid`; the token
/// itself is never decoded.
pub fn session_cookie() -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, "test-session-token")
}

/// Pull the session token out of a `Set-Cookie` header.
pub fn session_token_from<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<String> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.value().to_string())
}
