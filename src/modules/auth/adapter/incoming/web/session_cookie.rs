use actix_web::cookie::{time::Duration, Cookie, SameSite};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "jwt";

#[derive(Debug, Clone)]
pub struct SessionCookieConfig {
    pub secure: bool,
    pub max_age_secs: i64,
}

impl SessionCookieConfig {
    pub fn new(secure: bool, max_age_secs: i64) -> Self {
        Self {
            secure,
            max_age_secs,
        }
    }

    /// Cookie handing `token` to the browser, alive as long as the token.
    pub fn issue(&self, token: &str) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, token.to_owned())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.secure)
            .max_age(Duration::seconds(self.max_age_secs))
            .finish()
    }

    /// Empty cookie that makes the browser drop the session at once.
    pub fn clear(&self) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.secure)
            .max_age(Duration::ZERO)
            .finish()
    }
}
