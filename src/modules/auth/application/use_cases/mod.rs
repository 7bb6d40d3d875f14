pub mod check_session;
pub mod signin_user;
pub mod signup_user;
