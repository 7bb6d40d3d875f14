mod check_session;
mod signin_user;
mod signout_user;
mod signup_user;

pub use check_session::{__path_check_session_handler, check_session_handler};
pub use signin_user::{__path_signin_user_handler, signin_user_handler, SigninRequestDto};
pub use signout_user::{__path_signout_user_handler, signout_user_handler};
pub use signup_user::{
    __path_signup_user_handler, signup_user_handler, AuthUserResponse, SignupRequestDto,
};
