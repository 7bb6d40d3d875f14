use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserIdentity;
use crate::auth::application::ports::outgoing::TokenError;
use crate::auth::application::use_cases::check_session::{CheckSessionError, ICheckSessionUseCase};
use crate::auth::application::use_cases::signin_user::{
    ISigninUserUseCase, SigninError, SigninRequest, SigninResponse,
};
use crate::auth::application::use_cases::signup_user::{
    ISignupUserUseCase, SignupError, SignupRequest, SignupResponse,
};
use crate::gadget::application::domain::{Gadget, GadgetStatus};
use crate::gadget::application::ports::incoming::use_cases::{
    CreateGadgetCommand, CreateGadgetError, CreateGadgetUseCase, DecommissionGadgetError,
    DecommissionGadgetUseCase, DestroyGadgetError, DestroyGadgetUseCase, ListGadgetsError,
    ListGadgetsUseCase, UpdateGadgetCommand, UpdateGadgetError, UpdateGadgetUseCase,
};

// ============================================================
// Session
// ============================================================

/// Canned answers for the session check behind `AuthenticatedUser`.
#[derive(Debug, Clone, Default)]
pub enum StubCheckSessionUseCase {
    Valid(UserIdentity),
    #[default]
    InvalidToken,
    UserGone,
}

impl StubCheckSessionUseCase {
    pub fn agent() -> UserIdentity {
        UserIdentity {
            id: Uuid::new_v4(),
            name: "Ethan Hunt".to_string(),
            email: "ethan@imf.gov".to_string(),
        }
    }
}

#[async_trait]
impl ICheckSessionUseCase for StubCheckSessionUseCase {
    async fn execute(&self, _token: &str) -> Result<UserIdentity, CheckSessionError> {
        match self {
            Self::Valid(identity) => Ok(identity.clone()),
            Self::InvalidToken => Err(CheckSessionError::InvalidToken(
                TokenError::InvalidSignature,
            )),
            Self::UserGone => Err(CheckSessionError::UserNotFound),
        }
    }
}

// ============================================================
// Auth
// ============================================================

#[derive(Default, Clone)]
pub struct StubSignupUserUseCase;

#[async_trait]
impl ISignupUserUseCase for StubSignupUserUseCase {
    async fn execute(&self, _request: SignupRequest) -> Result<SignupResponse, SignupError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSigninUserUseCase;

#[async_trait]
impl ISigninUserUseCase for StubSigninUserUseCase {
    async fn execute(&self, _request: SigninRequest) -> Result<SigninResponse, SigninError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================
// Gadgets
// ============================================================

#[derive(Default, Clone)]
pub struct StubListGadgetsUseCase;

#[async_trait]
impl ListGadgetsUseCase for StubListGadgetsUseCase {
    async fn execute(
        &self,
        _status: Option<GadgetStatus>,
    ) -> Result<Vec<Gadget>, ListGadgetsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubCreateGadgetUseCase;

#[async_trait]
impl CreateGadgetUseCase for StubCreateGadgetUseCase {
    async fn execute(&self, _command: CreateGadgetCommand) -> Result<Gadget, CreateGadgetError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateGadgetUseCase;

#[async_trait]
impl UpdateGadgetUseCase for StubUpdateGadgetUseCase {
    async fn execute(&self, _command: UpdateGadgetCommand) -> Result<Gadget, UpdateGadgetError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDecommissionGadgetUseCase;

#[async_trait]
impl DecommissionGadgetUseCase for StubDecommissionGadgetUseCase {
    async fn execute(&self, _id: Uuid) -> Result<Gadget, DecommissionGadgetError> {
        Err(DecommissionGadgetError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDestroyGadgetUseCase;

#[async_trait]
impl DestroyGadgetUseCase for StubDestroyGadgetUseCase {
    async fn execute(&self, _id: Uuid) -> Result<Gadget, DestroyGadgetError> {
        Err(DestroyGadgetError::NotFound)
    }
}
