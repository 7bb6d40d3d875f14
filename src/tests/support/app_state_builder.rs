use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::application::use_cases::check_session::ICheckSessionUseCase;
use crate::auth::application::use_cases::signin_user::ISigninUserUseCase;
use crate::auth::application::use_cases::signup_user::ISignupUserUseCase;
use crate::gadget::application::gadget_use_cases::GadgetUseCases;
use crate::gadget::application::ports::incoming::use_cases::{
    CreateGadgetUseCase, DecommissionGadgetUseCase, DestroyGadgetUseCase, ListGadgetsUseCase,
    UpdateGadgetUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    signup_user: Arc<dyn ISignupUserUseCase + Send + Sync>,
    signin_user: Arc<dyn ISigninUserUseCase + Send + Sync>,
    check_session: Arc<dyn ICheckSessionUseCase + Send + Sync>,
    gadget: GadgetUseCases,
    session_cookie: SessionCookieConfig,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            signup_user: Arc::new(StubSignupUserUseCase),
            signin_user: Arc::new(StubSigninUserUseCase),
            check_session: Arc::new(StubCheckSessionUseCase::default()),
            gadget: GadgetUseCases {
                list: Arc::new(StubListGadgetsUseCase),
                create: Arc::new(StubCreateGadgetUseCase),
                update: Arc::new(StubUpdateGadgetUseCase),
                decommission: Arc::new(StubDecommissionGadgetUseCase),
                destroy: Arc::new(StubDestroyGadgetUseCase),
            },
            session_cookie: SessionCookieConfig::new(false, 3600),
        }
    }
}

impl TestAppStateBuilder {
    /// Any `jwt` cookie resolves to a fixed agent.
    pub fn authenticated(self) -> Self {
        self.with_check_session(StubCheckSessionUseCase::Valid(
            StubCheckSessionUseCase::agent(),
        ))
    }

    pub fn with_signup_user(mut self, uc: impl ISignupUserUseCase + Send + Sync + 'static) -> Self {
        self.signup_user = Arc::new(uc);
        self
    }

    pub fn with_signin_user(mut self, uc: impl ISigninUserUseCase + Send + Sync + 'static) -> Self {
        self.signin_user = Arc::new(uc);
        self
    }

    pub fn with_check_session(
        mut self,
        uc: impl ICheckSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.check_session = Arc::new(uc);
        self
    }

    pub fn with_list_gadgets(mut self, uc: impl ListGadgetsUseCase + Send + Sync + 'static) -> Self {
        self.gadget.list = Arc::new(uc);
        self
    }

    pub fn with_create_gadget(
        mut self,
        uc: impl CreateGadgetUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gadget.create = Arc::new(uc);
        self
    }

    pub fn with_update_gadget(
        mut self,
        uc: impl UpdateGadgetUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gadget.update = Arc::new(uc);
        self
    }

    pub fn with_decommission_gadget(
        mut self,
        uc: impl DecommissionGadgetUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gadget.decommission = Arc::new(uc);
        self
    }

    pub fn with_destroy_gadget(
        mut self,
        uc: impl DestroyGadgetUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gadget.destroy = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            signup_user_use_case: self.signup_user,
            signin_user_use_case: self.signin_user,
            check_session_use_case: self.check_session,
            gadget: self.gadget,
            session_cookie: self.session_cookie,
        })
    }
}
