use std::sync::Arc;

use actix_web::web;

use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::application::use_cases::check_session::CheckSessionUseCase;
use crate::auth::application::use_cases::signin_user::SigninUserUseCase;
use crate::auth::application::use_cases::signup_user::SignupUserUseCase;
use crate::gadget::application::gadget_use_cases::GadgetUseCases;
use crate::gadget::application::ports::outgoing::RandomSource;
use crate::gadget::application::service::{
    CreateGadgetService, DecommissionGadgetService, DestroyGadgetService, ListGadgetsService,
    UpdateGadgetService,
};
use crate::tests::support::in_memory::{InMemoryGadgets, InMemoryUsers};
use crate::AppState;

const TEST_SECRET: &str = "test_secret_key_for_testing_only_0123456789";

/// Always draws the same codename slot and the same odds.
pub struct FixedRandom {
    pub index: usize,
    pub unit: f64,
}

impl RandomSource for FixedRandom {
    fn index(&self, upper: usize) -> usize {
        self.index % upper
    }

    fn unit(&self) -> f64 {
        self.unit
    }
}

/// The real services wired over in-memory tables, with a real JWT signer.
pub struct Harness {
    pub users: InMemoryUsers,
    pub gadgets: InMemoryGadgets,
    pub state: web::Data<AppState>,
}

impl Harness {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        let users = InMemoryUsers::default();
        let gadgets = InMemoryGadgets::default();

        let jwt_service = Arc::new(JwtTokenService::new(JwtConfig {
            secret_key: TEST_SECRET.to_string(),
            issuer: "imf-gadget-api".to_string(),
            session_expiry: 3600,
        }));
        // bcrypt's minimum cost keeps signup fast
        let hasher = Arc::new(BcryptHasher::new(4));

        let gadget = GadgetUseCases {
            list: Arc::new(ListGadgetsService::new(gadgets.clone())),
            create: Arc::new(CreateGadgetService::new(
                gadgets.clone(),
                gadgets.clone(),
                random,
            )),
            update: Arc::new(UpdateGadgetService::new(gadgets.clone(), gadgets.clone())),
            decommission: Arc::new(DecommissionGadgetService::new(
                gadgets.clone(),
                gadgets.clone(),
            )),
            destroy: Arc::new(DestroyGadgetService::new(gadgets.clone(), gadgets.clone())),
        };

        let state = web::Data::new(AppState {
            signup_user_use_case: Arc::new(SignupUserUseCase::new(
                users.clone(),
                users.clone(),
                hasher.clone(),
                jwt_service.clone(),
            )),
            signin_user_use_case: Arc::new(SigninUserUseCase::new(
                users.clone(),
                hasher,
                jwt_service.clone(),
            )),
            check_session_use_case: Arc::new(CheckSessionUseCase::new(
                users.clone(),
                jwt_service,
            )),
            gadget,
            session_cookie: SessionCookieConfig::new(false, 3600),
        });

        Self {
            users,
            gadgets,
            state,
        }
    }
}
