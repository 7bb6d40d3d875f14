pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::gadget;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    check_session::{CheckSessionUseCase, ICheckSessionUseCase},
    signin_user::{ISigninUserUseCase, SigninUserUseCase},
    signup_user::{ISignupUserUseCase, SignupUserUseCase},
};
use crate::config::{AppConfig, PasswordHashing};
use crate::gadget::adapter::outgoing::gadget_query_postgres::GadgetQueryPostgres;
use crate::gadget::adapter::outgoing::gadget_repository_postgres::GadgetRepositoryPostgres;
use crate::gadget::adapter::outgoing::random::ThreadRandom;
use crate::gadget::application::gadget_use_cases::GadgetUseCases;
use crate::gadget::application::service::{
    CreateGadgetService, DecommissionGadgetService, DestroyGadgetService, ListGadgetsService,
    UpdateGadgetService,
};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub signup_user_use_case: Arc<dyn ISignupUserUseCase + Send + Sync>,
    pub signin_user_use_case: Arc<dyn ISigninUserUseCase + Send + Sync>,
    pub check_session_use_case: Arc<dyn ICheckSessionUseCase + Send + Sync>,
    pub gadget: GadgetUseCases,
    pub session_cookie: SessionCookieConfig,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Environment: .env.{RUST_ENV} first, then .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(environment = %env, "Starting IMF Gadget API...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&conn, None)
        .await
        .context("Failed to run database migrations")?;
    info!("Database schema is up to date");

    let db_arc = Arc::new(conn);

    // Auth components
    let jwt_service = Arc::new(JwtTokenService::new(config.jwt.clone()));
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> = match config.password_hashing {
        PasswordHashing::Argon2 {
            memory_kib,
            iterations,
            parallelism,
        } => Arc::new(
            Argon2Hasher::with_params(memory_kib, iterations, parallelism)
                .map_err(|e| anyhow::anyhow!("Invalid Argon2 parameters: {e}"))?,
        ),
        PasswordHashing::Bcrypt { cost } => Arc::new(BcryptHasher::new(cost)),
    };

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    let signup_user_use_case = SignupUserUseCase::new(
        user_query.clone(),
        user_repo,
        Arc::clone(&password_hasher),
        jwt_service.clone(),
    );
    let signin_user_use_case = SigninUserUseCase::new(
        user_query.clone(),
        Arc::clone(&password_hasher),
        jwt_service.clone(),
    );
    let session_cookie =
        SessionCookieConfig::new(config.cookie_secure, jwt_service.session_lifetime_secs());
    let check_session_use_case = CheckSessionUseCase::new(user_query, jwt_service);

    // Gadget components
    let gadget_query = GadgetQueryPostgres::new(Arc::clone(&db_arc));
    let gadget_repo = GadgetRepositoryPostgres::new(Arc::clone(&db_arc));

    let gadget = GadgetUseCases {
        list: Arc::new(ListGadgetsService::new(gadget_query.clone())),
        create: Arc::new(CreateGadgetService::new(
            gadget_query.clone(),
            gadget_repo.clone(),
            Arc::new(ThreadRandom),
        )),
        update: Arc::new(UpdateGadgetService::new(
            gadget_query.clone(),
            gadget_repo.clone(),
        )),
        decommission: Arc::new(DecommissionGadgetService::new(
            gadget_query.clone(),
            gadget_repo.clone(),
        )),
        destroy: Arc::new(DestroyGadgetService::new(gadget_query, gadget_repo)),
    };

    let state = AppState {
        signup_user_use_case: Arc::new(signup_user_use_case),
        signin_user_use_case: Arc::new(signin_user_use_case),
        check_session_use_case: Arc::new(check_session_use_case),
        gadget,
        session_cookie,
    };

    let openapi = ApiDoc::openapi();
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("Server terminated with an error")
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::signin_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::signout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::check_session_handler);
    // Gadgets
    cfg.service(crate::gadget::adapter::incoming::web::routes::list_gadgets_handler);
    cfg.service(crate::gadget::adapter::incoming::web::routes::create_gadget_handler);
    cfg.service(crate::gadget::adapter::incoming::web::routes::update_gadget_handler);
    cfg.service(crate::gadget::adapter::incoming::web::routes::decommission_gadget_handler);
    cfg.service(crate::gadget::adapter::incoming::web::routes::self_destruct_gadget_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
