use std::sync::Arc;

use crate::{
    auth::{Argon2PasswordHasher, AuthManager},
    config::Config,
};
use spendtrack_core::{
    budgets::{BudgetService, BudgetServiceTrait},
    reports::{ReportService, ReportServiceTrait},
    transactions::{TransactionService, TransactionServiceTrait},
    users::{UserService, UserServiceTrait},
};
use spendtrack_storage_sqlite::{
    db::{self, spawn_writer},
    BudgetRepository, TransactionRepository, UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub report_service: Arc<dyn ReportServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Opens the database, applies migrations, starts the writer and wires the services.
///
/// Must run inside a Tokio runtime.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let transaction_repository = Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));

    let transaction_service = Arc::new(TransactionService::new(transaction_repository.clone()));
    let budget_service = Arc::new(BudgetService::new(
        budget_repository,
        transaction_repository.clone(),
    ));
    let report_service = Arc::new(ReportService::new(transaction_repository));
    let user_service = Arc::new(UserService::new(
        user_repository,
        Arc::new(Argon2PasswordHasher),
    ));

    Ok(Arc::new(AppState {
        transaction_service,
        budget_service,
        report_service,
        user_service,
        auth: Arc::new(AuthManager::new(&config.auth)),
    }))
}
