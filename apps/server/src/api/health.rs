use std::sync::Arc;

use axum::{routing::get, Router};

use crate::main_lib::AppState;

pub(super) async fn root() -> &'static str {
    "Hello,world"
}

async fn healthz() -> &'static str {
    "ok"
}

async fn readyz() -> &'static str {
    "ok"
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
