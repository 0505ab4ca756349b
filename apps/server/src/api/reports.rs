use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};
use spendtrack_core::reports::{MonthlyReport, WeeklyReport};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

async fn weekly_report(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<WeeklyReport>> {
    Ok(Json(state.report_service.weekly_report(&user.id)?))
}

async fn monthly_report(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<MonthlyReport>> {
    Ok(Json(state.report_service.monthly_report(&user.id)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reports/weekly", get(weekly_report))
        .route("/reports/monthly", get(monthly_report))
}
