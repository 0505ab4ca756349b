use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use spendtrack_core::budgets::{Budget, BudgetUpdate, BudgetWithSpent, NewBudget};

use super::transactions::MessageResponse;
use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

async fn get_budgets(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<BudgetWithSpent>>> {
    Ok(Json(state.budget_service.get_budgets(&user.id)?))
}

async fn create_budget(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<NewBudget>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Budget>)> {
    let Json(input) = payload?;
    let budget = state.budget_service.create_budget(&user.id, input).await?;
    Ok((StatusCode::CREATED, Json(budget)))
}

async fn update_budget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<BudgetUpdate>, JsonRejection>,
) -> ApiResult<Json<Budget>> {
    let Json(update) = payload?;
    let budget = state
        .budget_service
        .update_budget(&user.id, &id, update)
        .await?;
    Ok(Json(budget))
}

async fn delete_budget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<MessageResponse>> {
    state.budget_service.delete_budget(&user.id, &id).await?;
    Ok(Json(MessageResponse {
        message: "Budget removed",
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budgets", get(get_budgets).post(create_budget))
        .route("/budgets/{id}", put(update_budget).delete(delete_budget))
}
