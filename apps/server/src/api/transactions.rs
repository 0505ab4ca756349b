use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use spendtrack_core::transactions::{NewTransaction, Transaction, TransactionUpdate};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
pub(super) struct MessageResponse {
    pub message: &'static str,
}

async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<NewTransaction>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let Json(input) = payload?;
    let transaction = state
        .transaction_service
        .create_transaction(&user.id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

async fn get_transactions(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Transaction>>> {
    Ok(Json(state.transaction_service.get_transactions(&user.id)?))
}

async fn get_transaction(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Transaction>> {
    Ok(Json(state.transaction_service.get_transaction(&user.id, &id)?))
}

async fn update_transaction(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<TransactionUpdate>, JsonRejection>,
) -> ApiResult<Json<Transaction>> {
    let Json(update) = payload?;
    let transaction = state
        .transaction_service
        .update_transaction(&user.id, &id, update)
        .await?;
    Ok(Json(transaction))
}

async fn delete_transaction(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .transaction_service
        .delete_transaction(&user.id, &id)
        .await?;
    Ok(Json(MessageResponse {
        message: "Transaction removed",
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/transactions",
            get(get_transactions).post(create_transaction),
        )
        .route(
            "/transactions/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}
