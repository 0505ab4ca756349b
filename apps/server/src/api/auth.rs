//! Registration, login and the current-user endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use spendtrack_core::users::{LoginUser, RegisterUser, User};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserProfile {
    id: String,
    email: String,
    name: Option<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: String,
    token_type: &'static str,
    expires_in: u64,
    user: UserProfile,
}

fn token_response(state: &AppState, user: User) -> ApiResult<TokenResponse> {
    let access_token = state.auth.issue_token(&user.id)?;
    Ok(TokenResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.auth.expires_in().as_secs(),
        user: user.into(),
    })
}

async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterUser>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let Json(input) = payload?;
    let user = state.user_service.register(input).await?;
    Ok((StatusCode::CREATED, Json(token_response(&state, user)?)))
}

async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginUser>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(input) = payload?;
    let user = state.user_service.authenticate(input)?;
    Ok(Json(token_response(&state, user)?))
}

async fn me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<UserProfile>> {
    Ok(Json(state.user_service.get_user(&user.id)?.into()))
}

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

pub fn protected_router() -> Router<Arc<AppState>> {
    Router::new().route("/auth/me", get(me))
}
