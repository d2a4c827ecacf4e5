//! Users service routes
//!
//! Only `/` is served: `GET` lists users and `POST` creates one. Every other
//! method or path is answered with an empty 404.

use axum::{
    Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    middleware,
    routing::get,
};
use tracing::error;

use crate::{
    error::{ApiError, ApiResult},
    middleware::access_log,
    models::CreateUserRequest,
    response::ApiResponse,
    state::AppState,
};

/// Create the router for the users service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(list_users)
                .post(create_user)
                .head(not_found)
                .fallback(not_found),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(access_log))
        .with_state(state)
}

/// List all users ordered by username
pub async fn list_users(State(state): State<AppState>) -> ApiResult<ApiResponse> {
    let users = state.user_repository.get_all().await.map_err(|e| {
        error!("Failed to list users: {}", e);
        ApiError::from(e)
    })?;

    Ok(ApiResponse::Users(users))
}

/// Create a user from a `{"username": ...}` body
///
/// The body is decoded whatever its declared content type.
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<ApiResponse> {
    let body = body.map_err(|e| {
        error!("Failed to read request body: {}", e);
        ApiError::from(e)
    })?;

    let payload: CreateUserRequest = serde_json::from_slice(&body).map_err(|e| {
        error!("Failed to decode user payload: {}", e);
        ApiError::Json(e)
    })?;

    let user = state
        .user_repository
        .create(&payload.username)
        .await
        .map_err(|e| {
            error!("Failed to create user: {}", e);
            ApiError::from(e)
        })?;

    Ok(ApiResponse::User(user))
}

/// Fallback for unknown paths and unsupported methods
pub async fn not_found() -> ApiResponse {
    ApiResponse::NotFound
}
