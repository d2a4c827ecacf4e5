//! Successful responses of the users service
//!
//! Every body is JSON followed by a single newline, and every response,
//! including the empty not-found one, is labelled `application/json`.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{error::ApiError, models::User};

/// Content type sent with every response
pub const APPLICATION_JSON: &str = "application/json";

/// The closed set of non-error responses
#[derive(Debug)]
pub enum ApiResponse {
    /// All users, already ordered by username
    Users(Vec<User>),
    /// A single freshly created user
    User(User),
    /// Unknown path or unsupported method; no body
    NotFound,
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let rendered = match &self {
            ApiResponse::Users(users) => json_body(StatusCode::OK, users),
            ApiResponse::User(user) => json_body(StatusCode::OK, user),
            ApiResponse::NotFound => Ok(empty_body(StatusCode::NOT_FOUND)),
        };

        rendered.unwrap_or_else(|e| ApiError::Serialization(e).into_response())
    }
}

/// Serialize `payload` as the response body, newline-terminated
pub(crate) fn json_body<T>(status: StatusCode, payload: &T) -> Result<Response, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let mut bytes = serde_json::to_vec(payload)?;
    bytes.push(b'\n');

    Ok((status, [(header::CONTENT_TYPE, APPLICATION_JSON)], bytes).into_response())
}

fn empty_body(status: StatusCode) -> Response {
    (status, [(header::CONTENT_TYPE, APPLICATION_JSON)]).into_response()
}
