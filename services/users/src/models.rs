//! API models for request and response payloads

use serde::{Deserialize, Serialize};

/// User entity, one row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
}

/// Request body for user creation
///
/// Any other fields in the body are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

/// Envelope used for every error response
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub message: String,
}
