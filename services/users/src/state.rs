//! Application state shared across handlers

use sqlx::PgPool;

use crate::repositories::UserRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_repository: UserRepository,
}

impl AppState {
    /// Build the state around an already initialized pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            user_repository: UserRepository::new(pool),
        }
    }
}
