//! Schema bootstrap for the users table
//!
//! The statement uses `CREATE TABLE IF NOT EXISTS`, so it is safe to run on
//! every process start.

use crate::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

/// DDL for the `users` table.
///
/// Uniqueness and the non-blank rule live in the table itself; the
/// application never validates usernames on its own.
pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id       SERIAL,
        username VARCHAR(64) NOT NULL UNIQUE,
        CHECK (CHAR_LENGTH(TRIM(username)) > 0)
    )
"#;

/// Ensure the `users` table and its constraints exist
///
/// ```rust,no_run
/// use common::{database::{DatabaseConfig, init_pool}, schema::ensure_schema};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pool = init_pool(&DatabaseConfig::from_env()?).await?;
///     ensure_schema(&pool).await?;
///     Ok(())
/// }
/// ```
pub async fn ensure_schema(pool: &PgPool) -> DatabaseResult<()> {
    sqlx::query(CREATE_USERS_TABLE)
        .execute(pool)
        .await
        .map_err(DatabaseError::Schema)?;

    info!("Users table is in place");
    Ok(())
}
