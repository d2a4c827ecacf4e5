use anyhow::{Context, Result};
use common::{
    database::{DatabaseConfig, health_check, init_pool},
    schema::ensure_schema,
};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use users_service::{config::ServerConfig, routes::create_router, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}

async fn run() -> Result<()> {
    info!("Starting users service");

    let db_config = DatabaseConfig::from_env()?;
    let server_config = ServerConfig::from_env()?;

    // Initialize database connection pool
    let pool = init_pool(&db_config).await.context("Connection error")?;

    // Check database connectivity
    health_check(&pool).await.context("Connection error")?;
    info!("Database connection successful");

    ensure_schema(&pool).await?;

    let app = create_router(AppState::new(pool));

    let address = server_config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Could not start server on {}", address))?;
    info!("Users service listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down users service");
    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
