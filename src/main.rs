mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config)?;

    let db = startup::connect_to_database(&config).await?;

    let app = router::router(AppState::new(db.clone(), config.app_name.clone()));

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        "{} listening on {} ({})",
        config.app_name,
        listener.local_addr()?,
        config.environment
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Server stopped");

    Ok(())
}
