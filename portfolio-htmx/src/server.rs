//! Serving the site

use tokio::net::TcpListener;
use tracing::info;

use crate::config::PortfolioConfig;
use crate::error::PortfolioError;
use crate::handlers::router;
use crate::state::AppState;

/// Bind the configured address and serve until Ctrl-C
///
/// # Errors
///
/// Returns [`PortfolioError::Config`] for an invalid address and
/// [`PortfolioError::Io`] if binding or serving fails.
pub async fn run(config: PortfolioConfig) -> Result<(), PortfolioError> {
    let addr = config.server.socket_addr()?;
    let title = config.site.title.clone();
    let app = router(AppState::new(config));

    let listener = TcpListener::bind(addr).await?;
    info!(%title, "Portfolio listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Portfolio stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
