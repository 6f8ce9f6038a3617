use phone_blocklist_api::{create_app, AppState};
use std::net::SocketAddr;
use tracing::{error, info};

pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    static_dir: Option<&str>,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        api_url = %format!("http://{}/api", bind_addr),
        "Starting web server"
    );

    let app = create_app(state, static_dir);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
