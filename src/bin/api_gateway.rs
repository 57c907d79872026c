use play_with_containers::{config::GatewayConfig, gateway, init_tracing, STARTUP_TARGET};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();
    init_tracing();

    info!(target: STARTUP_TARGET, "=== API Gateway Starting ===");
    info!(
        target: STARTUP_TARGET,
        "Environment: {}",
        gateway::redacted_environment(std::env::vars())
    );

    let config = GatewayConfig::from_env()?;
    let app = gateway::create_app();

    info!(target: STARTUP_TARGET, "=== App created successfully ===");

    let addr = config.bind_addr();
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
