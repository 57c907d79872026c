use play_with_containers::{config::InventoryConfig, init_tracing, inventory};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = InventoryConfig::from_env()?;

    info!("Inventory service starting");
    let app = inventory::create_app(&config).await?;

    let addr = config.bind_addr();
    info!("Listening on http://{}", addr);
    info!("Movies API: http://{}/api/movies", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
