mod session;

use delivery_core::catalog::Catalog;
use delivery_core::config::Config;
use delivery_store::build_stores;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for ORDER_STATUS_STEP_MS / RUST_LOG when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = Config::from_env()?;
    let stores = build_stores();
    let catalog = Catalog::sample();

    let history = session::run(&stores, &catalog, &config).await?;
    println!("{}", serde_json::to_string_pretty(&history)?);
    Ok(())
}
