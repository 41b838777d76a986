//! Connectivity smoke check: loads the provider configuration, reads one
//! object from the remote catalog and prints the synchronized state.
//!
//! Usage: catalog-smoke <object-id>

use assets_sync::config::ProviderConfig;
use assets_sync::store::RestCatalog;
use assets_sync::sync::ObjectSync;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let object_id = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: catalog-smoke <object-id>"))?;

    let config = ProviderConfig::load()?;
    config.validate()?;
    log::info!(
        "checking workspace '{}' at {}",
        config.workspace_id,
        config.host
    );

    let catalog = RestCatalog::new(&config)?;
    let sync = ObjectSync::new(&config, &catalog)?;

    match sync.read(&object_id).await? {
        Some(object) => {
            println!("{}", serde_json::to_string_pretty(&object)?);
        }
        None => {
            println!("object '{}' not found", object_id);
        }
    }

    Ok(())
}
