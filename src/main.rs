use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod models;
mod services;

use services::blob_service::BlobService;

/// Name of the file this tool uploads. Fixed at build time and resolved
/// against the crate root, alongside which the file is expected to live.
const UPLOAD_FILE_NAME: &str = "psychologist_responses_10k.json";

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // --- Config from environment ---
    let cfg = config::AppConfig::from_env()?;
    tracing::debug!("Loaded config: {:?}", cfg);

    let service = BlobService::new(cfg.api_url, cfg.token);

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(UPLOAD_FILE_NAME);
    tracing::info!("Uploading {}", path.display());

    let url = service
        .upload_file(&path)
        .await
        .with_context(|| format!("uploading {}", path.display()))?;

    println!("File uploaded successfully!");
    println!("URL: {}", url);

    Ok(())
}
