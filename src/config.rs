use anyhow::{Context, Result};
use std::{env, fmt};

/// Production endpoint of the Vercel Blob API.
pub const DEFAULT_API_URL: &str = "https://blob.vercel-storage.com";

/// Centralized application configuration, read from the environment.
///
/// There is deliberately no CLI surface: the tool has one input and one
/// destination, so the only knobs are the credential and an endpoint
/// override used by tests.
#[derive(Clone)]
pub struct AppConfig {
    /// Read-write token authorizing uploads to the blob store.
    pub token: String,

    /// Base URL of the blob API.
    pub api_url: String,
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// `BLOB_READ_WRITE_TOKEN` is required; `BLOB_API_URL` falls back to
    /// the production endpoint.
    pub fn from_env() -> Result<Self> {
        let token = env::var("BLOB_READ_WRITE_TOKEN")
            .context("reading BLOB_READ_WRITE_TOKEN (required to authorize uploads)")?;
        let api_url = env::var("BLOB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

        Ok(Self { token, api_url })
    }
}

// Keep the token out of log output.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}
