//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use super::http::{DEFAULT_BASE_URL, DEFAULT_FETCH_TIMEOUT_SECS};

/// Which storage backend serves story documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Static JSON files under a base URL.
    Http,
    /// A local directory of `{id}.json` files.
    Dir,
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Selected story backend
    pub backend: BackendKind,
    /// Base URL for the HTTP backend
    pub base_url: String,
    /// Story directory for the directory backend
    pub data_dir: PathBuf,
    /// Per-request fetch timeout (seconds)
    pub fetch_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let backend = match env::var("NCP_BACKEND")
            .unwrap_or_else(|_| "http".to_string())
            .as_str()
        {
            "http" => BackendKind::Http,
            "dir" => BackendKind::Dir,
            other => bail!("NCP_BACKEND must be \"http\" or \"dir\", got {other:?}"),
        };

        Ok(Self {
            backend,
            base_url: env::var("NCP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            data_dir: env::var("NCP_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("stories")),
            fetch_timeout_secs: env::var("NCP_FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_FETCH_TIMEOUT_SECS.to_string())
                .parse()
                .context("NCP_FETCH_TIMEOUT_SECS must be a number of seconds")?,
        })
    }
}
