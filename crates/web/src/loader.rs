//! Asynchronous inventory loading.
//!
//! The configured source is fetched, parsed, and handed to the panel,
//! which applies the default id ordering and renders. A failed load is
//! logged and leaves the prior view in place (empty, on the initial
//! load). No retry, no timeout, no cancellation.

use std::path::PathBuf;

use thiserror::Error;

use shelfview_inventory::InventoryRecord;

use crate::app::AppState;

/// Where the inventory document lives.
#[derive(Debug, Clone)]
pub enum InventorySource {
    Path(PathBuf),
    Url(String),
}

impl InventorySource {
    /// `http://`/`https://` selects a URL source; anything else is a
    /// filesystem path.
    pub fn parse(configured: &str) -> Self {
        if configured.starts_with("http://") || configured.starts_with("https://") {
            InventorySource::Url(configured.to_string())
        } else {
            InventorySource::Path(PathBuf::from(configured))
        }
    }

    /// Fetch and parse the inventory document.
    pub async fn fetch(&self) -> Result<Vec<InventoryRecord>, LoadError> {
        match self {
            InventorySource::Path(path) => {
                let bytes = tokio::fs::read(path).await?;
                Ok(serde_json::from_slice(&bytes)?)
            }
            InventorySource::Url(url) => {
                let response = reqwest::get(url).await?.error_for_status()?;
                Ok(response.json().await?)
            }
        }
    }
}

impl core::fmt::Display for InventorySource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InventorySource::Path(path) => write!(f, "{}", path.display()),
            InventorySource::Url(url) => f.write_str(url),
        }
    }
}

/// Why a load attempt failed. Terminal for that attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read inventory file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch inventory over http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse inventory document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch the configured source and load the result into the panel.
///
/// On success the record count is returned and the load timestamp
/// updated; on failure one diagnostic line is logged and the panel is
/// left untouched.
pub async fn load_into(state: &AppState) -> Result<usize, LoadError> {
    match state.source.fetch().await {
        Ok(records) => {
            let count = records.len();
            state.panel.write().unwrap().load(records);
            *state.last_loaded.write().unwrap() = Some(chrono::Utc::now());
            tracing::info!(records = count, source = %state.source, "inventory loaded");
            Ok(count)
        }
        Err(err) => {
            tracing::error!(source = %state.source, error = %err, "inventory load failed; keeping prior view");
            Err(err)
        }
    }
}
