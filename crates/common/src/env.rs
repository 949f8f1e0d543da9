//! Environment/runtime helpers
//!
//! Sanity checks to ensure the data directory exists at startup.

use tracing::{debug, warn};

use crate::CommonError;

/// Ensure the data directory exists, creating it (and parents) when missing.
pub async fn ensure_data_dir(data_dir: &str) -> Result<(), CommonError> {
    if data_dir.trim().is_empty() {
        return Err(CommonError::Env("data directory path is empty".into()));
    }
    match tokio::fs::metadata(data_dir).await {
        Ok(meta) if meta.is_dir() => {
            debug!(%data_dir, "data directory present");
            Ok(())
        }
        Ok(_) => Err(CommonError::Env(format!("{data_dir} exists but is not a directory"))),
        Err(_) => {
            warn!(%data_dir, "data directory not found; creating it");
            tokio::fs::create_dir_all(data_dir)
                .await
                .map_err(|e| CommonError::Env(format!("cannot create {data_dir}: {e}")))
        }
    }
}
