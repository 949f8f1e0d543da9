//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so binary crates can prepare the data
//! directory through `service::runtime` without depending on `common`.

use crate::errors::ServiceError;

/// Ensure the data directory exists before the store file is opened.
pub async fn ensure_env(data_dir: &str) -> Result<(), ServiceError> {
    common::env::ensure_data_dir(data_dir)
        .await
        .map_err(|e| ServiceError::Storage(e.to_string()))
}
