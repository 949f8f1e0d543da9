use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod env;
pub mod utils;

#[derive(Debug, Error)]
pub enum CommonError {
    #[error("environment error: {0}")]
    Env(String),
}

/// Output shape for log lines, selected from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn init(self) {
        match self {
            LogFormat::Compact => utils::logging::init_logging_default(),
            LogFormat::Json => utils::logging::init_logging_json(),
        }
    }
}
