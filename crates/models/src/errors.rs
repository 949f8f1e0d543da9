use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}

impl ModelError {
    pub fn message(&self) -> &str {
        match self {
            ModelError::Validation(msg) => msg,
        }
    }
}
