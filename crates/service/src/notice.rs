use serde::Serialize;

use crate::errors::ServiceError;

/// Outcome messages for the notification surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notice {
    Created,
    Updated,
    Deleted,
    /// Delete of a listing that was already gone; informational, not a failure.
    AlreadyDeleted,
    Failed(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Created => "Service profile created successfully!",
            Notice::Updated => "Service updated successfully!",
            Notice::Deleted => "Service deleted successfully",
            Notice::AlreadyDeleted => "That service listing was already removed",
            Notice::Failed(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Failed(_))
    }
}

impl From<&ServiceError> for Notice {
    fn from(e: &ServiceError) -> Self {
        Notice::Failed(e.user_message())
    }
}
