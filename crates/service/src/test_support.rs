#![cfg(test)]
use std::path::PathBuf;

use models::UserServiceInput;

/// The listing used throughout the store scenarios.
pub fn acme_input() -> UserServiceInput {
    UserServiceInput {
        name: "Acme Repairs".into(),
        category: "plumbing".into(),
        description: "Fix pipes".into(),
        location: "Colombo".into(),
        skills: vec!["Pipe Repair".into()],
        phone: "+94771234567".into(),
        ..UserServiceInput::default()
    }
}

/// Unique file path under the system temp dir; callers remove it when done.
pub fn temp_store_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}_{}.json", prefix, uuid::Uuid::new_v4()))
}
