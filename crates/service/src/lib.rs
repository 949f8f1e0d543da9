//! Directory service layer on top of `models`.
//! - Listing filter engine over seed and user listings.
//! - Profile store persisting the user's listings as one JSON blob in a key-value slot.
//! - View builders and the page dispatcher used by the CLI.

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod listing;
pub mod profile;
pub mod form;
pub mod presentation;
pub mod navigation;
pub mod notice;
pub mod directory;

pub use directory::{Directory, DirectorySettings};
pub use errors::ServiceError;
