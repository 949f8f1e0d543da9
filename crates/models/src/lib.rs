//! Domain records and static reference data for the service directory.

pub mod errors;
pub mod category;
pub mod provider;
pub mod user_service;
pub mod reference;

pub use category::{Category, Glyph};
pub use provider::{ServiceProvider, SocialLinks};
pub use reference::{ReferenceData, REFERENCE};
pub use user_service::{UserService, UserServiceInput};
