//! Profile record store: the user's own listings, persisted as one JSON collection.

pub mod listing_store;
pub mod store;

pub use listing_store::ListingStore;
pub use store::ProfileStore;
