//! Storage abstractions for service layer
//!
//! The persistent key-value slot the profile store writes through, with a
//! file-backed implementation and an in-memory one.

pub mod kv_store;
pub mod json_map_store;
pub mod memory_store;

pub use json_map_store::JsonMapStore;
pub use kv_store::KeyValueStore;
pub use memory_store::MemoryStore;
