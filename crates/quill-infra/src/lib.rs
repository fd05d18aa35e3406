//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! The real deployment plugs a database-backed store into those ports; this
//! crate ships the in-memory store used in tests and local development.

pub mod store;

pub use store::{InMemoryCategoryStore, InMemoryPostStore};
