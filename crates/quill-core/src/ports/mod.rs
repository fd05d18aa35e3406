//! Ports - trait definitions for the external persistence collaborator.
//! These are the "interfaces" that infrastructure must implement.

mod repository;

pub use repository::{CategoryRepository, PostRepository};
