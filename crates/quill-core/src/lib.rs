//! # Quill Core
//!
//! The domain layer of the Quill content API: the `Post`/`Category` entities,
//! the field-visibility policy that decides which fields each API operation
//! exposes or accepts, write-payload validation, and the service orchestrating
//! the five resource operations over storage ports.
//!
//! This crate contains pure business logic with zero infrastructure
//! dependencies; persistence is reached only through the traits in [`ports`].

pub mod domain;
pub mod draft;
pub mod error;
pub mod policy;
pub mod ports;
pub mod projection;
pub mod service;

pub use error::DomainError;
