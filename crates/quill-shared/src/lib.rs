//! # Quill Shared
//!
//! Wire-level types consumed by the resource framework sitting in front of
//! the core: the success envelope and the RFC 7807 error body, including the
//! violation list a rejected write carries.

pub mod response;

pub use response::{ApiResponse, ErrorResponse, FieldViolation};
