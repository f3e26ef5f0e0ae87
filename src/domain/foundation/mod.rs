//! Foundation module - Shared domain primitives.
//!
//! Contains the score value object and the error types used across
//! the compass engine.

mod errors;
mod percentage;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use percentage::Percentage;
