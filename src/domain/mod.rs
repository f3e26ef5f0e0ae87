//! Domain layer containing the compass model and its analyzers.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (percentage scores, errors)
//! - `compass` - The 24 mountains, their static attributes, sector mapping
//!   and element relationships
//! - `analysis` - Pure domain services for sitting/facing, site composition
//!   and facing recommendation

pub mod analysis;
pub mod compass;
pub mod foundation;
