//! Luopan - 24-Mountain Directional Compatibility Engine
//!
//! This crate maps compass bearings onto the 24 mountains of the luopan ring
//! and scores orientations, site compositions and facing recommendations
//! through the five-element generating and controlling cycles.

pub mod application;
pub mod config;
pub mod domain;
