//! Compass Module - the 24-mountain ring and its static attributes.
//!
//! # Components
//!
//! - `Mountain` - the 24 sectors, in registry order from 壬
//! - `Element` / `Trigram` - closed attribute sets
//! - `registry` - per-mountain range, element, trigram and opposite tables
//! - `SectorMapper` - bearing (degrees) to mountain
//! - `Relationship` - generating/controlling classification of two elements
//!
//! Everything here is immutable constant data or pure functions over it.

mod element;
mod mountain;
mod registry;
mod relationship;
mod sector_mapper;
mod trigram;

pub use element::Element;
pub use mountain::{Mountain, MOUNTAIN_COUNT};
pub use registry::{mountains_of_element, MountainRange, MOUNTAIN_SPAN_DEGREES};
pub use relationship::{is_generating_pair, relationship_of, Relationship};
pub use sector_mapper::{normalize_degrees, sector_of, SectorLookup, SectorMapper};
pub use trigram::Trigram;
