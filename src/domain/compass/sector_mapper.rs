//! Sector Mapper - compass bearing to mountain.
//!
//! Two lookup strategies are provided. `Scan` walks the 24 range constants;
//! `Bucket` divides by the 15° span and then confirms the candidate against
//! the same range constants, stepping to a neighbour when float rounding
//! lands a near-boundary angle in the wrong bucket. Both are total: an angle
//! that matches no range (NaN, infinities) falls back to [`Mountain::DEFAULT`].

use serde::{Deserialize, Serialize};
use tracing::error;

use super::registry::MOUNTAIN_SPAN_DEGREES;
use super::{Mountain, MOUNTAIN_COUNT};

/// Lookup strategy for [`SectorMapper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectorLookup {
    #[default]
    Scan,
    Bucket,
}

/// Normalizes any angle into [0, 360).
///
/// Non-finite input stays non-finite.
pub fn normalize_degrees(angle: f64) -> f64 {
    ((angle % 360.0) + 360.0) % 360.0
}

/// Maps bearings onto the 24 mountains.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectorMapper {
    lookup: SectorLookup,
}

impl SectorMapper {
    /// Creates a mapper using the given strategy.
    pub fn new(lookup: SectorLookup) -> Self {
        Self { lookup }
    }

    /// Returns the configured strategy.
    pub fn lookup(&self) -> SectorLookup {
        self.lookup
    }

    /// Returns the mountain that owns `angle` (degrees, any real value).
    pub fn sector_of(&self, angle: f64) -> Mountain {
        let normalized = normalize_degrees(angle);
        let found = match self.lookup {
            SectorLookup::Scan => Self::scan(normalized),
            SectorLookup::Bucket => Self::bucket(normalized),
        };

        found.unwrap_or_else(|| {
            error!(
                angle,
                normalized,
                fallback = %Mountain::DEFAULT,
                "Bearing matched no mountain range, falling back to default"
            );
            Mountain::DEFAULT
        })
    }

    /// Linear scan over the range table. `angle` must already be normalized.
    pub fn scan(angle: f64) -> Option<Mountain> {
        Mountain::all()
            .iter()
            .find(|m| m.range().contains(angle))
            .copied()
    }

    /// Bucket division validated against the range table. `angle` must
    /// already be normalized.
    pub fn bucket(angle: f64) -> Option<Mountain> {
        if !angle.is_finite() {
            return None;
        }

        // Bucket 0 is 子 (index 1), which starts half a span before north.
        let half_span = MOUNTAIN_SPAN_DEGREES / 2.0;
        let bucket = ((angle + half_span) / MOUNTAIN_SPAN_DEGREES).floor() as usize;
        let index = (bucket + 1) % MOUNTAIN_COUNT;

        let neighbours = [
            index,
            (index + MOUNTAIN_COUNT - 1) % MOUNTAIN_COUNT,
            (index + 1) % MOUNTAIN_COUNT,
        ];
        neighbours
            .iter()
            .filter_map(|i| Mountain::from_index(*i))
            .find(|m| m.range().contains(angle))
            .or_else(|| Self::scan(angle))
    }
}

/// Maps a bearing with the default scan strategy.
pub fn sector_of(angle: f64) -> Mountain {
    SectorMapper::default().sector_of(angle)
}
