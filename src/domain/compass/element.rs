//! Element enum and the two fixed element cycles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// Returns all elements in generating-cycle order starting from Wood.
    pub fn all() -> &'static [Element] {
        &[
            Element::Wood,
            Element::Fire,
            Element::Earth,
            Element::Metal,
            Element::Water,
        ]
    }

    /// The element this one nourishes (Wood→Fire→Earth→Metal→Water→Wood).
    pub fn generates(&self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element this one suppresses (Wood→Earth→Water→Fire→Metal→Wood).
    pub fn controls(&self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }

    /// The element that nourishes this one.
    pub fn generated_by(&self) -> Element {
        self.generates().generates().generates().generates()
    }

    /// The element that suppresses this one.
    pub fn controlled_by(&self) -> Element {
        self.controls().controls().controls().controls()
    }

    /// Returns the single-glyph Chinese name.
    pub fn glyph(&self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// Returns the English display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Element {
    type Err = ValidationError;

    /// Accepts the Chinese glyph or the English name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("element"));
        }
        Element::all()
            .iter()
            .find(|e| e.glyph() == trimmed || e.display_name().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("element", format!("unknown element '{}'", trimmed))
            })
    }
}
