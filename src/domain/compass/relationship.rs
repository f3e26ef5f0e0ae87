//! Relationship Resolver - classifies an ordered pair of elements.

use serde::{Deserialize, Serialize};

use super::Element;

/// Relationship between a first element `a` and a second element `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// Same element.
    Compatible,
    /// `a` nourishes `b`.
    GeneratingForward,
    /// `b` nourishes `a`.
    GeneratingReverse,
    /// `a` suppresses `b`.
    Controlling,
    /// `b` suppresses `a`.
    Conflicting,
    Neutral,
}

impl Relationship {
    /// Resolves the relationship from `a` towards `b`.
    pub fn of(a: Element, b: Element) -> Self {
        if a == b {
            Relationship::Compatible
        } else if a.generates() == b {
            Relationship::GeneratingForward
        } else if b.generates() == a {
            Relationship::GeneratingReverse
        } else if a.controls() == b {
            Relationship::Controlling
        } else if b.controls() == a {
            Relationship::Conflicting
        } else {
            Relationship::Neutral
        }
    }

    /// The relationship seen from the other end of the pair.
    pub fn mirrored(&self) -> Self {
        match self {
            Relationship::GeneratingForward => Relationship::GeneratingReverse,
            Relationship::GeneratingReverse => Relationship::GeneratingForward,
            Relationship::Controlling => Relationship::Conflicting,
            Relationship::Conflicting => Relationship::Controlling,
            other => *other,
        }
    }

    /// Either generating direction.
    pub fn is_generating(&self) -> bool {
        matches!(
            self,
            Relationship::GeneratingForward | Relationship::GeneratingReverse
        )
    }

    /// Either controlling direction.
    pub fn is_controlling(&self) -> bool {
        matches!(self, Relationship::Controlling | Relationship::Conflicting)
    }

    /// Short narrative for the pair, naming elements by glyph.
    pub fn describe(&self, a: Element, b: Element) -> String {
        match self {
            Relationship::Compatible => format!("{}与{}同气相合，和谐共处", a, b),
            Relationship::GeneratingForward => format!("{}生{}，相生有情", a, b),
            Relationship::GeneratingReverse => format!("{}生{}，得生扶助", b, a),
            Relationship::Controlling => format!("{}克{}，需要化解", a, b),
            Relationship::Conflicting => format!("{}克{}，受克不利", b, a),
            Relationship::Neutral => "无明显生克关系".to_string(),
        }
    }
}

/// Resolves the relationship from `a` towards `b`.
pub fn relationship_of(a: Element, b: Element) -> Relationship {
    Relationship::of(a, b)
}

/// True when either element nourishes the other.
pub fn is_generating_pair(a: Element, b: Element) -> bool {
    Relationship::of(a, b).is_generating()
}
