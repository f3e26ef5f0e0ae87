//! Trigram enum for the eight later-heaven palaces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight trigrams. Each owns three adjacent mountains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

impl Trigram {
    /// Returns all trigrams.
    pub fn all() -> &'static [Trigram] {
        &[
            Trigram::Qian,
            Trigram::Dui,
            Trigram::Li,
            Trigram::Zhen,
            Trigram::Xun,
            Trigram::Kan,
            Trigram::Gen,
            Trigram::Kun,
        ]
    }

    /// Returns the Chinese glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            Trigram::Qian => "乾",
            Trigram::Dui => "兑",
            Trigram::Li => "离",
            Trigram::Zhen => "震",
            Trigram::Xun => "巽",
            Trigram::Kan => "坎",
            Trigram::Gen => "艮",
            Trigram::Kun => "坤",
        }
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
