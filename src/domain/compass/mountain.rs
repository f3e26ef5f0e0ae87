//! Mountain enum: the 24 fixed compass sectors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Number of mountains on the compass ring.
pub const MOUNTAIN_COUNT: usize = 24;

/// One of the 24 mountains, clockwise from 壬 (337.5°).
///
/// Discriminants follow registry order; every per-mountain table in
/// [`super::registry`] is indexed by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Mountain {
    Ren = 0,
    Zi,
    Gui,
    Chou,
    Gen,
    Yin,
    Jia,
    Mao,
    Yi,
    Chen,
    Xun,
    Si,
    Bing,
    Wu,
    Ding,
    Wei,
    Kun,
    Shen,
    Geng,
    You,
    Xin,
    Xu,
    Qian,
    Hai,
}

const ALL_MOUNTAINS: [Mountain; MOUNTAIN_COUNT] = [
    Mountain::Ren,
    Mountain::Zi,
    Mountain::Gui,
    Mountain::Chou,
    Mountain::Gen,
    Mountain::Yin,
    Mountain::Jia,
    Mountain::Mao,
    Mountain::Yi,
    Mountain::Chen,
    Mountain::Xun,
    Mountain::Si,
    Mountain::Bing,
    Mountain::Wu,
    Mountain::Ding,
    Mountain::Wei,
    Mountain::Kun,
    Mountain::Shen,
    Mountain::Geng,
    Mountain::You,
    Mountain::Xin,
    Mountain::Xu,
    Mountain::Qian,
    Mountain::Hai,
];

impl Mountain {
    /// Sector used when a bearing cannot be placed.
    pub const DEFAULT: Mountain = Mountain::Zi;

    /// Returns all mountains in registry order.
    pub fn all() -> &'static [Mountain] {
        &ALL_MOUNTAINS
    }

    /// Returns the 0-based registry index.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Looks up a mountain by registry index.
    pub fn from_index(index: usize) -> Option<Mountain> {
        ALL_MOUNTAINS.get(index).copied()
    }

    /// Returns the Chinese glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            Mountain::Ren => "壬",
            Mountain::Zi => "子",
            Mountain::Gui => "癸",
            Mountain::Chou => "丑",
            Mountain::Gen => "艮",
            Mountain::Yin => "寅",
            Mountain::Jia => "甲",
            Mountain::Mao => "卯",
            Mountain::Yi => "乙",
            Mountain::Chen => "辰",
            Mountain::Xun => "巽",
            Mountain::Si => "巳",
            Mountain::Bing => "丙",
            Mountain::Wu => "午",
            Mountain::Ding => "丁",
            Mountain::Wei => "未",
            Mountain::Kun => "坤",
            Mountain::Shen => "申",
            Mountain::Geng => "庚",
            Mountain::You => "酉",
            Mountain::Xin => "辛",
            Mountain::Xu => "戌",
            Mountain::Qian => "乾",
            Mountain::Hai => "亥",
        }
    }

    /// Returns the pinyin name.
    pub fn pinyin(&self) -> &'static str {
        match self {
            Mountain::Ren => "Ren",
            Mountain::Zi => "Zi",
            Mountain::Gui => "Gui",
            Mountain::Chou => "Chou",
            Mountain::Gen => "Gen",
            Mountain::Yin => "Yin",
            Mountain::Jia => "Jia",
            Mountain::Mao => "Mao",
            Mountain::Yi => "Yi",
            Mountain::Chen => "Chen",
            Mountain::Xun => "Xun",
            Mountain::Si => "Si",
            Mountain::Bing => "Bing",
            Mountain::Wu => "Wu",
            Mountain::Ding => "Ding",
            Mountain::Wei => "Wei",
            Mountain::Kun => "Kun",
            Mountain::Shen => "Shen",
            Mountain::Geng => "Geng",
            Mountain::You => "You",
            Mountain::Xin => "Xin",
            Mountain::Xu => "Xu",
            Mountain::Qian => "Qian",
            Mountain::Hai => "Hai",
        }
    }

    /// Returns the coarse eight-point direction this mountain sits in.
    pub fn compass_point(&self) -> &'static str {
        const POINTS: [&str; 8] = ["北", "东北", "东", "东南", "南", "西南", "西", "西北"];
        POINTS[self.index() / 3]
    }
}

impl fmt::Display for Mountain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Mountain {
    type Err = ValidationError;

    /// Accepts the Chinese glyph or the pinyin name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("mountain"));
        }
        ALL_MOUNTAINS
            .iter()
            .find(|m| m.glyph() == trimmed || m.pinyin().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "mountain",
                    format!("unknown mountain '{}'", trimmed),
                )
            })
    }
}
