//! Static per-mountain attribute tables: angular range, element, trigram, opposite.
//!
//! All tables are indexed by [`Mountain::index`] and must carry one entry per
//! mountain.

use serde::{Deserialize, Serialize};

use super::{Element, Mountain, Trigram, MOUNTAIN_COUNT};

/// Width of one mountain in degrees.
pub const MOUNTAIN_SPAN_DEGREES: f64 = 15.0;

/// Half-open angular range `[start, end)` owned by a mountain.
///
/// When `start > end` the range wraps through 0°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MountainRange {
    pub start: f64,
    pub end: f64,
    pub center: f64,
}

impl MountainRange {
    const fn new(start: f64, end: f64, center: f64) -> Self {
        Self { start, end, center }
    }

    /// True when this range crosses 0°/360°.
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Tests a normalized angle in [0, 360) against the range.
    pub fn contains(&self, angle: f64) -> bool {
        if self.wraps() {
            angle >= self.start || angle < self.end
        } else {
            angle >= self.start && angle < self.end
        }
    }
}

const MOUNTAIN_RANGES: [MountainRange; MOUNTAIN_COUNT] = [
    // North
    MountainRange::new(337.5, 352.5, 345.0),
    MountainRange::new(352.5, 7.5, 0.0),
    MountainRange::new(7.5, 22.5, 15.0),
    // Northeast
    MountainRange::new(22.5, 37.5, 30.0),
    MountainRange::new(37.5, 52.5, 45.0),
    MountainRange::new(52.5, 67.5, 60.0),
    // East
    MountainRange::new(67.5, 82.5, 75.0),
    MountainRange::new(82.5, 97.5, 90.0),
    MountainRange::new(97.5, 112.5, 105.0),
    // Southeast
    MountainRange::new(112.5, 127.5, 120.0),
    MountainRange::new(127.5, 142.5, 135.0),
    MountainRange::new(142.5, 157.5, 150.0),
    // South
    MountainRange::new(157.5, 172.5, 165.0),
    MountainRange::new(172.5, 187.5, 180.0),
    MountainRange::new(187.5, 202.5, 195.0),
    // Southwest
    MountainRange::new(202.5, 217.5, 210.0),
    MountainRange::new(217.5, 232.5, 225.0),
    MountainRange::new(232.5, 247.5, 240.0),
    // West
    MountainRange::new(247.5, 262.5, 255.0),
    MountainRange::new(262.5, 277.5, 270.0),
    MountainRange::new(277.5, 292.5, 285.0),
    // Northwest
    MountainRange::new(292.5, 307.5, 300.0),
    MountainRange::new(307.5, 322.5, 315.0),
    MountainRange::new(322.5, 337.5, 330.0),
];

const MOUNTAIN_ELEMENTS: [Element; MOUNTAIN_COUNT] = [
    Element::Water, Element::Water, Element::Water, // 壬 子 癸
    Element::Earth, Element::Earth, Element::Wood,  // 丑 艮 寅
    Element::Wood, Element::Wood, Element::Wood,    // 甲 卯 乙
    Element::Earth, Element::Wood, Element::Fire,   // 辰 巽 巳
    Element::Fire, Element::Fire, Element::Fire,    // 丙 午 丁
    Element::Earth, Element::Earth, Element::Metal, // 未 坤 申
    Element::Metal, Element::Metal, Element::Metal, // 庚 酉 辛
    Element::Earth, Element::Metal, Element::Water, // 戌 乾 亥
];

const MOUNTAIN_TRIGRAMS: [Trigram; MOUNTAIN_COUNT] = [
    Trigram::Kan, Trigram::Kan, Trigram::Kan,
    Trigram::Gen, Trigram::Gen, Trigram::Gen,
    Trigram::Zhen, Trigram::Zhen, Trigram::Zhen,
    Trigram::Xun, Trigram::Xun, Trigram::Xun,
    Trigram::Li, Trigram::Li, Trigram::Li,
    Trigram::Kun, Trigram::Kun, Trigram::Kun,
    Trigram::Dui, Trigram::Dui, Trigram::Dui,
    Trigram::Qian, Trigram::Qian, Trigram::Qian,
];

const MOUNTAIN_OPPOSITES: [Mountain; MOUNTAIN_COUNT] = [
    Mountain::Bing, // 壬
    Mountain::Wu,   // 子
    Mountain::Ding, // 癸
    Mountain::Wei,  // 丑
    Mountain::Kun,  // 艮
    Mountain::Shen, // 寅
    Mountain::Geng, // 甲
    Mountain::You,  // 卯
    Mountain::Xin,  // 乙
    Mountain::Xu,   // 辰
    Mountain::Qian, // 巽
    Mountain::Hai,  // 巳
    Mountain::Ren,  // 丙
    Mountain::Zi,   // 午
    Mountain::Gui,  // 丁
    Mountain::Chou, // 未
    Mountain::Gen,  // 坤
    Mountain::Yin,  // 申
    Mountain::Jia,  // 庚
    Mountain::Mao,  // 酉
    Mountain::Yi,   // 辛
    Mountain::Chen, // 戌
    Mountain::Xun,  // 乾
    Mountain::Si,   // 亥
];

impl Mountain {
    /// Angular range owned by this mountain.
    pub fn range(&self) -> MountainRange {
        MOUNTAIN_RANGES[self.index()]
    }

    /// Element of this mountain.
    pub fn element(&self) -> Element {
        MOUNTAIN_ELEMENTS[self.index()]
    }

    /// Trigram palace of this mountain.
    pub fn trigram(&self) -> Trigram {
        MOUNTAIN_TRIGRAMS[self.index()]
    }

    /// The mountain 180° across the ring.
    pub fn opposite(&self) -> Mountain {
        MOUNTAIN_OPPOSITES[self.index()]
    }
}

impl Trigram {
    /// The three mountains owned by this trigram, in registry order.
    pub fn mountains(&self) -> Vec<Mountain> {
        Mountain::all()
            .iter()
            .filter(|m| m.trigram() == *self)
            .copied()
            .collect()
    }
}

/// Mountains whose element is `element`, in registry order.
pub fn mountains_of_element(element: Element) -> impl Iterator<Item = Mountain> {
    Mountain::all()
        .iter()
        .copied()
        .filter(move |m| m.element() == element)
}
