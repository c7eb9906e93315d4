//! Core data models for arcana_core
//!
//! This module contains the fundamental data structures shared by the
//! derivation components: the celestial body input record, the zodiac
//! element triplicities, and the numerology number categories.

use serde::{Deserialize, Serialize};

// =============================================================================
// Canonical Signs
// =============================================================================

/// The 12 canonical zodiac sign names, in ecliptic order starting at 0°.
pub const SIGN_NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

/// Resolve the canonical sign name for an absolute ecliptic degree.
///
/// Each sign spans a 30° segment starting at Aries = 0°. Degrees outside
/// `[0, 360)` are normalized first, so negative or wrapped inputs land in
/// the expected segment.
pub fn sign_for_degree(degree: f64) -> &'static str {
    let normalized = degree.rem_euclid(360.0);
    let index = (normalized / 30.0).floor() as usize;
    // floor of a value in [0, 360)/30 is at most 11, but guard anyway
    SIGN_NAMES[index.min(11)]
}

// =============================================================================
// Celestial Body (chart input)
// =============================================================================

/// A celestial body as supplied by the upstream calculation service.
///
/// Only `name` and `absolute_degree` are expected to be present; every other
/// field is optional and repaired by the projector when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Explicit stable identifier (optional, preferred when present)
    #[serde(default)]
    pub id: Option<String>,
    /// Display name (e.g. "Sun", "Moon")
    #[serde(default)]
    pub name: String,
    /// Absolute angular position in degrees on the 0–360 ecliptic scale
    #[serde(default)]
    pub absolute_degree: f64,
    /// Zodiac sign the body sits in (optional, derived from degree if absent)
    #[serde(default)]
    pub sign: Option<String>,
    /// House number the body sits in (optional)
    #[serde(default)]
    pub house: Option<u8>,
    /// Explicit render color (optional, palette-assigned if absent)
    #[serde(default)]
    pub color: Option<String>,
}

impl CelestialBody {
    /// Create a body from a name and absolute degree
    pub fn new(name: impl Into<String>, absolute_degree: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            absolute_degree,
            sign: None,
            house: None,
            color: None,
        }
    }

    /// Set the explicit identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the zodiac sign
    pub fn with_sign(mut self, sign: impl Into<String>) -> Self {
        self.sign = Some(sign.into());
        self
    }

    /// Set the house number
    pub fn with_house(mut self, house: u8) -> Self {
        self.house = Some(house);
        self
    }

    /// Set the explicit render color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

// =============================================================================
// Zodiac Elements (triplicities)
// =============================================================================

/// One of the four classical elements, plus Unknown for unrecognized signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacElement {
    /// Aries, Leo, Sagittarius
    Fire,
    /// Gemini, Libra, Aquarius
    Air,
    /// Taurus, Virgo, Capricorn
    Earth,
    /// Cancer, Scorpio, Pisces
    Water,
    /// Any sign outside the canonical partition
    Unknown,
}

impl ZodiacElement {
    /// Human-readable element name
    pub fn as_str(&self) -> &'static str {
        match self {
            ZodiacElement::Fire => "Fire",
            ZodiacElement::Air => "Air",
            ZodiacElement::Earth => "Earth",
            ZodiacElement::Water => "Water",
            ZodiacElement::Unknown => "Unknown",
        }
    }

    /// Whether this element pairs with ACTIVE numbers (outward energy)
    pub fn is_active(&self) -> bool {
        matches!(self, ZodiacElement::Fire | ZodiacElement::Air)
    }

    /// Whether this element pairs with PASSIVE numbers (inward energy)
    pub fn is_receptive(&self) -> bool {
        matches!(self, ZodiacElement::Water | ZodiacElement::Earth)
    }
}

// =============================================================================
// Number Categories
// =============================================================================

/// Numerology category of a personal or universal number.
///
/// The sets are fixed arithmetic facts of the system, not configuration:
/// ACTIVE = {1, 3, 5, 8}, PASSIVE = {2, 4, 6, 7, 9}, MASTER = {11, 22, 33}.
/// Everything else is Neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberCategory {
    /// Outward, initiating numbers: 1, 3, 5, 8
    Active,
    /// Inward, consolidating numbers: 2, 4, 6, 7, 9
    Passive,
    /// Priority numbers: 11, 22, 33
    Master,
    /// Any other integer
    Neither,
}

impl NumberCategory {
    /// Categorize an integer into its numerology category
    pub fn categorize(number: i32) -> Self {
        match number {
            11 | 22 | 33 => NumberCategory::Master,
            1 | 3 | 5 | 8 => NumberCategory::Active,
            2 | 4 | 6 | 7 | 9 => NumberCategory::Passive,
            _ => NumberCategory::Neither,
        }
    }

    /// Human-readable category name
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberCategory::Active => "Active",
            NumberCategory::Passive => "Passive",
            NumberCategory::Master => "Master",
            NumberCategory::Neither => "Neither",
        }
    }
}

/// Whether a number is one of the master numbers 11, 22, 33
pub fn is_master_number(number: i32) -> bool {
    matches!(number, 11 | 22 | 33)
}
