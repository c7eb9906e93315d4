//! Daily Energy Classifier
//!
//! Classifies a day into one of four guidance modes from a zodiac sign, a
//! personal number, and a universal day number. The rule chain is evaluated
//! in a fixed order and the first match wins:
//!
//! 1. **Portal** - either number is a master number (11, 22, 33); absolute
//!    priority over every other rule
//! 2. **Expansion** - fire/air sign paired with an active personal number
//! 3. **Refuge** - water/earth sign paired with a passive personal number
//! 4. **Balance** - everything else, including unknown signs, uncategorized
//!    numbers, and crossed pairings
//!
//! The classifier is total: every input combination maps to exactly one mode.

use serde::Serialize;

use super::library::ElementPartition;
use super::models::{is_master_number, NumberCategory};

// =============================================================================
// Guidance Mode
// =============================================================================

/// The four daily guidance modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GuidanceMode {
    /// Outward motion: element and number both push forward
    Expansion,
    /// Inward motion: element and number both draw in
    Refuge,
    /// Master number day: heightened significance overrides the sign
    Portal,
    /// Mixed or neutral currents
    Balance,
}

impl GuidanceMode {
    /// Fixed title for this mode
    pub fn title(&self) -> &'static str {
        match self {
            GuidanceMode::Expansion => "Expansion Day",
            GuidanceMode::Refuge => "Refuge Day",
            GuidanceMode::Portal => "Portal Day",
            GuidanceMode::Balance => "Balance Day",
        }
    }

    /// Fixed advice text for this mode
    pub fn advice(&self) -> &'static str {
        match self {
            GuidanceMode::Expansion => {
                "The current runs outward. Launch what you have prepared, speak first, and let momentum carry the work."
            }
            GuidanceMode::Refuge => {
                "The current runs inward. Tend what you already hold, rest deliberately, and finish quiet work."
            }
            GuidanceMode::Portal => {
                "A master number opens the day. Pay attention to thresholds; what begins now carries unusual weight."
            }
            GuidanceMode::Balance => {
                "The currents cross. Neither push nor withdraw; keep an even keel and adjust as the day shows itself."
            }
        }
    }

    /// Fixed keyword set for this mode
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            GuidanceMode::Expansion => &["initiative", "momentum", "visibility"],
            GuidanceMode::Refuge => &["rest", "depth", "consolidation"],
            GuidanceMode::Portal => &["threshold", "significance", "attention"],
            GuidanceMode::Balance => &["equilibrium", "patience", "adjustment"],
        }
    }

    /// Fixed accent color for this mode
    pub fn color(&self) -> &'static str {
        match self {
            GuidanceMode::Expansion => "#e76f51",
            GuidanceMode::Refuge => "#2a9d8f",
            GuidanceMode::Portal => "#7b2cbf",
            GuidanceMode::Balance => "#8d99ae",
        }
    }

    /// The full content bundle for this mode
    pub fn insight(&self) -> DailyInsight {
        DailyInsight {
            mode: *self,
            title: self.title().to_string(),
            advice: self.advice().to_string(),
            keywords: self.keywords().iter().map(|k| k.to_string()).collect(),
            color: self.color().to_string(),
        }
    }
}

// =============================================================================
// Daily Insight
// =============================================================================

/// A fixed guidance bundle selected purely by mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyInsight {
    /// The selected guidance mode
    pub mode: GuidanceMode,
    /// Mode title
    pub title: String,
    /// Mode advice text
    pub advice: String,
    /// Mode keywords
    pub keywords: Vec<String>,
    /// Mode accent color
    pub color: String,
}

// =============================================================================
// Classifier
// =============================================================================

/// Classify a day from a sign and two numerology numbers.
///
/// Total function: unrecognized signs resolve to an Unknown element and
/// uncategorized numbers to Neither; both fall through to Balance. Master
/// numbers in either input select Portal before the sign is even consulted.
pub fn classify(
    sign: &str,
    personal_number: i32,
    universal_day_number: i32,
    partition: &ElementPartition,
) -> DailyInsight {
    mode_for(sign, personal_number, universal_day_number, partition).insight()
}

/// The mode-selection rule chain, first match wins.
pub fn mode_for(
    sign: &str,
    personal_number: i32,
    universal_day_number: i32,
    partition: &ElementPartition,
) -> GuidanceMode {
    if is_master_number(personal_number) || is_master_number(universal_day_number) {
        return GuidanceMode::Portal;
    }

    let element = partition.element_of(sign);
    let category = NumberCategory::categorize(personal_number);

    match (element, category) {
        (e, NumberCategory::Active) if e.is_active() => GuidanceMode::Expansion,
        (e, NumberCategory::Passive) if e.is_receptive() => GuidanceMode::Refuge,
        _ => GuidanceMode::Balance,
    }
}

// =============================================================================
// TESTS
// =============================================================================
