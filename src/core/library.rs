//! Symbol Library - Canonical Immutable Tables
//!
//! This module holds the read-only configuration the derivation components
//! consume: the 20-archetype cycle, the 12-sign element partition, the render
//! color palette, and the body/sign glyph map.
//!
//! The tables are injected into each component rather than reached for as
//! globals, so every function stays pure and testable in isolation. The
//! canonical instance ships in-crate; a JSON file can override any section.
//!
//! # Table File Format
//!
//! ```json
//! {
//!   "archetypes": ["batz", "e", "..."],
//!   "elements": { "Aries": "fire", "Cancer": "water" },
//!   "palette": ["#e9b44c", "#9b5de5"],
//!   "glyphs": { "Sun": "☉" }
//! }
//! ```
//!
//! Omitted sections fall back to the canonical tables.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ArcanaError, Result};
use super::models::ZodiacElement;

// =============================================================================
// Archetype Sequence
// =============================================================================

/// Number of archetypes in the cycle
pub const CYCLE_LENGTH: usize = 20;

/// The canonical 20-entry archetype cycle, in fixed order.
pub const CANONICAL_ARCHETYPES: [&str; CYCLE_LENGTH] = [
    "batz", "e", "aj", "ix", "tzikin", "ajmaq", "noj", "tijax", "kawoq", "ajpu", "imox", "iq",
    "aqabal", "kat", "kan", "kame", "kej", "qanil", "toj", "tzi",
];

/// An ordered, immutable cycle of exactly 20 distinct archetype identifiers.
///
/// Construction validates the cycle invariants (length 20, no duplicates),
/// so downstream indexing can treat the sequence as structurally sound and
/// fail only on an unknown center identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArchetypeSequence(Vec<String>);

impl ArchetypeSequence {
    /// Build a validated sequence from raw entries.
    ///
    /// Fails if the cycle does not have exactly 20 entries or repeats an
    /// identifier.
    pub fn new(entries: Vec<String>) -> Result<Self> {
        if entries.len() != CYCLE_LENGTH {
            return Err(ArcanaError::InvalidCycleLength {
                expected: CYCLE_LENGTH,
                found: entries.len(),
            });
        }
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].contains(entry) {
                return Err(ArcanaError::DuplicateArchetype { id: entry.clone() });
            }
        }
        Ok(Self(entries))
    }

    /// The canonical cycle
    pub fn canonical() -> Self {
        Self(CANONICAL_ARCHETYPES.iter().map(|s| s.to_string()).collect())
    }

    /// Position of an archetype in the cycle (case-sensitive)
    pub fn position(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|entry| entry == id)
    }

    /// Archetype at a cycle position; positions are always in `[0, 20)`
    pub fn at(&self, index: usize) -> &str {
        &self.0[index % CYCLE_LENGTH]
    }

    /// Number of entries (always 20)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the cycle is empty (never true for a constructed sequence)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the archetype identifiers in cycle order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }
}

// =============================================================================
// Element Partition
// =============================================================================

/// The fixed partition of the 12 canonical signs into four triplicities.
///
/// Signs outside the partition resolve to [`ZodiacElement::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementPartition {
    map: HashMap<String, ZodiacElement>,
}

impl ElementPartition {
    /// The canonical triplicity partition
    pub fn canonical() -> Self {
        let mut map = HashMap::new();
        for sign in ["Aries", "Leo", "Sagittarius"] {
            map.insert(sign.to_string(), ZodiacElement::Fire);
        }
        for sign in ["Gemini", "Libra", "Aquarius"] {
            map.insert(sign.to_string(), ZodiacElement::Air);
        }
        for sign in ["Taurus", "Virgo", "Capricorn"] {
            map.insert(sign.to_string(), ZodiacElement::Earth);
        }
        for sign in ["Cancer", "Scorpio", "Pisces"] {
            map.insert(sign.to_string(), ZodiacElement::Water);
        }
        Self { map }
    }

    /// Build a partition from explicit sign → element pairs
    pub fn from_map(map: HashMap<String, ZodiacElement>) -> Self {
        Self { map }
    }

    /// Element of a sign, or Unknown if the sign is not in the partition
    pub fn element_of(&self, sign: &str) -> ZodiacElement {
        self.map
            .get(sign)
            .copied()
            .unwrap_or(ZodiacElement::Unknown)
    }

    /// Number of signs in the partition
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the partition has no entries
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// =============================================================================
// Symbol Library
// =============================================================================

/// The render color palette used when a body carries no explicit color.
pub const CANONICAL_PALETTE: [&str; 10] = [
    "#e9b44c", "#9b5de5", "#00bbf9", "#00f5d4", "#f15bb5", "#fee440", "#ef476f", "#06d6a0",
    "#118ab2", "#8338ec",
];

/// Body and sign glyphs for chart labels.
const CANONICAL_GLYPHS: [(&str, &str); 24] = [
    ("Sun", "☉"),
    ("Moon", "☽"),
    ("Mercury", "☿"),
    ("Venus", "♀"),
    ("Mars", "♂"),
    ("Jupiter", "♃"),
    ("Saturn", "♄"),
    ("Uranus", "♅"),
    ("Neptune", "♆"),
    ("Pluto", "♇"),
    ("North Node", "☊"),
    ("South Node", "☋"),
    ("Aries", "♈"),
    ("Taurus", "♉"),
    ("Gemini", "♊"),
    ("Cancer", "♋"),
    ("Leo", "♌"),
    ("Virgo", "♍"),
    ("Libra", "♎"),
    ("Scorpio", "♏"),
    ("Sagittarius", "♐"),
    ("Capricorn", "♑"),
    ("Aquarius", "♒"),
    ("Pisces", "♓"),
];

/// The full set of immutable symbol tables consumed by the derivation core.
#[derive(Debug, Clone)]
pub struct SymbolLibrary {
    /// The 20-archetype cycle
    pub archetypes: ArchetypeSequence,
    /// Sign → element triplicity partition
    pub elements: ElementPartition,
    /// Ordered render color palette
    pub palette: Vec<String>,
    /// Name → glyph map for chart labels
    pub glyphs: HashMap<String, String>,
}

/// On-disk override format; every section is optional.
#[derive(Debug, Default, Deserialize)]
struct TableFile {
    #[serde(default)]
    archetypes: Option<Vec<String>>,
    #[serde(default)]
    elements: Option<HashMap<String, ZodiacElement>>,
    #[serde(default)]
    palette: Option<Vec<String>>,
    #[serde(default)]
    glyphs: Option<HashMap<String, String>>,
}

impl SymbolLibrary {
    /// The canonical library shipped in-crate
    pub fn new() -> Self {
        Self {
            archetypes: ArchetypeSequence::canonical(),
            elements: ElementPartition::canonical(),
            palette: CANONICAL_PALETTE.iter().map(|c| c.to_string()).collect(),
            glyphs: CANONICAL_GLYPHS
                .iter()
                .map(|(name, glyph)| (name.to_string(), glyph.to_string()))
                .collect(),
        }
    }

    /// Load a library from a JSON table file, filling omitted sections from
    /// the canonical tables. Override sections are validated on load.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ArcanaError::TableFileNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path)?;
        let file: TableFile = serde_json::from_str(&raw)?;

        let canonical = Self::new();
        let archetypes = match file.archetypes {
            Some(entries) => ArchetypeSequence::new(entries)?,
            None => canonical.archetypes,
        };
        let elements = match file.elements {
            Some(map) => ElementPartition::from_map(map),
            None => canonical.elements,
        };
        let palette = match file.palette {
            Some(palette) => {
                if palette.is_empty() {
                    return Err(ArcanaError::invalid_tables("palette must not be empty"));
                }
                palette
            }
            None => canonical.palette,
        };
        let glyphs = file.glyphs.unwrap_or(canonical.glyphs);

        Ok(Self {
            archetypes,
            elements,
            palette,
            glyphs,
        })
    }

    /// Glyph for a body or sign name, if one is mapped
    pub fn glyph_for(&self, name: &str) -> Option<&str> {
        self.glyphs.get(name).map(|g| g.as_str())
    }
}

impl Default for SymbolLibrary {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// The canonical symbol library, built once per process.
    pub static ref CANONICAL_LIBRARY: SymbolLibrary = SymbolLibrary::new();
}

// =============================================================================
// TESTS
// =============================================================================
