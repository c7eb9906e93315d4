//! Archetype Cross Indexer
//!
//! Cross-references one archetype against the fixed 20-entry cycle to find
//! its four related archetypes. Negative offsets walk backward in the cycle
//! (conception, origin); positive offsets walk forward (destiny). The arms
//! sit six positions to either side.
//!
//! ```text
//!                conception (-8)
//!                      |
//!   left arm (-6) -- center -- right arm (+6)
//!                      |
//!                 destiny (+8)
//! ```
//!
//! All arithmetic is floor modulo over the cycle length, so backward steps
//! from a low index wrap to the end of the cycle instead of going negative.

use serde::Serialize;

use super::error::{ArcanaError, Result};
use super::library::ArchetypeSequence;

// =============================================================================
// Cycle Offsets
// =============================================================================

/// Backward offset to the conception archetype
pub const CONCEPTION_OFFSET: i32 = -8;
/// Forward offset to the destiny archetype
pub const DESTINY_OFFSET: i32 = 8;
/// Backward offset to the left arm
pub const LEFT_ARM_OFFSET: i32 = -6;
/// Forward offset to the right arm
pub const RIGHT_ARM_OFFSET: i32 = 6;

/// Floor modulo: always returns a value in `[0, modulus)` regardless of the
/// sign of `value`.
///
/// Rust's `%` is a truncating remainder and yields negative results for
/// negative dividends; cycle indexing needs the floor-style wrap, which
/// `rem_euclid` provides for a positive modulus.
pub fn floor_mod(value: i32, modulus: i32) -> usize {
    debug_assert!(modulus > 0, "modulus must be positive");
    value.rem_euclid(modulus) as usize
}

// =============================================================================
// Archetype Cross
// =============================================================================

/// The four archetypes related to a center archetype by fixed cyclic offsets,
/// plus the center itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchetypeCross {
    /// The archetype the cross is computed for
    pub center: String,
    /// Eight positions backward: origin and ancestry
    pub conception: String,
    /// Eight positions forward: direction and destiny
    pub destiny: String,
    /// Six positions backward
    pub left_arm: String,
    /// Six positions forward
    pub right_arm: String,
}

/// Compute the archetype cross for a center identifier.
///
/// The lookup is case-sensitive against the canonical cycle order. An
/// unknown center is the only failure mode and returns
/// [`ArcanaError::ArchetypeNotFound`]; there are no partial results and no
/// default substitution.
pub fn compute_cross(center_id: &str, sequence: &ArchetypeSequence) -> Result<ArchetypeCross> {
    let center_index = sequence
        .position(center_id)
        .ok_or_else(|| ArcanaError::archetype_not_found(center_id))? as i32;

    let len = sequence.len() as i32;
    let resolve = |offset: i32| sequence.at(floor_mod(center_index + offset, len)).to_string();

    Ok(ArchetypeCross {
        center: center_id.to_string(),
        conception: resolve(CONCEPTION_OFFSET),
        destiny: resolve(DESTINY_OFFSET),
        left_arm: resolve(LEFT_ARM_OFFSET),
        right_arm: resolve(RIGHT_ARM_OFFSET),
    })
}

impl ArchetypeCross {
    /// The five members in display order: center, conception, destiny,
    /// left arm, right arm.
    pub fn members(&self) -> [&str; 5] {
        [
            &self.center,
            &self.conception,
            &self.destiny,
            &self.left_arm,
            &self.right_arm,
        ]
    }
}

// =============================================================================
// TESTS
// =============================================================================
