//! Core module for the Arcana derivation kernel
//!
//! This module provides the deterministic, side-effect-free components that
//! transform birth-derived symbolic data into renderable structures. It
//! follows a modular architecture for testability and extensibility.
//!
//! # Architecture
//!
//! - `models`: Fundamental shared data structures (CelestialBody, elements,
//!   number categories)
//! - `error`: Error types using thiserror
//! - `library`: Canonical immutable symbol tables, injected into components
//! - `cross`: Archetype cross indexing over the 20-entry cycle
//! - `insight`: Daily energy classification rule chain
//! - `chart`: Polar chart projection into a renderable layout

pub mod chart;
pub mod cross;
pub mod error;
pub mod insight;
pub mod library;
pub mod models;

// Re-export commonly used types
pub use chart::{
    BodyMarker, ChartConfig, ChartInput, ChartProjector, HouseLine, Hub, Point, RenderBody,
    RenderLayout, RingSegment, PLACEHOLDER_GLYPH, ROTATION_DEGREES, SEGMENT_DEGREES,
};
pub use cross::{
    compute_cross, floor_mod, ArchetypeCross, CONCEPTION_OFFSET, DESTINY_OFFSET, LEFT_ARM_OFFSET,
    RIGHT_ARM_OFFSET,
};
pub use error::{ArcanaError, Result, ResultExt};
pub use insight::{classify, mode_for, DailyInsight, GuidanceMode};
pub use library::{
    ArchetypeSequence, ElementPartition, SymbolLibrary, CANONICAL_ARCHETYPES, CANONICAL_LIBRARY,
    CANONICAL_PALETTE, CYCLE_LENGTH,
};
pub use models::{
    is_master_number, sign_for_degree, CelestialBody, NumberCategory, ZodiacElement, SIGN_NAMES,
};
