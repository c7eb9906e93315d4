//! arcana_core - Deterministic derivation core for spiritual profile pages
//!
//! This library provides the pure computation behind a personalized profile
//! page: archetype cross indexing over the Mayan 20-day cycle, rule-based
//! daily energy classification, and polar projection of astrological chart
//! data into a renderable layout. It is designed to be consumed by:
//! - The CLI binary (src/bin/arcana.rs)
//! - A presentation layer that binds the structured values directly
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs** (this file): Pure logic, no CLI concerns
//! - **bin/arcana.rs**: Thin wrapper that calls the library
//!
//! Every component is synchronous, deterministic, and side-effect-free:
//! identical inputs always produce identical outputs, so callers may invoke
//! the functions concurrently or memoize them freely. The canonical symbol
//! tables (archetype cycle, element partition, palette, glyphs) are passed
//! in as explicit configuration rather than reached for as globals.

pub mod core;

pub use crate::core::{
    classify, compute_cross, ArcanaError, ArchetypeCross, ArchetypeSequence, CelestialBody,
    ChartConfig, ChartInput, ChartProjector, DailyInsight, ElementPartition, GuidanceMode,
    RenderLayout, Result, SymbolLibrary, CANONICAL_LIBRARY,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
