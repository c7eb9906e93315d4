//! Chart Projector - Polar Layout Geometry
//!
//! Turns house-cusp angles and celestial body positions into a screen-ready
//! layout of concentric bands:
//!
//! ```text
//!   zodiac ring (outermost): 12 fixed 30° segments
//!   house band (middle):     one radial line per cusp
//!   body band (inner):       one marker per body
//!   hub (center):            always drawn
//! ```
//!
//! All bands share one rotation convention (subtract 90° so 0° renders at
//! the top reference), one center point, and one radius family, so the bands
//! stay concentric for any configuration.
//!
//! The projector never fails: empty collections degrade to a minimal layout
//! and malformed bodies are repaired through explicit fallback chains
//! (identity, color, glyph) instead of being rejected.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::library::SymbolLibrary;
use super::models::{sign_for_degree, CelestialBody, SIGN_NAMES};

// =============================================================================
// Projection Constants
// =============================================================================

/// Global rotation applied to every angle so 0° renders at the top reference
pub const ROTATION_DEGREES: f64 = -90.0;

/// Width of one zodiac ring segment
pub const SEGMENT_DEGREES: f64 = 30.0;

/// Neutral label used when a body has no glyph mapping and an empty name
pub const PLACEHOLDER_GLYPH: &str = "✶";

/// Color used if the injected palette is empty
const FALLBACK_COLOR: &str = "#888888";

// =============================================================================
// Chart Configuration
// =============================================================================

/// Geometry configuration for one chart rendering.
///
/// All radii hang off the same center point; the defaults describe a
/// 500×500 viewport with the bands laid out from the ring inward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Center x of the chart
    pub center_x: f64,
    /// Center y of the chart
    pub center_y: f64,
    /// Outer radius of the zodiac ring
    pub ring_outer_radius: f64,
    /// Inner radius of the zodiac ring (segment ticks span outer→inner)
    pub ring_inner_radius: f64,
    /// Radius the 12 ring labels sit on
    pub ring_label_radius: f64,
    /// Outer radius of the house band
    pub house_outer_radius: f64,
    /// Inner radius of the house band
    pub house_inner_radius: f64,
    /// Radius body markers sit on
    pub body_radius: f64,
    /// Distance from a body marker to its label
    pub body_label_offset: f64,
    /// Radius of the opaque central hub
    pub hub_radius: f64,
    /// Stroke width for the Ascendant house line
    pub ascendant_stroke_width: f64,
    /// Stroke width for every other house line
    pub house_stroke_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            center_x: 250.0,
            center_y: 250.0,
            ring_outer_radius: 240.0,
            ring_inner_radius: 205.0,
            ring_label_radius: 222.0,
            house_outer_radius: 205.0,
            house_inner_radius: 90.0,
            body_radius: 150.0,
            body_label_offset: 16.0,
            hub_radius: 18.0,
            ascendant_stroke_width: 2.5,
            house_stroke_width: 1.0,
        }
    }
}

impl ChartConfig {
    /// Move the chart center
    pub fn with_center(mut self, x: f64, y: f64) -> Self {
        self.center_x = x;
        self.center_y = y;
        self
    }

    /// Scale every radius and offset by a factor, keeping the bands concentric
    pub fn scaled(mut self, factor: f64) -> Self {
        self.ring_outer_radius *= factor;
        self.ring_inner_radius *= factor;
        self.ring_label_radius *= factor;
        self.house_outer_radius *= factor;
        self.house_inner_radius *= factor;
        self.body_radius *= factor;
        self.body_label_offset *= factor;
        self.hub_radius *= factor;
        self
    }
}

// =============================================================================
// Layout Elements
// =============================================================================

/// A point in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One 30° segment of the zodiac ring
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingSegment {
    /// Segment index, 0 = Aries
    pub index: usize,
    /// Canonical sign name
    pub sign: String,
    /// Sign glyph for the label
    pub glyph: String,
    /// Rotated label angle, centered in the segment
    pub label_angle: f64,
    /// Rotated angle of the segment boundary tick
    pub tick_angle: f64,
    /// Label position on the label radius
    pub label_position: Point,
    /// Boundary tick start (outer ring radius)
    pub tick_start: Point,
    /// Boundary tick end (inner ring radius)
    pub tick_end: Point,
}

/// One radial house cusp line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseLine {
    /// House index, 0 = Ascendant
    pub index: usize,
    /// Cusp angle as supplied, in ecliptic degrees
    pub cusp_degree: f64,
    /// Rotated render angle
    pub angle: f64,
    /// Line start on the inner house radius
    pub inner: Point,
    /// Line end on the outer house radius
    pub outer: Point,
    /// Whether this is the Ascendant line
    pub is_ascendant: bool,
    /// Render stroke width; the Ascendant is heavier than the rest
    pub stroke_width: f64,
}

/// A celestial body with guaranteed identity, label, and color.
///
/// Produced only by the projector; recomputed per render, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderBody {
    /// Non-empty render key: explicit id, else name, else synthesized
    pub id: String,
    /// Display name as supplied (may be empty)
    pub name: String,
    /// Non-empty label glyph
    pub glyph: String,
    /// Zodiac sign, derived from the degree when not supplied
    pub sign: String,
    /// House number, when supplied upstream
    pub house: Option<u8>,
    /// Guaranteed render color
    pub color: String,
    /// Absolute angular position as supplied
    pub absolute_degree: f64,
}

/// A body marker placed on the body band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyMarker {
    /// The repaired body record
    pub body: RenderBody,
    /// Rotated render angle
    pub angle: f64,
    /// Marker position on the body radius
    pub position: Point,
    /// Label position, offset outward from the marker
    pub label_position: Point,
}

/// The opaque central hub, always present
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hub {
    pub center: Point,
    pub radius: f64,
}

/// The full renderable layout of one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderLayout {
    /// The 12 zodiac ring segments, always present
    pub ring: Vec<RingSegment>,
    /// House cusp lines; empty when no cusps were supplied
    pub houses: Vec<HouseLine>,
    /// Body markers; empty when no bodies were supplied
    pub bodies: Vec<BodyMarker>,
    /// The central hub, always present
    pub hub: Hub,
}

/// Chart input as supplied by the upstream calculation service.
///
/// Both collections are optional in the wire format; missing sections
/// deserialize to empty and degrade gracefully in the projector.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartInput {
    #[serde(default)]
    pub houses: Vec<f64>,
    #[serde(default)]
    pub bodies: Vec<CelestialBody>,
}

// =============================================================================
// Chart Projector
// =============================================================================

/// Projects houses and bodies into a [`RenderLayout`].
///
/// Holds the injected geometry configuration, color palette, and glyph map;
/// `project` itself is a pure function of its inputs and this configuration.
#[derive(Debug, Clone)]
pub struct ChartProjector {
    config: ChartConfig,
    palette: Vec<String>,
    glyphs: HashMap<String, String>,
}

impl ChartProjector {
    /// Create a projector from explicit tables
    pub fn new(config: ChartConfig, palette: Vec<String>, glyphs: HashMap<String, String>) -> Self {
        Self {
            config,
            palette,
            glyphs,
        }
    }

    /// Create a projector backed by a symbol library's palette and glyphs
    pub fn with_library(config: ChartConfig, library: &SymbolLibrary) -> Self {
        Self::new(config, library.palette.clone(), library.glyphs.clone())
    }

    /// The geometry configuration in use
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Project a chart. Never fails: empty collections produce a minimal
    /// layout of ring and hub, and malformed bodies are repaired in place.
    pub fn project(&self, houses: &[f64], bodies: &[CelestialBody]) -> RenderLayout {
        RenderLayout {
            ring: self.project_ring(),
            houses: self.project_houses(houses),
            bodies: self.project_bodies(bodies),
            hub: Hub {
                center: Point {
                    x: self.config.center_x,
                    y: self.config.center_y,
                },
                radius: self.config.hub_radius,
            },
        }
    }

    /// Convenience wrapper over a deserialized [`ChartInput`]
    pub fn project_input(&self, input: &ChartInput) -> RenderLayout {
        self.project(&input.houses, &input.bodies)
    }

    // -------------------------------------------------------------------------
    // Bands
    // -------------------------------------------------------------------------

    /// The 12 fixed ring segments. Labels sit centered in their segment;
    /// boundary ticks sit on the unshifted segment edge.
    fn project_ring(&self) -> Vec<RingSegment> {
        SIGN_NAMES
            .iter()
            .enumerate()
            .map(|(i, sign)| {
                let tick_angle = i as f64 * SEGMENT_DEGREES + ROTATION_DEGREES;
                let label_angle = tick_angle + SEGMENT_DEGREES / 2.0;
                RingSegment {
                    index: i,
                    sign: sign.to_string(),
                    glyph: self.resolve_glyph(sign),
                    label_angle,
                    tick_angle,
                    label_position: self.point_at(label_angle, self.config.ring_label_radius),
                    tick_start: self.point_at(tick_angle, self.config.ring_outer_radius),
                    tick_end: self.point_at(tick_angle, self.config.ring_inner_radius),
                }
            })
            .collect()
    }

    fn project_houses(&self, houses: &[f64]) -> Vec<HouseLine> {
        if houses.is_empty() {
            debug!("no house cusps supplied, omitting house band");
            return Vec::new();
        }
        houses
            .iter()
            .enumerate()
            .map(|(i, &cusp)| {
                let angle = cusp.rem_euclid(360.0) + ROTATION_DEGREES;
                let is_ascendant = i == 0;
                HouseLine {
                    index: i,
                    cusp_degree: cusp,
                    angle,
                    inner: self.point_at(angle, self.config.house_inner_radius),
                    outer: self.point_at(angle, self.config.house_outer_radius),
                    is_ascendant,
                    stroke_width: if is_ascendant {
                        self.config.ascendant_stroke_width
                    } else {
                        self.config.house_stroke_width
                    },
                }
            })
            .collect()
    }

    fn project_bodies(&self, bodies: &[CelestialBody]) -> Vec<BodyMarker> {
        bodies
            .iter()
            .enumerate()
            .map(|(i, body)| {
                let angle = body.absolute_degree.rem_euclid(360.0) + ROTATION_DEGREES;
                BodyMarker {
                    body: self.repair_body(body, i),
                    angle,
                    position: self.point_at(angle, self.config.body_radius),
                    label_position: self
                        .point_at(angle, self.config.body_radius + self.config.body_label_offset),
                }
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Fallback Chains
    // -------------------------------------------------------------------------

    /// Repair a body into a render-safe record: non-empty id, non-empty
    /// glyph, resolved sign, guaranteed color.
    fn repair_body(&self, body: &CelestialBody, index: usize) -> RenderBody {
        RenderBody {
            id: resolve_identity(body, index),
            name: body.name.clone(),
            glyph: self.resolve_glyph(&body.name),
            sign: resolve_sign(body),
            house: body.house,
            color: self.resolve_color(body, index),
            absolute_degree: body.absolute_degree,
        }
    }

    /// Explicit color wins; otherwise cycle the palette by input position.
    fn resolve_color(&self, body: &CelestialBody, index: usize) -> String {
        if let Some(color) = &body.color {
            if !color.is_empty() {
                return color.clone();
            }
        }
        if self.palette.is_empty() {
            return FALLBACK_COLOR.to_string();
        }
        self.palette[index % self.palette.len()].clone()
    }

    /// Glyph map hit, else first character of the name, else placeholder.
    fn resolve_glyph(&self, name: &str) -> String {
        if let Some(glyph) = self.glyphs.get(name) {
            return glyph.clone();
        }
        match name.chars().next() {
            Some(first) => first.to_string(),
            None => PLACEHOLDER_GLYPH.to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Polar → Cartesian around the shared chart center
    fn point_at(&self, angle_degrees: f64, radius: f64) -> Point {
        let radians = angle_degrees.to_radians();
        Point {
            x: self.config.center_x + radius * radians.cos(),
            y: self.config.center_y + radius * radians.sin(),
        }
    }
}

impl Default for ChartProjector {
    fn default() -> Self {
        Self::with_library(ChartConfig::default(), &super::library::CANONICAL_LIBRARY)
    }
}

/// Identity precedence: explicit non-empty id, else non-empty name, else a
/// synthesized positional key.
fn resolve_identity(body: &CelestialBody, index: usize) -> String {
    if let Some(id) = &body.id {
        if !id.is_empty() {
            return id.clone();
        }
    }
    if !body.name.is_empty() {
        return body.name.clone();
    }
    debug!(index, "body has no id or name, synthesizing identity");
    format!("BODY_{}", index)
}

/// Explicit sign wins; otherwise derive it from the absolute degree.
fn resolve_sign(body: &CelestialBody) -> String {
    match &body.sign {
        Some(sign) if !sign.is_empty() => sign.clone(),
        _ => sign_for_degree(body.absolute_degree).to_string(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn projector() -> ChartProjector {
        ChartProjector::default()
    }

    fn twelve_houses() -> Vec<f64> {
        (0..12).map(|i| i as f64 * 30.0).collect()
    }

    #[test]
    fn test_empty_input_renders_ring_and_hub_only() {
        let layout = projector().project(&[], &[]);

        assert_eq!(layout.ring.len(), 12);
        assert!(layout.houses.is_empty());
        assert!(layout.bodies.is_empty());
        assert_eq!(layout.hub.center, Point { x: 250.0, y: 250.0 });
        assert_eq!(layout.hub.radius, 18.0);
    }

    #[test]
    fn test_sun_marker_angle_and_defaults() {
        let bodies = vec![CelestialBody::new("Sun", 100.0)];
        let layout = projector().project(&twelve_houses(), &bodies);

        let marker = &layout.bodies[0];
        assert_eq!(marker.angle, 10.0); // 100 - 90
        assert_eq!(marker.body.id, "Sun"); // synthesized from name
        assert_eq!(marker.body.color, "#e9b44c"); // palette[0]
        assert_eq!(marker.body.glyph, "☉");
        assert_eq!(marker.body.sign, "Cancer"); // derived from 100°
    }

    #[test]
    fn test_identity_precedence() {
        let bodies = vec![
            CelestialBody::new("Sun", 10.0).with_id("SUN"),
            CelestialBody::new("Moon", 20.0),
            CelestialBody::new("", 30.0),
        ];
        let layout = projector().project(&[], &bodies);

        assert_eq!(layout.bodies[0].body.id, "SUN");
        assert_eq!(layout.bodies[1].body.id, "Moon");
        assert_eq!(layout.bodies[2].body.id, "BODY_2");
    }

    #[test]
    fn test_empty_id_falls_back_to_name() {
        let bodies = vec![CelestialBody::new("Mars", 40.0).with_id("")];
        let layout = projector().project(&[], &bodies);
        assert_eq!(layout.bodies[0].body.id, "Mars");
    }

    #[test]
    fn test_palette_cycles_for_long_body_lists() {
        let palette_len = crate::core::library::CANONICAL_PALETTE.len();
        let bodies: Vec<CelestialBody> = (0..palette_len + 3)
            .map(|i| CelestialBody::new(format!("Body{}", i), i as f64))
            .collect();
        let layout = projector().project(&[], &bodies);

        assert_eq!(
            layout.bodies[0].body.color,
            layout.bodies[palette_len].body.color
        );
        assert_eq!(
            layout.bodies[2].body.color,
            layout.bodies[palette_len + 2].body.color
        );
    }

    #[test]
    fn test_explicit_color_wins() {
        let bodies = vec![CelestialBody::new("Venus", 50.0).with_color("#abcdef")];
        let layout = projector().project(&[], &bodies);
        assert_eq!(layout.bodies[0].body.color, "#abcdef");
    }

    #[test]
    fn test_empty_palette_still_renders() {
        let projector = ChartProjector::new(ChartConfig::default(), vec![], HashMap::new());
        let bodies = vec![CelestialBody::new("Sun", 0.0)];
        let layout = projector.project(&[], &bodies);
        assert_eq!(layout.bodies[0].body.color, FALLBACK_COLOR);
    }

    #[test]
    fn test_glyph_fallback_chain() {
        let bodies = vec![
            CelestialBody::new("Moon", 10.0),     // mapped glyph
            CelestialBody::new("Lilith", 20.0),   // unmapped, first char
            CelestialBody::new("", 30.0),         // empty name, placeholder
        ];
        let layout = projector().project(&[], &bodies);

        assert_eq!(layout.bodies[0].body.glyph, "☽");
        assert_eq!(layout.bodies[1].body.glyph, "L");
        assert_eq!(layout.bodies[2].body.glyph, PLACEHOLDER_GLYPH);
    }

    #[test]
    fn test_ascendant_has_distinct_weight() {
        let layout = projector().project(&twelve_houses(), &[]);

        assert_eq!(layout.houses.len(), 12);
        assert!(layout.houses[0].is_ascendant);
        assert!(!layout.houses[1].is_ascendant);
        assert!(layout.houses[0].stroke_width > layout.houses[1].stroke_width);
    }

    #[test]
    fn test_house_band_tolerates_partial_cusp_lists() {
        let layout = projector().project(&[0.0, 90.0, 180.0], &[]);
        assert_eq!(layout.houses.len(), 3);
        assert_eq!(layout.houses[1].angle, 0.0); // 90 - 90
    }

    #[test]
    fn test_ring_label_centered_in_segment() {
        let layout = projector().project(&[], &[]);

        for segment in &layout.ring {
            let expected_tick = segment.index as f64 * 30.0 - 90.0;
            assert_eq!(segment.tick_angle, expected_tick);
            assert_eq!(segment.label_angle, expected_tick + 15.0);
        }
        assert_eq!(layout.ring[0].sign, "Aries");
        assert_eq!(layout.ring[0].glyph, "♈");
        assert_eq!(layout.ring[11].sign, "Pisces");
    }

    #[test]
    fn test_bands_share_center() {
        let config = ChartConfig::default().with_center(100.0, 120.0);
        let projector = ChartProjector::with_library(config, &SymbolLibrary::new());
        let layout = projector.project(&[0.0], &[CelestialBody::new("Sun", 0.0)]);

        // angle 0° input renders at -90°: straight up from the shared center
        let house = &layout.houses[0];
        assert!((house.outer.x - 100.0).abs() < 1e-9);
        assert!(house.outer.y < 120.0);

        let marker = &layout.bodies[0];
        assert!((marker.position.x - 100.0).abs() < 1e-9);
        assert!(marker.position.y < 120.0);

        assert_eq!(layout.hub.center, Point { x: 100.0, y: 120.0 });
    }

    #[test]
    fn test_body_label_offset_outward() {
        let layout = projector().project(&[], &[CelestialBody::new("Sun", 0.0)]);
        let marker = &layout.bodies[0];

        let config = ChartConfig::default();
        let marker_dist = ((marker.position.x - config.center_x).powi(2)
            + (marker.position.y - config.center_y).powi(2))
        .sqrt();
        let label_dist = ((marker.label_position.x - config.center_x).powi(2)
            + (marker.label_position.y - config.center_y).powi(2))
        .sqrt();

        assert!((marker_dist - config.body_radius).abs() < 1e-9);
        assert!((label_dist - config.body_radius - config.body_label_offset).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_sign_is_preserved() {
        // explicit sign disagrees with the degree; it must not be overwritten
        let bodies = vec![CelestialBody::new("Sun", 100.0).with_sign("Leo")];
        let layout = projector().project(&[], &bodies);
        assert_eq!(layout.bodies[0].body.sign, "Leo");
    }

    #[test]
    fn test_wrapped_degrees_normalize() {
        let bodies = vec![
            CelestialBody::new("Sun", 460.0),  // 100 after wrap
            CelestialBody::new("Moon", -10.0), // 350 after wrap
        ];
        let layout = projector().project(&[], &bodies);
        assert_eq!(layout.bodies[0].angle, 10.0);
        assert_eq!(layout.bodies[1].angle, 260.0);
    }

    #[test]
    fn test_scaled_config_keeps_ratios() {
        let config = ChartConfig::default().scaled(2.0);
        assert_eq!(config.ring_outer_radius, 480.0);
        assert_eq!(config.hub_radius, 36.0);
        assert_eq!(config.center_x, 250.0); // center is not scaled
    }

    #[test]
    fn test_chart_input_deserializes_with_missing_sections() {
        let input: ChartInput = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.houses.is_empty());
        assert!(input.bodies.is_empty());

        let input: ChartInput =
            serde_json::from_str(r#"{"bodies": [{"name": "Sun", "absolute_degree": 100}]}"#)
                .unwrap();
        assert_eq!(input.bodies.len(), 1);

        let layout = projector().project_input(&input);
        assert_eq!(layout.bodies.len(), 1);
        assert!(layout.houses.is_empty());
    }

    #[test]
    fn test_layout_serializes_for_presentation_layer() {
        let layout = projector().project(&twelve_houses(), &[CelestialBody::new("Sun", 100.0)]);
        let json = serde_json::to_value(&layout).unwrap();

        assert!(json["ring"].is_array());
        assert_eq!(json["bodies"][0]["body"]["id"], "Sun");
        assert_eq!(json["hub"]["radius"], 18.0);
    }
}
