//! Declarative description of a projected chart wheel.

use crate::aspects::AspectKind;
use crate::rendering::primitives::{Color, Label, Point, Segment, Stroke};
use crate::western::{CelestialBody, ZodiacSign};
use serde::{Deserialize, Serialize};

/// One 30° sign of the zodiac ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignSegment {
    pub sign: ZodiacSign,
    /// Closed annular-sector path
    pub path: String,
    /// Clockwise screen angles bounding the segment
    pub start_angle: f64,
    pub end_angle: f64,
    pub fill: Color,
    pub stroke: Stroke,
    pub glyph: Label,
}

/// Degree mark on the inside of the outer ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Ecliptic degree, 0..360
    pub degree: u16,
    pub major: bool,
    pub line: Segment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuspLine {
    pub house: u8,
    pub angular: bool,
    pub screen_angle: f64,
    pub line: Segment,
    pub stroke: Stroke,
    /// House number, placed midway to the next cusp
    pub number_label: Label,
    /// Degree within the sign, just inside the zodiac ring
    pub degree_label: Label,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyGlyph {
    pub body: CelestialBody,
    pub screen_angle: f64,
    pub glyph: Label,
    pub degree_label: Label,
    pub is_retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectLine {
    pub body_a: CelestialBody,
    pub body_b: CelestialBody,
    pub kind: AspectKind,
    pub line: Segment,
    pub stroke: Stroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    AscendantDescendant,
    MidheavenImumCoeli,
}

/// Chart axis drawn across the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLine {
    pub kind: AxisKind,
    pub line: Segment,
    pub color: Color,
    pub width: f64,
    /// Label at each end, `line.from` end first
    pub labels: [Label; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingCircle {
    pub radius: f64,
    pub fill: Option<Color>,
    pub stroke: Stroke,
}

/// Everything needed to draw one chart wheel.
///
/// Groups are listed in paint order, back to front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelDrawing {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub background: Color,
    pub signs: Vec<SignSegment>,
    pub rings: Vec<RingCircle>,
    pub ticks: Vec<Tick>,
    pub tick_color: Color,
    pub major_tick_width: f64,
    pub minor_tick_width: f64,
    pub cusps: Vec<CuspLine>,
    pub house_label_color: Color,
    pub cusp_label_color: Color,
    pub aspects: Vec<AspectLine>,
    pub aspect_opacity: f64,
    pub bodies: Vec<BodyGlyph>,
    pub body_color: Color,
    pub body_label_color: Color,
    pub retrograde_color: Color,
    pub axes: Vec<AxisLine>,
    pub sign_glyph_color: Color,
}
