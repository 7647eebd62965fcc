use crate::aspects::AspectKind;
use crate::rendering::primitives::{Color, Stroke};
use crate::western::Element;

/// Visual styling configuration for wheel elements
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    pub background_color: Color,
    pub fire_color: Color,
    pub earth_color: Color,
    pub air_color: Color,
    pub water_color: Color,
    pub sign_stroke: Stroke,
    pub sign_glyph_color: Color,
    pub outer_ring_stroke: Stroke,
    pub zodiac_ring_stroke: Stroke,
    pub house_ring_stroke: Stroke,
    pub aspect_ring_stroke: Stroke,
    pub aspect_ring_fill: Color,
    pub hub_stroke: Stroke,
    pub hub_fill: Color,
    pub tick_color: Color,
    pub major_tick_width: f64,
    pub minor_tick_width: f64,
    pub angular_cusp_stroke: Stroke,
    pub cusp_stroke: Stroke,
    pub house_label_color: Color,
    pub cusp_label_color: Color,
    pub body_color: Color,
    pub retrograde_color: Color,
    pub body_label_color: Color,
    pub conjunction_color: Color,
    pub hard_aspect_color: Color,
    pub soft_aspect_color: Color,
    pub aspect_width: f64,
    pub aspect_opacity: f64,
    pub ascendant_axis_color: Color,
    pub midheaven_axis_color: Color,
    pub axis_width: f64,
}

impl Default for VisualConfig {
    fn default() -> Self {
        let hex = |value: &str| Color::from_hex(value).unwrap_or(Color::BLACK);
        Self {
            background_color: Color::WHITE,
            fire_color: hex("#ffe0e0"),
            earth_color: hex("#f0ead2"),
            air_color: hex("#fffde0"),
            water_color: hex("#ddeeff"),
            sign_stroke: Stroke::solid(hex("#888"), 0.5),
            sign_glyph_color: hex("#333"),
            outer_ring_stroke: Stroke::solid(hex("#555"), 1.5),
            zodiac_ring_stroke: Stroke::solid(hex("#555"), 1.0),
            house_ring_stroke: Stroke::solid(hex("#888"), 0.8),
            aspect_ring_stroke: Stroke::solid(hex("#ccc"), 0.5),
            aspect_ring_fill: Color::WHITE,
            hub_stroke: Stroke::solid(hex("#aaa"), 1.0),
            hub_fill: hex("#f5f5f5"),
            tick_color: hex("#aaa"),
            major_tick_width: 0.8,
            minor_tick_width: 0.4,
            angular_cusp_stroke: Stroke::solid(hex("#555"), 1.2),
            cusp_stroke: Stroke::solid(hex("#bbb"), 0.7),
            house_label_color: hex("#555"),
            cusp_label_color: hex("#666"),
            body_color: hex("#222"),
            retrograde_color: hex("#cc2222"),
            body_label_color: hex("#555"),
            conjunction_color: hex("#555"),
            hard_aspect_color: hex("#cc2222"),
            soft_aspect_color: hex("#2255cc"),
            aspect_width: 0.8,
            aspect_opacity: 0.7,
            ascendant_axis_color: hex("#cc2222"),
            midheaven_axis_color: hex("#226622"),
            axis_width: 1.2,
        }
    }
}

impl VisualConfig {
    pub fn element_color(&self, element: Element) -> Color {
        match element {
            Element::Fire => self.fire_color,
            Element::Earth => self.earth_color,
            Element::Air => self.air_color,
            Element::Water => self.water_color,
        }
    }

    /// Oppositions and squares are hard, trines and sextiles soft.
    pub fn aspect_stroke(&self, kind: AspectKind) -> Stroke {
        let (color, dash) = match kind {
            AspectKind::Conjunction => (self.conjunction_color, Some("4 3")),
            AspectKind::Opposition | AspectKind::Square => (self.hard_aspect_color, None),
            AspectKind::Trine => (self.soft_aspect_color, None),
            AspectKind::Sextile => (self.soft_aspect_color, Some("5 3")),
        };
        Stroke {
            color,
            width: self.aspect_width,
            dash_array: dash.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_strokes() {
        let config = VisualConfig::default();
        let square = config.aspect_stroke(AspectKind::Square);
        assert_eq!(square.color.to_string(), "#cc2222");
        assert!(square.dash_array.is_none());

        let sextile = config.aspect_stroke(AspectKind::Sextile);
        assert_eq!(sextile.color.to_string(), "#2255cc");
        assert_eq!(sextile.dash_array.as_deref(), Some("5 3"));

        let conjunction = config.aspect_stroke(AspectKind::Conjunction);
        assert_eq!(conjunction.color.to_string(), "#555555");
        assert_eq!(conjunction.dash_array.as_deref(), Some("4 3"));
    }

    #[test]
    fn test_element_fills() {
        let config = VisualConfig::default();
        assert_eq!(config.element_color(Element::Water).to_string(), "#ddeeff");
        assert_eq!(config.element_color(Element::Fire).to_string(), "#ffe0e0");
    }
}
