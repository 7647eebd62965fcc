//! Wheel layout and the ecliptic-to-screen projection.
//!
//! Screen angles are in degrees, 0 at 12 o'clock and growing clockwise.
//! The chart is rotated so the Ascendant always sits at screen angle 180°.

use crate::error::ChartError;
use crate::position::normalize_degrees;
use crate::rendering::primitives::Point;
use serde::{Deserialize, Serialize};

/// Center and nested radii of the chart wheel.
///
/// From the outside in: zodiac ring (`outer_radius`..`zodiac_radius`),
/// house ring (`zodiac_radius`..`house_radius`), body glyphs on
/// `planet_radius`, aspect chords inside `aspect_radius`, and the hub.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelGeometry {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub outer_radius: f64,
    pub zodiac_radius: f64,
    pub house_radius: f64,
    pub planet_radius: f64,
    pub aspect_radius: f64,
    pub hub_radius: f64,
    /// Inward length of ticks on multiples of 5°
    pub major_tick_length: f64,
    pub minor_tick_length: f64,
    /// Distance inside `zodiac_radius` of each cusp's degree label
    pub cusp_label_inset: f64,
    /// Distance inside `zodiac_radius` of the Asc/Dsc/MC/IC labels
    pub axis_label_inset: f64,
    /// Distance outside `planet_radius` of each body's degree label
    pub body_label_offset: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            center: Point::new(300.0, 300.0),
            outer_radius: 270.0,
            zodiac_radius: 240.0,
            house_radius: 210.0,
            planet_radius: 185.0,
            aspect_radius: 160.0,
            hub_radius: 60.0,
            major_tick_length: 8.0,
            minor_tick_length: 4.0,
            cusp_label_inset: 12.0,
            axis_label_inset: 20.0,
            body_label_offset: 18.0,
        }
    }
}

impl WheelGeometry {
    /// Default wheel proportions scaled to fit a `width` x `height` canvas.
    pub fn scaled_to(width: f64, height: f64) -> Self {
        let base = Self::default();
        let scale = width.min(height) / base.width;
        Self {
            width,
            height,
            center: Point::new(width / 2.0, height / 2.0),
            outer_radius: base.outer_radius * scale,
            zodiac_radius: base.zodiac_radius * scale,
            house_radius: base.house_radius * scale,
            planet_radius: base.planet_radius * scale,
            aspect_radius: base.aspect_radius * scale,
            hub_radius: base.hub_radius * scale,
            major_tick_length: base.major_tick_length * scale,
            minor_tick_length: base.minor_tick_length * scale,
            cusp_label_inset: base.cusp_label_inset * scale,
            axis_label_inset: base.axis_label_inset * scale,
            body_label_offset: base.body_label_offset * scale,
        }
    }

    /// Radii must be positive, finite and strictly nested.
    pub fn validate(&self) -> Result<(), ChartError> {
        let named = [
            ("width", self.width),
            ("height", self.height),
            ("outer_radius", self.outer_radius),
            ("zodiac_radius", self.zodiac_radius),
            ("house_radius", self.house_radius),
            ("planet_radius", self.planet_radius),
            ("aspect_radius", self.aspect_radius),
            ("hub_radius", self.hub_radius),
        ];
        for (name, value) in named {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidGeometry(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(ChartError::InvalidGeometry("center must be finite".to_string()));
        }

        for pair in named[2..].windows(2) {
            let (outer_name, outer) = pair[0];
            let (inner_name, inner) = pair[1];
            if inner >= outer {
                return Err(ChartError::InvalidGeometry(format!(
                    "{} ({}) must be smaller than {} ({})",
                    inner_name, inner, outer_name, outer
                )));
            }
        }

        let ring = self.outer_radius - self.zodiac_radius;
        for (name, value) in [
            ("major_tick_length", self.major_tick_length),
            ("minor_tick_length", self.minor_tick_length),
        ] {
            if !value.is_finite() || value < 0.0 || value > ring {
                return Err(ChartError::InvalidGeometry(format!(
                    "{} must be within the zodiac ring (0..={}), got {}",
                    name, ring, value
                )));
            }
        }
        for (name, value) in [
            ("cusp_label_inset", self.cusp_label_inset),
            ("axis_label_inset", self.axis_label_inset),
            ("body_label_offset", self.body_label_offset),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidGeometry(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Point at `radius` from the center along `screen_angle`.
    pub fn point_at(&self, screen_angle: f64, radius: f64) -> Point {
        polar_to_xy(self.center, screen_angle, radius)
    }
}

/// Screen angle of an ecliptic degree on a wheel rotated to `ascendant`.
pub fn screen_angle(ecliptic: f64, ascendant: f64) -> f64 {
    let rotated = normalize_degrees(ecliptic - ascendant + 180.0);
    normalize_degrees(360.0 - rotated)
}

/// Screen coordinates of a polar point; angle 0 is straight up.
pub fn polar_to_xy(center: Point, angle: f64, radius: f64) -> Point {
    let rad = (angle - 90.0).to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Clockwise angle swept going from `start` to `end`, in [0, 360).
pub fn clockwise_sweep(start: f64, end: f64) -> f64 {
    normalize_degrees(end - start)
}

/// SVG large-arc flag for a clockwise arc from `start` to `end`.
pub fn large_arc_flag(start: f64, end: f64) -> u8 {
    u8::from(clockwise_sweep(start, end) > 180.0)
}

/// SVG path for a clockwise arc of `radius` from screen angle `start` to `end`.
pub fn describe_arc(center: Point, radius: f64, start: f64, end: f64) -> String {
    let s = polar_to_xy(center, start, radius);
    let e = polar_to_xy(center, end, radius);
    format!(
        "M {:.3} {:.3} A {:.3} {:.3} 0 {} 1 {:.3} {:.3}",
        s.x,
        s.y,
        radius,
        radius,
        large_arc_flag(start, end),
        e.x,
        e.y
    )
}

/// Closed SVG path of the ring sector between two radii, running clockwise
/// from screen angle `start` to `end` along the outer edge.
pub fn annular_sector_path(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start: f64,
    end: f64,
) -> String {
    let large = large_arc_flag(start, end);
    let outer_start = polar_to_xy(center, start, outer_radius);
    let outer_end = polar_to_xy(center, end, outer_radius);
    let inner_end = polar_to_xy(center, end, inner_radius);
    let inner_start = polar_to_xy(center, start, inner_radius);

    format!(
        "M {:.3} {:.3} A {:.3} {:.3} 0 {} 1 {:.3} {:.3} L {:.3} {:.3} A {:.3} {:.3} 0 {} 0 {:.3} {:.3} Z",
        outer_start.x,
        outer_start.y,
        outer_radius,
        outer_radius,
        large,
        outer_end.x,
        outer_end.y,
        inner_end.x,
        inner_end.y,
        inner_radius,
        inner_radius,
        large,
        inner_start.x,
        inner_start.y
    )
}

/// Ecliptic degree halfway from one cusp to the next, going forward through 0°.
pub fn house_midpoint(current: f64, next: f64) -> f64 {
    let span = (next - current + 360.0) % 360.0;
    normalize_degrees(current + span / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_ascendant_projects_to_180() {
        for asc in [0.0, 12.5, 179.9, 180.0, 359.99] {
            assert!(close(screen_angle(asc, asc), 180.0));
        }
    }

    #[test]
    fn test_screen_angle_direction() {
        // Ten degrees past the Ascendant sits ten degrees before it on screen
        assert!(close(screen_angle(110.0, 100.0), 170.0));
        assert!(close(screen_angle(280.0, 100.0), 0.0));
        assert!(close(screen_angle(100.0 + 90.0, 100.0), 90.0));
    }

    #[test]
    fn test_polar_to_xy() {
        let c = Point::new(300.0, 300.0);
        let top = polar_to_xy(c, 0.0, 100.0);
        assert!(close(top.x, 300.0) && close(top.y, 200.0));
        let right = polar_to_xy(c, 90.0, 100.0);
        assert!(close(right.x, 400.0) && close(right.y, 300.0));
        let bottom = polar_to_xy(c, 180.0, 100.0);
        assert!(close(bottom.x, 300.0) && close(bottom.y, 400.0));
    }

    #[test]
    fn test_large_arc_flag_uses_swept_angle() {
        assert_eq!(large_arc_flag(350.0, 20.0), 0);
        assert_eq!(large_arc_flag(20.0, 350.0), 1);
        assert_eq!(large_arc_flag(0.0, 180.0), 0);
        assert_eq!(large_arc_flag(0.0, 180.5), 1);
    }

    #[test]
    fn test_describe_arc_flags() {
        let path = describe_arc(Point::new(0.0, 0.0), 10.0, 345.0, 15.0);
        assert!(path.contains(" 0 0 1 "), "{}", path);
    }

    #[test]
    fn test_annular_sector_path() {
        let path = annular_sector_path(Point::new(100.0, 100.0), 50.0, 100.0, 0.0, 90.0);
        assert_eq!(
            path,
            "M 100.000 0.000 A 100.000 100.000 0 0 1 200.000 100.000 \
             L 150.000 100.000 A 50.000 50.000 0 0 0 100.000 50.000 Z"
        );
    }

    #[test]
    fn test_house_midpoint_wraps() {
        assert!(close(house_midpoint(350.0, 20.0), 5.0));
        assert!(close(house_midpoint(10.0, 40.0), 25.0));
        assert!(close(house_midpoint(300.0, 300.0), 300.0));
    }

    #[test]
    fn test_default_geometry_is_valid() {
        assert!(WheelGeometry::default().validate().is_ok());
        assert!(WheelGeometry::scaled_to(900.0, 700.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_radii() {
        let mut geometry = WheelGeometry::default();
        geometry.hub_radius = 0.0;
        assert!(matches!(geometry.validate(), Err(ChartError::InvalidGeometry(_))));

        let mut geometry = WheelGeometry::default();
        geometry.planet_radius = 220.0;
        assert!(geometry.validate().is_err());

        let mut geometry = WheelGeometry::default();
        geometry.outer_radius = f64::NAN;
        assert!(geometry.validate().is_err());

        let mut geometry = WheelGeometry::default();
        geometry.major_tick_length = 40.0;
        assert!(geometry.validate().is_err());
    }

    proptest! {
        #[test]
        fn prop_ecliptic_runs_counter_clockwise(
            asc in 0.0..360.0f64,
            ecl in 0.0..360.0f64,
            delta in 1.0..179.0f64,
        ) {
            let here = screen_angle(ecl, asc);
            prop_assert!((0.0..360.0).contains(&here));
            prop_assert!(close(screen_angle(asc, asc), 180.0));
            let ahead = screen_angle(ecl + delta, asc);
            prop_assert!((clockwise_sweep(ahead, here) - delta).abs() < 1e-6);
        }
    }
}
