use crate::aspects::detect_aspects;
use crate::chart::NatalChart;
use crate::error::ChartError;
use crate::position::normalize_degrees;
use crate::rendering::geometry::{annular_sector_path, house_midpoint, screen_angle, WheelGeometry};
use crate::rendering::primitives::{Color, Label, Segment};
use crate::rendering::spec::{
    AspectLine, AxisKind, AxisLine, BodyGlyph, CuspLine, RingCircle, SignSegment, Tick,
    WheelDrawing,
};
use crate::rendering::visual_config::VisualConfig;
use crate::western::ZodiacSign;

/// Project a chart onto the default wheel styling.
///
/// Fails with [`ChartError::InvalidGeometry`] when the radii are not
/// positive and strictly nested.
pub fn project_wheel(chart: &NatalChart, geometry: &WheelGeometry) -> Result<WheelDrawing, ChartError> {
    Ok(WheelProjector::new(*geometry)?.project(chart))
}

/// Converts a computed chart into wheel drawing elements
pub struct WheelProjector {
    geometry: WheelGeometry,
    visual_config: VisualConfig,
}

impl WheelProjector {
    pub fn new(geometry: WheelGeometry) -> Result<Self, ChartError> {
        Self::with_config(geometry, VisualConfig::default())
    }

    pub fn with_config(
        geometry: WheelGeometry,
        visual_config: VisualConfig,
    ) -> Result<Self, ChartError> {
        geometry.validate()?;
        Ok(Self {
            geometry,
            visual_config,
        })
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn project(&self, chart: &NatalChart) -> WheelDrawing {
        let asc = chart.ascendant.degrees();
        let config = &self.visual_config;

        WheelDrawing {
            width: self.geometry.width,
            height: self.geometry.height,
            center: self.geometry.center,
            background: config.background_color,
            signs: self.sign_segments(asc),
            rings: self.rings(),
            ticks: self.ticks(asc),
            tick_color: config.tick_color,
            major_tick_width: config.major_tick_width,
            minor_tick_width: config.minor_tick_width,
            cusps: self.cusp_lines(chart, asc),
            house_label_color: config.house_label_color,
            cusp_label_color: config.cusp_label_color,
            aspects: self.aspect_lines(chart, asc),
            aspect_opacity: config.aspect_opacity,
            bodies: self.body_glyphs(chart, asc),
            body_color: config.body_color,
            body_label_color: config.body_label_color,
            retrograde_color: config.retrograde_color,
            axes: self.axes(chart, asc),
            sign_glyph_color: config.sign_glyph_color,
        }
    }

    fn sign_segments(&self, asc: f64) -> Vec<SignSegment> {
        let g = &self.geometry;
        let glyph_radius = (g.outer_radius + g.zodiac_radius) / 2.0;

        ZodiacSign::ALL
            .iter()
            .map(|&sign| {
                let start_ecl = sign.start_degree();
                // Ecliptic order runs counter-clockwise on screen, so the
                // clockwise sweep starts at the sign's end
                let start = screen_angle(start_ecl + 30.0, asc);
                let end = screen_angle(start_ecl, asc);
                let middle = screen_angle(start_ecl + 15.0, asc);

                SignSegment {
                    sign,
                    path: annular_sector_path(g.center, g.zodiac_radius, g.outer_radius, start, end),
                    start_angle: start,
                    end_angle: end,
                    fill: self.visual_config.element_color(sign.element()),
                    stroke: self.visual_config.sign_stroke.clone(),
                    glyph: Label {
                        position: g.point_at(middle, glyph_radius),
                        text: sign.glyph().to_string(),
                    },
                }
            })
            .collect()
    }

    fn rings(&self) -> Vec<RingCircle> {
        let g = &self.geometry;
        let c = &self.visual_config;
        vec![
            RingCircle {
                radius: g.outer_radius,
                fill: None,
                stroke: c.outer_ring_stroke.clone(),
            },
            RingCircle {
                radius: g.zodiac_radius,
                fill: None,
                stroke: c.zodiac_ring_stroke.clone(),
            },
            RingCircle {
                radius: g.house_radius,
                fill: None,
                stroke: c.house_ring_stroke.clone(),
            },
            RingCircle {
                radius: g.aspect_radius,
                fill: Some(c.aspect_ring_fill),
                stroke: c.aspect_ring_stroke.clone(),
            },
            RingCircle {
                radius: g.hub_radius,
                fill: Some(c.hub_fill),
                stroke: c.hub_stroke.clone(),
            },
        ]
    }

    fn ticks(&self, asc: f64) -> Vec<Tick> {
        let g = &self.geometry;
        (0..360u16)
            .map(|degree| {
                let angle = screen_angle(degree as f64, asc);
                let major = degree % 5 == 0;
                let length = if major {
                    g.major_tick_length
                } else {
                    g.minor_tick_length
                };
                Tick {
                    degree,
                    major,
                    line: Segment {
                        from: g.point_at(angle, g.outer_radius),
                        to: g.point_at(angle, g.outer_radius - length),
                    },
                }
            })
            .collect()
    }

    fn cusp_lines(&self, chart: &NatalChart, asc: f64) -> Vec<CuspLine> {
        let g = &self.geometry;
        let number_radius = (g.house_radius + g.aspect_radius) / 2.0;

        chart
            .houses
            .iter()
            .enumerate()
            .map(|(index, cusp)| {
                let degrees = cusp.position.degrees();
                let next = chart.houses[(index + 1) % 12].position.degrees();
                let angle = screen_angle(degrees, asc);
                let middle = screen_angle(house_midpoint(degrees, next), asc);
                let angular = cusp.is_angular();

                CuspLine {
                    house: cusp.house,
                    angular,
                    screen_angle: angle,
                    line: Segment {
                        from: g.point_at(angle, g.hub_radius),
                        to: g.point_at(angle, g.zodiac_radius),
                    },
                    stroke: if angular {
                        self.visual_config.angular_cusp_stroke.clone()
                    } else {
                        self.visual_config.cusp_stroke.clone()
                    },
                    number_label: Label {
                        position: g.point_at(middle, number_radius),
                        text: cusp.house.to_string(),
                    },
                    degree_label: Label {
                        position: g.point_at(angle, g.zodiac_radius - g.cusp_label_inset),
                        text: cusp.position.sign_position().degree.to_string(),
                    },
                }
            })
            .collect()
    }

    fn body_glyphs(&self, chart: &NatalChart, asc: f64) -> Vec<BodyGlyph> {
        let g = &self.geometry;
        chart
            .bodies
            .iter()
            .map(|placement| {
                let angle = screen_angle(placement.position.degrees(), asc);
                BodyGlyph {
                    body: placement.body,
                    screen_angle: angle,
                    glyph: Label {
                        position: g.point_at(angle, g.planet_radius),
                        text: placement.body.glyph().to_string(),
                    },
                    degree_label: Label {
                        position: g.point_at(angle, g.planet_radius + g.body_label_offset),
                        text: format!("{}°", placement.sign_position().degree),
                    },
                    is_retrograde: placement.is_retrograde,
                }
            })
            .collect()
    }

    fn aspect_lines(&self, chart: &NatalChart, asc: f64) -> Vec<AspectLine> {
        let g = &self.geometry;
        detect_aspects(&chart.bodies)
            .into_iter()
            .filter_map(|aspect| {
                let a = chart.body(aspect.body_a)?;
                let b = chart.body(aspect.body_b)?;
                Some(AspectLine {
                    body_a: aspect.body_a,
                    body_b: aspect.body_b,
                    kind: aspect.kind,
                    line: Segment {
                        from: g.point_at(screen_angle(a.position.degrees(), asc), g.aspect_radius),
                        to: g.point_at(screen_angle(b.position.degrees(), asc), g.aspect_radius),
                    },
                    stroke: self.visual_config.aspect_stroke(aspect.kind),
                })
            })
            .collect()
    }

    fn axes(&self, chart: &NatalChart, asc: f64) -> Vec<AxisLine> {
        let c = &self.visual_config;
        vec![
            self.axis(
                AxisKind::AscendantDescendant,
                asc,
                asc,
                ["Asc", "Dsc"],
                c.ascendant_axis_color,
            ),
            self.axis(
                AxisKind::MidheavenImumCoeli,
                chart.midheaven.degrees(),
                asc,
                ["MC", "IC"],
                c.midheaven_axis_color,
            ),
        ]
    }

    fn axis(
        &self,
        kind: AxisKind,
        degrees: f64,
        asc: f64,
        names: [&str; 2],
        color: Color,
    ) -> AxisLine {
        let g = &self.geometry;
        let near = screen_angle(degrees, asc);
        let far = screen_angle(normalize_degrees(degrees + 180.0), asc);
        let label_radius = g.zodiac_radius - g.axis_label_inset;

        AxisLine {
            kind,
            line: Segment {
                from: g.point_at(near, g.zodiac_radius),
                to: g.point_at(far, g.zodiac_radius),
            },
            color,
            width: self.visual_config.axis_width,
            labels: [
                Label {
                    position: g.point_at(near, label_radius),
                    text: names[0].to_string(),
                },
                Label {
                    position: g.point_at(far, label_radius),
                    text: names[1].to_string(),
                },
            ],
        }
    }
}
