//! Standalone SVG serialization of a [`WheelDrawing`].

use crate::rendering::primitives::{Color, Label, Segment, Stroke};
use crate::rendering::spec::WheelDrawing;
use std::fmt::{self, Write};

const SIGN_GLYPH_SIZE: f64 = 14.0;
const HOUSE_NUMBER_SIZE: f64 = 10.0;
const CUSP_DEGREE_SIZE: f64 = 7.0;
const BODY_GLYPH_SIZE: f64 = 13.0;
const BODY_DEGREE_SIZE: f64 = 8.0;
const RETROGRADE_SIZE: f64 = 8.0;
const AXIS_LABEL_SIZE: f64 = 9.0;
/// Retrograde marker offset from the body glyph
const RETROGRADE_OFFSET: (f64, f64) = (8.0, -7.0);

/// Render a drawing as an SVG document.
pub fn render_svg(drawing: &WheelDrawing) -> Result<String, fmt::Error> {
    let mut svg = String::new();
    write_svg(&mut svg, drawing)?;
    Ok(svg)
}

/// Write a drawing as an SVG document into any [`fmt::Write`] sink.
pub fn write_svg<W: Write>(out: &mut W, drawing: &WheelDrawing) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.2} {:.2}">"#,
        drawing.width, drawing.height, drawing.width, drawing.height
    )?;
    writeln!(
        out,
        r#"  <rect x="0" y="0" width="{:.2}" height="{:.2}" fill="{}"/>"#,
        drawing.width, drawing.height, drawing.background
    )?;

    writeln!(out, r#"  <g class="signs">"#)?;
    for sign in &drawing.signs {
        writeln!(
            out,
            r#"    <path d="{}" fill="{}"{}/>"#,
            sign.path,
            sign.fill,
            StrokeAttrs(&sign.stroke)
        )?;
        write_label(out, &sign.glyph, SIGN_GLYPH_SIZE, drawing.sign_glyph_color, "")?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, r#"  <g class="rings">"#)?;
    for ring in &drawing.rings {
        let fill = ring.fill.map_or_else(|| "none".to_string(), |c| c.to_string());
        writeln!(
            out,
            r#"    <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"{}/>"#,
            drawing.center.x,
            drawing.center.y,
            ring.radius,
            fill,
            StrokeAttrs(&ring.stroke)
        )?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, r#"  <g class="ticks" stroke="{}">"#, drawing.tick_color)?;
    for tick in &drawing.ticks {
        let width = if tick.major {
            drawing.major_tick_width
        } else {
            drawing.minor_tick_width
        };
        write_segment(out, &tick.line, &format!(r#" stroke-width="{}""#, width))?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, r#"  <g class="houses">"#)?;
    for cusp in &drawing.cusps {
        write_segment(out, &cusp.line, &StrokeAttrs(&cusp.stroke).to_string())?;
    }
    for cusp in &drawing.cusps {
        write_label(out, &cusp.number_label, HOUSE_NUMBER_SIZE, drawing.house_label_color, "")?;
        write_label(out, &cusp.degree_label, CUSP_DEGREE_SIZE, drawing.cusp_label_color, "")?;
    }
    writeln!(out, "  </g>")?;

    writeln!(
        out,
        r#"  <g class="aspects" opacity="{}">"#,
        drawing.aspect_opacity
    )?;
    for aspect in &drawing.aspects {
        write_segment(out, &aspect.line, &StrokeAttrs(&aspect.stroke).to_string())?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, r#"  <g class="bodies">"#)?;
    for body in &drawing.bodies {
        write_label(
            out,
            &body.glyph,
            BODY_GLYPH_SIZE,
            drawing.body_color,
            r#" font-weight="bold""#,
        )?;
        if body.is_retrograde {
            writeln!(
                out,
                r#"    <text x="{:.2}" y="{:.2}" font-size="{}" fill="{}">℞</text>"#,
                body.glyph.position.x + RETROGRADE_OFFSET.0,
                body.glyph.position.y + RETROGRADE_OFFSET.1,
                RETROGRADE_SIZE,
                drawing.retrograde_color
            )?;
        }
        write_label(out, &body.degree_label, BODY_DEGREE_SIZE, drawing.body_label_color, "")?;
    }
    writeln!(out, "  </g>")?;

    writeln!(out, r#"  <g class="axes">"#)?;
    for axis in &drawing.axes {
        write_segment(
            out,
            &axis.line,
            &StrokeAttrs(&Stroke::solid(axis.color, axis.width)).to_string(),
        )?;
        for label in &axis.labels {
            write_label(out, label, AXIS_LABEL_SIZE, axis.color, "")?;
        }
    }
    writeln!(out, "  </g>")?;

    writeln!(out, "</svg>")
}

fn write_segment<W: Write>(out: &mut W, segment: &Segment, attrs: &str) -> fmt::Result {
    writeln!(
        out,
        r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"{}/>"#,
        segment.from.x, segment.from.y, segment.to.x, segment.to.y, attrs
    )
}

fn write_label<W: Write>(
    out: &mut W,
    label: &Label,
    size: f64,
    color: Color,
    extra: &str,
) -> fmt::Result {
    writeln!(
        out,
        r#"    <text x="{:.2}" y="{:.2}" text-anchor="middle" dominant-baseline="central" font-size="{}" fill="{}"{}>{}</text>"#,
        label.position.x,
        label.position.y,
        size,
        color,
        extra,
        Escaped(&label.text)
    )
}

/// ` stroke=".." stroke-width=".."` plus dash and opacity when present
struct StrokeAttrs<'a>(&'a Stroke);

impl fmt::Display for StrokeAttrs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stroke = self.0;
        write!(
            f,
            r#" stroke="{}" stroke-width="{}""#,
            stroke.color, stroke.width
        )?;
        if let Some(dash) = &stroke.dash_array {
            write!(f, r#" stroke-dasharray="{}""#, Escaped(dash))?;
        }
        if stroke.color.a < 255 {
            write!(f, r#" stroke-opacity="{:.3}""#, stroke.color.opacity())?;
        }
        Ok(())
    }
}

/// XML text escaping
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaped() {
        assert_eq!(Escaped("a<b & \"c\"").to_string(), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_stroke_attrs() {
        let mut stroke = Stroke::solid(Color::BLACK, 0.8);
        assert_eq!(
            StrokeAttrs(&stroke).to_string(),
            r##" stroke="#000000" stroke-width="0.8""##
        );
        stroke.dash_array = Some("5 3".to_string());
        assert!(StrokeAttrs(&stroke)
            .to_string()
            .ends_with(r#"stroke-dasharray="5 3""#));
    }
}
