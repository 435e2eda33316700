//! SVG serialization of a [`Surface`].
//!
//! The output is plain SVG 1.1 written directly to the sink, one element per
//! accumulated shape, in insertion order. Numeric attributes use a stable
//! short decimal form so that two runs with the same seed produce
//! byte-identical files.

use std::io::{self, Write};

use crate::foundation::core::Point;
use crate::surface::model::{RectStyle, Shape, Surface, TextAnchor, TextStyle};

/// The SVG format writer.
#[derive(Debug)]
pub struct Svg<W: Write> {
    /// Writer stream.
    writer: W,
}

impl<W: Write> Svg<W> {
    /// Serialize the surface as an SVG document into `writer`.
    pub fn write(surface: &Surface, writer: W) -> io::Result<()> {
        let mut svg = Self { writer };
        svg.begin(surface)?;
        for shape in surface.shapes() {
            match shape {
                Shape::Polygon {
                    points,
                    fill,
                    stroke,
                    fill_opacity,
                    stroke_opacity,
                } => svg.draw_polygon(points, fill, stroke, *fill_opacity, *stroke_opacity)?,
                Shape::Rect {
                    insert,
                    width,
                    height,
                    style,
                } => svg.draw_rect(*insert, *width, *height, style)?,
                Shape::Text {
                    content,
                    insert,
                    style,
                } => svg.draw_text(content, *insert, style)?,
                Shape::Image {
                    href,
                    insert,
                    width,
                    height,
                } => svg.draw_image(href, *insert, *width, *height)?,
            }
        }
        svg.end()
    }

    fn begin(&mut self, surface: &Surface) -> io::Result<()> {
        let canvas = surface.canvas();
        writeln!(
            &mut self.writer,
            r#"<svg width="{}px" height="{}px" xmlns="http://www.w3.org/2000/svg">"#,
            num(canvas.width),
            num(canvas.height),
        )
    }

    fn end(&mut self) -> io::Result<()> {
        writeln!(&mut self.writer, "</svg>")
    }

    fn draw_polygon(
        &mut self,
        points: &[Point],
        fill: &str,
        stroke: &str,
        fill_opacity: f64,
        stroke_opacity: f64,
    ) -> io::Result<()> {
        let mut attr = String::new();
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                attr.push(' ');
            }
            attr.push_str(&num(p.x));
            attr.push(',');
            attr.push_str(&num(p.y));
        }
        writeln!(
            &mut self.writer,
            r#"<polygon points="{}" fill="{}" stroke="{}" fill-opacity="{}" stroke-opacity="{}"/>"#,
            attr,
            fill,
            stroke,
            num(fill_opacity),
            num(stroke_opacity),
        )
    }

    fn draw_rect(
        &mut self,
        insert: Point,
        width: f64,
        height: f64,
        style: &RectStyle,
    ) -> io::Result<()> {
        writeln!(
            &mut self.writer,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}" fill="{}" stroke="{}" stroke-width="{}" fill-opacity="{}" stroke-opacity="{}"/>"#,
            num(insert.x),
            num(insert.y),
            num(width),
            num(height),
            num(style.corner_radius),
            num(style.corner_radius),
            style.fill,
            style.stroke.as_deref().unwrap_or("none"),
            num(style.stroke_width),
            num(style.opacity),
            num(style.opacity),
        )
    }

    fn draw_text(&mut self, content: &str, insert: Point, style: &TextStyle) -> io::Result<()> {
        let anchor = match style.anchor {
            TextAnchor::Start => "start",
            TextAnchor::End => "end",
        };
        writeln!(
            &mut self.writer,
            r#"<text x="{}" y="{}" font-size="{}px" font-family="{}" fill="{}" text-anchor="{}">{}</text>"#,
            num(insert.x),
            num(insert.y),
            num(style.font_size),
            style.font_family,
            style.fill,
            anchor,
            escape_text(content),
        )
    }

    fn draw_image(&mut self, href: &str, insert: Point, width: f64, height: f64) -> io::Result<()> {
        writeln!(
            &mut self.writer,
            r#"<image href="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
            escape_text(href),
            num(insert.x),
            num(insert.y),
            num(width),
            num(height),
        )
    }
}

/// Stable short decimal form: at most 3 fractional digits, no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Escape characters with meaning in XML text and attribute content.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/surface/svg.rs"]
mod tests;
