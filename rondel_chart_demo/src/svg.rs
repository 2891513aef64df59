// Copyright 2026 the Rondel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `rondel_chart_demo`.

use kurbo::Size;
use peniko::Brush;
use rondel_chart::Shape;

/// Renders one frame's shapes as a standalone SVG document.
pub(crate) fn shapes_to_svg(shapes: &[Shape], size: Size) -> String {
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {} {}" width="{}" height="{}">"#,
        size.width, size.height, size.width, size.height
    ));
    out.push('\n');

    for shape in shapes {
        match shape {
            Shape::Segment { path, fill } => {
                let d = path.to_svg();
                out.push_str(&format!(r#"<path d="{d}""#));
                write_paint_attr(&mut out, "fill", fill);
                out.push_str("/>\n");
            }
            Shape::Ring {
                circle,
                width,
                stroke,
            } => {
                out.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{}" fill="none""#,
                    circle.center.x, circle.center.y, circle.radius
                ));
                write_paint_attr(&mut out, "stroke", stroke);
                out.push_str(&format!(r#" stroke-width="{width}""#));
                out.push_str("/>\n");
            }
            Shape::Label {
                text,
                pos,
                fill,
                font_size,
            } => {
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle""#,
                    pos.x, pos.y, font_size
                ));
                write_paint_attr(&mut out, "fill", fill);
                out.push('>');
                out.push_str(&escape_xml(text));
                out.push_str("</text>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
