// File: crates/brief-core/src/svg.rs
// Summary: Serializes a `Drawing` into a standalone SVG document.

use std::f32::consts::PI;
use std::fmt::Write;
use std::path::Path;

use crate::drawing::{Drawing, FontWeight, Primitive, Stroke, TextAnchor};
use crate::error::RenderError;

const FONT_FAMILY: &str = "Inter, Segoe UI, Helvetica, Arial, sans-serif";

/// Number with at most two decimals, trailing zeros trimmed.
pub fn fmt_num(v: f32) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn stroke_attrs(s: &Stroke) -> String {
    format!(" stroke=\"{}\" stroke-width=\"{}\"", s.color.to_css(), fmt_num(s.width))
}

pub fn to_svg(drawing: &Drawing) -> String {
    let (w, h) = (drawing.width, drawing.height);
    let mut svg = String::new();
    // `write!` into a String cannot fail.
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"{FONT_FAMILY}\">"
    );
    if let Some(title) = &drawing.title {
        let _ = write!(svg, "<title>{}</title>", escape(title));
    }
    if let Some(bg) = drawing.background {
        let _ = write!(svg, "<rect width=\"{w}\" height=\"{h}\" fill=\"{}\"/>", bg.to_css());
    }
    for p in &drawing.primitives {
        write_primitive(&mut svg, p);
    }
    svg.push_str("</svg>");
    svg
}

fn write_primitive(svg: &mut String, p: &Primitive) {
    match p {
        Primitive::Line { from, to, stroke } => {
            let _ = write!(
                svg,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
                fmt_num(from.x), fmt_num(from.y), fmt_num(to.x), fmt_num(to.y), stroke_attrs(stroke)
            );
        }
        Primitive::Polyline { points, stroke } => {
            let pts = points
                .iter()
                .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(
                svg,
                "<polyline points=\"{pts}\" fill=\"none\"{} stroke-linejoin=\"round\" stroke-linecap=\"round\"/>",
                stroke_attrs(stroke)
            );
        }
        Primitive::Circle { center, radius, fill, stroke } => {
            let fill = fill.map(|c| c.to_css()).unwrap_or_else(|| "none".to_string());
            let stroke = stroke.as_ref().map(stroke_attrs).unwrap_or_default();
            let _ = write!(
                svg,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\"{stroke}/>",
                fmt_num(center.x), fmt_num(center.y), fmt_num(*radius)
            );
        }
        Primitive::Rect { rect, fill, corner_radius } => {
            let _ = write!(
                svg,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\"/>",
                fmt_num(rect.left), fmt_num(rect.top), fmt_num(rect.width), fmt_num(rect.height),
                fmt_num(*corner_radius), fill.to_css()
            );
        }
        Primitive::Arc { center, radius, offset, length, stroke } => {
            let circumference = 2.0 * PI * radius;
            let rest = (circumference - length).max(0.0);
            let (cx, cy) = (fmt_num(center.x), fmt_num(center.y));
            let _ = write!(
                svg,
                "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{}\" fill=\"none\"{} stroke-dasharray=\"{} {}\" stroke-dashoffset=\"{}\" transform=\"rotate(-90 {cx} {cy})\"/>",
                fmt_num(*radius), stroke_attrs(stroke), fmt_num(*length), fmt_num(rest), fmt_num(-offset)
            );
        }
        Primitive::Text { pos, content, size, color, anchor, weight } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let weight = match weight {
                FontWeight::Normal => "",
                FontWeight::Bold => " font-weight=\"600\"",
            };
            let _ = write!(
                svg,
                "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{anchor}\"{weight}>{}</text>",
                fmt_num(pos.x), fmt_num(pos.y), fmt_num(*size), color.to_css(), escape(content)
            );
        }
    }
}

/// Write the SVG document for `drawing` to `path`, creating parent directories.
pub fn write_svg(drawing: &Drawing, path: impl AsRef<Path>) -> Result<(), RenderError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| RenderError::io(parent, e))?;
    }
    std::fs::write(path, to_svg(drawing)).map_err(|e| RenderError::io(path, e))
}
