// File: crates/brief-core/src/drawing.rs
// Summary: Declarative drawing model produced by every renderer and consumed by the SVG/raster backends.

use crate::geometry::{Point, RectF};
use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Rect {
        rect: RectF,
        fill: Color,
        corner_radius: f32,
    },
    /// Ring segment. `offset` and `length` are arc lengths along the circle,
    /// measured clockwise from 12 o'clock.
    Arc {
        center: Point,
        radius: f32,
        offset: f32,
        length: f32,
        stroke: Stroke,
    },
    Text {
        pos: Point,
        content: String,
        size: f32,
        color: Color,
        anchor: TextAnchor,
        weight: FontWeight,
    },
}

impl Primitive {
    pub fn text(pos: Point, content: impl Into<String>, size: f32, color: Color, anchor: TextAnchor) -> Self {
        Primitive::Text { pos, content: content.into(), size, color, anchor, weight: FontWeight::Normal }
    }

    pub fn bold_text(pos: Point, content: impl Into<String>, size: f32, color: Color, anchor: TextAnchor) -> Self {
        Primitive::Text { pos, content: content.into(), size, color, anchor, weight: FontWeight::Bold }
    }
}

/// A complete chart drawing. Rebuilt from scratch on every render.
#[derive(Clone, Debug, PartialEq)]
pub struct Drawing {
    pub width: u32,
    pub height: u32,
    pub background: Option<Color>,
    pub title: Option<String>,
    pub primitives: Vec<Primitive>,
}

impl Drawing {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, background: None, title: None, primitives: Vec::new() }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn push(&mut self, p: Primitive) {
        self.primitives.push(p);
    }

    pub fn len(&self) -> usize { self.primitives.len() }
    pub fn is_empty(&self) -> bool { self.primitives.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}
