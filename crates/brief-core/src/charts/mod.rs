// File: crates/brief-core/src/charts/mod.rs
// Summary: The four chart renderers plus the shared title/subtitle header band.

pub mod bar;
pub mod donut;
pub mod line;
pub mod mini_bar;

use crate::drawing::{Drawing, Primitive, TextAnchor};
use crate::geometry::Point;
use crate::theme::Theme;

/// Vertical space reserved by a title line.
pub const TITLE_BAND: f32 = 28.0;
/// Additional space reserved by a subtitle line.
pub const SUBTITLE_BAND: f32 = 20.0;

pub(crate) fn header_height(title: Option<&str>, subtitle: Option<&str>) -> f32 {
    let mut h = 0.0;
    if title.is_some() { h += TITLE_BAND; }
    if subtitle.is_some() { h += SUBTITLE_BAND; }
    h
}

/// Start a drawing with background and optional header text.
pub(crate) fn begin(
    width: u32,
    height: u32,
    title: Option<&str>,
    subtitle: Option<&str>,
    theme: &Theme,
) -> Drawing {
    let mut d = Drawing::new(width, height).with_background(theme.background);
    d.title = title.map(str::to_owned);
    let mut baseline = 0.0;
    if let Some(t) = title {
        baseline += TITLE_BAND;
        d.push(Primitive::bold_text(Point::new(8.0, baseline - 8.0), t, 16.0, theme.title, TextAnchor::Start));
    }
    if let Some(s) = subtitle {
        baseline += SUBTITLE_BAND;
        d.push(Primitive::text(Point::new(8.0, baseline - 6.0), s, 12.0, theme.subtitle, TextAnchor::Start));
    }
    d
}
