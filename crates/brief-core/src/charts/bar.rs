// File: crates/brief-core/src/charts/bar.rs
// Summary: Horizontal bar chart; each bar is scaled against the series maximum.

use log::{debug, trace};

use crate::drawing::{Drawing, Primitive, TextAnchor};
use crate::format::ValueMode;
use crate::geometry::{ratio, Point, RectF};
use crate::theme::Theme;
use crate::types::{Series, WIDTH};

#[derive(Clone, Debug)]
pub struct BarOptions {
    pub width: u32,
    /// Fixed height; when `None` the height follows the row count.
    pub height: Option<u32>,
    pub mode: ValueMode,
    pub padding: u32,
    pub row_height: u32,
    pub bar_thickness: u32,
    pub label_width: u32,
    pub value_width: u32,
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: None,
            mode: ValueMode::Pct,
            padding: 16,
            row_height: 32,
            bar_thickness: 18,
            label_width: 160,
            value_width: 72,
            title: None,
            subtitle: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarRow {
    pub label: String,
    pub value: f64,
    /// `value / max`, 0.0 when the maximum is zero.
    pub ratio: f64,
    /// Bar length in pixels (`ratio * track.width`).
    pub length: f64,
    pub text: String,
    pub track: RectF,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub max: f64,
    pub height: u32,
    pub rows: Vec<BarRow>,
}

impl BarLayout {
    pub fn compute(series: &Series, opts: &BarOptions) -> Self {
        let header = super::header_height(opts.title.as_deref(), opts.subtitle.as_deref());
        let pad = opts.padding as f32;
        let track_left = pad + opts.label_width as f32;
        let track_width = (opts.width as f32 - 2.0 * pad - opts.label_width as f32 - opts.value_width as f32).max(0.0);
        let row_h = opts.row_height as f32;
        let thickness = (opts.bar_thickness as f32).min(row_h);

        let max = series.max_value().unwrap_or(0.0);
        if max == 0.0 && !series.is_empty() {
            debug!("bar chart: all {} values are zero, bars have zero length", series.len());
        }

        let rows = series
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let r = ratio(p.value, max);
                let top = header + pad + i as f32 * row_h + (row_h - thickness) / 2.0;
                BarRow {
                    label: p.label.clone(),
                    value: p.value,
                    ratio: r,
                    length: r * track_width as f64,
                    text: opts.mode.format(p.value),
                    track: RectF::from_ltwh(track_left, top, track_width, thickness),
                }
            })
            .collect();

        let natural = header + 2.0 * pad + series.len() as f32 * row_h;
        Self { max, height: opts.height.unwrap_or(natural.ceil() as u32), rows }
    }
}

pub fn render(series: &Series, opts: &BarOptions, theme: &Theme) -> Drawing {
    let layout = BarLayout::compute(series, opts);
    let mut d = super::begin(opts.width, layout.height, opts.title.as_deref(), opts.subtitle.as_deref(), theme);
    let pad = opts.padding as f32;

    for row in &layout.rows {
        let t = row.track;
        let mid = t.top + t.height / 2.0 + 4.0;
        d.push(Primitive::text(Point::new(pad, mid), row.label.clone(), 12.0, theme.axis_label, TextAnchor::Start));
        d.push(Primitive::Rect { rect: t, fill: theme.bar_track, corner_radius: 3.0 });
        if row.length > 0.0 {
            d.push(Primitive::Rect {
                rect: RectF::from_ltwh(t.left, t.top, row.length as f32, t.height),
                fill: theme.bar_fill,
                corner_radius: 3.0,
            });
        }
        d.push(Primitive::bold_text(Point::new(t.right() + 8.0, mid), row.text.clone(), 12.0, theme.title, TextAnchor::Start));
    }

    trace!("bar chart: {} rows, max={}, {} primitives", layout.rows.len(), layout.max, d.len());
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_value_fills_track() {
        let s = Series::from_pairs([("Property", 82.1), ("Drug", 76.9), ("Violent", 61.0)]);
        let l = BarLayout::compute(&s, &BarOptions::default());
        assert_eq!(l.rows[0].ratio, 1.0);
        assert_eq!(l.rows[0].length, l.rows[0].track.width as f64);
        assert!(l.rows[2].length < l.rows[1].length);
    }

    #[test]
    fn natural_height_grows_with_rows() {
        let opts = BarOptions::default();
        let two = BarLayout::compute(&Series::from_pairs([("a", 1.0), ("b", 2.0)]), &opts);
        let three = BarLayout::compute(&Series::from_pairs([("a", 1.0), ("b", 2.0), ("c", 3.0)]), &opts);
        assert_eq!(three.height - two.height, opts.row_height);
    }

    #[test]
    fn countshare_formats_grouped() {
        let opts = BarOptions { mode: ValueMode::CountShare, ..BarOptions::default() };
        let l = BarLayout::compute(&Series::from_pairs([("Released", 408300.0)]), &opts);
        assert_eq!(l.rows[0].text, "408,300");
    }
}
