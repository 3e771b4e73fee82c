// File: crates/brief-core/src/charts/donut.rs
// Summary: Donut chart; percentages partition the ring circumference in series order.

use std::f64::consts::PI;

use log::{debug, trace};

use crate::drawing::{Drawing, Primitive, Stroke, TextAnchor};
use crate::format::format_pct;
use crate::geometry::{Point, RectF};
use crate::theme::{shade_for, Theme};
use crate::types::Series;

#[derive(Clone, Debug)]
pub struct DonutOptions {
    /// Side of the square holding the ring.
    pub size: u32,
    pub radius: f32,
    pub stroke_width: f32,
    /// Rescale percentages to sum to 100 so the ring always closes.
    pub normalize: bool,
    pub show_legend: bool,
    pub legend_width: u32,
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

impl Default for DonutOptions {
    fn default() -> Self {
        Self {
            size: 200,
            radius: 70.0,
            stroke_width: 24.0,
            normalize: false,
            show_legend: true,
            legend_width: 220,
            title: None,
            subtitle: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub label: String,
    /// Percentage actually drawn (after normalization, if enabled).
    pub pct: f64,
    /// Arc length before this segment starts.
    pub offset: f64,
    pub length: f64,
    pub shade: f32,
}

impl Segment {
    pub fn end(&self) -> f64 { self.offset + self.length }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DonutLayout {
    pub circumference: f64,
    pub segments: Vec<Segment>,
}

impl DonutLayout {
    pub fn compute(series: &Series, opts: &DonutOptions) -> Self {
        let circumference = 2.0 * PI * opts.radius as f64;
        let total = series.sum();
        if !series.is_empty() && (total - 100.0).abs() > 0.5 {
            debug!("donut chart: percentages sum to {total:.2}, normalize={}", opts.normalize);
        }
        let factor = if opts.normalize && total > 0.0 { 100.0 / total } else { 1.0 };

        let (segments, _) = series.iter().enumerate().fold(
            (Vec::with_capacity(series.len()), 0.0),
            |(mut acc, offset), (i, p)| {
                let pct = p.value * factor;
                let length = pct / 100.0 * circumference;
                acc.push(Segment { label: p.label.clone(), pct, offset, length, shade: shade_for(i) });
                (acc, offset + length)
            },
        );

        Self { circumference, segments }
    }

    /// Sum of all segment lengths.
    pub fn covered(&self) -> f64 {
        self.segments.iter().map(|s| s.length).sum()
    }
}

pub fn render(series: &Series, opts: &DonutOptions, theme: &Theme) -> Drawing {
    let layout = DonutLayout::compute(series, opts);
    let header = super::header_height(opts.title.as_deref(), opts.subtitle.as_deref());
    let legend = if opts.show_legend { opts.legend_width } else { 0 };
    let width = opts.size + legend;
    let height = (header + opts.size as f32).ceil() as u32;
    let mut d = super::begin(width, height, opts.title.as_deref(), opts.subtitle.as_deref(), theme);

    let half = opts.size as f32 / 2.0;
    let center = Point::new(half, header + half);
    d.push(Primitive::Circle {
        center,
        radius: opts.radius,
        fill: None,
        stroke: Some(Stroke::new(theme.donut_track, opts.stroke_width)),
    });

    for seg in &layout.segments {
        d.push(Primitive::Arc {
            center,
            radius: opts.radius,
            offset: seg.offset as f32,
            length: seg.length as f32,
            stroke: Stroke::new(theme.donut_base.with_alpha(seg.shade), opts.stroke_width),
        });
    }

    if opts.show_legend {
        let x = opts.size as f32 + 8.0;
        for (i, seg) in layout.segments.iter().enumerate() {
            let y = header + 24.0 + i as f32 * 22.0;
            d.push(Primitive::Rect {
                rect: RectF::from_ltwh(x, y - 10.0, 12.0, 12.0),
                fill: theme.donut_base.with_alpha(seg.shade),
                corner_radius: 2.0,
            });
            let text = format!("{} {}", seg.label, format_pct(seg.pct));
            d.push(Primitive::text(Point::new(x + 18.0, y), text, 12.0, theme.axis_label, TextAnchor::Start));
        }
    }

    trace!("donut chart: {} segments, covered {:.2}/{:.2}", layout.segments.len(), layout.covered(), layout.circumference);
    d
}
