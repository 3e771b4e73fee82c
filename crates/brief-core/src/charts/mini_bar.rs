// File: crates/brief-core/src/charts/mini_bar.rs
// Summary: Compact single-color vertical bars for secondary displays.

use log::trace;

use crate::drawing::{Drawing, Primitive, TextAnchor};
use crate::geometry::{clamp, ratio, Point, RectF};
use crate::theme::Theme;
use crate::types::{Insets, Series};

#[derive(Clone, Debug)]
pub struct MiniBarOptions {
    pub width: u32,
    pub height: u32,
    pub gap: f32,
    pub padding: Insets,
    pub show_labels: bool,
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

impl Default for MiniBarOptions {
    fn default() -> Self {
        Self {
            width: 240,
            height: 80,
            gap: 6.0,
            padding: Insets::uniform(8),
            show_labels: false,
            title: None,
            subtitle: None,
        }
    }
}

const LABEL_BAND: f32 = 14.0;

#[derive(Clone, Debug, PartialEq)]
pub struct MiniBar {
    pub label: String,
    /// `value / max` clamped to [0, 1].
    pub ratio: f64,
    pub rect: RectF,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MiniBarLayout {
    pub max: f64,
    pub plot: RectF,
    pub bars: Vec<MiniBar>,
}

impl MiniBarLayout {
    pub fn compute(series: &Series, opts: &MiniBarOptions) -> Self {
        let header = super::header_height(opts.title.as_deref(), opts.subtitle.as_deref());
        let labels = if opts.show_labels { LABEL_BAND } else { 0.0 };
        let pad = opts.padding;
        let plot_w = (opts.width as f32 - pad.hsum() as f32).max(0.0);
        let plot_h = (opts.height as f32 - header - pad.vsum() as f32 - labels).max(0.0);
        let plot = RectF::from_ltwh(pad.left as f32, header + pad.top as f32, plot_w, plot_h);

        let n = series.len();
        let gaps = opts.gap * n.saturating_sub(1) as f32;
        let bar_w = if n == 0 { 0.0 } else { ((plot_w - gaps) / n as f32).max(0.0) };
        let max = series.max_value().unwrap_or(0.0);

        let bars = series
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let r = clamp(ratio(p.value, max), 0.0, 1.0);
                let h = r as f32 * plot_h;
                let left = plot.left + i as f32 * (bar_w + opts.gap);
                MiniBar { label: p.label.clone(), ratio: r, rect: RectF::from_ltwh(left, plot.bottom() - h, bar_w, h) }
            })
            .collect();

        Self { max, plot, bars }
    }
}

pub fn render(series: &Series, opts: &MiniBarOptions, theme: &Theme) -> Drawing {
    let layout = MiniBarLayout::compute(series, opts);
    let mut d = super::begin(opts.width, opts.height, opts.title.as_deref(), opts.subtitle.as_deref(), theme);

    for bar in &layout.bars {
        if bar.rect.height > 0.0 {
            d.push(Primitive::Rect { rect: bar.rect, fill: theme.mini_bar_fill, corner_radius: 2.0 });
        }
        if opts.show_labels {
            let x = bar.rect.left + bar.rect.width / 2.0;
            d.push(Primitive::text(Point::new(x, layout.plot.bottom() + 11.0), bar.label.clone(), 9.0, theme.axis_label, TextAnchor::Middle));
        }
    }

    trace!("mini bar chart: {} bars, max={}", layout.bars.len(), layout.max);
    d
}
