// File: crates/brief-core/src/charts/line.rs
// Summary: Line chart over an ordinal series: rounded y-domain, fixed ticks, evenly spaced points.

use log::{debug, trace};

use crate::axis::{self, Tick};
use crate::drawing::{Drawing, Primitive, Stroke, TextAnchor};
use crate::format::to_fixed;
use crate::geometry::{Point, RectF};
use crate::scale::{nice_ceil, LinearScale};
use crate::theme::Theme;
use crate::types::{Series, HEIGHT, WIDTH};

/// Y-domain maxima are rounded up to a multiple of this step.
pub const Y_STEP: f64 = 5.0;
/// Smallest y-domain maximum, so small datasets keep a full axis.
pub const Y_FLOOR: f64 = 80.0;

#[derive(Clone, Debug)]
pub struct LineOptions {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub tick_suffix: String,
    pub show_values: bool,
    pub marker_radius: f32,
    pub stroke_width: f32,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: 40,
            title: None,
            subtitle: None,
            tick_suffix: "%".to_string(),
            show_values: true,
            marker_radius: 4.0,
            stroke_width: 2.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    pub y_max: f64,
    pub ticks: Vec<Tick>,
    /// Horizontal distance between neighbouring points.
    pub spacing: f64,
    /// `(x, y)` pixel positions, kept in f64 so distinct values stay distinct.
    pub points: Vec<(f64, f64)>,
    pub plot: RectF,
}

impl LineLayout {
    pub fn compute(series: &Series, opts: &LineOptions) -> Self {
        let header = super::header_height(opts.title.as_deref(), opts.subtitle.as_deref()) as f64;
        let pad = opts.padding as f64;
        let left = pad;
        let right = (opts.width as f64 - pad).max(left);
        let top = header + pad;
        let bottom = (opts.height as f64 - pad).max(top);

        let max = series.max_value().unwrap_or(0.0);
        let y_max = nice_ceil(max, Y_STEP, Y_FLOOR);
        let ticks = axis::ticks_up_to(y_max, &opts.tick_suffix);

        if series.len() == 1 {
            debug!("line chart: single point, placing it at x={left}");
        }
        let spacing = axis::spacing(left, right, series.len());
        let xs = axis::even_positions(left, right, series.len());
        let y = Self::scale(y_max, top, bottom);
        let points = xs
            .into_iter()
            .zip(series.values())
            .map(|(x, v)| (x, y.map(v)))
            .collect();

        Self {
            y_max,
            ticks,
            spacing,
            points,
            plot: RectF::from_ltwh(left as f32, top as f32, (right - left) as f32, (bottom - top) as f32),
        }
    }

    /// Value-to-pixel scale for the y axis (inverted: larger values sit higher).
    pub fn y_scale(&self) -> LinearScale {
        Self::scale(self.y_max, self.plot.top as f64, self.plot.bottom() as f64)
    }

    fn scale(y_max: f64, top: f64, bottom: f64) -> LinearScale {
        LinearScale::new((0.0, y_max), (bottom, top))
    }
}

pub fn render(series: &Series, opts: &LineOptions, theme: &Theme) -> Drawing {
    let layout = LineLayout::compute(series, opts);
    let mut d = super::begin(opts.width, opts.height, opts.title.as_deref(), opts.subtitle.as_deref(), theme);
    let plot = layout.plot;
    let y = layout.y_scale();

    // Grid and tick labels
    for tick in &layout.ticks {
        let py = y.map(tick.value) as f32;
        d.push(Primitive::Line {
            from: Point::new(plot.left, py),
            to: Point::new(plot.right(), py),
            stroke: Stroke::new(theme.grid, 1.0),
        });
        d.push(Primitive::text(Point::new(plot.left - 8.0, py + 4.0), tick.label.clone(), 11.0, theme.axis_label, TextAnchor::End));
    }

    // X axis
    d.push(Primitive::Line {
        from: Point::new(plot.left, plot.bottom()),
        to: Point::new(plot.right(), plot.bottom()),
        stroke: Stroke::new(theme.axis_line, 1.0),
    });

    let points: Vec<Point> = layout.points.iter().map(|&(x, y)| Point::new(x as f32, y as f32)).collect();
    if points.len() >= 2 {
        d.push(Primitive::Polyline {
            points: points.clone(),
            stroke: Stroke::new(theme.line_stroke, opts.stroke_width),
        });
    }

    for (p, dp) in points.iter().zip(series.iter()) {
        d.push(Primitive::Circle {
            center: *p,
            radius: opts.marker_radius,
            fill: Some(theme.marker_fill),
            stroke: Some(Stroke::new(theme.background, 2.0)),
        });
        if opts.show_values {
            let text = format!("{}{}", to_fixed(dp.value, 1), opts.tick_suffix);
            d.push(Primitive::text(Point::new(p.x, p.y - 10.0), text, 11.0, theme.axis_label, TextAnchor::Middle));
        }
        d.push(Primitive::text(Point::new(p.x, plot.bottom() + 18.0), dp.label.clone(), 11.0, theme.axis_label, TextAnchor::Middle));
    }

    trace!("line chart: {} points, y_max={}, {} primitives", layout.points.len(), layout.y_max, d.len());
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_floor_domain_and_no_points() {
        let l = LineLayout::compute(&Series::new(), &LineOptions::default());
        assert_eq!(l.y_max, Y_FLOOR);
        assert!(l.points.is_empty());
        assert_eq!(l.ticks.len(), 5);
    }

    #[test]
    fn value_labels_round_ties_up() {
        let d = render(&Series::from_pairs([("1", 12.25), ("2", 0.25)]), &LineOptions::default(), &Theme::light());
        let texts = d.texts().collect::<Vec<_>>();
        assert!(texts.contains(&"12.3%"));
        assert!(texts.contains(&"0.3%"));
    }

    #[test]
    fn title_pushes_plot_down() {
        let opts = LineOptions { title: Some("Rearrest".into()), subtitle: Some("34 states".into()), ..LineOptions::default() };
        let l = LineLayout::compute(&Series::from_pairs([("1", 10.0)]), &opts);
        assert_eq!(l.plot.top, 40.0 + super::super::TITLE_BAND + super::super::SUBTITLE_BAND);
    }
}
