// File: crates/brief-core/tests/properties.rs
// Purpose: Numeric contracts of the renderers: scaling, ticks, arc partitioning, degenerate inputs.

use brief_core::charts::{bar, donut, line, mini_bar};
use brief_core::{BarLayout, BarOptions, DonutLayout, DonutOptions, LineLayout, LineOptions, MiniBarLayout, MiniBarOptions, Series, Theme, ValueMode};

fn rearrest_curve() -> Series {
    Series::from_pairs([("1", 36.8), ("2", 52.9), ("3", 61.5), ("4", 67.0), ("5", 70.8)])
}

#[test]
fn line_larger_value_never_sits_lower() {
    let s = Series::from_pairs([("a", 12.0), ("b", 83.0), ("c", 40.5), ("d", 40.5), ("e", 0.0), ("f", 79.9)]);
    let l = LineLayout::compute(&s, &LineOptions::default());
    for (i, a) in s.iter().enumerate() {
        for (j, b) in s.iter().enumerate() {
            if a.value > b.value {
                assert!(l.points[i].1 < l.points[j].1, "{} should sit above {}", a.label, b.label);
            } else if a.value == b.value {
                assert_eq!(l.points[i].1, l.points[j].1);
            }
        }
    }
}

#[test]
fn line_nearly_equal_values_stay_ordered() {
    let s = Series::from_pairs([("a", 70.8), ("b", 70.80000001)]);
    let l = LineLayout::compute(&s, &LineOptions::default());
    assert!(l.points[1].1 < l.points[0].1);
}

#[test]
fn line_domain_floor_is_eighty() {
    for max in [0.0, 1.0, 42.0, 75.0, 79.99, 80.0] {
        let s = Series::from_pairs([("a", max / 2.0), ("b", max)]);
        assert_eq!(LineLayout::compute(&s, &LineOptions::default()).y_max, 80.0, "max={max}");
    }
}

#[test]
fn line_domain_rounds_up_to_multiple_of_five() {
    let s = Series::from_pairs([("a", 10.0), ("b", 83.0)]);
    let l = LineLayout::compute(&s, &LineOptions::default());
    assert_eq!(l.y_max, 85.0);
    // all five candidates stay, none above 85
    assert_eq!(l.ticks.iter().map(|t| t.value).collect::<Vec<_>>(), vec![0.0, 20.0, 40.0, 60.0, 80.0]);
}

#[test]
fn line_single_point_sits_at_start() {
    let opts = LineOptions::default();
    let l = LineLayout::compute(&Series::from_pairs([("2012", 44.0)]), &opts);
    assert_eq!(l.points.len(), 1);
    assert_eq!(l.points[0].0, opts.padding as f64);
    assert!(l.spacing.is_finite());
    assert!(l.points[0].1.is_finite());

    let d = line::render(&Series::from_pairs([("2012", 44.0)]), &opts, &Theme::light());
    assert!(d.texts().any(|t| t == "2012"));
}

#[test]
fn line_end_to_end_rearrest_curve() {
    let opts = LineOptions::default();
    let l = LineLayout::compute(&rearrest_curve(), &opts);
    assert_eq!(l.y_max, 80.0);
    assert_eq!(l.y_scale().domain, (0.0, 80.0));
    assert_eq!(l.points.len(), 5);

    let expected = (opts.width as f64 - 2.0 * opts.padding as f64) / 4.0;
    assert_eq!(l.spacing, expected);
    for w in l.points.windows(2) {
        assert!((w[1].0 - w[0].0 - expected).abs() < 1e-9);
    }
    assert_eq!(l.points[0].0, 40.0);
    assert_eq!(l.points[4].0, 560.0);
}

#[test]
fn bar_ratios_survive_positive_scaling() {
    let s = Series::from_pairs([("Property", 82.1), ("Drug", 76.9), ("Public order", 73.6), ("Violent", 61.0)]);
    let opts = BarOptions::default();
    let base = BarLayout::compute(&s, &opts);
    for k in [0.001, 0.5, 3.0, 1234.5] {
        let scaled = BarLayout::compute(&s.scaled(k), &opts);
        for (a, b) in base.rows.iter().zip(&scaled.rows) {
            assert!((a.ratio - b.ratio).abs() < 1e-12, "k={k}");
            assert!((a.length - b.length).abs() < 1e-9, "k={k}");
        }
    }
}

#[test]
fn bar_all_zero_renders_zero_length_bars() {
    let s = Series::from_pairs([("a", 0.0), ("b", 0.0), ("c", 0.0)]);
    let l = BarLayout::compute(&s, &BarOptions::default());
    assert_eq!(l.rows.len(), 3);
    for r in &l.rows {
        assert_eq!(r.length, 0.0);
        assert!(!r.ratio.is_nan());
        assert_eq!(r.text, "0.0%");
    }
    let d = bar::render(&s, &BarOptions::default(), &Theme::light());
    assert!(!brief_core::to_svg(&d).contains("NaN"));
}

#[test]
fn bar_pct_labels_round_ties_like_to_fixed() {
    let s = Series::from_pairs([("a", 12.25), ("b", 0.25), ("c", 80.0)]);
    let l = BarLayout::compute(&s, &BarOptions::default());
    let texts = l.rows.iter().map(|r| r.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, vec!["12.3%", "0.3%", "80.0%"]);

    let opts = BarOptions { mode: ValueMode::CountShare, ..BarOptions::default() };
    let l = BarLayout::compute(&Series::from_pairs([("a", 0.0625), ("b", 1234.5)]), &opts);
    assert_eq!(l.rows[0].text, "0.063");
    assert_eq!(l.rows[1].text, "1,234.5");
}

#[test]
fn empty_series_render_without_panicking() {
    let empty = Series::new();
    let title = Some("No data".to_string());
    let theme = Theme::light();
    let drawings = [
        line::render(&empty, &LineOptions { title: title.clone(), ..LineOptions::default() }, &theme),
        bar::render(&empty, &BarOptions { title: title.clone(), ..BarOptions::default() }, &theme),
        donut::render(&empty, &DonutOptions { title: title.clone(), ..DonutOptions::default() }, &theme),
        mini_bar::render(&empty, &MiniBarOptions { title: title.clone(), ..MiniBarOptions::default() }, &theme),
    ];
    for d in &drawings {
        assert!(d.width > 0 && d.height > 0);
        assert_eq!(d.title.as_deref(), Some("No data"));
        assert!(d.texts().any(|t| t == "No data"));
        let svg = brief_core::to_svg(d);
        assert!(!svg.contains("NaN"), "{svg}");
        assert!(!svg.contains("<polyline"));
        assert!(!svg.contains("stroke-dasharray"));
    }
}

#[test]
fn donut_over_hundred_overlaps_without_normalization() {
    let s = Series::from_pairs([("a", 50.0), ("b", 40.0), ("c", 30.0)]);
    let l = DonutLayout::compute(&s, &DonutOptions::default());
    assert!(l.covered() > l.circumference);
    assert!((l.covered() - 1.2 * l.circumference).abs() < 1e-9);
    assert_eq!(l.segments[0].offset, 0.0);
    for w in l.segments.windows(2) {
        assert_eq!(w[1].offset, w[0].end());
    }
    assert!(l.segments[2].end() > l.circumference);
}

#[test]
fn donut_quarters_partition_circumference() {
    let s = Series::from_pairs([("a", 25.0), ("b", 25.0), ("c", 25.0), ("d", 25.0)]);
    let l = DonutLayout::compute(&s, &DonutOptions::default());
    let quarter = l.circumference / 4.0;
    for seg in &l.segments {
        assert_eq!(seg.length, quarter);
    }
    assert_eq!(l.segments[0].offset, 0.0);
    for w in l.segments.windows(2) {
        assert_eq!(w[1].offset, w[0].end());
    }
    assert!((l.segments[3].end() - l.circumference).abs() < 1e-9);
}

#[test]
fn donut_shades_step_down_then_hold() {
    let s = Series::from_pairs((0..6).map(|i| (format!("s{i}"), 10.0)));
    let l = DonutLayout::compute(&s, &DonutOptions::default());
    let shades = l.segments.iter().map(|s| s.shade).collect::<Vec<_>>();
    assert!(shades[0] > shades[1] && shades[1] > shades[2] && shades[2] > shades[3]);
    assert_eq!(shades[3], shades[4]);
    assert_eq!(shades[4], shades[5]);
}

#[test]
fn donut_render_is_fresh_each_call() {
    let s = Series::from_pairs([("a", 60.0), ("b", 40.0)]);
    let opts = DonutOptions::default();
    let first = donut::render(&s, &opts, &Theme::light());
    let second = donut::render(&s, &opts, &Theme::light());
    assert_eq!(first, second);
}

#[test]
fn mini_bar_heights_are_clamped() {
    let s = Series::from_pairs([("a", 0.0), ("b", 5.0), ("c", 10.0)]);
    let l = MiniBarLayout::compute(&s, &MiniBarOptions::default());
    assert_eq!(l.bars.iter().map(|b| b.ratio).collect::<Vec<_>>(), vec![0.0, 0.5, 1.0]);
    assert!(l.bars.iter().all(|b| b.rect.height <= l.plot.height));

    let zeros = Series::from_pairs([("a", 0.0), ("b", 0.0)]);
    let l = MiniBarLayout::compute(&zeros, &MiniBarOptions::default());
    assert!(l.bars.iter().all(|b| b.rect.height == 0.0));
    let d = mini_bar::render(&zeros, &MiniBarOptions::default(), &Theme::light());
    assert!(!brief_core::to_svg(&d).contains("NaN"));
}
