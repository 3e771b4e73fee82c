// File: crates/brief-demo/src/main.rs
// Summary: Demo renders the brief's charts (line, bar, donut, mini bar) to SVG and PNG files.

mod datasets;
mod input;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use brief_core::charts::{bar, donut, line, mini_bar};
use brief_core::{theme, BarOptions, DonutOptions, Drawing, LineOptions, MiniBarOptions, Series, Theme, ValueMode};
use brief_render_skia::{RasterOptions, SkiaRenderer};
use clap::Parser;
use log::info;

use crate::datasets::{ChartKind, DATASETS};

#[derive(Parser, Debug)]
#[command(name = "brief-demo", about = "Render the recidivism brief charts to SVG and PNG")]
struct Cli {
    /// Chart to render; when omitted every built-in table renders with its own chart type
    #[arg(short, long, value_name = "KIND")]
    chart: Option<ChartKind>,

    /// CSV file with label,value rows instead of the built-in tables
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Theme preset (light, dark, high-contrast)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Bar value labels: pct or countshare
    #[arg(long, default_value = "pct", value_parser = parse_mode)]
    mode: ValueMode,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Only write SVG files
    #[arg(long)]
    no_png: bool,

    /// Rescale donut percentages so the ring always closes
    #[arg(long)]
    normalize_donut: bool,
}

fn parse_mode(s: &str) -> Result<ValueMode, String> {
    s.parse::<ValueMode>().map_err(|e| e.to_string())
}

struct Job {
    id: String,
    kind: ChartKind,
    title: String,
    subtitle: Option<String>,
    series: Series,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let theme = theme::find(&cli.theme);
    info!("Using theme: {}", theme.name);

    let jobs = plan_jobs(&cli)?;
    if jobs.is_empty() {
        anyhow::bail!("nothing to render for the selected chart kind");
    }

    let renderer = if cli.no_png { None } else { Some(SkiaRenderer::new()) };
    let raster = RasterOptions::default();

    for job in &jobs {
        let drawing = render_job(job, &cli, &theme);
        let out = out_name(&cli.out_dir, &job.id, job.kind);
        brief_core::write_svg(&drawing, &out)
            .with_context(|| format!("writing {}", out.display()))?;
        info!("Wrote {}", out.display());

        if let Some(r) = &renderer {
            let png = out.with_extension("png");
            r.render_to_png(&drawing, &raster, &png)
                .with_context(|| format!("rasterizing {}", png.display()))?;
            info!("Wrote {}", png.display());
        }
    }
    Ok(())
}

fn plan_jobs(cli: &Cli) -> Result<Vec<Job>> {
    if let Some(path) = &cli.input {
        let series = input::load_series_csv(path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        info!("Loaded {} rows from {}", series.len(), path.display());
        if series.is_empty() {
            anyhow::bail!("no rows loaded - check headers/delimiter.");
        }
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("input").to_string();
        let kinds = match cli.chart {
            Some(k) => vec![k],
            None => ChartKind::ALL.to_vec(),
        };
        return Ok(kinds
            .into_iter()
            .map(|kind| Job { id: stem.clone(), kind, title: stem.clone(), subtitle: None, series: series.clone() })
            .collect());
    }

    Ok(DATASETS
        .iter()
        .filter(|d| cli.chart.map_or(true, |k| k == d.kind))
        .map(|d| {
            if let Some(src) = d.source {
                info!("{}: source {}", d.id, src);
            }
            Job {
                id: d.id.to_string(),
                kind: d.kind,
                title: d.title.to_string(),
                subtitle: Some(d.subtitle.to_string()),
                series: d.series(),
            }
        })
        .collect())
}

fn render_job(job: &Job, cli: &Cli, theme: &Theme) -> Drawing {
    let title = Some(job.title.clone());
    let subtitle = job.subtitle.clone();
    match job.kind {
        ChartKind::Line => {
            let mut opts = LineOptions { title, subtitle, ..LineOptions::default() };
            if let Some(w) = cli.width { opts.width = w; }
            if let Some(h) = cli.height { opts.height = h; }
            line::render(&job.series, &opts, theme)
        }
        ChartKind::Bar => {
            let mut opts = BarOptions { title, subtitle, mode: cli.mode, height: cli.height, ..BarOptions::default() };
            if let Some(w) = cli.width { opts.width = w; }
            bar::render(&job.series, &opts, theme)
        }
        ChartKind::Donut => {
            let mut opts = DonutOptions { title, subtitle, normalize: cli.normalize_donut, ..DonutOptions::default() };
            if let Some(h) = cli.height { opts.size = h; }
            donut::render(&job.series, &opts, theme)
        }
        ChartKind::MiniBar => {
            let mut opts = MiniBarOptions { title, subtitle, show_labels: true, ..MiniBarOptions::default() };
            if let Some(w) = cli.width { opts.width = w; }
            if let Some(h) = cli.height { opts.height = h; }
            mini_bar::render(&job.series, &opts, theme)
        }
    }
}

/// Produce output file name like <out_dir>/chart_<id>_<kind>.svg
fn out_name(out_dir: &Path, id: &str, kind: ChartKind) -> PathBuf {
    out_dir.join(format!("chart_{}_{}.svg", id, kind.slug()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("brief-demo").chain(args.iter().copied())).expect("parse args")
    }

    #[test]
    fn defaults_render_every_builtin_table() {
        let c = cli(&[]);
        assert_eq!(c.mode, ValueMode::Pct);
        let jobs = plan_jobs(&c).unwrap();
        assert_eq!(jobs.len(), DATASETS.len());
    }

    #[test]
    fn chart_filter_and_mode_parse() {
        let c = cli(&["--chart", "mini-bar", "--mode", "countshare"]);
        assert_eq!(c.chart, Some(ChartKind::MiniBar));
        assert_eq!(c.mode, ValueMode::CountShare);
        let jobs = plan_jobs(&c).unwrap();
        assert!(jobs.iter().all(|j| j.kind == ChartKind::MiniBar));
    }

    #[test]
    fn bad_mode_is_rejected() {
        let r = Cli::try_parse_from(["brief-demo", "--mode", "share"]);
        assert!(r.is_err());
    }

    #[test]
    fn render_job_applies_size_overrides() {
        let c = cli(&["--width", "800", "--height", "400"]);
        let jobs = plan_jobs(&c).unwrap();
        let line_job = jobs.iter().find(|j| j.kind == ChartKind::Line).unwrap();
        let d = render_job(line_job, &c, &Theme::light());
        assert_eq!((d.width, d.height), (800, 400));
        assert_eq!(d.title.as_deref(), Some("Cumulative rearrest after release"));
    }

    #[test]
    fn output_names() {
        let p = out_name(Path::new("target/out"), "rearrest_curve", ChartKind::MiniBar);
        assert_eq!(p, PathBuf::from("target/out/chart_rearrest_curve_mini_bar.svg"));
    }
}
