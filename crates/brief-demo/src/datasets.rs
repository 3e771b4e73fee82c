// File: crates/brief-demo/src/datasets.rs
// Summary: Built-in statistics tables shown on the brief's pages.

use brief_core::Series;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ChartKind {
    Line,
    Bar,
    Donut,
    MiniBar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [ChartKind::Line, ChartKind::Bar, ChartKind::Donut, ChartKind::MiniBar];

    pub fn slug(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Donut => "donut",
            ChartKind::MiniBar => "mini_bar",
        }
    }
}

pub struct Dataset {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Citation string, trusted as-is.
    pub source: Option<&'static str>,
    pub kind: ChartKind,
    pub rows: &'static [(&'static str, f64)],
}

impl Dataset {
    pub fn series(&self) -> Series {
        Series::from_pairs(self.rows.iter().copied())
    }
}

const BJS_2012: &str = "Bureau of Justice Statistics, Recidivism of Prisoners Released in 34 States in 2012: A 5-Year Follow-Up Period (2012-2017)";
const BJS_2005: &str = "Bureau of Justice Statistics, Recidivism of Prisoners Released in 30 States in 2005: Patterns from 2005 to 2010";

pub const DATASETS: &[Dataset] = &[
    Dataset {
        id: "rearrest_curve",
        title: "Cumulative rearrest after release",
        subtitle: "State prisoners released in 2012, 34 states",
        source: Some(BJS_2012),
        kind: ChartKind::Line,
        rows: &[("Year 1", 36.8), ("Year 2", 52.9), ("Year 3", 61.5), ("Year 4", 67.0), ("Year 5", 70.8)],
    },
    Dataset {
        id: "rearrest_by_offense",
        title: "Rearrest within 5 years by commitment offense",
        subtitle: "State prisoners released in 2005, 30 states",
        source: Some(BJS_2005),
        kind: ChartKind::Bar,
        rows: &[("Property", 82.1), ("Drug", 76.9), ("Public order", 73.6), ("Violent", 71.3)],
    },
    Dataset {
        id: "release_offense_mix",
        title: "Released prisoners by commitment offense",
        subtitle: "Illustrative shares",
        source: None,
        kind: ChartKind::Donut,
        rows: &[("Drug", 31.0), ("Property", 29.0), ("Violent", 26.0), ("Public order", 14.0)],
    },
    Dataset {
        id: "first_rearrest_by_year",
        title: "First rearrest by year after release",
        subtitle: "Increment of the cumulative curve",
        source: Some(BJS_2012),
        kind: ChartKind::MiniBar,
        rows: &[("Y1", 36.8), ("Y2", 16.1), ("Y3", 8.6), ("Y4", 5.5), ("Y5", 3.8)],
    },
];
