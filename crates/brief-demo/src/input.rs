// File: crates/brief-demo/src/input.rs
// Summary: Loads a `label,value` CSV into a series.

use std::path::Path;

use anyhow::{Context, Result};
use brief_core::Series;
use log::{info, warn};

const LABEL_NAMES: &[&str] = &["label", "name", "category", "offense", "year", "x"];
const VALUE_NAMES: &[&str] = &["value", "pct", "percent", "share", "count", "y"];

pub fn load_series_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    info!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    let (i_label, i_value) = match (idx(LABEL_NAMES), idx(VALUE_NAMES)) {
        (Some(l), Some(v)) => (l, v),
        _ => {
            warn!("Could not find label/value columns by name; using the first two columns.");
            (0, 1)
        }
    };

    let mut series = Series::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {} of {}", row + 1, path.display()))?;
        let label = rec.get(i_label).unwrap_or_default();
        match rec.get(i_value).map(|s| s.replace(',', "")).and_then(|s| s.trim_end_matches('%').parse::<f64>().ok()) {
            Some(v) => series.push(label, v),
            None => warn!("Skipping row {}: unparsable value {:?}", row + 1, rec.get(i_value)),
        }
    }
    Ok(series)
}
