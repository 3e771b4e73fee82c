// File: crates/brief-core/src/axis.rs
// Summary: Axis ticks and ordinal x positions.

/// Fixed candidate tick values for percentage axes.
pub const CANDIDATE_TICKS: [f64; 5] = [0.0, 20.0, 40.0, 60.0, 80.0];

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Candidate ticks `<= y_max`, labelled `"{value}{suffix}"`.
pub fn ticks_up_to(y_max: f64, suffix: &str) -> Vec<Tick> {
    CANDIDATE_TICKS
        .iter()
        .copied()
        .filter(|&v| v <= y_max)
        .map(|v| Tick { value: v, label: format!("{v}{suffix}") })
        .collect()
}

/// `count` evenly spaced positions starting at `start`. Spacing is
/// `(end - start) / (count - 1)` with the divisor floored at 1, so a single
/// point lands on `start`.
pub fn even_positions(start: f64, end: f64, count: usize) -> Vec<f64> {
    let step = spacing(start, end, count);
    (0..count).map(|i| start + step * i as f64).collect()
}

pub fn spacing(start: f64, end: f64, count: usize) -> f64 {
    let divisor = count.saturating_sub(1).max(1) as f64;
    (end - start) / divisor
}
