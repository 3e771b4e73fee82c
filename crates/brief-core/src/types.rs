// File: crates/brief-core/src/types.rs
// Summary: Shared value types (data points, series, insets) and default sizes.

/// Default drawing width in pixels.
pub const WIDTH: u32 = 600;
/// Default drawing height in pixels.
pub const HEIGHT: u32 = 300;

/// One labelled observation, e.g. a year and its cumulative rearrest percentage.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// Ordered observations. Insertion order is display order; renderers never sort.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub points: Vec<DataPoint>,
}

impl Series {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_pairs<L, I>(pairs: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, f64)>,
    {
        Self { points: pairs.into_iter().map(|(l, v)| DataPoint::new(l, v)).collect() }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.points.push(DataPoint::new(label, value));
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Largest value, or `None` for an empty series.
    pub fn max_value(&self) -> Option<f64> {
        self.values().fold(None, |acc, v| match acc {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
    }

    pub fn sum(&self) -> f64 {
        self.values().sum()
    }

    /// Copy with every value multiplied by `k`.
    pub fn scaled(&self, k: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| DataPoint::new(p.label.clone(), p.value * k)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;
    fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same inset on every side.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}
