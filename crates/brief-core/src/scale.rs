// File: crates/brief-core/src/scale.rs
// Summary: Linear value-to-pixel scale and the rounded axis maximum used by the line chart.

/// Maps `domain` onto `range` linearly. An inverted range (`range.0 > range.1`)
/// expresses a y-axis where larger values sit higher on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span.abs() < 1e-12 {
            return self.range.0;
        }
        self.range.0 + (v - self.domain.0) / span * (self.range.1 - self.range.0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let span = self.range.1 - self.range.0;
        if span.abs() < 1e-12 {
            return self.domain.0;
        }
        self.domain.0 + (px - self.range.0) / span * (self.domain.1 - self.domain.0)
    }
}

/// `max(floor, ceil(max / step) * step)`.
pub fn nice_ceil(max: f64, step: f64, floor: f64) -> f64 {
    if step <= 0.0 || !max.is_finite() {
        return floor;
    }
    ((max / step).ceil() * step).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_maps_and_inverts() {
        let s = LinearScale::new((0.0, 80.0), (260.0, 40.0));
        assert_eq!(s.map(0.0), 260.0);
        assert_eq!(s.map(80.0), 40.0);
        assert_eq!(s.map(40.0), 150.0);
        assert!((s.invert(150.0) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn zero_width_domain_pins_to_range_start() {
        let s = LinearScale::new((3.0, 3.0), (0.0, 100.0));
        assert_eq!(s.map(3.0), 0.0);
        assert_eq!(s.map(10.0), 0.0);
    }

    #[test]
    fn nice_ceil_rounds_to_step_and_respects_floor() {
        assert_eq!(nice_ceil(83.0, 5.0, 80.0), 85.0);
        assert_eq!(nice_ceil(70.8, 5.0, 80.0), 80.0);
        assert_eq!(nice_ceil(85.0, 5.0, 80.0), 85.0);
        assert_eq!(nice_ceil(0.0, 5.0, 80.0), 80.0);
    }
}
