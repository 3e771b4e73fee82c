// File: crates/brief-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }
    pub fn right(&self) -> f32 { self.left + self.width }
    pub fn bottom(&self) -> f32 { self.top + self.height }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// `value / max`, or 0.0 when `max` is zero or not finite. Never NaN.
#[inline]
pub fn ratio(value: f64, max: f64) -> f64 {
    if max == 0.0 || !max.is_finite() {
        return 0.0;
    }
    let r = value / max;
    if r.is_nan() { 0.0 } else { r }
}
