// File: crates/brief-core/src/format.rs
// Summary: Value label formatting (one-decimal percentages, en-US digit grouping).

use std::str::FromStr;

use crate::error::RenderError;

/// How bar values are labelled. Geometry is identical for both modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueMode {
    #[default]
    Pct,
    CountShare,
}

impl ValueMode {
    pub fn format(self, v: f64) -> String {
        match self {
            ValueMode::Pct => format_pct(v),
            ValueMode::CountShare => format_grouped(v),
        }
    }
}

impl FromStr for ValueMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pct" => Ok(ValueMode::Pct),
            "countshare" => Ok(ValueMode::CountShare),
            other => Err(RenderError::InvalidMode(other.to_string())),
        }
    }
}

/// Extra digits carried past the rounding position. Far more than the gap
/// between an f64 and the nearest decimal tie, so the digit after the cut is exact.
const GUARD_DIGITS: usize = 30;

/// `v` with `digits` fraction digits; exact ties round away from zero
/// (12.25 -> "12.3"), matching JavaScript's `toFixed`.
pub fn to_fixed(v: f64, digits: usize) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let long = format!("{:.*}", digits + GUARD_DIGITS, v.abs());
    let (int_part, frac) = long.split_once('.').unwrap_or((long.as_str(), ""));
    let round_up = frac.chars().nth(digits).is_some_and(|c| c >= '5');

    let mut kept: Vec<char> = int_part.chars().chain(frac.chars().take(digits)).collect();
    if round_up {
        let mut carry = true;
        for c in kept.iter_mut().rev() {
            if *c == '9' {
                *c = '0';
            } else {
                *c = char::from(*c as u8 + 1);
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, '1');
        }
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if v < 0.0 {
        out.push('-');
    }
    out.extend(&kept[..int_len]);
    if digits > 0 {
        out.push('.');
        out.extend(&kept[int_len..]);
    }
    out
}

pub fn format_pct(v: f64) -> String {
    format!("{}%", to_fixed(v, 1))
}

/// en-US grouping: comma thousands separators, up to three fraction digits.
pub fn format_grouped(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let fixed = to_fixed(v.abs(), 3);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = v < 0.0 && (int_part != "0" || !frac.is_empty());
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}
