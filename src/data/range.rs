use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::model::Sequence;

// ---------------------------------------------------------------------------
// Range parameters
// ---------------------------------------------------------------------------

/// Bounds and sample count of an evenly spaced range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeSpec {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl Default for RangeSpec {
    fn default() -> Self {
        Self {
            lower: -2.0,
            upper: 2.0,
            count: 100,
        }
    }
}

impl RangeSpec {
    pub fn new(lower: f64, upper: f64, count: usize) -> Self {
        Self {
            lower,
            upper,
            count,
        }
    }

    /// Distance between consecutive samples, `0.0` for a single sample.
    pub fn step(&self) -> f64 {
        if self.count > 1 {
            (self.upper - self.lower) / (self.count - 1) as f64
        } else {
            0.0
        }
    }

    pub fn generate(&self) -> Result<Sequence> {
        linspace(self.lower, self.upper, self.count)
    }
}

// ---------------------------------------------------------------------------
// linspace
// ---------------------------------------------------------------------------

/// `count` evenly spaced samples over the closed interval `[lower, upper]`.
///
/// * `count == 1` yields `[lower]`.
/// * For `count > 1` the first sample is exactly `lower` and the last is
///   exactly `upper`; interior samples are `lower + i * step`.
/// * Any finite bounds give finite samples, even when `upper - lower`
///   does not fit in an `f64`.
pub fn linspace(lower: f64, upper: f64, count: usize) -> Result<Sequence> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(Error::NonFiniteBound { lower, upper });
    }
    if lower > upper {
        return Err(Error::InvertedBounds { lower, upper });
    }
    if count == 0 {
        return Err(Error::EmptyRange);
    }
    if count == 1 {
        return Ok(Sequence::new(vec![lower]));
    }

    let intervals = (count - 1) as f64;
    let span = upper - lower;
    let mut values: Vec<f64> = if span.is_finite() {
        let step = span / intervals;
        (0..count).map(|i| lower + i as f64 * step).collect()
    } else {
        // `upper - lower` overflows for bounds near ±f64::MAX; blend instead.
        (0..count)
            .map(|i| {
                let t = i as f64 / intervals;
                lower * (1.0 - t) + upper * t
            })
            .collect()
    };
    // Rounding in i * step can leave the endpoint one ulp short.
    values[count - 1] = upper;
    Ok(Sequence::new(values))
}
