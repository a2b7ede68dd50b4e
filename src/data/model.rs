use std::ops::{Index, RangeInclusive};

use super::error::{Error, Result};

// ---------------------------------------------------------------------------
// Sequence – an ordered run of samples
// ---------------------------------------------------------------------------

/// An ordered, immutable sequence of real numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    values: Vec<f64>,
}

impl Sequence {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Smallest and largest value, ignoring NaN. `None` when empty.
    pub fn bounds(&self) -> Option<RangeInclusive<f64>> {
        let mut iter = self.values.iter().copied().filter(|v| !v.is_nan());
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(min..=max)
    }
}

impl From<Vec<f64>> for Sequence {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<f64> for Sequence {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Sequence {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

// ---------------------------------------------------------------------------
// Curve – sample sequence paired with its transform
// ---------------------------------------------------------------------------

/// The sample sequence (`x`) and the transformed sequence (`y`), same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    x: Sequence,
    y: Sequence,
}

impl Curve {
    /// Pair two sequences. Fails if the lengths differ.
    pub fn new(x: Sequence, y: Sequence) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Build `y` from `x` with a pointwise map.
    pub fn from_fn(x: Sequence, f: impl Fn(f64) -> f64) -> Self {
        let y = x.iter().map(|&v| f(v)).collect();
        Self { x, y }
    }

    pub fn x(&self) -> &Sequence {
        &self.x
    }

    pub fn y(&self) -> &Sequence {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `[x, y]` pairs in sample order, the shape `egui_plot` consumes.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x.iter().zip(self.y.iter()).map(|(&x, &y)| [x, y])
    }
}
