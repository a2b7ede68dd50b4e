use super::model::{Curve, Sequence};

/// Apply `f` to every sample, keeping length and order.
pub fn pointwise(samples: &Sequence, f: impl Fn(f64) -> f64) -> Sequence {
    samples.iter().map(|&v| f(v)).collect()
}

fn sq(v: f64) -> f64 {
    v * v
}

/// Element-wise square.
pub fn square(samples: &Sequence) -> Sequence {
    pointwise(samples, sq)
}

/// Pair `samples` with their squares.
pub fn square_curve(samples: Sequence) -> Curve {
    Curve::from_fn(samples, sq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::range::linspace;

    #[test]
    fn square_matches_each_sample() {
        let xs = linspace(-2.0, 2.0, 100).unwrap();
        let ys = square(&xs);
        assert_eq!(ys.len(), xs.len());
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_eq!(*y, x * x);
            assert!(*y >= 0.0);
        }
    }

    #[test]
    fn pointwise_keeps_order() {
        let xs = Sequence::new(vec![3.0, 1.0, 2.0]);
        assert_eq!(pointwise(&xs, |v| v + 1.0).as_slice(), &[4.0, 2.0, 3.0]);
    }

    #[test]
    fn square_curve_pairs_samples_with_squares() {
        let curve = square_curve(linspace(-1.0, 1.0, 3).unwrap());
        assert_eq!(curve.x().as_slice(), &[-1.0, 0.0, 1.0]);
        assert_eq!(curve.y().as_slice(), &[1.0, 0.0, 1.0]);
    }

    #[test]
    fn square_of_empty_is_empty() {
        assert!(square(&Sequence::default()).is_empty());
    }
}
