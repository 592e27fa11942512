//! Sampling a function over an integer domain and deriving its secant slopes.
//!
//! The pipeline is a single pass:
//! 1. [`generate_domain`] builds `0, 1, ..., size - 1`
//! 2. [`evaluate`] applies a function to every domain value
//! 3. [`compute_slopes`] takes the secant between each consecutive pair of points
//! 4. [`compute_overlays`] derives one tangent-like line per interior slope
//!
//! [`Sample`] bundles the first three steps.
//!
//! ```rust
//! use secant_sampler::sampler::{parabola, Sample};
//!
//! let sample = Sample::<f64>::run(10, parabola).unwrap();
//! assert_eq!(sample.slopes().as_slice(), &[2.0, 6.0, 10.0, 14.0, 18.0, 22.0, 26.0, 30.0, 34.0]);
//!
//! for overlay in sample.overlays(10) {
//!     let [(x0, y0), (x1, y1)] = overlay.highlight();
//!     println!("{} [{x0} {x1}] [{y0} {y1}]", overlay.index());
//! }
//! ```
use std::ops::Range;

use nalgebra::DVector;

use crate::{
    error::{Error, Result},
    value::Value,
};

/// Number of domain points sampled by default
pub const DEFAULT_SIZE: usize = 10;

/// `f(x) = 2x^2`
pub fn parabola<T: Value>(x: T) -> T {
    T::two() * x * x
}

/// `f'(x) = 4x`, the exact derivative of [`parabola`]
pub fn parabola_derivative<T: Value>(x: T) -> T {
    (T::two() + T::two()) * x
}

/// Builds the domain `0, 1, ..., size - 1`.
///
/// Slopes need at least 2 points; smaller sizes produce a domain too short to difference,
/// which downstream steps treat as empty rather than as an error.
#[must_use]
pub fn generate_domain<T: Value>(size: usize) -> DVector<T> {
    DVector::from_iterator(size, (0..size).map(T::from_positive_int))
}

/// Applies `f` to every value of `domain`
#[must_use]
pub fn evaluate<T: Value>(f: impl Fn(T) -> T, domain: &DVector<T>) -> DVector<T> {
    domain.map(f)
}

/// Computes the secant slope between each consecutive pair of points.
///
/// `slope[i] = (range[i+1] - range[i]) / (domain[i+1] - domain[i])`
///
/// The result has one value fewer than the inputs, and is empty for fewer than 2 points.
///
/// # Errors
/// - [`Error::LengthMismatch`] if `domain` and `range` differ in length
/// - [`Error::DivisionByZero`] if two consecutive domain values are equal
pub fn compute_slopes<T: Value>(domain: &DVector<T>, range: &DVector<T>) -> Result<DVector<T>> {
    if domain.len() != range.len() {
        return Err(Error::LengthMismatch {
            domain: domain.len(),
            range: range.len(),
        });
    }

    let slopes = (0..domain.len().saturating_sub(1))
        .map(|i| {
            let run = domain[i + 1] - domain[i];
            if run == T::zero() {
                return Err(Error::DivisionByZero { index: i });
            }

            Ok((range[i + 1] - range[i]) / run)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DVector::from_vec(slopes))
}

/// Derives the overlay lines for `i` in `1..=size-3`.
///
/// The returned iterator is lazy and can be restarted by cloning it, or by calling this again.
/// It is empty when `size < 4`, and never yields an index the domain or slopes cannot back.
#[must_use]
pub fn compute_overlays<'a, T: Value>(
    domain: &'a DVector<T>,
    slopes: &'a DVector<T>,
    size: usize,
) -> Overlays<'a, T> {
    let end = size
        .saturating_sub(2)
        .min(slopes.len())
        .min(domain.len().saturating_sub(1));

    Overlays {
        domain,
        slopes,
        indices: 1..end.max(1),
    }
}

/// A line with the local slope at index `i`, passing through `(1, 0)`.
///
/// `line[x] = slope * x - slope` over the unshifted domain, drawn against `domain + i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay<T: Value> {
    index: usize,
    slope: T,
    shifted: DVector<T>,
    line: DVector<T>,
    highlight: [(T, T); 2],
}
impl<T: Value> Overlay<T> {
    /// Builds the overlay for `index` from its slope and the unshifted domain.
    ///
    /// `domain` must contain `index + 1`.
    fn new(index: usize, slope: T, domain: &DVector<T>) -> Self {
        let shifted = domain.add_scalar(T::from_positive_int(index));
        let line = (domain * slope).add_scalar(-slope);
        let highlight = [
            (domain[index], line[index]),
            (domain[index + 1], line[index + 1]),
        ];

        Self {
            index,
            slope,
            shifted,
            line,
            highlight,
        }
    }

    /// Index of the slope this overlay was built from
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The slope this overlay was built from
    #[must_use]
    pub fn slope(&self) -> T {
        self.slope
    }

    /// x-values the line is drawn against: the domain shifted right by `index`
    #[must_use]
    pub fn shifted(&self) -> &DVector<T> {
        &self.shifted
    }

    /// y-values of the line
    #[must_use]
    pub fn line(&self) -> &DVector<T> {
        &self.line
    }

    /// The two points `(domain[i], line[i])` and `(domain[i+1], line[i+1])` marked on the plot
    #[must_use]
    pub fn highlight(&self) -> [(T, T); 2] {
        self.highlight
    }

    /// The line as `(shifted x, y)` points
    #[must_use]
    pub fn points(&self) -> Vec<(T, T)> {
        self.shifted
            .iter()
            .zip(self.line.iter())
            .map(|(x, y)| (*x, *y))
            .collect()
    }
}

/// Lazy iterator over the overlays of a sample.
///
/// See [`compute_overlays`].
#[derive(Debug, Clone)]
pub struct Overlays<'a, T: Value> {
    domain: &'a DVector<T>,
    slopes: &'a DVector<T>,
    indices: Range<usize>,
}
impl<T: Value> Iterator for Overlays<'_, T> {
    type Item = Overlay<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.indices.next()?;
        Some(Overlay::new(i, self.slopes[i], self.domain))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}
impl<T: Value> ExactSizeIterator for Overlays<'_, T> {}
impl<T: Value> std::iter::FusedIterator for Overlays<'_, T> {}

/// One sampling run: a domain, the function evaluated over it, and the secants between points.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(bound(serialize = "T: serde::Serialize"))]
pub struct Sample<T: Value> {
    #[serde(serialize_with = "serialize_sequence")]
    domain: DVector<T>,

    #[serde(serialize_with = "serialize_sequence")]
    range: DVector<T>,

    #[serde(serialize_with = "serialize_sequence")]
    slopes: DVector<T>,
}
impl<T: Value> Sample<T> {
    /// Samples `f` over `0..size`
    ///
    /// # Errors
    /// Returns an error if the slopes cannot be computed; never the case for the generated domain.
    pub fn run(size: usize, f: impl Fn(T) -> T) -> Result<Self> {
        let domain = generate_domain(size);
        let range = evaluate(f, &domain);
        Self::new(domain, range)
    }

    /// Samples [`parabola`] over `0..size`
    ///
    /// # Errors
    /// Returns an error if the slopes cannot be computed; never the case for the generated domain.
    pub fn parabola(size: usize) -> Result<Self> {
        Self::run(size, parabola)
    }

    /// Builds a sample from an existing domain and range.
    ///
    /// # Errors
    /// Returns an error if the two differ in length, or the domain repeats a value.
    pub fn new(domain: DVector<T>, range: DVector<T>) -> Result<Self> {
        let slopes = compute_slopes(&domain, &range)?;
        Ok(Self {
            domain,
            range,
            slopes,
        })
    }

    /// Number of sampled points
    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// True if nothing was sampled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// The sampled x-values
    #[must_use]
    pub fn domain(&self) -> &DVector<T> {
        &self.domain
    }

    /// The function evaluated at each domain value
    #[must_use]
    pub fn range(&self) -> &DVector<T> {
        &self.range
    }

    /// Secant slopes between consecutive points; one fewer than the points
    #[must_use]
    pub fn slopes(&self) -> &DVector<T> {
        &self.slopes
    }

    /// Overlays for `i` in `1..=size-3`; see [`compute_overlays`]
    #[must_use]
    pub fn overlays(&self, size: usize) -> Overlays<'_, T> {
        compute_overlays(&self.domain, &self.slopes, size)
    }

    /// Evaluates a known derivative over the domain, for comparing against the secants.
    ///
    /// For [`parabola`] use [`parabola_derivative`]: the secant from `x` to `x+1` equals the tangent at `x + 1/2`.
    #[must_use]
    pub fn tangent_slopes(&self, df: impl Fn(T) -> T) -> DVector<T> {
        evaluate(df, &self.domain)
    }
}

fn serialize_sequence<S, T>(sequence: &DVector<T>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: Value + serde::Serialize,
{
    serializer.collect_seq(sequence.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_domain() {
        for size in 2..20 {
            let domain = generate_domain::<f64>(size);
            assert_eq!(domain.len(), size);
            assert_eq!(domain[0], 0.0);
            for w in domain.as_slice().windows(2) {
                assert_eq!(w[1] - w[0], 1.0);
            }
        }

        assert!(generate_domain::<f64>(0).is_empty());
        assert_eq!(generate_domain::<f64>(1).as_slice(), &[0.0]);
    }

    #[test]
    fn test_evaluate() {
        for x in [-3.5, 0.0, 1.0, 7.0, 1e3] {
            let range = evaluate(parabola, &DVector::from_vec(vec![x]));
            crate::assert_close!(range[0], 2.0 * x * x);
        }

        let domain = generate_domain::<f64>(5);
        assert_eq!(evaluate(parabola, &domain).len(), domain.len());
    }

    #[test]
    fn test_default_scenario() {
        let domain = generate_domain::<f64>(DEFAULT_SIZE);
        let range = evaluate(parabola, &domain);
        let slopes = compute_slopes(&domain, &range).unwrap();

        crate::assert_all_close!(
            range,
            [0.0, 2.0, 8.0, 18.0, 32.0, 50.0, 72.0, 98.0, 128.0, 162.0]
        );
        crate::assert_all_close!(
            slopes,
            [2.0, 6.0, 10.0, 14.0, 18.0, 22.0, 26.0, 30.0, 34.0]
        );

        let indices: Vec<_> = compute_overlays(&domain, &slopes, DEFAULT_SIZE)
            .map(|o| o.index())
            .collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_unit_step_slopes_are_differences() {
        let sample = Sample::<f64>::run(12, |x| x * x * x - 4.0 * x).unwrap();
        for i in 0..sample.slopes().len() {
            assert_eq!(sample.slopes()[i], sample.range()[i + 1] - sample.range()[i]);
        }
    }

    #[test]
    fn test_uneven_domain() {
        let domain = DVector::from_vec(vec![0.0, 0.5, 2.0]);
        let range = evaluate(parabola, &domain);
        let slopes = compute_slopes(&domain, &range).unwrap();
        crate::assert_all_close!(slopes, [1.0, 5.0]);
    }

    #[test]
    fn test_division_by_zero() {
        let domain = DVector::from_vec(vec![0.0, 1.0, 1.0, 2.0]);
        let range = evaluate(parabola, &domain);
        let err = compute_slopes(&domain, &range).unwrap_err();
        assert_eq!(err, Error::DivisionByZero { index: 1 });

        assert!(Sample::new(domain, range).is_err());
    }

    #[test]
    fn test_length_mismatch() {
        let domain = generate_domain::<f64>(4);
        let range = generate_domain::<f64>(3);
        assert_eq!(
            compute_slopes(&domain, &range).unwrap_err(),
            Error::LengthMismatch {
                domain: 4,
                range: 3
            }
        );
    }

    #[test]
    fn test_degenerate_sizes() {
        for size in 0..2 {
            let sample = Sample::<f64>::parabola(size).unwrap();
            assert!(sample.slopes().is_empty());
            assert_eq!(sample.overlays(size).count(), 0);
        }

        let sample = Sample::<f64>::parabola(3).unwrap();
        assert_eq!(sample.slopes().len(), 2);
        assert_eq!(sample.overlays(3).count(), 0);
    }

    #[test]
    fn test_overlay_count() {
        for size in 0..16 {
            let sample = Sample::<f64>::parabola(size).unwrap();
            let overlays = sample.overlays(size);
            assert_eq!(overlays.len(), size.saturating_sub(3));
            assert_eq!(overlays.count(), size.saturating_sub(3));
        }
    }

    #[test]
    fn test_overlay_size_beyond_sample() {
        // Asking for more overlays than the slopes can back stops at the last usable index
        let sample = Sample::<f64>::parabola(5).unwrap();
        let indices: Vec<_> = sample.overlays(50).map(|o| o.index()).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_overlay_shape() {
        let sample = Sample::<f64>::parabola(DEFAULT_SIZE).unwrap();
        let overlay = sample.overlays(DEFAULT_SIZE).nth(1).unwrap();

        assert_eq!(overlay.index(), 2);
        assert_eq!(overlay.slope(), 10.0);
        crate::assert_all_close!(
            overlay.shifted(),
            [2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0]
        );
        crate::assert_all_close!(
            overlay.line(),
            [-10.0, 0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]
        );
        assert_eq!(overlay.highlight(), [(2.0, 10.0), (3.0, 20.0)]);
        assert_eq!(overlay.points()[0], (2.0, -10.0));
    }

    #[test]
    fn test_overlays_restartable() {
        let sample = Sample::<f64>::parabola(8).unwrap();
        let overlays = sample.overlays(8);

        let first: Vec<_> = overlays.clone().collect();
        let second: Vec<_> = overlays.collect();
        assert_eq!(first, second);
        assert_eq!(first, sample.overlays(8).collect::<Vec<_>>());
    }

    #[test]
    fn test_idempotent() {
        let a = Sample::<f64>::parabola(DEFAULT_SIZE).unwrap();
        let b = Sample::<f64>::parabola(DEFAULT_SIZE).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tangent_slopes() {
        let sample = Sample::<f64>::parabola(4).unwrap();
        let tangents = sample.tangent_slopes(parabola_derivative);
        crate::assert_all_close!(tangents, [0.0, 4.0, 8.0, 12.0]);

        // Each secant is the tangent at the midpoint of its interval
        for i in 0..sample.slopes().len() {
            crate::assert_close!(sample.slopes()[i], parabola_derivative(i as f64 + 0.5));
        }
    }

    #[test]
    fn test_serialize() {
        let sample = Sample::<f64>::parabola(3).unwrap();
        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "domain": [0.0, 1.0, 2.0],
                "range": [0.0, 2.0, 8.0],
                "slopes": [2.0, 6.0],
            })
        );
    }

    #[test]
    fn test_f32() {
        let sample = Sample::<f32>::parabola(DEFAULT_SIZE).unwrap();
        crate::assert_secants!(sample);
        assert_eq!(sample.slopes()[8], 34.0);
    }
}
