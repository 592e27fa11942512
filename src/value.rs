//! Numeric types and coordinate utilities for sampled curves.
//!
//! This module defines the [`Value`] trait, which abstracts the numeric
//! types that can be sampled, differenced and plotted, ensuring
//! compatibility with nalgebra, floating-point operations, and formatting.
//!
//! # Traits
//!
//! - [`Value`]: Extends `Scalar`, `RealField` and `FloatCore` to provide:
//!   - A canonical `two()` constant.
//!   - `try_cast` for safe type conversion with error handling.
//!   - `from_positive_int` for building integer-valued domains.
//! - [`CoordExt`]: Accessors over lists of `(x, y)` points.
//!
//! # Example
//!
//! ```rust
//! use secant_sampler::value::{CoordExt, Value};
//!
//! let points = vec![(0.0, 0.0), (1.0, 2.0), (2.0, 8.0)];
//! assert_eq!(points.y_range(), Some(0.0..8.0));
//! assert_eq!(f64::two(), 2.0);
//! ```
use std::ops::Range;

use crate::error::Error;

/// Numeric type for sampled curves
pub trait Value:
    nalgebra::Scalar
    + nalgebra::ComplexField<RealField = Self>
    + nalgebra::RealField
    + num_traits::float::FloatCore
    + std::fmt::LowerExp
{
    /// Returns the value 2.0
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Tries to cast a value to the target type
    ///
    /// # Errors
    /// Returns an error if the cast fails
    fn try_cast<U: num_traits::NumCast>(n: U) -> Result<Self, Error> {
        num_traits::cast(n).ok_or(Error::CastFailed)
    }

    /// Converts a `usize` to the target numeric type.
    ///
    /// Results in `infinity` if the value is out of range.
    #[must_use]
    fn from_positive_int(n: usize) -> Self {
        Self::try_cast(n).unwrap_or(Self::infinity())
    }
}

impl<T> Value for T where
    T: nalgebra::Scalar
        + nalgebra::ComplexField<RealField = Self>
        + nalgebra::RealField
        + num_traits::float::FloatCore
        + std::fmt::LowerExp
{
}

/// Extension trait for accessing the `x` and `y` coordinates of a list of points.
///
/// # Examples
///
/// ```
/// # use secant_sampler::value::CoordExt;
/// let data = vec![(1.5, -2.0), (2.0, 3.0), (0.0, 1.0)];
/// assert_eq!(data.y_range(), Some(-2.0..3.0));
/// ```
pub trait CoordExt<T: Value> {
    /// Returns an iterator over the x-coordinates of this value.
    fn x_iter(&self) -> impl Iterator<Item = T>;

    /// Returns an iterator over the y-coordinates of this value.
    fn y_iter(&self) -> impl Iterator<Item = T>;

    /// Returns the range of x-coordinates of this value.
    fn x_range(&self) -> Option<Range<T>> {
        min_max(self.x_iter())
    }

    /// Returns the range of y-coordinates of this value.
    fn y_range(&self) -> Option<Range<T>> {
        min_max(self.y_iter())
    }

    /// Converts the coordinates of this value to `f64`.
    ///
    /// # Errors
    /// Returns an error if any of the coordinates cannot be converted to `f64`.
    fn as_f64(&self) -> crate::error::Result<Vec<(f64, f64)>> {
        self.x_iter()
            .zip(self.y_iter())
            .map(|(x, y)| {
                let x_f64 = f64::try_cast(x)?;
                let y_f64 = f64::try_cast(y)?;
                Ok((x_f64, y_f64))
            })
            .collect()
    }

    /// Returns the points with every y-coordinate clamped into `range`.
    ///
    /// `range` goes through [`normalize_range`] first.
    fn y_clipped(&self, range: &Range<T>) -> Vec<(T, T)> {
        let range = normalize_range(range.clone());
        self.x_iter()
            .zip(self.y_iter())
            .map(|(x, y)| (x, nalgebra::RealField::clamp(y, range.start, range.end)))
            .collect()
    }
}
impl<T: Value> CoordExt<T> for Vec<(T, T)> {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}
impl<T: Value> CoordExt<T> for &[(T, T)] {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}

/// Puts a range in the shape axes and clamping expect: finite, `start < end`.
///
/// Reversed bounds are swapped, an empty range is widened by one on each side,
/// and a range with a non-finite bound becomes `0..1`.
#[must_use]
pub fn normalize_range<T: Value>(range: Range<T>) -> Range<T> {
    use num_traits::float::FloatCore;

    let Range { start, end } = range;
    if !FloatCore::is_finite(start) || !FloatCore::is_finite(end) {
        return T::zero()..T::one();
    }

    match start.partial_cmp(&end) {
        Some(std::cmp::Ordering::Greater) => end..start,
        Some(std::cmp::Ordering::Equal) => (start - T::one())..(end + T::one()),
        _ => start..end,
    }
}

/// Smallest and largest value of an iterator, as a range
pub(crate) fn min_max<T: Value>(values: impl Iterator<Item = T>) -> Option<Range<T>> {
    values
        .fold(None, |acc: Option<(T, T)>, v| {
            Some(match acc {
                Some((min, max)) => (
                    nalgebra::RealField::min(min, v),
                    nalgebra::RealField::max(max, v),
                ),
                None => (v, v),
            })
        })
        .map(|(start, end)| start..end)
}
