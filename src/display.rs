//! Utilities for displaying sampled sequences and overlays
//!
//! Produces the console diagnostics of a sampling run:
//! ```text
//! x [0 1 2 3 4 5 6 7 8 9]
//! m [2 6 10 14 18 22 26 30 34]
//! 1 [1 2] [0 6]
//! ```
//!
//! # Helpers
//! - [`SequenceDisplay`]: Renders a sequence as `[a b c]`.
//! - [`format_value`]: Formats a number, switching to scientific notation for fractional values outside [`default_fixed_range`].
//! - [`overlay_line`] / [`overlay_equation`]: Per-overlay diagnostics and plot labels.
use nalgebra::DVector;

use crate::{sampler::Overlay, value::Value};

/// Default precision for values printed in scientific notation
pub const DEFAULT_PRECISION: usize = 2;

/// Default range in which scientific notation is not used
#[must_use]
pub fn default_fixed_range<T: Value>() -> Option<std::ops::Range<T>> {
    const RANGE: std::ops::Range<f64> = 1e-3..1e3;
    let s = T::try_cast(RANGE.start).ok()?;
    let e = T::try_cast(RANGE.end).ok()?;
    Some(s..e)
}

/// Largest magnitude a whole number is printed in full at
const WHOLE_LIMIT: f64 = 1e15;

/// Formats a value for display.
///
/// Whole numbers below `1e15` print in full, without a fractional part. Other values
/// outside [`default_fixed_range`] use scientific notation with [`DEFAULT_PRECISION`] digits.
#[must_use]
pub fn format_value<T: Value>(value: T) -> String {
    use num_traits::float::FloatCore;

    let magnitude = FloatCore::abs(value);
    let whole = FloatCore::fract(value) == T::zero()
        && T::try_cast(WHOLE_LIMIT).is_ok_and(|limit| magnitude < limit);

    if whole {
        return format!("{value}");
    }

    match default_fixed_range::<T>() {
        Some(range) if range.contains(&magnitude) => format!("{value}"),
        _ => format!("{value:.prec$e}", prec = DEFAULT_PRECISION),
    }
}

/// Displays a sequence of values as `[a b c]`
#[derive(Debug, Clone, Copy)]
pub struct SequenceDisplay<'a, T: Value>(pub &'a [T]);
impl<T: Value> std::fmt::Display for SequenceDisplay<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<_> = self.0.iter().map(|v| format_value(*v)).collect();
        write!(f, "[{}]", values.join(" "))
    }
}

/// A labelled sequence, such as `x [0 1 2]`
#[must_use]
pub fn sequence_line<T: Value>(label: &str, sequence: &DVector<T>) -> String {
    format!("{label} {}", SequenceDisplay(sequence.as_slice()))
}

/// The overlay index followed by its highlighted x and y values: `i [x_i x_i+1] [y_i y_i+1]`
#[must_use]
pub fn overlay_line<T: Value>(overlay: &Overlay<T>) -> String {
    let [(x0, y0), (x1, y1)] = overlay.highlight();
    format!(
        "{} {} {}",
        overlay.index(),
        SequenceDisplay(&[x0, x1]),
        SequenceDisplay(&[y0, y1])
    )
}

/// The overlay's line as an equation: `y = mx - m`
#[must_use]
pub fn overlay_equation<T: Value>(overlay: &Overlay<T>) -> String {
    let slope = overlay.slope();
    let magnitude = format_value(num_traits::float::FloatCore::abs(slope));
    let sign = if slope < T::zero() { '+' } else { '-' };
    format!("y = {}x {sign} {magnitude}", format_value(slope))
}
