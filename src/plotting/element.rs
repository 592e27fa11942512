use std::ops::Range;

use crate::{
    display::overlay_equation,
    sampler::{Overlay, Sample},
    value::{min_max, CoordExt, Value},
};

/// Elements that can be plotted
#[derive(Debug, Clone, PartialEq)]
pub enum PlottingElement<T: Value> {
    /// The sampled function itself
    ///
    /// (points, label)
    Curve(Vec<(T, T)>, String),

    /// An auxiliary line, such as a slope overlay
    Line(Vec<(T, T)>, Option<String>),

    /// A set of individual points
    Markers(Vec<(T, T)>),
}
impl<T: Value> PlottingElement<T> {
    /// Creates a new plotting element from the sampled curve of a domain and range
    pub fn from_curve(domain: &[T], range: &[T], label: impl Into<String>) -> Self {
        Self::Curve(
            domain.iter().copied().zip(range.iter().copied()).collect(),
            label.into(),
        )
    }

    /// Creates the line of an overlay, drawn against its shifted domain
    #[must_use]
    pub fn from_overlay(overlay: &Overlay<T>) -> Self {
        Self::Line(overlay.points(), Some(overlay_equation(overlay)))
    }

    /// Creates the two highlight markers of an overlay
    #[must_use]
    pub fn from_highlight(overlay: &Overlay<T>) -> Self {
        Self::Markers(overlay.highlight().to_vec())
    }

    /// Returns the points of this element
    #[must_use]
    pub fn points(&self) -> &[(T, T)] {
        match self {
            PlottingElement::Curve(points, _)
            | PlottingElement::Line(points, _)
            | PlottingElement::Markers(points) => points,
        }
    }

    /// Returns the x-axis range for this element
    #[must_use]
    pub fn x_range(&self) -> Range<T> {
        self.points()
            .x_range()
            .unwrap_or_else(|| T::zero()..T::one())
    }

    /// Returns the y-axis range for this element, padded by 5% of its span on either side
    #[must_use]
    pub fn y_range(&self) -> Range<T> {
        match self.points().y_range() {
            Some(range) => pad(range),
            None => T::zero()..T::one(),
        }
    }
}

/// Smallest ranges covering every element, y padded by 5% of its span
#[must_use]
pub fn union_ranges<T: Value>(elements: &[PlottingElement<T>]) -> Option<(Range<T>, Range<T>)> {
    let points = elements.iter().flat_map(PlottingElement::points);
    let x = min_max(points.clone().map(|(x, _)| *x))?;
    let y = min_max(points.map(|(_, y)| *y))?;
    Some((x, pad(y)))
}

fn pad<T: Value>(range: Range<T>) -> Range<T> {
    let twenty = T::from_positive_int(20);
    let padding = nalgebra::RealField::max((range.end - range.start) / twenty, T::one());
    (range.start - padding)..(range.end + padding)
}

/// A trait for types that can be converted to a plotting element
pub trait AsPlottingElement<T: Value> {
    /// Converts this to a plotting element
    fn as_plotting_element(&self) -> PlottingElement<T>;
}

impl<T: Value> AsPlottingElement<T> for Sample<T> {
    fn as_plotting_element(&self) -> PlottingElement<T> {
        PlottingElement::from_curve(self.domain().as_slice(), self.range().as_slice(), "f(x)")
    }
}

impl<T: Value> AsPlottingElement<T> for Overlay<T> {
    fn as_plotting_element(&self) -> PlottingElement<T> {
        PlottingElement::from_overlay(self)
    }
}

impl<T: Value> AsPlottingElement<T> for PlottingElement<T> {
    fn as_plotting_element(&self) -> PlottingElement<T> {
        self.clone()
    }
}
