use std::ops::Range;

use crate::{plotting::PlottingElement, value::Value};

pub mod plotters;

/// Trait for plot backends
pub trait PlotBackend {
    /// Error type for the plot backend
    type Error: std::error::Error;

    /// Root type for the plot backend
    type Root;

    /// Color type for the plot backend
    type Color: Clone;

    /// Get the next color in the palette
    fn next_color(&mut self) -> Self::Color;

    /// Create a new plot with the given title and ranges on the given root
    ///
    /// # Errors
    /// Returns an error if the plot cannot be created.
    #[allow(clippy::too_many_arguments)]
    fn new_plot<T: Value>(
        root: &Self::Root,
        title: &str,
        x_label: Option<String>,
        y_label: Option<String>,
        x_range: Range<T>,
        y_range: Range<T>,
        hide_legend: bool,
        hide_axes: bool,
    ) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Add a line to the plot
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn add_line<T: Value>(
        &mut self,
        data: &[(T, T)],
        label: Option<&str>,
        width: u32,
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    /// Add a highlighted point to the plot
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn add_marker<T: Value>(&mut self, x: T, y: T) -> Result<(), Self::Error>;

    /// Finalize the plot
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn finalize(self) -> Result<(), Self::Error>;

    /// Add a plotting element to the plot
    ///
    /// # Errors
    /// Returns an error if the plot cannot be modified.
    fn add_element<T: Value>(&mut self, element: &PlottingElement<T>) -> Result<(), Self::Error> {
        match element {
            PlottingElement::Curve(data, label) => {
                let color = self.next_color();
                self.add_line(data, Some(label), 2, color)
            }

            PlottingElement::Line(data, label) => {
                let color = self.next_color();
                self.add_line(data, label.as_deref(), 1, color)
            }

            PlottingElement::Markers(points) => {
                for (x, y) in points {
                    self.add_marker(*x, *y)?;
                }
                Ok(())
            }
        }
    }
}
