//! Plotting a sample and its slope overlays
//!
//! [`render`] draws the sampled curve, every overlay line against its shifted domain,
//! and the two highlighted points of each overlay.
//!
//! You can also use the [`Plot`] struct directly for more control, on any [`PlotBackend`].
//! The [`plotters`] backend writes PNG files.
//!
//! ```rust,no_run
//! use secant_sampler::{plotting, sampler::{Sample, DEFAULT_SIZE}};
//!
//! let sample = Sample::<f64>::parabola(DEFAULT_SIZE).unwrap();
//! let path = plotting::plot_path("parabola");
//! plotting::plotters::render_to_file(&path, &sample, DEFAULT_SIZE, plotting::PlotOptions::default()).unwrap();
//! ```
use std::path::PathBuf;

use nalgebra::DVector;

use crate::{
    sampler::Overlay,
    value::{normalize_range, Value},
};

mod backend;
pub use backend::*;

mod element;
pub use element::*;

mod palette;
pub use palette::ColorSource;

/// Options for plotting
#[derive(Debug, Clone)]
pub struct PlotOptions<T>
where
    T: Value,
{
    /// Caption for the plot
    pub title: String,

    /// X-axis label
    pub x_label: Option<String>,

    /// Y-axis label
    pub y_label: Option<String>,

    /// Size of the output image in pixels
    pub size: (u32, u32),

    /// X-axis range; covers every element if not set
    pub x_range: Option<std::ops::Range<T>>,

    /// Y-axis range; covers every element if not set
    pub y_range: Option<std::ops::Range<T>>,

    /// Whether to hide the legend
    pub hide_legend: bool,

    /// Whether to hide the mesh and axis labels
    pub hide_axes: bool,
}
impl<T: Value> Default for PlotOptions<T> {
    fn default() -> Self {
        Self {
            title: "Secant Slopes".into(),
            x_label: None,
            y_label: None,
            size: (640, 480),
            x_range: None,
            y_range: None,
            hide_legend: false,
            hide_axes: false,
        }
    }
}

/// A plot of one or more elements using a given backend.
pub struct Plot<P, T>
where
    P: PlotBackend,
    T: Value,
{
    backend: P,
    _marker: std::marker::PhantomData<T>,
}

impl<P, T> Plot<P, T>
where
    P: PlotBackend,
    T: Value,
{
    /// Create a new plot with the given root, options, and primary element.
    /// The primary element is used to determine the axis ranges if they are not specified in the options.
    ///
    /// Both ranges go through [`normalize_range`], so a reversed, empty or non-finite range
    /// still produces a drawable plot.
    ///
    /// # Errors
    /// Returns an error if the plot cannot be created.
    pub fn new(
        root: &P::Root,
        options: &PlotOptions<T>,
        prime: &impl AsPlottingElement<T>,
    ) -> Result<Self, P::Error> {
        let prime = prime.as_plotting_element();

        //
        // Range overrides, forced finite and increasing
        let x_range = options.x_range.clone().unwrap_or_else(|| prime.x_range());
        let y_range = options.y_range.clone().unwrap_or_else(|| prime.y_range());
        let x_range = normalize_range(x_range);
        let y_range = normalize_range(y_range);

        let mut backend = P::new_plot(
            root,
            &options.title,
            options.x_label.clone(),
            options.y_label.clone(),
            x_range,
            y_range,
            options.hide_legend,
            options.hide_axes,
        )?;
        backend.add_element(&prime)?;

        Ok(Self {
            backend,
            _marker: std::marker::PhantomData,
        })
    }

    /// Add another plotting element to this plot.
    ///
    /// # Errors
    /// Returns an error if the element cannot be added.
    pub fn with_element(
        &mut self,
        element: &impl AsPlottingElement<T>,
    ) -> Result<&mut Self, P::Error> {
        self.backend.add_element(&element.as_plotting_element())?;
        Ok(self)
    }

    /// Finalize the plot and write it to the output.
    ///
    /// # Errors
    /// Returns an error if the plot cannot be finalized.
    pub fn finish(self) -> Result<(), P::Error> {
        self.backend.finalize()
    }
}

/// Draws the base curve, then each overlay line and its two highlighted points.
///
/// Axis ranges not set in `options` are widened to cover every overlay.
///
/// # Errors
/// Returns an error if the plot cannot be drawn.
pub fn render<P, T>(
    root: &P::Root,
    domain: &DVector<T>,
    range: &DVector<T>,
    overlays: impl IntoIterator<Item = Overlay<T>>,
    mut options: PlotOptions<T>,
) -> Result<(), P::Error>
where
    P: PlotBackend,
    T: Value,
{
    let base = PlottingElement::from_curve(domain.as_slice(), range.as_slice(), "f(x)");

    let mut elements = vec![base];
    for overlay in overlays {
        elements.push(PlottingElement::from_overlay(&overlay));
        elements.push(PlottingElement::from_highlight(&overlay));
    }

    if let Some((x_range, y_range)) = union_ranges(&elements) {
        options.x_range.get_or_insert(x_range);
        options.y_range.get_or_insert(y_range);
    }

    let mut plot = Plot::<P, T>::new(root, &options, &elements[0])?;
    for element in &elements[1..] {
        plot.with_element(element)?;
    }
    plot.finish()
}

/// Path for a plot: `$TARGET_DIR/plot_output/{name}.png`
///
/// `TARGET_DIR` defaults to `target`. Creates the directory if it doesn't exist.
#[must_use]
pub fn plot_path(name: &str) -> PathBuf {
    let target_dir = std::env::var("TARGET_DIR").unwrap_or_else(|_| "target".into());
    let plots_dir = std::path::Path::new(&target_dir).join("plot_output");
    let _ = std::fs::create_dir_all(&plots_dir);

    plots_dir.join(format!("{name}.png"))
}
