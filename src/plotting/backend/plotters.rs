//! Plotting backend using the `plotters` crate
//!
//! Everything is coerced to `f64` for plotting purposes.
//!
//! Uses the bitmap backend to create PNG files. Text (titles, legend, axis labels) uses the
//! system `sans-serif` font.
use std::{ops::Range, path::Path};

use plotters::{
    coord::{types::RangedCoordf64, Shift},
    prelude::*,
};

use crate::{
    plotting::{ColorSource, PlotBackend, PlotOptions},
    sampler::Sample,
    value::{normalize_range, CoordExt, Value},
};

/// Radius in pixels of a highlighted point
const MARKER_RADIUS: i32 = 4;

/// Render a sample and its overlays for `i` in `1..=size-3` to a PNG file
///
/// Convenience wrapper around [`crate::plotting::render`]
///
/// # Errors
/// Returns an error if the plot could not be created or drawn
pub fn render_to_file<'a, T: Value>(
    path: &'a Path,
    sample: &Sample<T>,
    size: usize,
    options: PlotOptions<T>,
) -> Result<(), Error<'a>> {
    let root = Root::new(path, options.size)?;
    crate::plotting::render::<Backend, T>(
        &root,
        sample.domain(),
        sample.range(),
        sample.overlays(size),
        options,
    )
}

/// A drawing area root for plotters
pub struct Root<'a>(DrawingArea<BitMapBackend<'a>, Shift>);
impl<'a> AsRef<DrawingArea<BitMapBackend<'a>, Shift>> for Root<'a> {
    fn as_ref(&self) -> &DrawingArea<BitMapBackend<'a>, Shift> {
        &self.0
    }
}
impl<'a> Root<'a> {
    /// Create a new drawing area root for plotters
    ///
    /// Will create a PNG file at the given path with the given size
    ///
    /// # Errors
    /// Returns an error if the drawing area cannot be cleared
    pub fn new(path: &'a Path, size: (u32, u32)) -> Result<Self, Error<'a>> {
        let backend = BitMapBackend::new(path, size);
        let root = IntoDrawingArea::into_drawing_area(backend);
        root.fill(&WHITE)?;
        Ok(Self(root))
    }
}

/// Plotters backend for plotting
pub struct Backend<'root> {
    context: ChartContext<'root, BitMapBackend<'root>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    y_range: Range<f64>,
    palette: ColorSource<RGBAColor>,

    x_label: Option<String>,
    y_label: Option<String>,

    hide_legend: bool,
    hide_axes: bool,
}
impl<'root> PlotBackend for Backend<'root> {
    type Error = Error<'root>;
    type Color = RGBAColor;
    type Root = Root<'root>;

    fn next_color(&mut self) -> Self::Color {
        self.palette.next_color()
    }

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
        Self: Sized,
    {
        //
        // T(Range) -> f64(Range)
        let x_range: Range<f64> = normalize_range(cast(x_range.start)?..cast(x_range.end)?);
        let y_range: Range<f64> = normalize_range(cast(y_range.start)?..cast(y_range.end)?);

        let mut context = ChartBuilder::on(root.as_ref());
        context.margin(5);

        if !hide_axes {
            context.x_label_area_size(30).y_label_area_size(60);
        }

        if !title.is_empty() {
            context.caption(title, (FontFamily::SansSerif, 16).into_font());
        }

        let context = context.build_cartesian_2d(x_range, y_range.clone())?;

        let palette = ColorSource::new(
            BLACK.into(),
            vec![
                RED.into(),
                GREEN.into(),
                MAGENTA.into(),
                CYAN.into(),
                RGBColor(255, 165, 0).into(), // Orange
                RGBColor(128, 0, 128).into(), // Purple
            ],
        );

        Ok(Self {
            context,
            y_range,
            palette,

            x_label,
            y_label,

            hide_legend,
            hide_axes,
        })
    }

    fn add_line<T: Value>(
        &mut self,
        data: &[(T, T)],
        label: Option<&str>,
        width: u32,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let data = data.as_f64().map_err(|_| Error::Cast)?;
        let data = data.y_clipped(&self.y_range);

        let style = ShapeStyle::from(color).stroke_width(width);
        let series = self.context.draw_series(LineSeries::new(data, style))?;
        if let Some(label) = label {
            series
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }
        Ok(())
    }

    fn add_marker<T: Value>(&mut self, x: T, y: T) -> Result<(), Self::Error> {
        let x = cast(x)?;
        let y = cast(y)?.clamp(self.y_range.start, self.y_range.end);

        let style = ShapeStyle::from(&BLUE).filled();
        let shape = Circle::new((x, y), MARKER_RADIUS, style);
        self.context.draw_series(std::iter::once(shape))?;
        Ok(())
    }

    fn finalize(mut self) -> Result<(), Self::Error> {
        if !self.hide_axes {
            //
            // Mesh and axes
            let mut context = self.context.configure_mesh();

            context
                .label_style((FontFamily::SansSerif, 12))
                .x_label_formatter(&|v| crate::display::format_value(*v))
                .y_label_formatter(&|v| crate::display::format_value(*v));

            if let Some(x_label) = &self.x_label {
                context.x_desc(x_label);
            }

            if let Some(y_label) = &self.y_label {
                context.y_desc(y_label);
            }

            context.draw()?;
        }

        if !self.hide_legend {
            //
            // Legend
            self.context
                .configure_series_labels()
                .label_font((FontFamily::SansSerif, 10))
                .background_style(WHITE.mix(0.5))
                .border_style(BLACK)
                .position(SeriesLabelPosition::UpperLeft)
                .draw()?;
        }

        self.context.plotting_area().present()?;
        Ok(())
    }
}

fn cast<'root, T: Value>(value: T) -> Result<f64, Error<'root>> {
    num_traits::cast(value).ok_or(Error::Cast)
}

/// Error occurring during plotting
#[derive(Debug, thiserror::Error)]
pub enum Error<'root> {
    /// Error drawing the plot
    #[error("Error drawing plot: {0}")]
    Draw(#[from] DrawingAreaErrorKind<<BitMapBackend<'root> as DrawingBackend>::ErrorType>),

    /// Error casting a value
    #[error("A value could not be represented as f64")]
    Cast,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::DEFAULT_SIZE;

    #[test]
    fn test_render_png() {
        let path = std::env::temp_dir().join(format!(
            "secant_sampler_render_{}.png",
            std::process::id()
        ));

        // No text is drawn, so no system fonts are needed
        let options = PlotOptions {
            title: String::new(),
            size: (320, 240),
            hide_legend: true,
            hide_axes: true,
            ..PlotOptions::default()
        };
        let sample = Sample::<f64>::parabola(DEFAULT_SIZE).unwrap();
        render_to_file(&path, &sample, DEFAULT_SIZE, options).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_render_png_reversed_range() {
        let path = std::env::temp_dir().join(format!(
            "secant_sampler_reversed_{}.png",
            std::process::id()
        ));

        let options = PlotOptions {
            title: String::new(),
            size: (320, 240),
            y_range: Some(10.0..0.0),
            hide_legend: true,
            hide_axes: true,
            ..PlotOptions::default()
        };
        let sample = Sample::<f64>::parabola(DEFAULT_SIZE).unwrap();
        render_to_file(&path, &sample, DEFAULT_SIZE, options).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_render_png_nan_sample() {
        let path = std::env::temp_dir().join(format!(
            "secant_sampler_nan_{}.png",
            std::process::id()
        ));

        let options = PlotOptions {
            title: String::new(),
            size: (320, 240),
            hide_legend: true,
            hide_axes: true,
            ..PlotOptions::default()
        };
        let sample = Sample::<f64>::run(5, |_| f64::NAN).unwrap();
        render_to_file(&path, &sample, 5, options).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
