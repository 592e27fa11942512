use secant_sampler::{
    display::{overlay_line, sequence_line},
    plotting::{self, PlotOptions},
    sampler::{Sample, DEFAULT_SIZE},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sample = Sample::<f64>::parabola(DEFAULT_SIZE)?;

    println!("{}", sequence_line("x", sample.domain()));
    println!("{}", sequence_line("y", sample.range()));
    println!("{}", sequence_line("m", sample.slopes()));

    for overlay in sample.overlays(DEFAULT_SIZE) {
        println!("{}", overlay_line(&overlay));
    }

    let path = plotting::plot_path("fun_plot");
    plotting::plotters::render_to_file(&path, &sample, DEFAULT_SIZE, PlotOptions::default())
        .map_err(|e| e.to_string())?;
    println!("Wrote plot to {}", path.display());

    Ok(())
}
