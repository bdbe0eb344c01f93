//! Two-panel chart rendering with plotters
//!
//! Draws the time-domain waveform next to its magnitude spectrum and writes
//! a PNG through the off-screen bitmap backend, so no display server is
//! needed.

use crate::signal::TimeSeries;
use crate::spectrum::Spectrum;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Time series and spectrum must be non-empty")]
    EmptyInput,

    #[error("Chart drawing failed: {0}")]
    Draw(String),
}

/// Canvas and panel layout settings
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas width in pixels (12 in at 150 dpi)
    pub width_px: u32,

    /// Canvas height in pixels (4 in at 150 dpi)
    pub height_px: u32,

    /// Time panel is clipped to this window in seconds
    pub time_window_s: f64,

    /// Spectrum panel is clipped to this upper frequency in Hz
    pub max_frequency_hz: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width_px: 1800,
            height_px: 600,
            time_window_s: 0.1,
            max_frequency_hz: 500.0,
        }
    }
}

/// Render the two-panel illustration and write it to `path`
///
/// Left panel: amplitude vs. time over the first `time_window_s` seconds.
/// Right panel: impulse (stem) plot of magnitude vs. frequency up to
/// `max_frequency_hz`. Overwrites any existing file at `path`.
pub fn render_chart(
    series: &TimeSeries,
    spectrum: &Spectrum,
    config: &RenderConfig,
    path: &Path,
) -> Result<(), RenderError> {
    if series.is_empty() || spectrum.is_empty() {
        return Err(RenderError::EmptyInput);
    }

    let root =
        BitMapBackend::new(path, (config.width_px, config.height_px)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| RenderError::Draw(e.to_string()))?;

    let (left, right) = root.split_horizontally((config.width_px / 2) as i32);

    draw_time_panel(&left, series, config)?;
    draw_spectrum_panel(&right, spectrum, config)?;

    root.present()
        .map_err(|e| RenderError::Draw(e.to_string()))?;

    Ok(())
}

fn draw_time_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &TimeSeries,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    let t_max = config.time_window_s;
    let (y_min, y_max) = amplitude_bounds(&series.amplitudes);

    let mut chart = ChartBuilder::on(area)
        .caption("Time domain signal", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..t_max, y_min..y_max)
        .map_err(|e| RenderError::Draw(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Time [s]")
        .y_desc("Amplitude")
        .draw()
        .map_err(|e| RenderError::Draw(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            series
                .timestamps
                .iter()
                .zip(series.amplitudes.iter())
                .map(|(&t, &a)| (t, a))
                .take_while(|&(t, _)| t <= t_max),
            &BLUE,
        ))
        .map_err(|e| RenderError::Draw(e.to_string()))?;

    Ok(())
}

fn draw_spectrum_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    spectrum: &Spectrum,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    let f_max = config.max_frequency_hz;

    let points: Vec<(f64, f64)> = spectrum
        .frequencies
        .iter()
        .zip(spectrum.magnitudes.iter())
        .map(|(&f, &m)| (f, m))
        .take_while(|&(f, _)| f <= f_max)
        .collect();

    let y_top = points.iter().map(|&(_, m)| m).fold(0.0_f64, f64::max);
    let y_top = if y_top > 0.0 { y_top * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption("Magnitude spectrum (FFT)", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..f_max, 0.0..y_top)
        .map_err(|e| RenderError::Draw(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Frequency [Hz]")
        .y_desc("Magnitude")
        .draw()
        .map_err(|e| RenderError::Draw(e.to_string()))?;

    // Stems: one vertical segment per bin, marker at the tip
    chart
        .draw_series(
            points
                .iter()
                .map(|&(f, m)| PathElement::new(vec![(f, 0.0), (f, m)], BLUE)),
        )
        .map_err(|e| RenderError::Draw(e.to_string()))?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(f, m)| Circle::new((f, m), 2, BLUE.filled())),
        )
        .map_err(|e| RenderError::Draw(e.to_string()))?;

    Ok(())
}

/// Y-axis bounds with a small margin around the observed amplitude range
fn amplitude_bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min.is_finite() && max.is_finite() && max > min {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    } else {
        // Empty or flat input; pick a unit range so axes stay drawable
        (-1.0, 1.0)
    }
}
