//! Zero-argument generator for the Fourier transform illustration
//!
//! Synthesizes the demonstration signal, computes its magnitude spectrum,
//! and saves the two-panel PNG under the assets directory.

use anyhow::Context;
use fourier_demo::render::{render_chart, RenderConfig};
use fourier_demo::signal::{synthesize, SynthConfig};
use fourier_demo::spectrum;
use std::path::{Path, PathBuf};
use std::{env, fs};

/// Environment override for the assets directory
const ASSETS_DIR_ENV: &str = "FOURIER_ASSETS_DIR";

/// Output file name inside the assets directory
const OUTPUT_FILE_NAME: &str = "fourier_transform.png";

/// Resolve the assets directory independent of the current working directory
fn assets_dir() -> PathBuf {
    match env::var_os(ASSETS_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => {
            // Default: `assets/` at the workspace root, one level above
            // this crate's manifest directory
            let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
            manifest_dir
                .parent()
                .unwrap_or(manifest_dir)
                .join("assets")
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = SynthConfig::default();
    let series = synthesize(&config).context("signal synthesis failed")?;
    log::debug!(
        "synthesized {} samples at {} Hz",
        series.len(),
        config.sample_rate
    );

    let spectrum = spectrum::analyze(&series.amplitudes, config.sample_rate)
        .context("spectrum analysis failed")?;
    log::debug!("computed {} frequency bins", spectrum.len());

    let dir = assets_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;

    let out_path = dir.join(OUTPUT_FILE_NAME);
    render_chart(&series, &spectrum, &RenderConfig::default(), &out_path)
        .context("chart rendering failed")?;

    println!("Saved image to: {}", out_path.display());
    Ok(())
}
