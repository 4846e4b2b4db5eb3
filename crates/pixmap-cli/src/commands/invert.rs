//! Invert command

use anyhow::Result;
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(input: &Path, output: &Path, verbose: bool) -> Result<()> {
    trace!(input = %input.display(), "invert::run");

    let mut image = super::load_image(input)?;
    info!(w = image.width(), h = image.height(), "Applying invert");

    if verbose {
        println!("Applying invert to {}", input.display());
    }

    pixmap_ops::invert(&mut image);
    super::save_image(output, &image)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
