//! Grayscale command

use anyhow::Result;
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(input: &Path, output: &Path, verbose: bool) -> Result<()> {
    trace!(input = %input.display(), "grayscale::run");

    let mut image = super::load_image(input)?;
    info!(w = image.width(), h = image.height(), "Applying grayscale");

    if verbose {
        println!("Applying grayscale to {}", input.display());
    }

    pixmap_ops::grayscale(&mut image);
    super::save_image(output, &image)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
