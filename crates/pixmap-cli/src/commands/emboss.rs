//! Emboss command

use anyhow::Result;
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(input: &Path, output: &Path, verbose: bool) -> Result<()> {
    trace!(input = %input.display(), "emboss::run");

    let mut image = super::load_image(input)?;
    info!(w = image.width(), h = image.height(), "Applying emboss");

    if verbose {
        println!("Applying emboss to {}", input.display());
    }

    pixmap_ops::emboss(&mut image);
    super::save_image(output, &image)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
