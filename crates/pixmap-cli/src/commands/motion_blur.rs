//! Motion blur command
//!
//! Takes the window length validated by the driver; a length below 1
//! still round-trips the file through an unchanged buffer.

use anyhow::Result;
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(input: &Path, output: &Path, length: usize, verbose: bool) -> Result<()> {
    trace!(input = %input.display(), length, "motion_blur::run");

    let mut image = super::load_image(input)?;
    info!(
        w = image.width(),
        h = image.height(),
        length,
        "Applying motion blur"
    );

    if verbose {
        println!(
            "Applying motion blur (length={}) to {}",
            length,
            input.display()
        );
    }

    pixmap_ops::motion_blur(&mut image, length);
    super::save_image(output, &image)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
