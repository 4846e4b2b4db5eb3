//! # pixmap-io
//!
//! Reading and writing of plain-text pixel-map images.
//!
//! One format is supported: the whitespace-tokenized "P3" text layout
//! (magic, width, height, maximum channel value, then row-major RGB
//! triples). See [`ppm`] for the exact input and output rules.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pixmap_io::{read, write};
//!
//! # fn main() -> pixmap_io::IoResult<()> {
//! let image = read("input.ppm")?;
//! write("output.ppm", &image)?;
//! # Ok(())
//! # }
//! ```
//!
//! Stream-level entry points ([`ppm::read_from`], [`ppm::write_to`]) take
//! any `Read`/`Write` implementor, which is what the tests use.
//!
//! # Guarantees
//!
//! A successfully read image is always fully populated: the reader either
//! delivers every pixel or fails with [`IoError::MalformedInput`]. The
//! writer never emits a partial file on a valid image.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod ppm;

pub use error::{IoError, IoResult};
pub use ppm::{read, write};
