//! # pixmap-core
//!
//! Core types for text pixel-map processing.
//!
//! This crate is the leaf of the pixmap-rs workspace and provides:
//!
//! - [`Rgb`] - an 8-bit RGB color triple
//! - [`Image`] - a fixed-size, row-major pixel buffer with bounds-checked
//!   access
//! - [`Error`] / [`Result`] - the shared error taxonomy
//!
//! ## Crate Structure
//!
//! All other pixmap-rs crates depend on `pixmap-core`:
//!
//! ```text
//! pixmap-core (this crate)
//!    ^
//!    |
//!    +-- pixmap-ops (filters)
//!    +-- pixmap-io  (text pixel-map reader/writer)
//!    +-- pixmap-cli (driver binary)
//! ```
//!
//! ## Lifecycle
//!
//! An [`Image`] is built once by `pixmap-io` from parsed input, mutated in
//! place by exactly one `pixmap-ops` filter, then serialized back out. The
//! whole pipeline is single-threaded and synchronous; the buffer is never
//! shared.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod image;

// Re-exports for convenience
pub use color::{clamp_channel, Rgb};
pub use error::{Error, Result};
pub use image::Image;
