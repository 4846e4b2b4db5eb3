//! # pixmap-ops
//!
//! Spatial filters for text pixel-map images.
//!
//! Four independent transforms over a [`pixmap_core::Image`], each a single
//! in-place pass:
//!
//! - [`grayscale`] - channel mean, all channels set to it
//! - [`invert`] - 255 minus each channel
//! - [`emboss`] - up-left neighbor difference mapped around mid-gray
//! - [`motion_blur`] - rightward window average per row
//!
//! # In-Place Traversal Contracts
//!
//! The point filters (grayscale, invert) read only the pixel they write,
//! so traversal order is irrelevant. The neighborhood filters mutate the
//! buffer they read from, and their traversal direction is part of the
//! filter's definition, not an implementation detail:
//!
//! - emboss walks x and y *descending* so the up-left neighbor is always
//!   read before it has been overwritten;
//! - motion blur walks each row left-to-right and overwrites as it goes;
//!   its window only extends rightward, over cells the sweep has not
//!   reached yet.
//!
//! Both directions are pinned by tests in their modules.
//!
//! # Example
//!
//! ```rust
//! use pixmap_core::{Image, Rgb};
//! use pixmap_ops::{grayscale, invert};
//!
//! let mut img = Image::filled(2, 2, Rgb::new(30, 60, 90)).unwrap();
//! grayscale(&mut img);
//! assert_eq!(img.pixel(0, 0), Rgb::gray(60));
//! invert(&mut img);
//! assert_eq!(img.pixel(0, 0), Rgb::gray(195));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod emboss;
pub mod grayscale;
pub mod invert;
pub mod motion_blur;

pub use emboss::emboss;
pub use grayscale::grayscale;
pub use invert::invert;
pub use motion_blur::motion_blur;
