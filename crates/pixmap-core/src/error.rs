//! Error types for pixmap-core operations.
//!
//! A single [`Error`] enum covers the failure modes of the pixel buffer:
//! buffer construction with unusable dimensions, and pixel access outside
//! the grid. Both are precondition violations — the buffer never clamps an
//! index or silently shrinks a request.
//!
//! # Usage
//!
//! ```rust
//! use pixmap_core::{Error, Result};
//!
//! fn check_coords(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Used By
//!
//! - [`crate::image::Image`] - construction and bounds checking
//! - `pixmap-io` - propagated through its own error type

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pixel buffer operations.
///
/// Uses [`thiserror`] for the [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside the image bounds.
    ///
    /// Returned by [`Image::get`](crate::Image::get) and
    /// [`Image::set`](crate::Image::set) when `x >= width` or
    /// `y >= height`. Under correct input the I/O adapter and the filters
    /// never trigger this; seeing it signals a caller bug.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Image dimensions are unusable.
    ///
    /// Returned when a requested width or height is negative, when the
    /// pixel count would overflow the address space, or when a supplied
    /// pixel vector does not match the requested dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: i64,
        /// Requested height
        height: i64,
        /// Reason why the dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: i64, height: i64, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = Error::out_of_bounds(5, 7, 4, 4);
        let msg = err.to_string();
        assert!(msg.contains("(5, 7)"));
        assert!(msg.contains("4x4"));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_invalid_dimensions_message() {
        let err = Error::invalid_dimensions(-3, 2, "width is negative");
        let msg = err.to_string();
        assert!(msg.contains("-3x2"));
        assert!(msg.contains("width is negative"));
        assert!(!err.is_bounds_error());
    }
}
