//! RGB color triples and channel arithmetic helpers.
//!
//! The pixel-map format stores one integer triple per pixel, each channel
//! in [0, 255]. [`Rgb`] is that triple; [`clamp_channel`] reduces the wider
//! intermediate values the filters accumulate (sums, signed differences)
//! back into channel range.
//!
//! # Memory Layout
//!
//! `Rgb` is `#[repr(C)]`, three bytes, so a `Vec<Rgb>` is a contiguous
//! interleaved `R G B R G B ...` buffer.
//!
//! # Used By
//!
//! - [`crate::image::Image`] - the pixel buffer stores `Rgb` values
//! - `pixmap-ops` - per-pixel filter arithmetic
//! - `pixmap-io` - format reading/writing

use std::fmt;

/// An RGB color with 8-bit channels.
///
/// # Example
///
/// ```rust
/// use pixmap_core::Rgb;
///
/// let c = Rgb::new(10, 20, 30);
/// assert_eq!(c.r, 10);
/// assert_eq!(Rgb::gray(128), Rgb::new(128, 128, 128));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Creates a color from three channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray color with all three channels set to `v`.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Returns the channels as an `[r, g, b]` array.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns `true` if all three channels are equal.
    #[inline]
    pub const fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

/// Clamps an intermediate channel value to [0, 255].
///
/// Filter arithmetic works in `i64` (sums and signed differences can leave
/// byte range); this reduces the result to a storable channel.
///
/// # Example
///
/// ```rust
/// use pixmap_core::clamp_channel;
///
/// assert_eq!(clamp_channel(-17), 0);
/// assert_eq!(clamp_channel(128), 128);
/// assert_eq!(clamp_channel(300), 255);
/// ```
#[inline]
pub const fn clamp_channel(value: i64) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}
