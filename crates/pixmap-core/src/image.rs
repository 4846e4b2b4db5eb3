//! The pixel buffer: a 2D grid of RGB triples.
//!
//! [`Image`] is the one data structure the whole workspace revolves around.
//! It is created once from parsed input, mutated in place by exactly one
//! filter, then serialized back out.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order in a contiguous `Vec<Rgb>`,
//! top-to-bottom, indexed by `y * width + x`:
//!
//! ```text
//! [ (0,0) (1,0) (2,0) ... ]  <- Row 0
//! [ (0,1) (1,1) (2,1) ... ]  <- Row 1
//! ```
//!
//! # Access Discipline
//!
//! Two accessor tiers:
//!
//! - [`get`](Image::get) / [`set`](Image::set) return
//!   [`Error::OutOfBounds`] on a bad coordinate; this is the public
//!   contract for callers that have not established bounds themselves.
//! - [`pixel`](Image::pixel) / [`set_pixel`](Image::set_pixel) are
//!   infallible and debug-asserted; the filter sweeps use these since
//!   their loop bounds come from the image itself.
//!
//! Dimensions are fixed at construction; there is no resize.
//!
//! # Usage
//!
//! ```rust
//! use pixmap_core::{Image, Rgb};
//!
//! let mut img = Image::new(4, 3).unwrap();
//! img.set(2, 1, Rgb::new(255, 0, 0)).unwrap();
//! assert_eq!(img.get(2, 1).unwrap(), Rgb::new(255, 0, 0));
//! assert!(img.get(4, 0).is_err());
//! ```
//!
//! # Used By
//!
//! - `pixmap-ops` - in-place filter passes
//! - `pixmap-io` - construction from parsed text, serialization

use crate::{Error, Result, Rgb};

/// Owned rectangular pixel buffer with fixed dimensions.
///
/// Construction takes *signed* dimensions: a parsed header can legally
/// contain a negative number, and rejecting it is this type's job
/// ([`Error::InvalidDimensions`]), not the parser's. Zero width or height
/// is permitted and yields an empty image. All cells start black, so the
/// buffer is fully populated from the moment it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Pixel data, row-major
    data: Vec<Rgb>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl Image {
    /// Creates a new image with every pixel black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `width` or `height` is
    /// negative, exceeds `u32::MAX`, or the pixel count would overflow.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixmap_core::Image;
    ///
    /// let img = Image::new(640, 480).unwrap();
    /// assert_eq!(img.dimensions(), (640, 480));
    /// assert!(Image::new(-1, 480).is_err());
    /// ```
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let (w, h) = Self::check_dimensions(width, height)?;
        let count = (w as usize)
            .checked_mul(h as usize)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows"))?;
        Ok(Self {
            data: vec![Rgb::default(); count],
            width: w,
            height: h,
        })
    }

    /// Creates an image from existing row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] on negative dimensions or when
    /// `pixels.len()` is not exactly `width * height`.
    pub fn from_pixels(width: i64, height: i64, pixels: Vec<Rgb>) -> Result<Self> {
        let (w, h) = Self::check_dimensions(width, height)?;
        let expected = w as usize * h as usize;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            data: pixels,
            width: w,
            height: h,
        })
    }

    /// Creates an image with every pixel set to `fill`.
    pub fn filled(width: i64, height: i64, fill: Rgb) -> Result<Self> {
        let mut img = Self::new(width, height)?;
        img.data.fill(fill);
        Ok(img)
    }

    fn check_dimensions(width: i64, height: i64) -> Result<(u32, u32)> {
        if width < 0 {
            return Err(Error::invalid_dimensions(width, height, "width is negative"));
        }
        if height < 0 {
            return Err(Error::invalid_dimensions(width, height, "height is negative"));
        }
        let w = u32::try_from(width)
            .map_err(|_| Error::invalid_dimensions(width, height, "width exceeds u32"))?;
        let h = u32::try_from(height)
            .map_err(|_| Error::invalid_dimensions(width, height, "height exceeds u32"))?;
        Ok((w, h))
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the
    /// grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Result<Rgb> {
        if !self.in_bounds(x, y) {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        Ok(self.data[self.index(x, y)])
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the
    /// grid.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgb) -> Result<()> {
        if !self.in_bounds(x, y) {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        let idx = self.index(x, y);
        self.data[idx] = pixel;
        Ok(())
    }

    /// Returns the pixel at (x, y) without a bounds check in release
    /// builds.
    ///
    /// # Panics
    ///
    /// Debug-asserts that (x, y) is in bounds; callers must have
    /// established bounds already (filter sweeps take theirs from
    /// [`width`](Self::width)/[`height`](Self::height)).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        debug_assert!(self.in_bounds(x, y), "pixel out of bounds");
        self.data[self.index(x, y)]
    }

    /// Sets the pixel at (x, y); bounds are the caller's responsibility.
    ///
    /// # Panics
    ///
    /// Debug-asserts that (x, y) is in bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgb) {
        debug_assert!(self.in_bounds(x, y), "pixel out of bounds");
        let idx = self.index(x, y);
        self.data[idx] = pixel;
    }

    /// Returns row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `y < height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgb] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Returns row `y` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `y < height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [Rgb] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize;
        let width = self.width as usize;
        &mut self.data[start..start + width]
    }

    /// Iterates over all pixels with their coordinates, row-major.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixmap_core::{Image, Rgb};
    ///
    /// let img = Image::filled(2, 2, Rgb::gray(7)).unwrap();
    /// assert!(img.pixels().all(|(_, _, px)| px == Rgb::gray(7)));
    /// ```
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Applies a function to every pixel in place.
    ///
    /// The closure sees each pixel's prior value only; suitable for point
    /// transforms where no pixel depends on a neighbor.
    pub fn map_pixels<F>(&mut self, f: F)
    where
        F: Fn(Rgb) -> Rgb,
    {
        for px in &mut self.data {
            *px = f(*px);
        }
    }
}
