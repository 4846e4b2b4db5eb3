//! Grayscale filter.
//!
//! Replaces every pixel with the floor of its channel mean, applied to all
//! three channels. Each output pixel depends only on its own prior value.

use pixmap_core::{clamp_channel, Image, Rgb};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Converts the image to grayscale in place.
///
/// Every pixel becomes `floor((r + g + b) / 3)` on all three channels.
/// Not idempotent in general: a second application is a no-op only because
/// the first left every pixel with equal channels.
///
/// # Example
///
/// ```rust
/// use pixmap_core::{Image, Rgb};
/// use pixmap_ops::grayscale;
///
/// let mut img = Image::filled(1, 1, Rgb::new(10, 20, 31)).unwrap();
/// grayscale(&mut img);
/// assert_eq!(img.pixel(0, 0), Rgb::gray(20)); // floor(61 / 3)
/// ```
pub fn grayscale(image: &mut Image) {
    trace!(w = image.width(), h = image.height(), "grayscale");
    image.map_pixels(|px| {
        let sum = px.r as i64 + px.g as i64 + px.b as i64;
        Rgb::gray(clamp_channel(sum / 3))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_become_equal() {
        let mut img = Image::from_pixels(
            2,
            1,
            vec![Rgb::new(10, 20, 30), Rgb::new(255, 0, 100)],
        )
        .unwrap();
        grayscale(&mut img);
        assert!(img.pixels().all(|(_, _, px)| px.is_gray()));
    }

    #[test]
    fn test_mean_is_floored() {
        // (10 + 20 + 30) / 3 = 20, (255 + 0 + 100) / 3 = 118.33 -> 118
        let mut img = Image::from_pixels(
            2,
            1,
            vec![Rgb::new(10, 20, 30), Rgb::new(255, 0, 100)],
        )
        .unwrap();
        grayscale(&mut img);
        assert_eq!(img.pixel(0, 0), Rgb::gray(20));
        assert_eq!(img.pixel(1, 0), Rgb::gray(118));
    }

    #[test]
    fn test_white_stays_white() {
        let mut img = Image::filled(3, 3, Rgb::gray(255)).unwrap();
        grayscale(&mut img);
        assert!(img.pixels().all(|(_, _, px)| px == Rgb::gray(255)));
    }

    #[test]
    fn test_second_application_is_noop_on_gray() {
        let mut img = Image::filled(2, 2, Rgb::new(7, 200, 90)).unwrap();
        grayscale(&mut img);
        let once = img.clone();
        grayscale(&mut img);
        assert_eq!(img, once);
    }
}
