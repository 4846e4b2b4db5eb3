//! Invert filter.

use pixmap_core::{Image, Rgb};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Inverts the image in place: each channel becomes `255 - channel`.
///
/// An involution over byte-valued buffers: applying it twice restores the
/// original image exactly.
pub fn invert(image: &mut Image) {
    trace!(w = image.width(), h = image.height(), "invert");
    image.map_pixels(|px| Rgb::new(255 - px.r, 255 - px.g, 255 - px.b));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_values() {
        let mut img = Image::filled(2, 2, Rgb::new(0, 128, 255)).unwrap();
        invert(&mut img);
        assert_eq!(img.pixel(1, 1), Rgb::new(255, 127, 0));
    }

    #[test]
    fn test_invert_is_involution() {
        let pixels: Vec<Rgb> = (0u32..12)
            .map(|i| Rgb::new((i * 21) as u8, (i * 13) as u8, (255 - i * 7) as u8))
            .collect();
        let original = Image::from_pixels(4, 3, pixels).unwrap();
        let mut img = original.clone();
        invert(&mut img);
        assert_ne!(img, original);
        invert(&mut img);
        assert_eq!(img, original);
    }
}
