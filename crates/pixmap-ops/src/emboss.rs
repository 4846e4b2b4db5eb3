//! Emboss filter.
//!
//! Each pixel becomes mid-gray offset by the largest signed channel
//! difference against its up-left neighbor. The filter runs in place, so
//! the sweep direction is part of its definition: x descends from the
//! right edge and, within each column, y descends from the bottom edge.
//! Neighbor (x-1, y-1) is then always processed strictly *after* (x, y)
//! and is read pre-mutation.

use pixmap_core::{clamp_channel, Image, Rgb};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Embosses the image in place.
///
/// Border pixels (x = 0 or y = 0) have no up-left neighbor and become flat
/// mid-gray (128). Every other pixel becomes `clamp(128 + diff)` where
/// `diff` is the signed per-channel difference against the up-left
/// neighbor with the largest absolute value; ties keep the earlier channel
/// in red, green, blue order (a later channel wins only when strictly
/// larger in magnitude).
///
/// # Example
///
/// ```rust
/// use pixmap_core::{Image, Rgb};
/// use pixmap_ops::emboss;
///
/// let mut img = Image::filled(1, 1, Rgb::new(40, 200, 10)).unwrap();
/// emboss(&mut img);
/// assert_eq!(img.pixel(0, 0), Rgb::gray(128));
/// ```
pub fn emboss(image: &mut Image) {
    trace!(w = image.width(), h = image.height(), "emboss");
    let (width, height) = image.dimensions();
    for x in (0..width).rev() {
        for y in (0..height).rev() {
            let diff = if x == 0 || y == 0 {
                0
            } else {
                largest_difference(image.pixel(x, y), image.pixel(x - 1, y - 1))
            };
            image.set_pixel(x, y, Rgb::gray(clamp_channel(128 + diff)));
        }
    }
}

/// Signed channel difference with the largest magnitude, red first.
fn largest_difference(cur: Rgb, up_left: Rgb) -> i64 {
    let mut diff = 0i64;
    for (a, b) in cur.channels().into_iter().zip(up_left.channels()) {
        let d = a as i64 - b as i64;
        if d.abs() > diff.abs() {
            diff = d;
        }
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel_is_mid_gray() {
        let mut img = Image::filled(1, 1, Rgb::new(1, 2, 3)).unwrap();
        emboss(&mut img);
        assert_eq!(img.pixel(0, 0), Rgb::gray(128));
    }

    #[test]
    fn test_first_row_and_column_are_flat() {
        // A 2x1 image has no pixel with an in-bounds up-left neighbor.
        let mut img =
            Image::from_pixels(2, 1, vec![Rgb::new(10, 20, 30), Rgb::new(40, 50, 60)]).unwrap();
        emboss(&mut img);
        assert_eq!(img.pixel(0, 0), Rgb::gray(128));
        assert_eq!(img.pixel(1, 0), Rgb::gray(128));
    }

    #[test]
    fn test_interior_uses_largest_channel_difference() {
        let mut img = Image::new(2, 2).unwrap();
        img.set(0, 0, Rgb::new(100, 100, 100)).unwrap();
        img.set(1, 1, Rgb::new(110, 70, 120)).unwrap();
        emboss(&mut img);
        // Differences against (0,0): +10, -30, +20; green wins with -30.
        assert_eq!(img.pixel(1, 1), Rgb::gray(98));
    }

    #[test]
    fn test_tie_keeps_earlier_channel() {
        let mut img = Image::new(2, 2).unwrap();
        img.set(0, 0, Rgb::new(100, 100, 100)).unwrap();
        img.set(1, 1, Rgb::new(120, 80, 100)).unwrap();
        emboss(&mut img);
        // Red +20 and green -20 tie in magnitude; red was checked first.
        assert_eq!(img.pixel(1, 1), Rgb::gray(148));
    }

    #[test]
    fn test_neighbor_read_before_overwrite() {
        // A 3x3 ramp: every interior pixel must diff against the
        // *original* up-left value, not the already-embossed one.
        let pixels: Vec<Rgb> = (0u8..9).map(|i| Rgb::gray(i * 20)).collect();
        let mut img = Image::from_pixels(3, 3, pixels).unwrap();
        emboss(&mut img);
        // Up-left distance on this ramp is 4 cells of 20 each = 80.
        assert_eq!(img.pixel(1, 1), Rgb::gray(208));
        assert_eq!(img.pixel(2, 1), Rgb::gray(208));
        assert_eq!(img.pixel(1, 2), Rgb::gray(208));
        assert_eq!(img.pixel(2, 2), Rgb::gray(208));
        assert_eq!(img.pixel(0, 2), Rgb::gray(128));
        assert_eq!(img.pixel(2, 0), Rgb::gray(128));
    }

    #[test]
    fn test_result_clamps_to_byte_range() {
        let mut img = Image::new(2, 2).unwrap();
        img.set(0, 0, Rgb::new(255, 0, 0)).unwrap();
        img.set(1, 1, Rgb::new(0, 255, 0)).unwrap();
        emboss(&mut img);
        // Red diff -255 dominates; 128 - 255 clamps to 0.
        assert_eq!(img.pixel(1, 1), Rgb::gray(0));
    }

    #[test]
    fn test_empty_image_is_noop() {
        let mut img = Image::new(0, 0).unwrap();
        emboss(&mut img);
        assert!(img.is_empty());
    }
}
