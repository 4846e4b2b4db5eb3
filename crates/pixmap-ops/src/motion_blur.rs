//! Motion blur filter.
//!
//! Averages each pixel with up to `length - 1` pixels to its right in the
//! same row, clamped at the right edge. The sweep runs left-to-right and
//! overwrites in place; because a window only extends rightward, every
//! cell a window reads is still untouched by the sweep, so no row
//! snapshot is taken. That in-place contract is deliberate and pinned by
//! the tests here.

use pixmap_core::{Image, Rgb};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Applies a horizontal motion blur in place.
///
/// For each pixel (x, y), the channels become the floored average over
/// columns `x ..= min(width - 1, x + length - 1)` of row y. A `length`
/// below 1 leaves the image unchanged; `length` of 1 averages each pixel
/// with itself. No clamp is needed after the division: an average of byte
/// values cannot leave byte range.
///
/// # Example
///
/// ```rust
/// use pixmap_core::{Image, Rgb};
/// use pixmap_ops::motion_blur;
///
/// let mut img =
///     Image::from_pixels(2, 1, vec![Rgb::gray(10), Rgb::gray(30)]).unwrap();
/// motion_blur(&mut img, 2);
/// assert_eq!(img.pixel(0, 0), Rgb::gray(20));
/// assert_eq!(img.pixel(1, 0), Rgb::gray(30)); // edge clamp, window of one
/// ```
pub fn motion_blur(image: &mut Image, length: usize) {
    trace!(
        w = image.width(),
        h = image.height(),
        length,
        "motion_blur"
    );
    if length < 1 {
        return;
    }
    let width = image.width() as usize;
    for y in 0..image.height() {
        let row = image.row_mut(y);
        for x in 0..width {
            let max_x = (width - 1).min(x.saturating_add(length - 1));
            let window = &row[x..=max_x];
            let count = window.len() as u64;
            let mut sums = [0u64; 3];
            for px in window {
                sums[0] += px.r as u64;
                sums[1] += px.g as u64;
                sums[2] += px.b as u64;
            }
            row[x] = Rgb::new(
                (sums[0] / count) as u8,
                (sums[1] / count) as u8,
                (sums[2] / count) as u8,
            );
        }
    }
}
