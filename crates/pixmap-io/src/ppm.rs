//! Plain-text pixel-map ("P3" PPM) reading and writing.
//!
//! # Input
//!
//! Reading tokenizes the whole stream on whitespace, so line breaks carry
//! no meaning. The expected token sequence is: a magic token (`P3`, only
//! its presence is checked), width, height, a maximum-channel-value token
//! (`255`, only its presence is checked), then exactly width x height
//! red/green/blue triples in row-major order. Anything after the last
//! pixel is ignored.
//!
//! # Output
//!
//! Writing produces one fixed textual layout, CRLF line endings
//! throughout: `P3`, `<width> <height>` and `255` each on their own line,
//! then one line per pixel row with single spaces between values and no
//! trailing space. Reading a file in this layout and writing it back
//! reproduces it byte for byte.

use crate::{IoError, IoResult};
use pixmap_core::{Image, Rgb};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Reads a text pixel-map file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let file = File::open(path)?;
    read_from(BufReader::new(file))
}

/// Writes a text pixel-map file.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_to(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}

/// Reads a text pixel-map from any reader.
///
/// # Errors
///
/// [`IoError::MalformedInput`] on a truncated token stream, a
/// non-integer token, or a channel value outside [0, 255];
/// [`pixmap_core::Error::InvalidDimensions`] (through
/// [`IoError::Core`]) on negative header dimensions.
pub fn read_from<R: Read>(mut reader: R) -> IoResult<Image> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_ascii_whitespace();

    // Magic and maxval are consumed but not validated.
    next_token(&mut tokens, "magic token")?;
    let width = parse_int(next_token(&mut tokens, "image width")?, "image width")?;
    let height = parse_int(next_token(&mut tokens, "image height")?, "image height")?;
    next_token(&mut tokens, "maximum channel value")?;

    let mut image = Image::new(width, height)?;
    debug!(width = image.width(), height = image.height(), "reading pixel map");

    for y in 0..image.height() {
        for x in 0..image.width() {
            let r = channel_value(&mut tokens, "red", x, y)?;
            let g = channel_value(&mut tokens, "green", x, y)?;
            let b = channel_value(&mut tokens, "blue", x, y)?;
            image.set_pixel(x, y, Rgb::new(r, g, b));
        }
    }
    Ok(image)
}

/// Writes a text pixel-map to any writer.
pub fn write_to<W: Write>(writer: &mut W, image: &Image) -> IoResult<()> {
    debug!(width = image.width(), height = image.height(), "writing pixel map");
    write!(writer, "P3\r\n{} {}\r\n255\r\n", image.width(), image.height())?;
    for y in 0..image.height() {
        for (x, px) in image.row(y).iter().enumerate() {
            if x > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{} {} {}", px.r, px.g, px.b)?;
        }
        write!(writer, "\r\n")?;
    }
    Ok(())
}

fn next_token<'a, I>(tokens: &mut I, what: &str) -> IoResult<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    tokens
        .next()
        .ok_or_else(|| IoError::MalformedInput(format!("unexpected end of input, expected {what}")))
}

fn parse_int(token: &str, what: &str) -> IoResult<i64> {
    token
        .parse::<i64>()
        .map_err(|_| IoError::MalformedInput(format!("{what} '{token}' is not an integer")))
}

fn channel_value<'a, I>(tokens: &mut I, channel: &str, x: u32, y: u32) -> IoResult<u8>
where
    I: Iterator<Item = &'a str>,
{
    let what = format!("{channel} channel of pixel ({x}, {y})");
    let value = parse_int(next_token(tokens, &what)?, &what)?;
    u8::try_from(value)
        .map_err(|_| IoError::MalformedInput(format!("{what} is {value}, outside [0, 255]")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "P3\r\n2 2\r\n255\r\n10 20 30 40 50 60\r\n70 80 90 100 110 120\r\n";

    fn canonical_image() -> Image {
        Image::from_pixels(
            2,
            2,
            vec![
                Rgb::new(10, 20, 30),
                Rgb::new(40, 50, 60),
                Rgb::new(70, 80, 90),
                Rgb::new(100, 110, 120),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_read_canonical() {
        let img = read_from(CANONICAL.as_bytes()).unwrap();
        assert_eq!(img, canonical_image());
    }

    #[test]
    fn test_round_trip_preserves_text() {
        let img = read_from(CANONICAL.as_bytes()).unwrap();
        let mut out = Vec::new();
        write_to(&mut out, &img).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), CANONICAL);
    }

    #[test]
    fn test_read_ignores_line_structure() {
        let scrambled = "P3 2\n2\t255 10 20 30\n40 50 60 70 80 90\r\n100\n110\n120";
        let img = read_from(scrambled.as_bytes()).unwrap();
        assert_eq!(img, canonical_image());
    }

    #[test]
    fn test_read_ignores_trailing_tokens() {
        let padded = format!("{CANONICAL}999 999 999");
        let img = read_from(padded.as_bytes()).unwrap();
        assert_eq!(img, canonical_image());
    }

    #[test]
    fn test_magic_not_validated() {
        let img = read_from("P6 1 1 255 1 2 3".as_bytes()).unwrap();
        assert_eq!(img.pixel(0, 0), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_empty_stream() {
        let err = read_from("".as_bytes()).unwrap_err();
        assert!(matches!(err, IoError::MalformedInput(_)));
        assert!(err.to_string().contains("magic token"));
    }

    #[test]
    fn test_truncated_pixel_data() {
        let err = read_from("P3 2 1 255 10 20".as_bytes()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unexpected end of input"));
        assert!(msg.contains("blue channel of pixel (0, 0)"));
    }

    #[test]
    fn test_non_integer_token() {
        let err = read_from("P3 1 1 255 10 abc 30".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("'abc' is not an integer"));
    }

    #[test]
    fn test_channel_out_of_range() {
        let err = read_from("P3 1 1 255 10 20 300".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("outside [0, 255]"));
    }

    #[test]
    fn test_negative_dimensions() {
        let err = read_from("P3 -2 1 255".as_bytes()).unwrap_err();
        assert!(matches!(err, IoError::Core(_)));
        assert!(err.to_string().contains("width is negative"));
    }

    #[test]
    fn test_zero_dimensions() {
        let img = read_from("P3 0 0 255".as_bytes()).unwrap();
        assert!(img.is_empty());
        let mut out = Vec::new();
        write_to(&mut out, &img).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "P3\r\n0 0\r\n255\r\n");
    }

    #[test]
    fn test_path_level_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.ppm");
        write(&path, &canonical_image()).unwrap();
        let loaded = read(&path).unwrap();
        assert_eq!(loaded, canonical_image());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), CANONICAL);
    }
}
