//! pixmap - text pixel-map filter CLI
//!
//! Reads a plain-text pixel-map image, applies one filter, writes the
//! result:
//!
//! ```text
//! pixmap photo.ppm gray.ppm grayscale
//! pixmap photo.ppm blurred.ppm motionblur 9
//! ```
//!
//! Any malformed invocation (unknown filter, missing or extra length
//! argument, negative or non-integer length) prints the usage line and
//! exits cleanly without touching the output file.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

mod commands;

const USAGE: &str =
    "USAGE: pixmap <in-file> <out-file> <grayscale|invert|emboss|motionblur> [motion-blur-length]";

#[derive(Parser)]
#[command(name = "pixmap")]
#[command(version, about = "Text pixel-map image filters")]
struct Cli {
    /// Input pixel-map file
    input: PathBuf,

    /// Output pixel-map file
    output: PathBuf,

    /// Filter to apply
    #[arg(value_enum)]
    filter: Filter,

    /// Motion-blur window length (motionblur only)
    length: Option<i64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Filter {
    /// Channel-mean grayscale
    #[value(alias = "greyscale")]
    Grayscale,
    /// Channel inversion
    Invert,
    /// Up-left relief emboss
    Emboss,
    /// Horizontal window average
    Motionblur,
}

/// A validated invocation ready to dispatch.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Grayscale,
    Invert,
    Emboss,
    MotionBlur(usize),
}

/// Checks argument arity against the chosen filter.
///
/// motionblur takes exactly one extra argument, a non-negative window
/// length that must fit in `usize`; the other filters take none. `None`
/// means the invocation is malformed and only deserves the usage line.
fn action_for(filter: Filter, length: Option<i64>) -> Option<Action> {
    match (filter, length) {
        (Filter::Grayscale, None) => Some(Action::Grayscale),
        (Filter::Invert, None) => Some(Action::Invert),
        (Filter::Emboss, None) => Some(Action::Emboss),
        (Filter::Motionblur, Some(length)) => {
            usize::try_from(length).ok().map(Action::MotionBlur)
        }
        _ => None,
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if err.kind() == ErrorKind::DisplayHelp
                || err.kind() == ErrorKind::DisplayVersion =>
        {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    let Some(action) = action_for(cli.filter, cli.length) else {
        println!("{USAGE}");
        return Ok(());
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match action {
        Action::Grayscale => commands::grayscale::run(&cli.input, &cli.output, cli.verbose),
        Action::Invert => commands::invert::run(&cli.input, &cli.output, cli.verbose),
        Action::Emboss => commands::emboss::run(&cli.input, &cli.output, cli.verbose),
        Action::MotionBlur(length) => {
            commands::motion_blur::run(&cli.input, &cli.output, length, cli.verbose)
        }
    }
}
