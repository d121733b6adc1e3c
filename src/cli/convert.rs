//! Convert command implementation.
//!
//! Decodes an image, renders it as ASCII art and writes the text file.

use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, Overrides};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::{render, write_text};
use crate::types::Raster;

/// Convert an image into an ASCII-art text file
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Image to convert [default: picture.jpg]
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Text file to write [default: output.txt]
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Glyph ramp, darkest bucket first [default: "@#&$%?*+;:,."]
    #[arg(long, short)]
    pub palette: Option<String>,

    /// Config file (defaults to imgascii.yaml in the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress status output
    #[arg(long, short)]
    pub quiet: bool,
}

impl ConvertArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            input: self.input.clone(),
            output: self.output.clone(),
            palette: self.palette.clone(),
        }
    }
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let config = Config::discover(args.config.as_deref(), std::path::Path::new("."))?
        .with_overrides(args.overrides());
    convert(&config, printer)
}

/// Run the decode, render and write pipeline for a resolved config.
///
/// The input is decoded before anything is written, so a decode failure
/// leaves the output path untouched.
pub fn convert(config: &Config, printer: &Printer) -> Result<()> {
    let palette = config.palette()?;

    printer.status("Decoding", &printer.cyan(&display_path(&config.input)));
    let raster = Raster::open(&config.input)?;

    let text = render(&raster, &palette);
    printer.info(
        "Rendered",
        &format!(
            "{} {}",
            plural(raster.height() as usize, "line", "lines"),
            printer.dim(&format!(
                "({}x{}, {})",
                raster.width(),
                raster.height(),
                plural(palette.len(), "glyph", "glyphs")
            ))
        ),
    );

    write_text(&text, &config.output)?;
    printer.status("Wrote", &printer.cyan(&display_path(&config.output)));

    Ok(())
}
