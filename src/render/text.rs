//! Text output for rasters.
//!
//! Maps every pixel to a palette glyph and writes the result as
//! newline-terminated lines.

use std::fs;
use std::path::Path;

use crate::error::{AsciiError, Result};
use crate::types::{Palette, Raster};

/// Render a raster as ASCII art.
///
/// Produces one line per raster row, each exactly `width` glyphs long and
/// terminated by `\n`.
pub fn render(raster: &Raster, palette: &Palette) -> String {
    let capacity = (raster.width() as usize + 1) * raster.height() as usize;

    raster
        .rows()
        .fold(String::with_capacity(capacity), |mut text, row| {
            text.extend(row.iter().map(|p| palette.glyph_for(p.luminance())));
            text.push('\n');
            text
        })
}

/// Write rendered text to a file, creating or truncating it.
pub fn write_text(text: &str, path: &Path) -> Result<()> {
    fs::write(path, text).map_err(|e| AsciiError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
