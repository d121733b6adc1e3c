//! Raster type: a decoded W×H pixel grid.

use std::path::Path;

use image::RgbImage;

use crate::error::{AsciiError, Result};

use super::Pixel;

/// An immutable, row-major grid of pixels with non-zero dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Raster {
    /// Create a raster from row-major pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AsciiError::Raster {
                message: format!("invalid dimensions {}x{}", width, height),
            });
        }

        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(AsciiError::Raster {
                message: format!(
                    "{}x{} raster needs {} pixels, got {}",
                    width,
                    height,
                    expected,
                    pixels.len()
                ),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a raster from rows of pixels.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        let row_len = rows.first().map_or(0, |r| r.len());

        if rows.iter().any(|r| r.len() != row_len) {
            return Err(AsciiError::Raster {
                message: "rows have differing widths".to_string(),
            });
        }

        let width = dimension(row_len, "width")?;
        let height = dimension(rows.len(), "height")?;

        Self::new(width, height, rows.into_iter().flatten().collect())
    }

    /// Convert a decoded RGB image.
    pub fn from_rgb_image(img: &RgbImage) -> Result<Self> {
        let pixels = img.pixels().map(|p| Pixel::from(*p)).collect();
        Self::new(img.width(), img.height(), pixels)
    }

    /// Decode an image file. Alpha is discarded.
    pub fn open(path: &Path) -> Result<Self> {
        let decode_error = |message: String| AsciiError::Decode {
            path: path.to_path_buf(),
            message,
        };

        let img = image::open(path)
            .map_err(|e| decode_error(e.to_string()))?
            .to_rgb8();

        Self::from_rgb_image(&img).map_err(|e| decode_error(e.to_string()))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y), if in bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width as usize)
    }
}

/// Convert a row or column count to a raster dimension.
fn dimension(len: usize, axis: &str) -> Result<u32> {
    u32::try_from(len).map_err(|_| AsciiError::Raster {
        message: format!("{} {} exceeds {}", axis, len, u32::MAX),
    })
}
