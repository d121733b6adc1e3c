//! Core types for imgascii.

mod palette;
mod pixel;
mod raster;

pub use palette::{Palette, DEFAULT_RAMP};
pub use pixel::Pixel;
pub use raster::Raster;
