//! imgascii - Image to ASCII art converter
//!
//! A library for turning raster images into plain-text renderings by mapping
//! each pixel's brightness onto a glyph ramp.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use config::{Config, Overrides, CONFIG_FILENAME};
pub use error::{AsciiError, Result};
pub use render::{render, write_text};
pub use types::{Palette, Pixel, Raster, DEFAULT_RAMP};
