//! Rendering module for imgascii.
//!
//! This module handles converting rasters to text using a palette, and
//! writing that text to disk.

mod text;

pub use text::{render, write_text};
