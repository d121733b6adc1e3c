use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for imgascii operations
#[derive(Error, Diagnostic, Debug)]
pub enum AsciiError {
    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(
        code(imgascii::decode),
        help("The input must be an existing JPEG, PNG, GIF, BMP or other supported raster image")
    )]
    Decode { path: PathBuf, message: String },

    #[error("Failed to write {path}: {message}")]
    #[diagnostic(code(imgascii::write))]
    Write { path: PathBuf, message: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(imgascii::io))]
    Io { path: PathBuf, message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(imgascii::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Palette error: {message}")]
    #[diagnostic(code(imgascii::palette))]
    Palette {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Raster error: {message}")]
    #[diagnostic(code(imgascii::raster))]
    Raster { message: String },
}

pub type Result<T> = std::result::Result<T, AsciiError>;
