//! Conversion settings (imgascii.yaml).
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags, an optional YAML config file, and builtin defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AsciiError, Result};
use crate::types::{Palette, DEFAULT_RAMP};

/// Config file looked up in the current directory.
pub const CONFIG_FILENAME: &str = "imgascii.yaml";

/// Settings loaded from imgascii.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Image to convert.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Text file to write.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Glyph ramp, darkest bucket first.
    #[serde(default = "default_palette")]
    pub palette: String,
}

fn default_input() -> PathBuf {
    PathBuf::from("picture.jpg")
}

fn default_output() -> PathBuf {
    PathBuf::from("output.txt")
}

fn default_palette() -> String {
    DEFAULT_RAMP.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            palette: default_palette(),
        }
    }
}

/// Per-run overrides, typically from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub palette: Option<String>,
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AsciiError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // empty file means all defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| AsciiError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Find the config for a run.
    ///
    /// An explicit path must exist. Without one, `imgascii.yaml` in `dir` is
    /// used when present, and builtin defaults otherwise.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides on top of this config.
    pub fn with_overrides(self, overrides: Overrides) -> Self {
        Self {
            input: overrides.input.unwrap_or(self.input),
            output: overrides.output.unwrap_or(self.output),
            palette: overrides.palette.unwrap_or(self.palette),
        }
    }

    /// Validate and build the palette.
    pub fn palette(&self) -> Result<Palette> {
        Palette::new(&self.palette)
    }
}
