//! Palette type: an ordered ramp of glyphs.
//!
//! Index 0 stands for the darkest luminance bucket and the last entry for the
//! brightest. Luminance is quantized with integer arithmetic, multiplying
//! before dividing:
//!
//! ```text
//! idx = min(luminance * len / 255, len - 1)
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{AsciiError, Result};

/// The builtin 12-glyph ramp, dense to sparse.
pub const DEFAULT_RAMP: &str = "@#&$%?*+;:,.";

/// A non-empty, ordered sequence of output characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Palette {
    /// Build a palette from a string of glyphs.
    ///
    /// Rejects an empty ramp and control characters, since a newline or
    /// carriage return would break the one-line-per-row output.
    pub fn new(ramp: &str) -> Result<Self> {
        let glyphs: Vec<char> = ramp.chars().collect();

        if glyphs.is_empty() {
            return Err(AsciiError::Palette {
                message: "palette is empty".to_string(),
                help: Some(format!("Use at least one glyph, e.g. \"{}\"", DEFAULT_RAMP)),
            });
        }

        if let Some(c) = glyphs.iter().find(|c| c.is_control()) {
            return Err(AsciiError::Palette {
                message: format!("palette contains control character {:?}", c),
                help: Some("Palettes may only contain printable characters".to_string()),
            });
        }

        Ok(Self { glyphs })
    }

    /// Number of glyphs in the ramp.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Never true for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The glyphs in ramp order.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Quantize a luminance value to a glyph index.
    pub fn index_for(&self, luminance: u8) -> usize {
        let len = self.glyphs.len();
        (usize::from(luminance) * len / 255).min(len - 1)
    }

    /// The glyph representing a luminance value.
    pub fn glyph_for(&self, luminance: u8) -> char {
        self.glyphs[self.index_for(luminance)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.chars().collect(),
        }
    }
}

impl FromStr for Palette {
    type Err = AsciiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 12);
        assert_eq!(palette.glyphs()[0], '@');
        assert_eq!(palette.glyphs()[11], '.');
        assert_eq!(palette.to_string(), DEFAULT_RAMP);
    }

    #[test]
    fn test_index_bounds_and_monotonic() {
        for len in 1..=64 {
            let ramp: String = (0..len).map(|i| char::from(b'!' + i as u8)).collect();
            let palette = Palette::new(&ramp).unwrap();

            let mut previous = 0;
            for lum in 0..=255u8 {
                let idx = palette.index_for(lum);
                assert!(idx < len, "len {} lum {} gave {}", len, lum, idx);
                assert!(idx >= previous, "len {} not monotonic at {}", len, lum);
                previous = idx;
            }
        }
    }

    #[test]
    fn test_index_endpoints() {
        for len in 1..=64 {
            let ramp = "x".repeat(len);
            let palette = Palette::new(&ramp).unwrap();
            assert_eq!(palette.index_for(0), 0);
            assert_eq!(palette.index_for(255), len - 1);
        }
    }

    #[test]
    fn test_index_multiplies_before_dividing() {
        let palette = Palette::default();
        // 128 * 12 / 255 = 6.02 -> 6
        assert_eq!(palette.index_for(128), 6);
        assert_eq!(palette.glyph_for(128), '*');
        // 21 * 12 / 255 = 0.988 -> 0, 22 * 12 / 255 = 1.03 -> 1
        assert_eq!(palette.index_for(21), 0);
        assert_eq!(palette.index_for(22), 1);
        // 254 * 12 / 255 = 11.95 -> 11
        assert_eq!(palette.index_for(254), 11);
    }

    #[test]
    fn test_single_glyph_palette() {
        let palette = Palette::new("#").unwrap();
        assert!((0..=255u8).all(|lum| palette.glyph_for(lum) == '#'));
    }

    #[test]
    fn test_non_ascii_glyphs() {
        let palette: Palette = "█▓▒░ ".parse().unwrap();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.glyph_for(0), '█');
        assert_eq!(palette.glyph_for(255), ' ');
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(Palette::new(""), Err(AsciiError::Palette { .. })));
    }

    #[test]
    fn test_control_characters_rejected() {
        assert!(Palette::new("@#\n.").is_err());
        assert!(Palette::new("\r").is_err());
        assert!(Palette::new("a\tb").is_err());
    }
}
