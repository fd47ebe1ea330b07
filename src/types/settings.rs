//! Generation settings (pixgen.yaml).
//!
//! Holds the requested canvas size and the user-curated palette. The
//! generator only ever sees a snapshot taken through [`Settings::policy`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PixgenError, Result};

use super::{Colour, ColourPolicy};

/// Settings filename looked up by the CLI.
pub const SETTINGS_FILENAME: &str = "pixgen.yaml";

pub const DEFAULT_WIDTH: u32 = 1600;
pub const DEFAULT_HEIGHT: u32 = 1900;

/// Canvas size and palette for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Image width in pixels.
    pub width: u32,

    /// Image height in pixels.
    pub height: u32,

    /// Palette to draw from. Empty means fully random colours.
    pub colours: Vec<Colour>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            colours: vec![],
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PixgenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load settings, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse settings from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| PixgenError::Parse {
            message: format!("Invalid settings: {}", e),
            help: Some(format!("Check {} syntax", SETTINGS_FILENAME)),
        })
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| PixgenError::Build {
            message: format!("Failed to serialize settings: {}", e),
            help: None,
        })
    }

    /// Write settings to a YAML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| PixgenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write settings: {}", e),
        })
    }

    /// Append a colour to the palette.
    pub fn add_colour(&mut self, colour: Colour) {
        self.colours.push(colour);
    }

    /// Remove the colour at `index`, returning it.
    pub fn remove_colour(&mut self, index: usize) -> Result<Colour> {
        if index >= self.colours.len() {
            return Err(PixgenError::Validation {
                message: format!(
                    "No colour at index {} (palette has {})",
                    index,
                    self.colours.len()
                ),
                help: Some("Run `pixgen palette list` to see indices".to_string()),
            });
        }
        Ok(self.colours.remove(index))
    }

    /// Remove every colour from the palette.
    pub fn clear_colours(&mut self) {
        self.colours.clear();
    }

    /// Set the canvas size. Zero in either dimension is rejected.
    pub fn set_dimensions(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(PixgenError::InvalidDimensions { width, height });
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Snapshot the palette as a colour policy.
    pub fn policy(&self) -> ColourPolicy {
        if self.colours.is_empty() {
            ColourPolicy::AllRandom
        } else {
            ColourPolicy::FromPalette(self.colours.clone())
        }
    }
}
