//! Colour policy: how each generated pixel picks its colour.

use serde::{Deserialize, Serialize};

use crate::error::{PixgenError, Result};

use super::Colour;

/// The rule a generation run uses to colour each pixel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "colours", rename_all = "kebab-case")]
pub enum ColourPolicy {
    /// Uniformly random opaque RGB.
    AllRandom,

    /// Uniform pick, with replacement, from a non-empty palette.
    FromPalette(Vec<Colour>),
}

impl ColourPolicy {
    /// Build a palette policy, rejecting an empty palette.
    pub fn from_palette(colours: impl Into<Vec<Colour>>) -> Result<Self> {
        let colours = colours.into();
        if colours.is_empty() {
            return Err(PixgenError::EmptyPalette);
        }
        Ok(Self::FromPalette(colours))
    }

    /// Check the policy can be drawn from.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::FromPalette(colours) if colours.is_empty() => Err(PixgenError::EmptyPalette),
            _ => Ok(()),
        }
    }

    /// Short human-readable description for status output.
    pub fn describe(&self) -> String {
        match self {
            Self::AllRandom => "random colours".to_string(),
            Self::FromPalette(colours) if colours.len() == 1 => "1 colour".to_string(),
            Self::FromPalette(colours) => format!("{} colours", colours.len()),
        }
    }
}
