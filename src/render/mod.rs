//! Rendering module for pixgen.
//!
//! Turns generated pixel buffers into files: PNG images, raw RGBA dumps,
//! and JSON metadata sidecars.

mod meta;
mod png;
mod raw;

use std::path::Path;

use clap::ValueEnum;

use crate::error::Result;
use crate::generate::PixelBuffer;

pub use meta::{write_meta_json, GenerationMeta};
pub use png::{to_rgba_image, write_png};
pub use raw::write_raw;

/// File format for generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// PNG image
    #[default]
    Png,
    /// Headerless RGBA bytes
    Raw,
}

impl OutputFormat {
    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Raw => "rgba",
        }
    }
}

/// Write a buffer in the given format. `scale` only applies to PNG.
pub fn write_output(
    buffer: &PixelBuffer,
    path: &Path,
    format: OutputFormat,
    scale: u32,
) -> Result<()> {
    match format {
        OutputFormat::Png => write_png(buffer, path, scale),
        OutputFormat::Raw => write_raw(buffer, path),
    }
}
