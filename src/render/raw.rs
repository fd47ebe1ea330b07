//! Raw RGBA output.

use std::fs;
use std::path::Path;

use crate::error::{PixgenError, Result};
use crate::generate::PixelBuffer;

/// Write the buffer as headerless RGBA bytes, row-major, top row first.
pub fn write_raw(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    fs::write(path, buffer.to_rgba_bytes()).map_err(|e| PixgenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write raw pixels: {}", e),
    })
}
