//! JSON metadata sidecar for generated images.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PixgenError, Result};
use crate::types::ColourPolicy;

/// Description of a generation run, written next to its image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationMeta {
    pub image: String,
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub policy: ColourPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Write generation metadata as pretty-printed JSON.
pub fn write_meta_json(meta: &GenerationMeta, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(meta).map_err(|e| PixgenError::Build {
        message: format!("Failed to serialize metadata: {}", e),
        help: None,
    })?;
    fs::write(path, json).map_err(|e| PixgenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write metadata: {}", e),
    })?;
    Ok(())
}
