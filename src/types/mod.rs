//! Core domain types for pixgen.
//!
//! - `Colour` - RGBA colour values with `0xRRGGBBAA` packing
//! - `ColourPolicy` - How each pixel picks its colour
//! - `Settings` - Canvas size and palette, persisted as pixgen.yaml

mod colour;
mod policy;
mod settings;

pub use colour::Colour;
pub use policy::ColourPolicy;
pub use settings::{Settings, DEFAULT_HEIGHT, DEFAULT_WIDTH, SETTINGS_FILENAME};
