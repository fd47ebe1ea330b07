//! pixgen - Random pixel image generator
//!
//! Generates images where every pixel is independently coloured, either
//! with uniformly random RGB or by drawing from a user-curated palette.

pub mod cli;
pub mod error;
pub mod generate;
pub mod output;
pub mod render;
pub mod types;
pub mod worker;

pub use error::{PixgenError, Result};
pub use generate::{generate, generate_cancellable, generate_with_rng, CancelToken, PixelBuffer};
pub use render::{
    to_rgba_image, write_meta_json, write_output, write_png, write_raw, GenerationMeta,
    OutputFormat,
};
pub use types::{Colour, ColourPolicy, Settings};
pub use worker::{GenerationHandle, GenerationRequest};
