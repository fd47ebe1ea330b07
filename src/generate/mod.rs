//! Random pixel generation.
//!
//! Every pixel is drawn independently: either uniformly random opaque RGB,
//! or a uniform pick (with replacement) from the palette. Inputs are
//! validated up front, so a run either fails before producing anything or
//! returns a complete buffer.

mod buffer;
mod cancel;

use rand::Rng;

use crate::error::{PixgenError, Result};
use crate::types::{Colour, ColourPolicy};

pub use buffer::PixelBuffer;
pub use cancel::CancelToken;

use buffer::pixel_count;

/// Generate a `width` x `height` buffer using the thread-local RNG.
pub fn generate(width: u32, height: u32, policy: &ColourPolicy) -> Result<PixelBuffer> {
    generate_with_rng(width, height, policy, &mut rand::rng())
}

/// Generate a buffer drawing from the given RNG.
///
/// Seeding the RNG makes the output reproducible.
pub fn generate_with_rng<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    policy: &ColourPolicy,
    rng: &mut R,
) -> Result<PixelBuffer> {
    fill(width, height, policy, rng, None)
}

/// Generate a buffer, checking `cancel` before each row.
///
/// A cancelled run returns [`PixgenError::Cancelled`] and discards the
/// rows produced so far.
pub fn generate_cancellable<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    policy: &ColourPolicy,
    rng: &mut R,
    cancel: &CancelToken,
) -> Result<PixelBuffer> {
    fill(width, height, policy, rng, Some(cancel))
}

fn fill<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    policy: &ColourPolicy,
    rng: &mut R,
    cancel: Option<&CancelToken>,
) -> Result<PixelBuffer> {
    let count = pixel_count(width, height)?;
    policy.validate()?;

    let mut pixels = Vec::with_capacity(count);

    match policy {
        ColourPolicy::AllRandom => {
            for_each_row(width, height, cancel, || {
                pixels.push(Colour::rgb(rng.random(), rng.random(), rng.random()).pack());
            })?;
        }
        ColourPolicy::FromPalette(colours) => {
            let packed: Vec<u32> = colours.iter().map(|c| c.pack()).collect();
            for_each_row(width, height, cancel, || {
                pixels.push(packed[rng.random_range(0..packed.len())]);
            })?;
        }
    }

    Ok(PixelBuffer::new_unchecked(width, height, pixels))
}

fn for_each_row(
    width: u32,
    height: u32,
    cancel: Option<&CancelToken>,
    mut pixel: impl FnMut(),
) -> Result<()> {
    for _ in 0..height {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(PixgenError::Cancelled);
        }
        for _ in 0..width {
            pixel();
        }
    }
    Ok(())
}
