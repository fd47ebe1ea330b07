//! Palette command implementation.
//!
//! Edits the colour list stored in the settings file. An empty palette
//! means `generate` falls back to fully random colours.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use image::RgbaImage;

use crate::error::{PixgenError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::{Colour, Settings};

/// Edit the palette stored in the settings file
#[derive(Args, Debug)]
pub struct PaletteArgs {
    #[command(subcommand)]
    pub action: PaletteAction,
}

#[derive(Subcommand, Debug)]
pub enum PaletteAction {
    /// Print the palette, one colour per line
    List,

    /// Append colours (#RGB, #RRGGBB, #RRGGBBAA or hsl(H, S%, L%))
    Add {
        #[arg(required = true, value_name = "COLOUR")]
        colours: Vec<Colour>,
    },

    /// Remove the colour at INDEX (as shown by `list`)
    Remove { index: usize },

    /// Remove every colour
    Clear,

    /// Append the most frequent opaque colours of a PNG file
    Extract {
        /// PNG file to sample
        file: PathBuf,

        /// Maximum number of colours to add
        #[arg(long)]
        max: Option<usize>,
    },
}

pub fn run(args: PaletteArgs, settings_path: &Path, printer: &Printer) -> Result<()> {
    let mut settings = Settings::load_or_default(settings_path)?;

    match args.action {
        PaletteAction::List => {
            for line in palette_lines(&settings.colours, printer) {
                println!("{}", line);
            }
            return Ok(());
        }
        PaletteAction::Add { colours } => {
            for colour in &colours {
                settings.add_colour(*colour);
            }
            printer.status("Added", &joined(&colours));
        }
        PaletteAction::Remove { index } => {
            let removed = settings.remove_colour(index)?;
            printer.status("Removed", &format!("{} {}", index, removed));
        }
        PaletteAction::Clear => {
            let count = settings.colours.len();
            settings.clear_colours();
            printer.status("Cleared", &plural(count, "colour", "colours"));
        }
        PaletteAction::Extract { file, max } => {
            let img = image::open(&file)
                .map_err(|e| PixgenError::Io {
                    path: file.clone(),
                    message: e.to_string(),
                })?
                .to_rgba8();

            let sampled = sample_colours(&img, max);
            if sampled.is_empty() {
                printer.warning("Skipped", &format!("{} has no opaque pixels", display_path(&file)));
            }
            printer.status(
                "Sampled",
                &format!(
                    "{} from {}",
                    plural(sampled.len(), "colour", "colours"),
                    display_path(&file)
                ),
            );
            settings.colours.extend(sampled);
        }
    }

    settings.save(settings_path)?;
    printer.info(
        "Palette",
        &format!(
            "{} in {}",
            plural(settings.colours.len(), "colour", "colours"),
            display_path(settings_path)
        ),
    );

    Ok(())
}

/// Format each colour as `index: hex  hsl(...)`.
pub fn palette_lines(colours: &[Colour], printer: &Printer) -> Vec<String> {
    colours
        .iter()
        .enumerate()
        .map(|(i, colour)| {
            let (h, s, l) = colour.to_hsl();
            let hsl = format!(
                "hsl({:.0}, {:.0}%, {:.0}%)",
                h,
                s * 100.0,
                l * 100.0
            );
            format!("{}: {}  {}", i, colour, printer.dim(&hsl))
        })
        .collect()
}

/// Distinct opaque colours of `img`, most frequent first. Pixels with any
/// transparency are skipped. Ties are broken by packed value.
pub fn sample_colours(img: &RgbaImage, max: Option<usize>) -> Vec<Colour> {
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for pixel in img.pixels() {
        let [r, g, b, a] = pixel.0;
        if a != 255 {
            continue;
        }
        *counts.entry(Colour::new(r, g, b, a).pack()).or_insert(0) += 1;
    }

    let mut colours: Vec<(u32, usize)> = counts.into_iter().collect();
    colours.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    if let Some(max) = max {
        colours.truncate(max);
    }

    colours
        .into_iter()
        .map(|(packed, _)| Colour::unpack(packed))
        .collect()
}

fn joined(colours: &[Colour]) -> String {
    colours
        .iter()
        .map(Colour::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
