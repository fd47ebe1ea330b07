//! Generate command implementation.
//!
//! Reads the settings file, applies command-line overrides for this run
//! only, generates on a worker thread and writes the result.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{PixgenError, Result};
use crate::output::{display_path, Printer};
use crate::render::{write_meta_json, write_output, GenerationMeta, OutputFormat};
use crate::types::{Colour, Settings};
use crate::worker::{self, GenerationRequest};

/// Generate a random pixel image
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Image width in pixels (overrides the settings file)
    #[arg(long, short = 'W')]
    pub width: Option<u32>,

    /// Image height in pixels (overrides the settings file)
    #[arg(long, short = 'H')]
    pub height: Option<u32>,

    /// Palette colour to draw from; repeat for more (replaces the saved palette)
    #[arg(long = "colour", short, value_name = "COLOUR")]
    pub colours: Vec<Colour>,

    /// Ignore the saved palette and use fully random colours
    #[arg(long, conflicts_with = "colours")]
    pub random: bool,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file (default: pixgen.<format extension>)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Integer upscale factor for PNG output
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Also write a JSON metadata file (<name>.meta.json) next to the image
    #[arg(long)]
    pub meta: bool,
}

impl GenerateArgs {
    /// Apply this run's overrides on top of the saved settings.
    fn apply(&self, settings: &mut Settings) -> Result<()> {
        if self.width.is_some() || self.height.is_some() {
            settings.set_dimensions(
                self.width.unwrap_or(settings.width),
                self.height.unwrap_or(settings.height),
            )?;
        }

        if self.random {
            settings.clear_colours();
        } else if !self.colours.is_empty() {
            settings.colours = self.colours.clone();
        }

        Ok(())
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("pixgen.{}", self.format.extension())))
    }
}

/// Sidecar path for `output`: `noise.png` -> `noise.meta.json`.
///
/// Always differs from `output`, even when `output` itself ends in `.json`.
fn meta_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output.with_file_name(format!("{}.meta.json", stem))
}

pub fn run(args: GenerateArgs, settings_path: &Path, printer: &Printer) -> Result<()> {
    let mut settings = Settings::load_or_default(settings_path)?;
    args.apply(&mut settings)?;

    let request = GenerationRequest::from_settings(&settings).with_seed(args.seed);
    printer.status(
        "Generating",
        &format!(
            "{}x{} ({})",
            request.width,
            request.height,
            request.policy.describe()
        ),
    );

    let buffer = worker::spawn(request.clone())?.wait()?;

    let output = args.output_path();
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| PixgenError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    write_output(&buffer, &output, args.format, args.scale)?;
    printer.status("Finished", &display_path(&output));

    if args.meta {
        let meta_path = meta_path(&output);
        let meta = GenerationMeta {
            image: output
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            width: request.width,
            height: request.height,
            scale: match args.format {
                OutputFormat::Png => args.scale.max(1),
                OutputFormat::Raw => 1,
            },
            policy: request.policy,
            seed: request.seed,
        };
        write_meta_json(&meta, &meta_path)?;
        printer.info("Wrote", &display_path(&meta_path));
    }

    Ok(())
}
