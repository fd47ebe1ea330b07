pub mod completions;
pub mod generate;
pub mod init;
pub mod palette;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::Printer;
use crate::types::SETTINGS_FILENAME;

/// pixgen - Random pixel image generator
#[derive(Parser, Debug)]
#[command(name = "pixgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file holding canvas size and palette
    #[arg(long, global = true, default_value = SETTINGS_FILENAME)]
    pub settings: PathBuf,

    /// Only print errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Printer matching the `--quiet` flag.
    pub fn printer(&self) -> Printer {
        if self.quiet {
            Printer::quiet()
        } else {
            Printer::new()
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a random pixel image
    Generate(generate::GenerateArgs),

    /// Create a settings file with default values
    Init(init::InitArgs),

    /// Edit the palette stored in the settings file
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
