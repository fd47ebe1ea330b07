//! Init command implementation.
//!
//! Writes a settings file with default (or given) dimensions and an empty
//! palette.

use std::path::Path;

use clap::Args;

use crate::error::{PixgenError, Result};
use crate::output::{display_path, Printer};
use crate::types::{Settings, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Create a settings file with default values
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Image width in pixels
    #[arg(long, short = 'W', default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, short = 'H', default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Overwrite an existing settings file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, settings_path: &Path, printer: &Printer) -> Result<()> {
    if settings_path.exists() && !args.force {
        return Err(PixgenError::Build {
            message: format!("{} already exists", display_path(settings_path)),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let mut settings = Settings::default();
    settings.set_dimensions(args.width, args.height)?;
    settings.save(settings_path)?;

    printer.status(
        "Created",
        &format!(
            "{} ({}x{}, random colours)",
            display_path(settings_path),
            settings.width,
            settings.height
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, SETTINGS_FILENAME};
    use std::fs;
    use tempfile::tempdir;

    fn defaults() -> InitArgs {
        InitArgs {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            force: false,
        }
    }

    #[test]
    fn test_init_creates_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);

        run(defaults(), &path, &Printer::quiet()).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_init_custom_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);

        let args = InitArgs {
            width: 320,
            height: 200,
            force: false,
        };
        run(args, &path, &Printer::quiet()).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!((settings.width, settings.height), (320, 200));
    }

    #[test]
    fn test_init_rejects_zero_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);

        let args = InitArgs {
            width: 0,
            height: 200,
            force: false,
        };
        assert!(matches!(
            run(args, &path, &Printer::quiet()),
            Err(PixgenError::InvalidDimensions { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_init_errors_if_settings_exist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);
        fs::write(&path, "width: 10").unwrap();

        assert!(run(defaults(), &path, &Printer::quiet()).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "width: 10");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);

        let mut existing = Settings::default();
        existing.add_colour(Colour::RED);
        existing.save(&path).unwrap();

        let args = InitArgs {
            force: true,
            ..defaults()
        };
        run(args, &path, &Printer::quiet()).unwrap();

        assert!(Settings::load(&path).unwrap().colours.is_empty());
    }
}
