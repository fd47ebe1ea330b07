use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pixgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum PixgenError {
    #[error("Invalid dimensions: {width}x{height}")]
    #[diagnostic(
        code(pixgen::dimensions),
        help("Width and height must both be positive, and width * height must fit in memory")
    )]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Cannot draw from an empty palette")]
    #[diagnostic(
        code(pixgen::palette),
        help("Add a colour with `pixgen palette add`, or generate with --random")
    )]
    EmptyPalette,

    #[error("Generation cancelled")]
    #[diagnostic(code(pixgen::cancelled))]
    Cancelled,

    #[error("IO error: {0}")]
    #[diagnostic(code(pixgen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pixgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pixgen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(pixgen::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(pixgen::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PixgenError>;
