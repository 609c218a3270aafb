//! Crate-level error type and `Result` alias.
//! Every variant is fatal for a gear run; the binary maps all of them to exit code 1.
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Environment variable {name} must be a string, number or boolean")]
    InvalidEnvironment { name: String },

    #[error("No input provided for role: {role}")]
    MissingInput { role: String },

    #[error("File not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Invalid parameter: {name}={value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Options {first} and {second} cannot be used together")]
    ConflictingOptions {
        first: &'static str,
        second: &'static str,
    },

    #[error("Only one of the {first} or {second} inputs can be provided")]
    ConflictingInputs {
        first: &'static str,
        second: &'static str,
    },

    #[error("Flag --{flag} was already added to the command")]
    DuplicateFlag { flag: &'static str },

    #[error("Failed to launch {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("filtershift exited with {status}: {stderr}")]
    ProcessFailed { status: ExitStatus, stderr: String },

    #[error("Expected output file does not exist: {}", path.display())]
    OutputMissing { path: PathBuf },

    #[error("Output directory does not exist: {}", path.display())]
    OutputDirMissing { path: PathBuf },

    #[error("Input path has no file name: {}", path.display())]
    InvalidFilename { path: PathBuf },
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.into(),
            source,
        }
    }
}
