use std::path::PathBuf;
use thiserror::Error;

// ─── Config errors ───────────────────────────────────────────────────────────

/// Why a configuration source was rejected.
///
/// Each subsystem has its own error type; the binary wraps them in `anyhow`
/// for context chains.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no [telepath] section in {}", .path.display())]
    MissingSection { path: PathBuf },

    #[error(
        "[telepath] section in {} is missing required options: {}",
        .path.display(),
        .options.join(", ")
    )]
    MissingOptions { path: PathBuf, options: Vec<String> },

    #[error("option `{option}` is invalid: {reason}")]
    InvalidOption { option: String, reason: String },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("could not find home directory")]
    NoHomeDirectory,

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Status store errors ─────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to append to {}: {source}", .path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to clear {}: {source}", .path.display())]
    Clear {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// The underlying I/O error kind, regardless of which operation failed.
    pub fn io_kind(&self) -> std::io::ErrorKind {
        match self {
            Self::Append { source, .. } | Self::Clear { source, .. } => source.kind(),
        }
    }
}

// ─── Submission errors ───────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
}
