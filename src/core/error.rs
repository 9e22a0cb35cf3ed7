//! Domain errors
//!
//! Setup problems (missing directories, bad config) are kept apart from check
//! failures: a mismatch is a result, these are reasons a check could not run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent a check from running
#[derive(Debug, Error)]
pub enum CheckError {
    /// A directory named by a pairing or scan root does not exist
    #[error("directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The path exists but is not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// IO error while listing or reading
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking a directory tree
    #[error("walkdir error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Config file could not be parsed
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// A pairing definition is unusable
    #[error("invalid pairing '{name}': {reason}")]
    InvalidPairing {
        /// Pairing name
        name: String,
        /// What is wrong with it
        reason: String,
    },

    /// A pairing was requested by name but is not configured
    #[error("unknown pairing: {0}")]
    UnknownPairing(String),

    /// The markup marker could not be compiled as a regex
    #[error("invalid marker pattern: {0}")]
    InvalidMarker(#[from] regex::Error),
}
