//! Error types
//!
//! Configuration problems are fatal and surface at the command-line boundary.
//! Source problems are recoverable: the loader degrades to an empty index.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid command-line configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid anagram length: '{value}' (expected a non-negative integer)")]
    InvalidLength {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// The dictionary could not be opened or read
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Dictionary not found or not readable: {path:?}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read dictionary: {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Unavailable { path, .. } | Self::Read { path, .. } => path,
        }
    }
}
