//! Run configuration
//!
//! Defaults are resolved here, once. Nothing past this point checks for
//! blank arguments.

use crate::cli::Args;
use crate::error::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_DICTIONARY: &str = "dictionary.txt";
pub const DEFAULT_ANAGRAM_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramConfig {
    pub dictionary: PathBuf,
    pub anagram_length: usize,
    pub verbose: bool,
    pub quiet: bool,
    pub stats: bool,
}

impl Default for AnagramConfig {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            anagram_length: DEFAULT_ANAGRAM_LENGTH,
            verbose: false,
            quiet: false,
            stats: false,
        }
    }
}

impl AnagramConfig {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let dictionary = match non_blank(&args.dictionary) {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(DEFAULT_DICTIONARY),
        };

        let anagram_length = match non_blank(&args.length) {
            Some(value) => parse_length(value)?,
            None => DEFAULT_ANAGRAM_LENGTH,
        };

        Ok(Self {
            dictionary,
            anagram_length,
            verbose: args.verbose,
            quiet: args.quiet,
            stats: args.stats,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Parse a key length; negative and non-numeric values are rejected
pub fn parse_length(value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidLength {
            value: value.to_string(),
            source,
        })
}
