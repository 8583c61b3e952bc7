//! # Anagram Builder
//!
//! Groups dictionary words into anagram families: words made of the same
//! characters, case and punctuation included. Each word is filed under its
//! characters in sorted order, and the families whose key has a requested
//! length are printed.
//!
//! ## Usage
//!
//! ```bash
//! # dictionary.txt, 5-character families
//! anagram-builder
//!
//! # 7-character families from another list
//! anagram-builder /usr/share/dict/words 7
//! ```
//!
//! ## Example
//!
//! ```rust
//! use anagram_builder::loader::Loader;
//! use anagram_builder::report::report;
//!
//! let index = Loader::new().load_str("cat act dog god tac");
//!
//! let mut out = Vec::new();
//! let summary = report(&index, 3, &mut out).unwrap();
//! assert_eq!(summary.groups, 2);
//! ```

pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod index;
pub mod key;
pub mod loader;
pub mod progress;
pub mod report;

pub use cli::Args;
pub use config::AnagramConfig;
pub use index::AnagramIndex;
pub use key::{canonical_key, CanonicalKey};
pub use loader::{load, LoadOutcome, Loader};
pub use report::{report, Reporter};
