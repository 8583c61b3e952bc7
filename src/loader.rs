//! Dictionary loader
//!
//! Reads a dictionary, splits it on whitespace and files every word under
//! its canonical key. An unreadable dictionary is not fatal: the caller gets
//! an empty index along with the reason.

use crate::encoding::{decode, detect_encoding};
use crate::error::SourceError;
use crate::index::AnagramIndex;
use crate::key::CanonicalKey;

use indicatif::ProgressBar;
use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

/// Spinner refresh interval, in tokens
const PROGRESS_EVERY: usize = 64 * 1024;

/// What a load produced
#[derive(Debug)]
pub enum LoadOutcome {
    /// The dictionary was read; the index may still be empty
    Loaded(AnagramIndex),
    /// The dictionary could not be read; the index is empty
    Unavailable {
        index: AnagramIndex,
        error: SourceError,
    },
}

impl LoadOutcome {
    pub fn index(&self) -> &AnagramIndex {
        match self {
            Self::Loaded(index) | Self::Unavailable { index, .. } => index,
        }
    }

    /// The index, empty when the source was unavailable
    pub fn into_index(self) -> AnagramIndex {
        match self {
            Self::Loaded(index) | Self::Unavailable { index, .. } => index,
        }
    }

    pub fn error(&self) -> Option<&SourceError> {
        match self {
            Self::Loaded(_) => None,
            Self::Unavailable { error, .. } => Some(error),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// Load statistics
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    pub source_bytes: u64,
    pub encoding: &'static str,
    pub tokens: usize,
    pub distinct_keys: usize,
    pub elapsed: Duration,
}

/// Builds an [`AnagramIndex`] from a dictionary
pub struct Loader {
    progress: ProgressBar,
    stats: LoadStats,
}

impl Loader {
    pub fn new() -> Self {
        Self::with_progress(ProgressBar::hidden())
    }

    /// Loader that ticks `progress` while tokenizing
    pub fn with_progress(progress: ProgressBar) -> Self {
        Self {
            progress,
            stats: LoadStats::default(),
        }
    }

    /// Load a dictionary file
    ///
    /// The file and its mapping are released before this returns. Statistics
    /// describe this load only; an unavailable source leaves them zeroed.
    pub fn load(&mut self, path: &Path) -> LoadOutcome {
        self.stats = LoadStats::default();
        match self.try_load(path) {
            Ok(index) => LoadOutcome::Loaded(index),
            Err(error) => {
                log::error!("{}: {}", error, error_detail(&error));
                self.progress.finish_and_clear();
                LoadOutcome::Unavailable {
                    index: AnagramIndex::new(),
                    error,
                }
            }
        }
    }

    fn try_load(&mut self, path: &Path) -> Result<AnagramIndex, SourceError> {
        let file = File::open(path).map_err(|source| SourceError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let size = file
            .metadata()
            .map_err(|source| SourceError::Read {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        if size == 0 {
            log::info!("Dictionary {:?} is empty", path);
            return Ok(self.load_bytes(&[]));
        }

        let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Loading dictionary {:?} ({} bytes)", path, size);
        Ok(self.load_bytes(&mmap))
    }

    /// Load dictionary content already in memory
    pub fn load_bytes(&mut self, content: &[u8]) -> AnagramIndex {
        let start = Instant::now();
        let info = detect_encoding(content);
        log::debug!("Dictionary encoding: {} (confidence {:.1})", info.name, info.confidence);

        let text = decode(content, &info);
        let index = self.load_str(&text);

        self.stats.source_bytes = content.len() as u64;
        self.stats.encoding = info.name;
        self.stats.elapsed = start.elapsed();
        log::info!(
            "Loaded {} words into {} anagram groups",
            self.stats.tokens,
            self.stats.distinct_keys
        );

        index
    }

    /// Tokenize `text` on whitespace and index every token
    pub fn load_str(&mut self, text: &str) -> AnagramIndex {
        let start = Instant::now();
        let mut index = AnagramIndex::new();

        for (n, token) in text.split_whitespace().enumerate() {
            log::debug!("BEFORE: {}", token);
            let key = CanonicalKey::of(token);
            log::debug!("AFTER: {}", key);
            index.insert(key, token.to_string());

            if n % PROGRESS_EVERY == 0 {
                self.progress.set_message(format!("{} words read", n));
                self.progress.tick();
            }
        }

        self.progress.finish_and_clear();
        self.stats = LoadStats {
            source_bytes: text.len() as u64,
            encoding: "UTF-8",
            tokens: index.token_count(),
            distinct_keys: index.group_count(),
            elapsed: start.elapsed(),
        };
        index
    }

    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a dictionary file with a hidden progress indicator
pub fn load(path: &Path) -> LoadOutcome {
    Loader::new().load(path)
}

fn error_detail(error: &SourceError) -> String {
    use std::error::Error;

    error
        .source()
        .map(|cause| cause.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn group<'a>(index: &'a AnagramIndex, word: &str) -> &'a [String] {
        index.get(&CanonicalKey::of(word)).unwrap()
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cat act dog").unwrap();
        writeln!(file, "god\ttac").unwrap();

        let outcome = load(file.path());
        assert!(!outcome.is_unavailable());

        let index = outcome.into_index();
        assert_eq!(index.group_count(), 2);
        assert_eq!(group(&index, "cat"), ["cat", "act", "tac"]);
        assert_eq!(group(&index, "dog"), ["dog", "god"]);
    }

    #[test]
    fn test_any_whitespace_separates() {
        let index = Loader::new().load_str("  stop\n\npots\r\n tops\t\tspot  ");
        assert_eq!(index.token_count(), 4);
        assert_eq!(group(&index, "stop"), ["stop", "pots", "tops", "spot"]);
    }

    #[test]
    fn test_token_count_is_preserved() {
        let text = "a bb ccc bb a dd cc";
        let index = Loader::new().load_str(text);

        let total: usize = index.sorted_groups().iter().map(|(_, g)| g.len()).sum();
        assert_eq!(total, text.split_whitespace().count());
    }

    #[test]
    fn test_empty_file() {
        let file = NamedTempFile::new().unwrap();

        let outcome = load(file.path());
        assert!(matches!(outcome, LoadOutcome::Loaded(_)));
        assert!(outcome.index().is_empty());
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dictionary.txt");

        let outcome = load(&path);
        assert!(outcome.is_unavailable());
        assert!(matches!(outcome.error(), Some(SourceError::Unavailable { .. })));
        assert_eq!(outcome.error().unwrap().path(), &path);
        assert!(outcome.into_index().is_empty());
    }

    #[test]
    fn test_bom_not_part_of_first_token() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xEF, 0xBB, 0xBF]).unwrap();
        file.write_all(b"ab ba").unwrap();
        file.flush().unwrap();

        let index = load(file.path()).into_index();
        assert_eq!(group(&index, "ab"), ["ab", "ba"]);
    }

    #[test]
    fn test_stats() {
        let mut loader = Loader::new();
        let index = loader.load_bytes(b"cat act dog god tac");

        let stats = loader.stats();
        assert_eq!(stats.source_bytes, 19);
        assert_eq!(stats.encoding, "UTF-8");
        assert_eq!(stats.tokens, 5);
        assert_eq!(stats.distinct_keys, 2);
        assert_eq!(index.token_count(), 5);
    }

    #[test]
    fn test_stats_reset_after_failed_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = Loader::new();
        loader.load_bytes(b"cat act");
        assert_eq!(loader.stats().tokens, 2);

        let outcome = loader.load(&dir.path().join("missing.txt"));
        assert!(outcome.is_unavailable());

        let stats = loader.stats();
        assert_eq!(stats.source_bytes, 0);
        assert_eq!(stats.tokens, 0);
        assert_eq!(stats.distinct_keys, 0);
    }

    #[test]
    fn test_load_str_records_stats() {
        let mut loader = Loader::new();
        let index = loader.load_str("stop pots tops opts");

        let stats = loader.stats();
        assert_eq!(stats.tokens, index.token_count());
        assert_eq!(stats.tokens, 4);
        assert_eq!(stats.distinct_keys, 1);
        assert_eq!(stats.source_bytes, 19);
    }
}
