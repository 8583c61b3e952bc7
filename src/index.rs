//! Anagram index
//!
//! Maps each canonical key to the words that share it, in the order the
//! words were read.

use crate::key::CanonicalKey;
use ahash::RandomState;
use hashbrown::HashMap;

/// Words sharing one canonical key, in first-seen order
pub type AnagramGroup = Vec<String>;

/// Canonical key → anagram group
#[derive(Debug, Clone, Default)]
pub struct AnagramIndex {
    groups: HashMap<CanonicalKey, AnagramGroup, RandomState>,
    tokens: usize,
}

impl AnagramIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            groups: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            tokens: 0,
        }
    }

    /// Append a token to the group for `key`, creating the group if needed
    pub fn insert(&mut self, key: CanonicalKey, token: String) {
        self.groups.entry(key).or_default().push(token);
        self.tokens += 1;
    }

    /// Compute the key for `token` and insert it
    pub fn add(&mut self, token: &str) {
        self.insert(CanonicalKey::of(token), token.to_string());
    }

    pub fn get(&self, key: &CanonicalKey) -> Option<&[String]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Number of distinct keys
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of tokens across all groups
    pub fn token_count(&self) -> usize {
        self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All groups in ascending key order
    pub fn sorted_groups(&self) -> Vec<(&CanonicalKey, &[String])> {
        let mut groups: Vec<_> = self
            .groups
            .iter()
            .map(|(key, group)| (key, group.as_slice()))
            .collect();
        groups.sort_unstable_by(|a, b| a.0.cmp(b.0));
        groups
    }

    /// Groups whose key is exactly `length` characters long, in ascending key order
    pub fn groups_of_length(&self, length: usize) -> Vec<(&CanonicalKey, &[String])> {
        let mut groups: Vec<_> = self
            .groups
            .iter()
            .filter(|(key, _)| key.len() == length)
            .map(|(key, group)| (key, group.as_slice()))
            .collect();
        groups.sort_unstable_by(|a, b| a.0.cmp(b.0));
        groups
    }
}

impl<'a> FromIterator<&'a str> for AnagramIndex {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut index = AnagramIndex::new();
        for token in iter {
            index.add(token);
        }
        index
    }
}
