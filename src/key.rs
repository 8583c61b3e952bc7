//! Canonical anagram keys
//!
//! Two words are anagrams of each other exactly when their characters,
//! sorted by code point, spell the same string.

use std::fmt;

/// The sorted-character form of a token
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Build the key for a token
    pub fn of(token: &str) -> Self {
        let mut chars: Vec<char> = token.chars().collect();
        chars.sort_unstable();
        Self(chars.into_iter().collect())
    }

    /// Length in characters, which is what the length filter compares against
    #[inline]
    pub fn len(&self) -> usize {
        if self.0.is_ascii() {
            self.0.len()
        } else {
            self.0.chars().count()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shorthand for [`CanonicalKey::of`]
pub fn canonical_key(token: &str) -> CanonicalKey {
    CanonicalKey::of(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_characters() {
        assert_eq!(canonical_key("cat").as_str(), "act");
        assert_eq!(canonical_key("tac").as_str(), "act");
        assert_eq!(canonical_key("god").as_str(), "dgo");
    }

    #[test]
    fn test_anagrams_share_key() {
        assert_eq!(canonical_key("listen"), canonical_key("silent"));
        assert_ne!(canonical_key("listen"), canonical_key("listens"));
        assert_ne!(canonical_key("aab"), canonical_key("abb"));
    }

    #[test]
    fn test_case_sensitive() {
        // 'A' (0x41) sorts before 'b' (0x62)
        assert_eq!(canonical_key("Ab").as_str(), "Ab");
        assert_eq!(canonical_key("ba").as_str(), "ab");
        assert_ne!(canonical_key("Ab"), canonical_key("ba"));
    }

    #[test]
    fn test_punctuation_is_significant() {
        assert_eq!(canonical_key("don't").as_str(), "'dnot");
        assert_ne!(canonical_key("don't"), canonical_key("dont"));
    }

    #[test]
    fn test_idempotent() {
        for word in ["anagram", "Zebra", "héllo", "", "a-b-c"] {
            let once = canonical_key(word);
            let twice = canonical_key(once.as_str());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_empty_token() {
        let key = canonical_key("");
        assert!(key.is_empty());
        assert_eq!(key.len(), 0);
    }

    #[test]
    fn test_unicode_length() {
        let key = canonical_key("hëllo");
        assert_eq!(key.len(), 5);
        // U+00EB sorts after every ASCII letter
        assert_eq!(key.as_str(), "hlloë");
    }
}
