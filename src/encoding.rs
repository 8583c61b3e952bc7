//! Encoding detection and transcoding module
//!
//! Dictionaries come in whatever encoding the word list was saved with.
//! Everything is decoded to UTF-8 before tokenizing.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::borrow::Cow;

/// Bytes sampled for detection (first 64KB should be enough)
const SAMPLE_SIZE: usize = 64 * 1024;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Confidence level (0.0 - 1.0)
    pub confidence: f32,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
    /// Length of the byte order mark, if one was found
    pub bom_len: usize,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            confidence: 1.0,
            encoding: encoding_rs::UTF_8,
            bom_len: 0,
        }
    }
}

/// Detect the encoding of dictionary content by sampling its start
pub fn detect_encoding(content: &[u8]) -> EncodingInfo {
    if content.is_empty() {
        return EncodingInfo::default();
    }

    // Check for BOM first
    if let Some((encoding, bom_len)) = Encoding::for_bom(content) {
        return EncodingInfo {
            name: encoding.name(),
            confidence: 1.0,
            encoding,
            bom_len,
        };
    }

    // Whole content is valid UTF-8: no need to guess
    if std::str::from_utf8(content).is_ok() {
        return EncodingInfo::default();
    }

    let sample = &content[..content.len().min(SAMPLE_SIZE)];

    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == content.len());
    let encoding = detector.guess(None, true);

    let confidence = if encoding == encoding_rs::UTF_8 {
        if std::str::from_utf8(sample).is_ok() {
            1.0
        } else {
            0.5
        }
    } else {
        0.8
    };

    EncodingInfo {
        name: encoding.name(),
        confidence,
        encoding,
        bom_len: 0,
    }
}

/// Decode dictionary content to text, dropping any BOM
///
/// Malformed sequences are replaced with U+FFFD and a warning is logged.
pub fn decode<'a>(content: &'a [u8], info: &EncodingInfo) -> Cow<'a, str> {
    let body = &content[info.bom_len..];

    if info.encoding == encoding_rs::UTF_8 {
        // Fast path for UTF-8
        return match std::str::from_utf8(body) {
            Ok(s) => Cow::Borrowed(s),
            Err(_) => {
                log::warn!("Invalid UTF-8 in dictionary, using lossy conversion");
                String::from_utf8_lossy(body)
            }
        };
    }

    let (decoded, had_errors) = info.encoding.decode_without_bom_handling(body);
    if had_errors {
        log::warn!("Encoding errors in dictionary ({}), using lossy conversion", info.name);
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_detection() {
        let content = "cat act\nПривет тевирП\n".as_bytes();
        let info = detect_encoding(content);
        assert_eq!(info.name, "UTF-8");
        assert_eq!(info.bom_len, 0);
        assert_eq!(decode(content, &info), "cat act\nПривет тевирП\n");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut content = vec![0xEF, 0xBB, 0xBF];
        content.extend_from_slice(b"cat act");

        let info = detect_encoding(&content);
        assert_eq!(info.name, "UTF-8");
        assert_eq!(info.bom_len, 3);
        assert_eq!(decode(&content, &info), "cat act");
    }

    #[test]
    fn test_utf16le_bom() {
        let mut content = vec![0xFF, 0xFE];
        for unit in "ab ba".encode_utf16() {
            content.extend_from_slice(&unit.to_le_bytes());
        }

        let info = detect_encoding(&content);
        assert_eq!(info.name, "UTF-16LE");
        assert_eq!(decode(&content, &info), "ab ba");
    }

    #[test]
    fn test_legacy_encoding() {
        // French word list in windows-1252
        let content: &[u8] = b"caf\xe9 \xe9t\xe9 d\xe9j\xe0 for\xeat fen\xeatre \xe9l\xe8ve tr\xe8s gar\xe7on";
        let info = detect_encoding(content);
        assert_eq!(info.name, "windows-1252");
        assert_eq!(
            decode(content, &info),
            "café été déjà forêt fenêtre élève très garçon"
        );
    }

    #[test]
    fn test_empty_content() {
        let info = detect_encoding(b"");
        assert_eq!(info.name, "UTF-8");
        assert_eq!(decode(b"", &info), "");
    }
}
