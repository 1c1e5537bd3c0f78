//! Decoding of composed cache filenames.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::hash::reversed::ReversedHash;
use crate::source::CacheCategory;

/// Parts recovered from a composed cache filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedName {
    /// Reversed hash prefix.
    pub hash: ReversedHash,

    /// Known cache category, if the encoded prefix matched one.
    pub category: Option<CacheCategory>,

    /// Everything after the category prefix (or after the hash when no
    /// category matched).
    pub original: String,
}

impl ParsedName {
    /// The original filename with any percent escapes decoded.
    pub fn decoded_original(&self) -> String {
        match urlencoding::decode(&self.original) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => self.original.clone(),
        }
    }
}

fn composed_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([0-9A-F]{32})_(.+)$").expect("valid regex"))
}

/// Split a composed filename into hash, category and original name.
///
/// Returns `None` when `filename` does not start with a 32-character
/// uppercase hex hash followed by `_`.
pub fn parse_composed_filename(filename: &str) -> Option<ParsedName> {
    let captures = composed_pattern().captures(filename)?;
    let hash: ReversedHash = captures.get(1)?.as_str().parse().ok()?;
    let rest = captures.get(2)?.as_str();

    let (category, original) = match CacheCategory::from_encoded_prefix(rest) {
        Some((category, len)) => (Some(category), &rest[len..]),
        None => (None, rest),
    };

    Some(ParsedName {
        hash,
        category,
        original: original.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::naming::compose_filename;
    use crate::hash::derive_reversed_hash;

    #[test]
    fn test_parse_composed_filename() {
        let hash = derive_reversed_hash(b"abc");
        let name = compose_filename(&hash, CacheCategory::Sounds, "horn.ogg");

        let parsed = parse_composed_filename(&name).unwrap();
        assert_eq!(parsed.hash, hash);
        assert_eq!(parsed.category, Some(CacheCategory::Sounds));
        assert_eq!(parsed.original, "horn.ogg");
    }

    #[test]
    fn test_parse_unknown_category() {
        let parsed =
            parse_composed_filename("727FE1287D3F96D6B04FD23C98500190_Other%5cthing.png").unwrap();
        assert_eq!(parsed.category, None);
        assert_eq!(parsed.original, "Other%5cthing.png");
    }

    #[test]
    fn test_parse_rejects_plain_names() {
        assert!(parse_composed_filename("logo.png").is_none());
        assert!(parse_composed_filename("727fe1287d3f96d6b04fd23c98500190_x.png").is_none());
        assert!(parse_composed_filename("727FE1287D3F96D6B04FD23C98500190_").is_none());
    }

    #[test]
    fn test_decoded_original() {
        let parsed = parse_composed_filename(
            "727FE1287D3F96D6B04FD23C98500190_Skins%5cMediaTracker%5cImages%5ccaf%C3%A9.png",
        )
        .unwrap();
        assert_eq!(parsed.category, Some(CacheCategory::Images));
        assert_eq!(parsed.decoded_original(), "café.png");
    }
}
