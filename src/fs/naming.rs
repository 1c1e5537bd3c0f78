//! Cache filename composition and archive name handling.

use crate::config::NameEncoding;
use crate::error::{Error, Result};
use crate::hash::ReversedHash;
use crate::source::CacheCategory;

/// Extension appended to archive base names.
const ARCHIVE_EXTENSION: &str = ".zip";

/// URL-encode a virtual cache path.
///
/// Everything outside the unreserved set is percent-encoded, with
/// lowercase hex digits: `\` becomes `%5c`.
pub fn encode_cache_path(raw: &str) -> String {
    let encoded = urlencoding::encode(raw);
    let mut out = String::with_capacity(encoded.len());
    let mut hex_left = 0;

    for c in encoded.chars() {
        if c == '%' {
            hex_left = 2;
            out.push(c);
        } else if hex_left > 0 {
            hex_left -= 1;
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Compose `<hash>_<encoded cache path><original filename>`.
///
/// The original filename is appended verbatim.
pub fn compose_filename(hash: &ReversedHash, category: CacheCategory, original: &str) -> String {
    compose_filename_with(hash, category, original, NameEncoding::Verbatim)
}

/// Compose a cache filename, applying `encoding` to the original name.
pub fn compose_filename_with(
    hash: &ReversedHash,
    category: CacheCategory,
    original: &str,
    encoding: NameEncoding,
) -> String {
    let name = match encoding {
        NameEncoding::Verbatim => original.to_string(),
        NameEncoding::PercentNonAscii if !original.is_ascii() => {
            urlencoding::encode(original).into_owned()
        }
        NameEncoding::PercentNonAscii => original.to_string(),
    };

    format!("{}_{}{}", hash, category.encoded_path(), name)
}

/// Validate a user-supplied archive base name.
///
/// Returns an error if the name is `.`/`..` or contains separators; other
/// characters illegal on Windows become `_`.
pub fn sanitize_pack_name(name: &str) -> Result<String> {
    let name = name.trim();

    if name == "." || name == ".." {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in archive name: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in archive name: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.is_empty() {
        return Err(Error::InvalidFilename(
            "Archive name cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Sanitize an archive base name and make sure it ends in `.zip`.
pub fn pack_file_name(base: &str) -> Result<String> {
    let name = sanitize_pack_name(base)?;
    let has_extension = name.len() > ARCHIVE_EXTENSION.len()
        && name
            .get(name.len() - ARCHIVE_EXTENSION.len()..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(ARCHIVE_EXTENSION));

    if has_extension {
        Ok(name)
    } else {
        Ok(format!("{}{}", name, ARCHIVE_EXTENSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::derive_reversed_hash;

    #[test]
    fn test_encode_images_path() {
        let encoded = encode_cache_path(CacheCategory::Images.raw_path());
        assert_eq!(encoded, "Skins%5cMediaTracker%5cImages%5c");
        assert_eq!(encoded.matches("%5c").count(), 3);
        assert!(!encoded.contains("%5C"));
        assert_eq!(encoded.len(), 32);
    }

    #[test]
    fn test_encode_all_categories() {
        assert_eq!(
            CacheCategory::Sounds.encoded_path(),
            "Skins%5cMediaTracker%5cSounds%5c"
        );
        assert_eq!(
            CacheCategory::Music.encoded_path(),
            "Skins%5cChallengeMusics%5c"
        );
        assert_eq!(CacheCategory::Mods.encoded_path(), "Skins%5cStadium%5cMod%5c");
        assert_eq!(
            CacheCategory::Advert.encoded_path(),
            "Skins%5cAny%5cAdvertisement%5c"
        );
    }

    #[test]
    fn test_encode_reserved_and_non_ascii() {
        assert_eq!(encode_cache_path("a b/é"), "a%20b%2f%c3%a9");
        assert_eq!(encode_cache_path("keep-_.~"), "keep-_.~");
    }

    #[test]
    fn test_compose_filename() {
        let hash = derive_reversed_hash(b"");
        assert_eq!(
            compose_filename(&hash, CacheCategory::Images, "logo.png"),
            "7E42F8EC980980E904B2008FD98C1DD4_Skins%5cMediaTracker%5cImages%5clogo.png"
        );
    }

    #[test]
    fn test_compose_is_pure() {
        let hash = derive_reversed_hash(b"pixels");
        let first = compose_filename(&hash, CacheCategory::Mods, "a.dds");
        let second = compose_filename(&hash, CacheCategory::Mods, "a.dds");
        assert_eq!(first, second);
    }

    #[test]
    fn test_compose_keeps_non_ascii_verbatim() {
        let hash = derive_reversed_hash(b"pixels");
        let name = compose_filename(&hash, CacheCategory::Images, "café.png");
        assert!(name.ends_with("%5ccafé.png"));
    }

    #[test]
    fn test_compose_percent_non_ascii() {
        let hash = derive_reversed_hash(b"pixels");
        let encoded = compose_filename_with(
            &hash,
            CacheCategory::Images,
            "café.png",
            NameEncoding::PercentNonAscii,
        );
        assert!(encoded.ends_with("%5ccaf%C3%A9.png"));

        let ascii = compose_filename_with(
            &hash,
            CacheCategory::Images,
            "my logo.png",
            NameEncoding::PercentNonAscii,
        );
        assert!(ascii.ends_with("%5cmy logo.png"));
    }

    #[test]
    fn test_sanitize_pack_name() {
        assert_eq!(sanitize_pack_name(" MyPack ").unwrap(), "MyPack");
        assert_eq!(sanitize_pack_name("a:b").unwrap(), "a_b");
        assert!(sanitize_pack_name("../evil").is_err());
        assert!(sanitize_pack_name("..").is_err());
        assert!(sanitize_pack_name(" . ").is_err());
        assert_eq!(sanitize_pack_name("v1..2").unwrap(), "v1..2");
        assert_eq!(sanitize_pack_name("Pack..zip").unwrap(), "Pack..zip");
        assert!(sanitize_pack_name("dir/pack").is_err());
        assert!(sanitize_pack_name("dir\\pack").is_err());
        assert!(sanitize_pack_name("nul\0").is_err());
        assert!(sanitize_pack_name("   ").is_err());
    }

    #[test]
    fn test_pack_file_name() {
        assert_eq!(pack_file_name("Pack").unwrap(), "Pack.zip");
        assert_eq!(pack_file_name("Pack.zip").unwrap(), "Pack.zip");
        assert_eq!(pack_file_name("Pack.ZIP").unwrap(), "Pack.ZIP");
        assert_eq!(pack_file_name(".zip").unwrap(), ".zip.zip");
        assert_eq!(pack_file_name("Pack..zip").unwrap(), "Pack..zip");
        assert!(pack_file_name(".").is_err());
    }
}
