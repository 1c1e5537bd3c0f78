//! Reversed-MD5 hashing.
//!
//! The game's cache loader names files after the MD5 digest of their
//! contents with the 16 digest bytes in reverse order, rendered as
//! uppercase hex.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use md5::{Digest, Md5};
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Length of an MD5 digest in bytes.
pub const DIGEST_LEN: usize = 16;

/// Read buffer size for streaming hashes.
const CHUNK_SIZE: usize = 8192;

/// An MD5 digest stored in reversed byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReversedHash([u8; DIGEST_LEN]);

impl ReversedHash {
    /// Build from a digest in standard MD5 byte order.
    pub fn from_digest(digest: [u8; DIGEST_LEN]) -> Self {
        let mut reversed = digest;
        reversed.reverse();
        Self(reversed)
    }

    /// Reversed bytes, as they appear in the filename.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// The digest in standard MD5 byte order.
    pub fn digest(&self) -> [u8; DIGEST_LEN] {
        let mut digest = self.0;
        digest.reverse();
        digest
    }

    /// Standard MD5 rendered as uppercase hex.
    pub fn md5_hex(&self) -> String {
        to_upper_hex(&self.digest())
    }

    /// Reversed digest rendered as uppercase hex (32 characters).
    pub fn to_hex(&self) -> String {
        to_upper_hex(&self.0)
    }
}

fn to_upper_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

fn finish(hasher: Md5) -> ReversedHash {
    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&hasher.finalize());
    ReversedHash::from_digest(digest)
}

impl fmt::Display for ReversedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for ReversedHash {
    type Err = Error;

    /// Parse 32 uppercase hex characters.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let valid = s.len() == DIGEST_LEN * 2
            && s.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b));
        if !valid {
            return Err(Error::InvalidHash(format!(
                "'{}' is not 32 uppercase hex characters",
                s
            )));
        }

        let mut bytes = [0u8; DIGEST_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|e| Error::InvalidHash(format!("'{}': {}", s, e)))?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for ReversedHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Compute the reversed MD5 of an in-memory byte slice.
pub fn derive_reversed_hash(bytes: &[u8]) -> ReversedHash {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    finish(hasher)
}

/// Compute the reversed MD5 of everything `reader` yields.
pub fn hash_reader<R: Read>(mut reader: R) -> std::io::Result<ReversedHash> {
    let mut hasher = Md5::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(finish(hasher))
}

/// Compute the reversed MD5 of a file without loading it whole.
pub fn hash_file(path: &Path) -> Result<ReversedHash> {
    let file = File::open(path).map_err(|e| Error::read(path, e))?;
    hash_reader(file).map_err(|e| Error::read(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let hash = derive_reversed_hash(b"");
        assert_eq!(hash.md5_hex(), "D41D8CD98F00B204E9800998ECF8427E");
        assert_eq!(hash.to_string(), "7E42F8EC980980E904B2008FD98C1DD4");
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            derive_reversed_hash(b"abc").to_string(),
            "727FE1287D3F96D6B04FD23C98500190"
        );
        assert_eq!(
            derive_reversed_hash(b"hello world").to_string(),
            "C3CD5A8FBB22CB93D0EE1EE0BB3BB65E"
        );
    }

    #[test]
    fn test_is_byte_reversal_not_string_reversal() {
        let hash = derive_reversed_hash(b"");
        let string_reversed: String = hash.md5_hex().chars().rev().collect();
        assert_ne!(hash.to_hex(), string_reversed);
    }

    #[test]
    fn test_shape_and_determinism() {
        for input in [&b""[..], b"a", b"\x00\xff\x10", &[7u8; 10_000][..]] {
            let first = derive_reversed_hash(input).to_string();
            let second = derive_reversed_hash(input).to_string();
            assert_eq!(first, second);
            assert_eq!(first.len(), 32);
            assert!(first
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        }
    }

    #[test]
    fn test_reversal_round_trip() {
        let hash = derive_reversed_hash(b"round trip");
        let mut bytes = *hash.as_bytes();
        bytes.reverse();
        let mut expected = [0u8; DIGEST_LEN];
        expected.copy_from_slice(&Md5::digest(b"round trip"));
        assert_eq!(bytes, expected);
        assert_eq!(hash.digest(), expected);
    }

    #[test]
    fn test_parse_round_trip() {
        let hash = derive_reversed_hash(b"abc");
        let parsed: ReversedHash = hash.to_string().parse().unwrap();
        assert_eq!(parsed, hash);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("727fe1287d3f96d6b04fd23c98500190"
            .parse::<ReversedHash>()
            .is_err());
        assert!("727FE128".parse::<ReversedHash>().is_err());
        assert!("727FE1287D3F96D6B04FD23C9850019G"
            .parse::<ReversedHash>()
            .is_err());
    }

    #[test]
    fn test_hash_reader_matches_slice() {
        let data = vec![42u8; CHUNK_SIZE * 3 + 17];
        let streamed = hash_reader(&data[..]).unwrap();
        assert_eq!(streamed, derive_reversed_hash(&data));
    }

    #[test]
    fn test_hash_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.ogg");
        std::fs::write(&path, b"abc").unwrap();
        assert_eq!(
            hash_file(&path).unwrap().to_string(),
            "727FE1287D3F96D6B04FD23C98500190"
        );
        assert!(matches!(
            hash_file(&dir.path().join("none")),
            Err(Error::Read { .. })
        ));
    }
}
