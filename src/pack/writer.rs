//! Deterministic ZIP writer.
//!
//! Output is Zip32-only with explicit sizes (no data descriptors), no
//! extra fields and a fixed DOS timestamp of 1980-01-01 00:00.

use std::collections::HashSet;
use std::io::Write;

use flate2::write::DeflateEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const LOCAL_HEADER_SIG: u32 = 0x0403_4b50;
const CENTRAL_HEADER_SIG: u32 = 0x0201_4b50;
const END_OF_CENTRAL_DIR_SIG: u32 = 0x0605_4b50;

/// Version 2.0, host MS-DOS.
const ZIP_VERSION: u16 = 20;

/// General purpose flag bit 11: names are UTF-8.
const FLAG_UTF8: u16 = 0x0800;

const DOS_TIME: u16 = 0;
/// 1980-01-01, the earliest DOS date.
const DOS_DATE: u16 = (1 << 5) | 1;

/// Deflate level used for every archive.
const DEFLATE_LEVEL: u32 = 6;

/// Compression applied to each archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionMethod {
    /// Deflate at a fixed level (default).
    #[default]
    Deflate,
    /// No compression.
    Store,
}

impl CompressionMethod {
    fn code(&self) -> u16 {
        match self {
            CompressionMethod::Store => 0,
            CompressionMethod::Deflate => 8,
        }
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            CompressionMethod::Store => Ok(data.to_vec()),
            CompressionMethod::Deflate => {
                let mut encoder =
                    DeflateEncoder::new(Vec::new(), Compression::new(DEFLATE_LEVEL));
                encoder
                    .write_all(data)
                    .map_err(|e| Error::Archive(format!("Deflate failed: {}", e)))?;
                encoder
                    .finish()
                    .map_err(|e| Error::Archive(format!("Deflate finish failed: {}", e)))
            }
        }
    }
}

impl std::fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompressionMethod::Deflate => write!(f, "deflate"),
            CompressionMethod::Store => write!(f, "store"),
        }
    }
}

/// In-memory ZIP archive builder.
#[derive(Debug)]
pub struct ZipBuilder {
    method: CompressionMethod,
    out: Vec<u8>,
    central: Vec<u8>,
    names: HashSet<String>,
    entries: u16,
}

impl ZipBuilder {
    /// Create an empty archive using `method` for every entry.
    pub fn new(method: CompressionMethod) -> Self {
        Self {
            method,
            out: Vec::new(),
            central: Vec::new(),
            names: HashSet::new(),
            entries: 0,
        }
    }

    /// Number of entries added so far.
    pub(crate) fn len(&self) -> usize {
        self.entries as usize
    }

    /// Whether an entry called `name` was already added.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Append an entry. Entries keep insertion order.
    pub fn add_entry(&mut self, name: &str, data: &[u8]) -> Result<()> {
        if self.contains(name) {
            return Err(Error::Archive(format!("Duplicate entry name: {}", name)));
        }
        if self.entries == u16::MAX {
            return Err(Error::Archive("Too many entries for a Zip32 archive".into()));
        }

        let name_bytes = name.as_bytes();
        let name_len = u16::try_from(name_bytes.len())
            .map_err(|_| Error::Archive(format!("Entry name too long: {}", name)))?;
        let compressed = self.method.compress(data)?;
        let crc = crc32fast::hash(data);
        let compressed_len = zip32_size(compressed.len(), name)?;
        let uncompressed_len = zip32_size(data.len(), name)?;
        let local_offset = zip32_size(self.out.len(), name)?;

        let out = &mut self.out;
        put_u32(out, LOCAL_HEADER_SIG);
        put_u16(out, ZIP_VERSION);
        put_u16(out, FLAG_UTF8);
        put_u16(out, self.method.code());
        put_u16(out, DOS_TIME);
        put_u16(out, DOS_DATE);
        put_u32(out, crc);
        put_u32(out, compressed_len);
        put_u32(out, uncompressed_len);
        put_u16(out, name_len);
        put_u16(out, 0);
        out.extend_from_slice(name_bytes);
        out.extend_from_slice(&compressed);

        let cd = &mut self.central;
        put_u32(cd, CENTRAL_HEADER_SIG);
        put_u16(cd, ZIP_VERSION); // made by
        put_u16(cd, ZIP_VERSION); // needed
        put_u16(cd, FLAG_UTF8);
        put_u16(cd, self.method.code());
        put_u16(cd, DOS_TIME);
        put_u16(cd, DOS_DATE);
        put_u32(cd, crc);
        put_u32(cd, compressed_len);
        put_u32(cd, uncompressed_len);
        put_u16(cd, name_len);
        put_u16(cd, 0); // extra
        put_u16(cd, 0); // comment
        put_u16(cd, 0); // disk
        put_u16(cd, 0); // internal attrs
        put_u32(cd, 0); // external attrs
        put_u32(cd, local_offset);
        cd.extend_from_slice(name_bytes);

        self.names.insert(name.to_string());
        self.entries += 1;

        tracing::debug!(
            "Packed {} ({} -> {} bytes, {})",
            name,
            data.len(),
            compressed.len(),
            self.method
        );

        Ok(())
    }

    /// Append the central directory and return the archive bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let Self {
            mut out,
            central,
            entries,
            ..
        } = self;

        let cd_offset = zip32_size(out.len(), "central directory")?;
        let cd_size = zip32_size(central.len(), "central directory")?;
        out.extend_from_slice(&central);

        put_u32(&mut out, END_OF_CENTRAL_DIR_SIG);
        put_u16(&mut out, 0); // this disk
        put_u16(&mut out, 0); // central directory disk
        put_u16(&mut out, entries);
        put_u16(&mut out, entries);
        put_u32(&mut out, cd_size);
        put_u32(&mut out, cd_offset);
        put_u16(&mut out, 0); // comment

        Ok(out)
    }
}

/// Build an archive from `(name, bytes)` pairs in order.
#[cfg(test)]
pub(crate) fn build_zip<'a, I>(entries: I, method: CompressionMethod) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut builder = ZipBuilder::new(method);
    for (name, data) in entries {
        builder.add_entry(name, data)?;
    }
    builder.finish()
}

fn zip32_size(len: usize, what: &str) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::Archive(format!("{} exceeds the Zip32 4 GiB limit", what)))
}

fn put_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn put_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}
