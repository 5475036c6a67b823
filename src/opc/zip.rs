//! Minimal ZIP archive writer for OPC containers.
//!
//! OPC packages (.docx and friends) only ever use the Store and Deflate
//! compression methods, so this writer supports exactly those. Entries are
//! buffered in memory and the central directory is emitted on `finish`.
//!
//! Every entry carries a fixed DOS timestamp so that identical part bytes
//! always produce an identical archive.

use crate::opc::error::{OpcError, Result};
use flate2::Compression;
use flate2::write::DeflateEncoder;
use std::io::Write;

const LOCAL_FILE_HEADER_SIG: u32 = 0x0403_4b50;
const CENTRAL_DIR_HEADER_SIG: u32 = 0x0201_4b50;
const END_OF_CENTRAL_DIR_SIG: u32 = 0x0605_4b50;

/// Minimum ZIP version required to extract Store/Deflate entries.
const VERSION_NEEDED: u16 = 20;

// 2000-01-01 00:00:00 in MS-DOS packed format.
const FIXED_DOS_TIME: u16 = 0;
const FIXED_DOS_DATE: u16 = (20 << 9) | (1 << 5) | 1;

const METHOD_STORE: u16 = 0;
const METHOD_DEFLATE: u16 = 8;

/// In-memory ZIP archive writer.
///
/// # Example
///
/// ```
/// use guide_doc::opc::zip::ArchiveWriter;
///
/// let mut writer = ArchiveWriter::new();
/// writer.write_deflated("word/document.xml", b"<w:document/>")?;
/// let bytes = writer.finish_to_bytes()?;
/// # Ok::<(), guide_doc::opc::error::OpcError>(())
/// ```
pub struct ArchiveWriter {
    /// Serialized local file headers and entry data, in write order
    buf: Vec<u8>,
    /// One record per written entry, for the central directory
    entries: Vec<EntryRecord>,
}

struct EntryRecord {
    name: String,
    method: u16,
    crc: u32,
    compressed_size: u32,
    uncompressed_size: u32,
    local_header_offset: u32,
}

impl ArchiveWriter {
    /// Create a new archive writer that writes to memory.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8 * 1024),
            entries: Vec::new(),
        }
    }

    /// Write a file without compression (stored).
    pub fn write_stored(&mut self, name: &str, data: &[u8]) -> Result<()> {
        self.write_entry(name, METHOD_STORE, data.to_vec(), data)
    }

    /// Write a file with Deflate compression.
    pub fn write_deflated(&mut self, name: &str, data: &[u8]) -> Result<()> {
        let mut encoder = DeflateEncoder::new(
            Vec::with_capacity(data.len() / 2 + 64),
            Compression::default(),
        );
        encoder.write_all(data)?;
        let compressed = encoder
            .finish()
            .map_err(|e| OpcError::ZipError(e.to_string()))?;
        self.write_entry(name, METHOD_DEFLATE, compressed, data)
    }

    /// Get the number of entries written so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn write_entry(&mut self, name: &str, method: u16, payload: Vec<u8>, raw: &[u8]) -> Result<()> {
        // Member names never carry a leading slash inside the archive.
        let name = name.strip_prefix('/').unwrap_or(name);

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(raw);
        let crc = hasher.finalize();

        let record = EntryRecord {
            name: name.to_string(),
            method,
            crc,
            compressed_size: to_u32(payload.len())?,
            uncompressed_size: to_u32(raw.len())?,
            local_header_offset: to_u32(self.buf.len())?,
        };

        put_u32(&mut self.buf, LOCAL_FILE_HEADER_SIG);
        put_u16(&mut self.buf, VERSION_NEEDED);
        put_u16(&mut self.buf, 0); // general purpose flags
        put_u16(&mut self.buf, method);
        put_u16(&mut self.buf, FIXED_DOS_TIME);
        put_u16(&mut self.buf, FIXED_DOS_DATE);
        put_u32(&mut self.buf, record.crc);
        put_u32(&mut self.buf, record.compressed_size);
        put_u32(&mut self.buf, record.uncompressed_size);
        put_u16(&mut self.buf, to_u16(name.len())?);
        put_u16(&mut self.buf, 0); // extra field length
        self.buf.extend_from_slice(name.as_bytes());
        self.buf.extend_from_slice(&payload);

        self.entries.push(record);
        Ok(())
    }

    /// Finish writing and return the complete archive bytes.
    ///
    /// Emits the central directory and the end-of-central-directory record.
    pub fn finish_to_bytes(mut self) -> Result<Vec<u8>> {
        let central_dir_offset = to_u32(self.buf.len())?;

        for entry in &self.entries {
            put_u32(&mut self.buf, CENTRAL_DIR_HEADER_SIG);
            put_u16(&mut self.buf, VERSION_NEEDED); // version made by
            put_u16(&mut self.buf, VERSION_NEEDED);
            put_u16(&mut self.buf, 0); // general purpose flags
            put_u16(&mut self.buf, entry.method);
            put_u16(&mut self.buf, FIXED_DOS_TIME);
            put_u16(&mut self.buf, FIXED_DOS_DATE);
            put_u32(&mut self.buf, entry.crc);
            put_u32(&mut self.buf, entry.compressed_size);
            put_u32(&mut self.buf, entry.uncompressed_size);
            put_u16(&mut self.buf, to_u16(entry.name.len())?);
            put_u16(&mut self.buf, 0); // extra field length
            put_u16(&mut self.buf, 0); // comment length
            put_u16(&mut self.buf, 0); // disk number start
            put_u16(&mut self.buf, 0); // internal attributes
            put_u32(&mut self.buf, 0); // external attributes
            put_u32(&mut self.buf, entry.local_header_offset);
            self.buf.extend_from_slice(entry.name.as_bytes());
        }

        let central_dir_end = to_u32(self.buf.len())?;
        let entry_count = to_u16(self.entries.len())?;

        put_u32(&mut self.buf, END_OF_CENTRAL_DIR_SIG);
        put_u16(&mut self.buf, 0); // disk number
        put_u16(&mut self.buf, 0); // central directory disk
        put_u16(&mut self.buf, entry_count);
        put_u16(&mut self.buf, entry_count);
        put_u32(&mut self.buf, central_dir_end - central_dir_offset);
        put_u32(&mut self.buf, central_dir_offset);
        put_u16(&mut self.buf, 0); // comment length

        Ok(self.buf)
    }
}

impl Default for ArchiveWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn put_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

#[inline]
fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn to_u16(value: usize) -> Result<u16> {
    u16::try_from(value).map_err(|_| OpcError::ZipError(format!("value exceeds u16: {}", value)))
}

fn to_u32(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| OpcError::ZipError(format!("value exceeds u32: {}", value)))
}
