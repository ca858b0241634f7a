use std::io::Read;
use std::sync::Arc;

use flate2::Crc;
use flate2::read::DeflateDecoder;

use crate::io::ReadAt;
use anyhow::{Result, bail};

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipFileEntry};

/// Producing `n` decompressed bytes never consumes more than `n` plus a small
/// constant of compressed input (stored-block and huffman-table overhead), so
/// prefix reads can bound how much of the compressed stream they fetch.
const DEFLATE_PREFIX_SLACK: u64 = 1024;

/// Read-only access to the contents of ZIP entries.
pub struct ZipExtractor<R: ReadAt> {
    parser: ZipParser<R>,
}

impl<R: ReadAt> ZipExtractor<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            parser: ZipParser::new(reader),
        }
    }

    /// List all entries in the archive
    pub fn entries(&self) -> Result<Vec<ZipFileEntry>> {
        self.parser.list_entries()
    }

    /// Read an entry's full contents into memory.
    ///
    /// STORED data is copied verbatim; DEFLATE data is decompressed. The
    /// result is verified against the entry's CRC32 from the Central
    /// Directory.
    pub fn read_to_memory(&self, entry: &ZipFileEntry) -> Result<Vec<u8>> {
        let compressed = self.read_compressed(entry, entry.compressed_size)?;

        let data = match entry.compression_method {
            CompressionMethod::Stored => compressed,
            CompressionMethod::Deflate => {
                let mut data = Vec::with_capacity(entry.uncompressed_size as usize);
                DeflateDecoder::new(compressed.as_slice()).read_to_end(&mut data)?;
                data
            }
            CompressionMethod::Unknown(method) => {
                bail!("Unsupported compression method: {}", method);
            }
        };

        let mut crc = Crc::new();
        crc.update(&data);
        if crc.sum() != entry.crc32 {
            bail!("CRC mismatch in entry: {}", entry.file_name);
        }

        Ok(data)
    }

    /// Read at most `max_bytes` of an entry's decompressed contents.
    ///
    /// Partial data cannot be CRC-checked, so none is attempted. For DEFLATE
    /// entries only the compressed prefix needed to produce `max_bytes` of
    /// output is fetched.
    pub fn read_prefix(&self, entry: &ZipFileEntry, max_bytes: usize) -> Result<Vec<u8>> {
        match entry.compression_method {
            CompressionMethod::Stored => {
                let len = entry.uncompressed_size.min(max_bytes as u64);
                self.read_compressed(entry, len)
            }
            CompressionMethod::Deflate => {
                let input_len = entry
                    .compressed_size
                    .min(max_bytes as u64 + DEFLATE_PREFIX_SLACK);
                let compressed = self.read_compressed(entry, input_len)?;

                let mut data = Vec::with_capacity(max_bytes.min(entry.uncompressed_size as usize));
                DeflateDecoder::new(compressed.as_slice())
                    .take(max_bytes as u64)
                    .read_to_end(&mut data)?;
                Ok(data)
            }
            CompressionMethod::Unknown(method) => {
                bail!("Unsupported compression method: {}", method);
            }
        }
    }

    /// Read `len` bytes of raw (still compressed) entry data.
    fn read_compressed(&self, entry: &ZipFileEntry, len: u64) -> Result<Vec<u8>> {
        let data_offset = self.parser.data_offset(entry)?;
        let mut buf = vec![0u8; len as usize];
        self.parser.reader().read_at(data_offset, &mut buf)?;
        Ok(buf)
    }
}
