//! ZIP archive reading.
//!
//! This module provides read-only access to ZIP archives, enough to list
//! entries and fetch their contents for metadata inspection.
//!
//! ## Architecture
//!
//! The module is organized into three components:
//!
//! - [`structures`]: Records for the ZIP format elements we consume (EOCD,
//!   ZIP64 records, central directory entries)
//! - [`parser`]: Low-level parsing of those structures from raw bytes
//! - [`extractor`]: Entry-content API (full reads and bounded prefix reads)
//!
//! ## Reading Strategy
//!
//! A ZIP file is read from the end: the End of Central Directory record is
//! located first, then the Central Directory is fetched in a single read and
//! decoded entry by entry. Entry data is only touched when a caller asks for
//! it, so scanning an archive's file list never decompresses anything.
//!
//! ## Supported Features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - ZIP64 extensions for large archives
//! - STORED and DEFLATE entry data, CRC32-checked on full reads
//!
//! ## Limitations
//!
//! - No encryption support
//! - No multi-disk archive support
//! - No BZIP2, LZMA, or other compression methods

mod extractor;
mod parser;
mod structures;

pub use extractor::ZipExtractor;
pub use parser::ZipParser;
pub use structures::*;
