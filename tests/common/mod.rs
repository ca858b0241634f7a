//! Shared fixtures: a minimal in-memory ZIP writer and a byte-buffer reader.
#![allow(dead_code)]

use std::io::Write;

use flate2::{Compression, Crc, write::DeflateEncoder};
use zipmeta::ReadAt;

/// In-memory random access over a byte buffer.
pub struct MemReader(pub Vec<u8>);

impl ReadAt for MemReader {
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> anyhow::Result<usize> {
        let start = offset as usize;
        let end = start + buf.len();
        if end > self.0.len() {
            anyhow::bail!("Read past end of buffer");
        }
        buf.copy_from_slice(&self.0[start..end]);
        Ok(buf.len())
    }

    fn size(&self) -> u64 {
        self.0.len() as u64
    }
}

struct CentralRecord {
    name: String,
    method: u16,
    crc: u32,
    compressed: u32,
    uncompressed: u32,
    lfh_offset: u32,
}

/// Builds just enough of a ZIP archive for the reader under test: local
/// file headers with correct CRCs, a central directory, and an EOCD.
pub struct ArchiveBuilder {
    data: Vec<u8>,
    central: Vec<CentralRecord>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            central: Vec::new(),
        }
    }

    /// Add an entry without compression.
    pub fn stored(mut self, name: &str, contents: &[u8]) -> Self {
        self.add(name, contents, contents.to_vec(), 0);
        self
    }

    /// Add an entry compressed with DEFLATE.
    pub fn deflated(mut self, name: &str, contents: &[u8]) -> Self {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(contents).unwrap();
        let compressed = encoder.finish().unwrap();
        self.add(name, contents, compressed, 8);
        self
    }

    fn add(&mut self, name: &str, contents: &[u8], payload: Vec<u8>, method: u16) {
        let mut crc = Crc::new();
        crc.update(contents);
        let crc = crc.sum();

        let lfh_offset = self.data.len() as u32;

        // Local file header
        self.data.extend_from_slice(b"PK\x03\x04");
        self.put_u16(20); // version needed
        self.put_u16(0); // flags
        self.put_u16(method);
        self.put_u16(0); // mod time
        self.put_u16(0); // mod date
        self.put_u32(crc);
        self.put_u32(payload.len() as u32);
        self.put_u32(contents.len() as u32);
        self.put_u16(name.len() as u16);
        self.put_u16(0); // extra field length
        self.data.extend_from_slice(name.as_bytes());
        self.data.extend_from_slice(&payload);

        self.central.push(CentralRecord {
            name: name.to_string(),
            method,
            crc,
            compressed: payload.len() as u32,
            uncompressed: contents.len() as u32,
            lfh_offset,
        });
    }

    pub fn build(mut self) -> Vec<u8> {
        let cd_offset = self.data.len() as u32;

        let central = std::mem::take(&mut self.central);
        for record in &central {
            self.data.extend_from_slice(b"PK\x01\x02");
            self.put_u16(20); // version made by
            self.put_u16(20); // version needed
            self.put_u16(0); // flags
            self.put_u16(record.method);
            self.put_u16(0); // mod time
            self.put_u16(0); // mod date
            self.put_u32(record.crc);
            self.put_u32(record.compressed);
            self.put_u32(record.uncompressed);
            self.put_u16(record.name.len() as u16);
            self.put_u16(0); // extra field length
            self.put_u16(0); // comment length
            self.put_u16(0); // disk number start
            self.put_u16(0); // internal attributes
            self.put_u32(0); // external attributes
            self.put_u32(record.lfh_offset);
            self.data.extend_from_slice(record.name.as_bytes());
        }

        let cd_size = self.data.len() as u32 - cd_offset;

        self.data.extend_from_slice(b"PK\x05\x06");
        self.put_u16(0); // disk number
        self.put_u16(0); // disk with cd
        self.put_u16(central.len() as u16);
        self.put_u16(central.len() as u16);
        self.put_u32(cd_size);
        self.put_u32(cd_offset);
        self.put_u16(0); // comment length

        self.data
    }

    fn put_u16(&mut self, value: u16) {
        self.data.extend_from_slice(&value.to_le_bytes());
    }

    fn put_u32(&mut self, value: u32) {
        self.data.extend_from_slice(&value.to_le_bytes());
    }
}

pub const PLUGIN_PHP: &str = "<?php\n\
/*\n\
Plugin Name: Example Plugin\n\
Plugin URI: https://example.com/plugin\n\
Version: 1.1\n\
Description: Does example things.\n\
Author: Alice\n\
Author URI: https://example.com\n\
*/\n";

pub const THEME_CSS: &str = "/*\n\
Theme Name: Example Theme\n\
Theme URI: https://example.com/theme\n\
Version: 2.0\n\
Author: Bob\n\
Tags: Dark, Light, , Responsive\n\
*/\n\
body { margin: 0; }\n";

pub const README_TXT: &str = "=== Example Plugin ===\n\
Contributors: alice, bob\n\
Requires at least: 3.0\n\
Tested up to: 6.4\n\
Stable tag: 1.1\n\
\n\
Short description line.\n\
== Installation ==\n\
Unpack and activate.\n\
== Changelog ==\n\
= 1.1 =\n\
Fixed a bug.\n";
