//! # zipmeta
//!
//! Extract plugin and theme metadata from ZIP distribution archives.
//!
//! This library scans a package archive for the files that identify a
//! plugin (a `.php` file with a `Plugin Name:` header) or a theme (a
//! `style.css` with a `Theme Name:` header), parses the accompanying
//! `readme.txt` document when present, and returns the result as typed
//! records - all without executing anything inside the archive.
//!
//! ## Features
//!
//! - ZIP central-directory reader over a pluggable random-access source
//! - STORED and DEFLATE entries, ZIP64 archives, CRC-checked reads
//! - Comment-decorated `Label: value` header-block extraction
//! - Multi-phase readme parsing (title, header block, summary, sections)
//! - Optional caller-injected markup transform for section bodies
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use zipmeta::parse_package;
//!
//! fn main() {
//!     if let Some(package) = parse_package(Path::new("my-plugin.zip"), None) {
//!         println!("{}: {}", package.package_type.as_str(), package.headers.name());
//!         if let Some(readme) = &package.readme {
//!             println!("{}", readme.short_description);
//!         }
//!     }
//! }
//! ```

pub mod cli;
pub mod headers;
pub mod io;
pub mod package;
pub mod readme;
pub mod zip;

pub use cli::Cli;
pub use headers::{
    HeaderFieldMap, HeaderRecord, PluginHeaders, ThemeHeaders, get_file_headers,
    get_plugin_headers, get_theme_headers,
};
pub use io::{LocalFileReader, ReadAt};
pub use package::{PackageHeaders, PackageResult, PackageType, parse_package, scan_package};
#[allow(deprecated)]
pub use package::{PackageSummary, summarize, summarize_path};
pub use readme::{MarkupTransform, PlainText, ReadmeDocument, parse_readme, strip_tags};
pub use zip::{CompressionMethod, ZipExtractor, ZipFileEntry, ZipParser};
