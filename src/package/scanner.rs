//! Archive entry scan.
//!
//! Walks the entry list of a ZIP archive looking for the files that
//! identify a plugin or theme package, fetching entry contents only for
//! candidates that survive the name/depth/size filters.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use super::result::{PackageHeaders, PackageResult};
use crate::headers::{get_plugin_headers, get_theme_headers};
use crate::io::{LocalFileReader, ReadAt};
use crate::readme::{MarkupTransform, ReadmeDocument, parse_readme};
use crate::zip::ZipExtractor;

/// Header blocks sit at the top of their file, so candidates are only read
/// up to this many decompressed bytes.
const HEADER_SCAN_SIZE: usize = 8 * 1024;

/// Parse the package archive at `path`.
///
/// Returns `None` when the file is missing, is not a valid ZIP archive, or
/// contains no recognizable plugin/theme header - all the "not a package"
/// cases collapse into the same sentinel.
pub fn parse_package(path: &Path, markup: Option<&dyn MarkupTransform>) -> Option<PackageResult> {
    let reader = LocalFileReader::new(path).ok()?;
    let extractor = ZipExtractor::new(Arc::new(reader));
    scan_package(&extractor, markup).ok().flatten()
}

/// Scan an already-opened archive for package metadata.
///
/// Entries are visited in central-directory order. Per entry, at most one
/// branch runs, and only while its signal is still missing:
///
/// 1. a file named `readme.txt` is parsed as the readme (one attempt total,
///    even when it yields no document)
/// 2. a file named `style.css` is sniffed for theme headers
/// 3. any other `.php` file is sniffed for plugin headers
///
/// Entries nested deeper than one directory or with no content are skipped.
/// The scan stops as soon as both signals have been resolved. Without a
/// header the archive is not a package and `Ok(None)` is returned; archive
/// format and read failures are errors.
pub fn scan_package<R: ReadAt>(
    extractor: &ZipExtractor<R>,
    markup: Option<&dyn MarkupTransform>,
) -> Result<Option<PackageResult>> {
    // Outer Option: whether a readme.txt has been checked at all
    let mut readme: Option<Option<ReadmeDocument>> = None;
    let mut headers: Option<PackageHeaders> = None;
    let mut plugin_file = None;
    let mut stylesheet = None;

    for entry in extractor.entries()? {
        if readme.is_some() && headers.is_some() {
            break;
        }

        let name = normalize_entry_path(&entry.file_name);
        if name.is_empty() || name.matches('/').count() > 1 || entry.uncompressed_size == 0 {
            continue;
        }
        let base = name.rsplit('/').next().unwrap_or(name.as_str());

        if readme.is_none() && base.eq_ignore_ascii_case("readme.txt") {
            let data = extractor.read_to_memory(&entry)?;
            readme = Some(parse_readme(&String::from_utf8_lossy(&data), markup));
        } else if headers.is_none() && base.eq_ignore_ascii_case("style.css") {
            let data = extractor.read_prefix(&entry, HEADER_SCAN_SIZE)?;
            if let Some(theme) = get_theme_headers(&String::from_utf8_lossy(&data)) {
                stylesheet = Some(name);
                headers = Some(PackageHeaders::Theme(theme));
            }
        } else if headers.is_none() && extension(base).eq_ignore_ascii_case("php") {
            let data = extractor.read_prefix(&entry, HEADER_SCAN_SIZE)?;
            if let Some(plugin) = get_plugin_headers(&String::from_utf8_lossy(&data)) {
                plugin_file = Some(name);
                headers = Some(PackageHeaders::Plugin(plugin));
            }
        }
    }

    // A readme alone is not a package
    let Some(headers) = headers else {
        return Ok(None);
    };

    Ok(Some(PackageResult {
        package_type: headers.package_type(),
        headers,
        readme: readme.flatten(),
        plugin_file,
        stylesheet,
    }))
}

/// Normalize an archive entry path: backslashes become forward slashes and
/// leading/trailing slashes are stripped.
fn normalize_entry_path(name: &str) -> String {
    name.replace('\\', "/").trim_matches('/').to_string()
}

/// Lowercase-comparable extension: the text after the last dot, or empty.
fn extension(base: &str) -> &str {
    base.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}
