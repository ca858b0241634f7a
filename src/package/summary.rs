//! Flattened metadata record.
//!
//! This is the old aggregation surface: one flat record with header and
//! readme fields merged, section keys normalized, and a couple of derived
//! values. New callers should read [`PackageResult`] directly.

use std::path::Path;

use super::result::{PackageResult, PackageType};
use super::scanner::parse_package;
use crate::readme::{MarkupTransform, strip_tags};

/// Flattened package metadata. Every field is present only when its source
/// field was non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    pub package_type: PackageType,
    pub name: Option<String>,
    pub version: Option<String>,
    pub homepage: Option<String>,
    pub author: Option<String>,
    pub author_homepage: Option<String>,
    pub requires: Option<String>,
    pub tested: Option<String>,
    /// Readme sections under lowercased, space-to-underscore keys
    pub sections: Vec<(String, String)>,
    pub upgrade_notice: Option<String>,
    /// Lowercased name of the plugin file's directory, when it has one
    pub slug: Option<String>,
}

/// Flatten a scanned package into the legacy record.
#[deprecated(note = "read the typed fields of PackageResult instead")]
pub fn summarize(package: &PackageResult) -> PackageSummary {
    let headers = &package.headers;
    let mut summary = PackageSummary {
        package_type: package.package_type,
        name: non_empty(headers.name()),
        version: non_empty(headers.version()),
        homepage: non_empty(headers.homepage()),
        author: non_empty(headers.author()),
        author_homepage: non_empty(headers.author_homepage()),
        requires: None,
        tested: None,
        sections: Vec::new(),
        upgrade_notice: None,
        slug: None,
    };

    if let Some(readme) = &package.readme {
        summary.requires = non_empty(&readme.requires);
        summary.tested = non_empty(&readme.tested);
        summary.sections = readme
            .sections
            .iter()
            .map(|(title, body)| (normalize_section_key(title), body.clone()))
            .collect();
    }

    summary.upgrade_notice = summary
        .sections
        .iter()
        .find(|(key, _)| key == "upgrade_notice")
        .and_then(|(_, body)| {
            summary
                .version
                .as_deref()
                .and_then(|version| version_notice(body, version))
        });

    if let Some(plugin_file) = &package.plugin_file {
        summary.slug = plugin_slug(plugin_file);
    }

    summary
}

/// Scan the archive at `path` and flatten the result in one step.
#[deprecated(note = "use parse_package and read the typed fields instead")]
pub fn summarize_path(path: &Path, markup: Option<&dyn MarkupTransform>) -> Option<PackageSummary> {
    let package = parse_package(path, markup)?;
    #[allow(deprecated)]
    let summary = summarize(&package);
    Some(summary)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Section titles become lookup keys: lowercased, spaces as underscores.
fn normalize_section_key(title: &str) -> String {
    title.to_lowercase().replace(' ', "_")
}

/// First paragraph following the `<h4>` heading for `version` in an
/// upgrade-notice section body (headings come from the markup step),
/// HTML-stripped.
fn version_notice(body: &str, version: &str) -> Option<String> {
    let target = format!("<h4>{}</h4>", version);
    let mut lines = body.split('\n').map(str::trim);
    lines.by_ref().find(|line| line.eq_ignore_ascii_case(&target))?;

    let mut paragraph = Vec::new();
    for line in lines {
        if line.is_empty() {
            if paragraph.is_empty() {
                continue;
            }
            break;
        }
        if line.starts_with("<h4>") {
            break;
        }
        paragraph.push(line);
    }

    if paragraph.is_empty() {
        return None;
    }
    let notice = strip_tags(&paragraph.join("\n")).trim().to_string();
    non_empty(&notice)
}

fn plugin_slug(plugin_file: &str) -> Option<String> {
    let parent = Path::new(plugin_file).parent()?;
    let dir = parent.file_name()?;
    Some(dir.to_string_lossy().to_lowercase())
}

#[cfg(test)]
mod tests {
    #![allow(deprecated)]

    use super::*;
    use crate::headers::get_plugin_headers;
    use crate::package::PackageHeaders;
    use crate::readme::{PlainText, parse_readme};

    fn plugin_package() -> PackageResult {
        let headers = get_plugin_headers(
            "/*\nPlugin Name: Example\nPlugin URI: https://example.com\n\
             Version: 1.1\nAuthor: Alice\nAuthor URI: https://alice.example\n*/",
        )
        .unwrap();
        let readme = parse_readme(
            "=== Example ===\n\
             Requires at least: 3.0\n\
             Tested up to: 6.4\n\
             \n\
             Short.\n\
             == Upgrade Notice ==\n\
             = 1.1 =\n\
             Update <strong>now</strong>.\n\
             \n\
             = 1.0 =\n\
             First release.",
            Some(&PlainText),
        );
        PackageResult {
            package_type: PackageType::Plugin,
            headers: PackageHeaders::Plugin(headers),
            readme,
            plugin_file: Some("example-plugin/example.php".to_string()),
            stylesheet: None,
        }
    }

    #[test]
    fn header_and_readme_fields_flattened() {
        let summary = summarize(&plugin_package());
        assert_eq!(summary.package_type, PackageType::Plugin);
        assert_eq!(summary.name.as_deref(), Some("Example"));
        assert_eq!(summary.version.as_deref(), Some("1.1"));
        assert_eq!(summary.homepage.as_deref(), Some("https://example.com"));
        assert_eq!(summary.author.as_deref(), Some("Alice"));
        assert_eq!(
            summary.author_homepage.as_deref(),
            Some("https://alice.example")
        );
        assert_eq!(summary.requires.as_deref(), Some("3.0"));
        assert_eq!(summary.tested.as_deref(), Some("6.4"));
    }

    #[test]
    fn section_keys_normalized() {
        let summary = summarize(&plugin_package());
        assert_eq!(summary.sections.len(), 1);
        assert_eq!(summary.sections[0].0, "upgrade_notice");
    }

    #[test]
    fn upgrade_notice_for_current_version() {
        let summary = summarize(&plugin_package());
        assert_eq!(summary.upgrade_notice.as_deref(), Some("Update now."));
    }

    #[test]
    fn no_notice_for_unknown_version() {
        let mut package = plugin_package();
        if let PackageHeaders::Plugin(headers) = &mut package.headers {
            headers.version = "9.9".to_string();
        }
        let summary = summarize(&package);
        assert_eq!(summary.version.as_deref(), Some("9.9"));
        assert!(summary.upgrade_notice.is_none());
    }

    #[test]
    fn slug_from_plugin_directory() {
        let summary = summarize(&plugin_package());
        assert_eq!(summary.slug.as_deref(), Some("example-plugin"));

        let mut package = plugin_package();
        package.plugin_file = Some("toplevel.php".to_string());
        assert!(summarize(&package).slug.is_none());
    }

    #[test]
    fn empty_fields_stay_absent() {
        let headers = get_plugin_headers("/* Plugin Name: Bare */").unwrap();
        let package = PackageResult {
            package_type: PackageType::Plugin,
            headers: PackageHeaders::Plugin(headers),
            readme: None,
            plugin_file: Some("bare/bare.php".to_string()),
            stylesheet: None,
        };
        let summary = summarize(&package);
        assert_eq!(summary.name.as_deref(), Some("Bare"));
        assert!(summary.version.is_none());
        assert!(summary.homepage.is_none());
        assert!(summary.requires.is_none());
        assert!(summary.sections.is_empty());
        assert!(summary.upgrade_notice.is_none());
    }
}
