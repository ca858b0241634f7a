use super::extract::{HeaderFieldMap, get_file_headers};
use crate::readme::strip_tags;

/// Field map for theme stylesheet headers.
const THEME_FIELD_MAP: HeaderFieldMap = &[
    ("Name", "Theme Name"),
    ("ThemeURI", "Theme URI"),
    ("Description", "Description"),
    ("Author", "Author"),
    ("AuthorURI", "Author URI"),
    ("Version", "Version"),
    ("Template", "Template"),
    ("Status", "Status"),
    ("Tags", "Tags"),
    ("TextDomain", "Text Domain"),
    ("DomainPath", "Domain Path"),
    ("DetailsURI", "Details URI"),
];

/// Parsed theme stylesheet header block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeHeaders {
    pub name: String,
    pub theme_uri: String,
    pub description: String,
    pub author: String,
    pub author_uri: String,
    pub version: String,
    /// Parent theme directory for child themes
    pub template: String,
    pub status: String,
    pub tags: Vec<String>,
    pub text_domain: String,
    pub domain_path: String,
    pub details_uri: String,
}

/// Parse the theme header block out of a stylesheet.
///
/// Returns `None` when no `Theme Name:` header is present.
pub fn get_theme_headers(text: &str) -> Option<ThemeHeaders> {
    let record = get_file_headers(text, THEME_FIELD_MAP);

    let name = record.get("Name");
    if name.is_empty() {
        return None;
    }

    let tags = strip_tags(record.get("Tags"))
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect();

    Some(ThemeHeaders {
        name: name.to_string(),
        theme_uri: record.get("ThemeURI").to_string(),
        description: record.get("Description").to_string(),
        author: record.get("Author").to_string(),
        author_uri: record.get("AuthorURI").to_string(),
        version: record.get("Version").to_string(),
        template: record.get("Template").to_string(),
        status: record.get("Status").to_string(),
        tags,
        text_domain: record.get("TextDomain").to_string(),
        domain_path: record.get("DomainPath").to_string(),
        details_uri: record.get("DetailsURI").to_string(),
    })
}
