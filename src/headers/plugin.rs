use super::extract::{HeaderFieldMap, get_file_headers};

/// Field map for plugin headers. `_sitewide` is the legacy spelling of the
/// Network flag and never appears in the output record.
const PLUGIN_FIELD_MAP: HeaderFieldMap = &[
    ("Name", "Plugin Name"),
    ("PluginURI", "Plugin URI"),
    ("Version", "Version"),
    ("Description", "Description"),
    ("Author", "Author"),
    ("AuthorURI", "Author URI"),
    ("TextDomain", "Text Domain"),
    ("DomainPath", "Domain Path"),
    ("Network", "Network"),
    ("_sitewide", "Site Wide Only"),
];

/// Parsed plugin header block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginHeaders {
    pub name: String,
    /// Back-compat alias of `name`
    pub title: String,
    pub plugin_uri: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub author_uri: String,
    pub text_domain: String,
    pub domain_path: String,
    /// Whether the plugin can only be activated network-wide
    pub network: bool,
}

/// Parse the plugin header block out of a text blob.
///
/// Returns `None` when no `Plugin Name:` header is present - the text is
/// then judged not to be a plugin file at all.
pub fn get_plugin_headers(text: &str) -> Option<PluginHeaders> {
    let record = get_file_headers(text, PLUGIN_FIELD_MAP);

    let name = record.get("Name");
    if name.is_empty() {
        return None;
    }

    // "Site Wide Only" predates "Network"; it only applies when the modern
    // header is absent.
    let network = match record.get("Network") {
        "" => record.get("_sitewide"),
        modern => modern,
    };

    Some(PluginHeaders {
        name: name.to_string(),
        title: name.to_string(),
        plugin_uri: record.get("PluginURI").to_string(),
        version: record.get("Version").to_string(),
        description: record.get("Description").to_string(),
        author: record.get("Author").to_string(),
        author_uri: record.get("AuthorURI").to_string(),
        text_domain: record.get("TextDomain").to_string(),
        domain_path: record.get("DomainPath").to_string(),
        network: network.eq_ignore_ascii_case("true"),
    })
}
