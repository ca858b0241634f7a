use crate::headers::{PluginHeaders, ThemeHeaders};
use crate::readme::ReadmeDocument;

/// Kind of package found in an archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageType {
    Plugin,
    Theme,
}

impl PackageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageType::Plugin => "plugin",
            PackageType::Theme => "theme",
        }
    }
}

/// Header block of whichever kind the scanner found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageHeaders {
    Plugin(PluginHeaders),
    Theme(ThemeHeaders),
}

impl PackageHeaders {
    pub fn package_type(&self) -> PackageType {
        match self {
            PackageHeaders::Plugin(_) => PackageType::Plugin,
            PackageHeaders::Theme(_) => PackageType::Theme,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PackageHeaders::Plugin(h) => &h.name,
            PackageHeaders::Theme(h) => &h.name,
        }
    }

    pub fn version(&self) -> &str {
        match self {
            PackageHeaders::Plugin(h) => &h.version,
            PackageHeaders::Theme(h) => &h.version,
        }
    }

    /// Plugin URI or Theme URI, depending on kind
    pub fn homepage(&self) -> &str {
        match self {
            PackageHeaders::Plugin(h) => &h.plugin_uri,
            PackageHeaders::Theme(h) => &h.theme_uri,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            PackageHeaders::Plugin(h) => &h.description,
            PackageHeaders::Theme(h) => &h.description,
        }
    }

    pub fn author(&self) -> &str {
        match self {
            PackageHeaders::Plugin(h) => &h.author,
            PackageHeaders::Theme(h) => &h.author,
        }
    }

    pub fn author_homepage(&self) -> &str {
        match self {
            PackageHeaders::Plugin(h) => &h.author_uri,
            PackageHeaders::Theme(h) => &h.author_uri,
        }
    }
}

/// Metadata extracted from one package archive.
///
/// Exactly one of `plugin_file`/`stylesheet` is set, matching
/// `package_type`. `readme` is present only when a valid readme document
/// was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageResult {
    pub package_type: PackageType,
    pub headers: PackageHeaders,
    pub readme: Option<ReadmeDocument>,
    /// Archive path of the main plugin file, for plugin packages
    pub plugin_file: Option<String>,
    /// Archive path of the theme stylesheet, for theme packages
    pub stylesheet: Option<String>,
}
