//! Key-value header extraction from comment-decorated text.
//!
//! Plugins and themes declare their metadata in a `Label: value` block at
//! the top of a source file, usually wrapped in a comment. [`extract`]
//! implements the generic line scanner; [`plugin`] and [`theme`] specialize
//! it with the fixed field maps for each package kind.

mod extract;
mod plugin;
mod theme;

pub use extract::{HeaderFieldMap, HeaderRecord, get_file_headers};
pub use plugin::{PluginHeaders, get_plugin_headers};
pub use theme::{ThemeHeaders, get_theme_headers};
