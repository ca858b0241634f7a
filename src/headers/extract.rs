//! Generic header-block scanner.
//!
//! Given a text blob and an ordered field map, produce one value per mapped
//! field. A field's line looks like
//!
//! ```text
//!  * Plugin Name: My Plugin
//! ```
//!
//! i.e. optional comment decoration, the label, a colon, and the value on
//! the same line. Multi-line values are not supported by design.

/// Ordered (internal key, human-readable label) pairs used to locate fields
/// in text. One static instance per parser specialization.
pub type HeaderFieldMap = &'static [(&'static str, &'static str)];

/// Characters that may precede a label on its line: whitespace plus the
/// comment markers of C-like and shell-like syntaxes.
const HEADER_DECORATION: &[char] = &[' ', '\t', '/', '*', '#', '@'];

/// Extracted header fields, one entry per field-map key, in map order.
///
/// Absent fields hold an empty string, so lookups are total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRecord {
    fields: Vec<(&'static str, String)>,
}

impl HeaderRecord {
    /// Value for an internal field key, empty string when absent.
    pub fn get(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Iterate fields in field-map order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Scan a text blob for the fields of `map`.
///
/// For each label the first matching line wins, even when its value turns
/// out empty; later duplicates of the same label are ignored. This never
/// fails: unmatched fields come back as empty strings.
pub fn get_file_headers(text: &str, map: HeaderFieldMap) -> HeaderRecord {
    // Normalize carriage returns so classic Mac and DOS line endings both
    // split into scannable lines.
    let text = text.replace('\r', "\n");

    let mut fields = Vec::with_capacity(map.len());
    for (key, label) in map {
        let value = text
            .split('\n')
            .find_map(|line| match_header_line(line, label))
            .map(cleanup_header_value)
            .unwrap_or_default();
        fields.push((*key, value));
    }

    HeaderRecord { fields }
}

/// Match one line against a label, returning the raw value on success.
///
/// The label is compared literally, character by character (ASCII
/// case-insensitive), so metacharacters of any pattern language have no
/// special meaning. The colon must follow the label immediately.
fn match_header_line<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let rest = line.trim_start_matches(HEADER_DECORATION);
    let (head, tail) = rest.split_at_checked(label.len())?;
    if !head.eq_ignore_ascii_case(label) {
        return None;
    }
    tail.strip_prefix(':')
}

/// Trim a raw value and truncate it at a closing-comment or end-of-code
/// marker. Truncation is literal, not escape-aware.
fn cleanup_header_value(raw: &str) -> String {
    let value = raw.trim();

    let cut = match (value.find("*/"), value.find("?>")) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    };

    match cut {
        Some(i) => value[..i].trim().to_string(),
        None => value.to_string(),
    }
}
