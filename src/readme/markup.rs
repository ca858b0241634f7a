//! Markup-transform seam and text cleanup helpers.

/// A lightweight-markup to rich-text transform supplied by the caller.
///
/// The parser itself has no markup engine and no dependency on one; any
/// implementation (or plain `Fn(&str) -> String` closure) can be injected
/// where section bodies should be converted.
pub trait MarkupTransform {
    /// Convert a section body. Must be pure; it is called once per section.
    fn transform(&self, text: &str) -> String;
}

impl<F> MarkupTransform for F
where
    F: Fn(&str) -> String,
{
    fn transform(&self, text: &str) -> String {
        self(text)
    }
}

/// Identity transform for callers that want heading rewriting without an
/// external markup engine.
pub struct PlainText;

impl MarkupTransform for PlainText {
    fn transform(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Rewrite full-line `= Heading =` markers to level-4 heading tags, then run
/// the body through the caller's transform.
pub(crate) fn apply_markup(body: &str, transform: &dyn MarkupTransform) -> String {
    let rewritten = body
        .split('\n')
        .map(|line| match heading_title(line) {
            Some(title) => format!("<h4>{}</h4>", title),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n");

    transform.transform(&rewritten)
}

/// Match a line consisting solely of a single-equals framed heading.
fn heading_title(line: &str) -> Option<&str> {
    let t = line.trim();
    let rest = t.strip_prefix('=')?.strip_suffix('=')?;
    if rest.starts_with('=') || rest.ends_with('=') {
        return None;
    }
    let title = rest.trim();
    (!title.is_empty()).then_some(title)
}

/// Remove `<...>` markup tags from a string.
///
/// Good enough for header fields and notice text; an unterminated tag drops
/// the remainder, matching the usual tag-stripping behavior.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_lines_rewritten() {
        let body = "= 1.2.3 =\nNotes for this release.\n= 1.2.2 =\nOlder notes.";
        let out = apply_markup(body, &PlainText);
        assert_eq!(
            out,
            "<h4>1.2.3</h4>\nNotes for this release.\n<h4>1.2.2</h4>\nOlder notes."
        );
    }

    #[test]
    fn heading_requires_single_equals_frame() {
        assert_eq!(heading_title("= Heading ="), Some("Heading"));
        assert_eq!(heading_title("  =Tight=  "), Some("Tight"));
        assert_eq!(heading_title("== Section =="), None);
        assert_eq!(heading_title("= ="), None);
        assert_eq!(heading_title("="), None);
        assert_eq!(heading_title("plain text"), None);
        assert_eq!(heading_title("a = b"), None);
    }

    #[test]
    fn closure_is_a_transform() {
        let upper = |s: &str| s.to_uppercase();
        let out = apply_markup("= v1 =\nbody", &upper);
        assert_eq!(out, "<H4>V1</H4>\nBODY");
    }

    #[test]
    fn strip_tags_removes_markup() {
        assert_eq!(strip_tags("<b>Dark</b>, Light"), "Dark, Light");
        assert_eq!(strip_tags("no tags"), "no tags");
        assert_eq!(strip_tags("a <span class=\"x\">b</span> c"), "a b c");
        assert_eq!(strip_tags("broken <tag"), "broken ");
        assert_eq!(strip_tags("1 > 0"), "1 > 0");
    }
}
