use super::markup::{MarkupTransform, apply_markup};

/// Parsed readme document.
///
/// `name` is always non-empty: a text without a valid title line never
/// produces a document at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadmeDocument {
    pub name: String,
    pub contributors: Vec<String>,
    pub donate_link: String,
    pub tags: Vec<String>,
    pub requires: String,
    pub tested: String,
    pub stable_tag: String,
    pub short_description: String,
    /// Section bodies keyed by their exact captured titles, in order of
    /// first appearance.
    pub sections: Vec<(String, String)>,
}

impl ReadmeDocument {
    /// Body of a named section, if present.
    pub fn section(&self, title: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, body)| body.as_str())
    }
}

/// Parser phases, entered strictly in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ReadingTitle,
    ReadingHeaders,
    ReadingSummary,
    ReadingSections,
    Done,
}

/// Parse a readme document.
///
/// Phases: `=== Title ===` line, `Label: value` header block terminated by
/// a blank line, one summary line, then `== Section ==` delimited sections.
/// Returns `None` when the first line is not a valid title - an invalid
/// document is distinct from a valid one with empty parts.
///
/// When `markup` is supplied, each section body first has full-line
/// `= Heading =` markers rewritten to `<h4>` tags and is then passed through
/// the transform; otherwise bodies stay raw.
pub fn parse_readme(text: &str, markup: Option<&dyn MarkupTransform>) -> Option<ReadmeDocument> {
    let text = text.replace("\r\n", "\n");
    let lines: Vec<&str> = text.trim().split('\n').collect();

    let mut doc = ReadmeDocument::default();
    let mut contributors = "";
    let mut tags = "";
    let mut current: Option<(String, Vec<&str>)> = None;

    let mut cursor = 0usize;
    let mut state = State::ReadingTitle;

    while state != State::Done {
        match state {
            State::ReadingTitle => {
                doc.name = framed_title(lines[cursor])?.to_string();
                cursor += 1;
                state = State::ReadingHeaders;
            }

            State::ReadingHeaders => {
                let Some(line) = lines.get(cursor).copied() else {
                    state = State::ReadingSummary;
                    continue;
                };
                cursor += 1;

                let (key, value) = match line.split_once(':') {
                    Some((key, value)) => (key, value.trim()),
                    None => (line, ""),
                };
                match key {
                    "Contributors" => contributors = value,
                    "Donate link" => doc.donate_link = value.to_string(),
                    "Tags" => tags = value,
                    "Requires at least" => doc.requires = value.to_string(),
                    "Tested up to" => doc.tested = value.to_string(),
                    "Stable tag" => doc.stable_tag = value.to_string(),
                    // Unrecognized keys still consume their line
                    _ => {}
                }

                // A blank pre-colon part ends the header block; the line is
                // consumed and discarded.
                if key.trim().is_empty() {
                    state = State::ReadingSummary;
                }
            }

            State::ReadingSummary => {
                doc.short_description = lines.get(cursor).copied().unwrap_or("").to_string();
                cursor += 1;
                state = State::ReadingSections;
            }

            State::ReadingSections => {
                let Some(line) = lines.get(cursor).copied() else {
                    flush_section(&mut doc.sections, current.take(), markup);
                    state = State::Done;
                    continue;
                };
                cursor += 1;

                if let Some(title) = section_title(line) {
                    flush_section(&mut doc.sections, current.take(), markup);
                    current = Some((title.to_string(), Vec::new()));
                } else if let Some((_, body)) = &mut current {
                    body.push(line);
                }
                // Content before the first section header is discarded
            }

            State::Done => unreachable!(),
        }
    }

    doc.contributors = comma_list(contributors);
    doc.tags = comma_list(tags);

    Some(doc)
}

/// Store a finished section: body lines joined and trimmed, position fixed
/// at the title's first appearance, content of the last occurrence winning.
fn flush_section(
    sections: &mut Vec<(String, String)>,
    current: Option<(String, Vec<&str>)>,
    markup: Option<&dyn MarkupTransform>,
) {
    let Some((title, lines)) = current else {
        return;
    };

    let mut body = lines.join("\n").trim().to_string();
    if let Some(transform) = markup {
        body = apply_markup(&body, transform);
    }

    match sections.iter_mut().find(|(t, _)| *t == title) {
        Some(existing) => existing.1 = body,
        None => sections.push((title, body)),
    }
}

/// Match a title line framed by three-or-more equals signs on both sides.
fn framed_title(line: &str) -> Option<&str> {
    let t = line.trim();
    let open = t.bytes().take_while(|&b| b == b'=').count();
    if open < 3 {
        return None;
    }
    let rest = &t[open..];
    let close = rest.bytes().rev().take_while(|&b| b == b'=').count();
    if close < 3 {
        return None;
    }
    let title = rest[..rest.len() - close].trim();
    (!title.is_empty()).then_some(title)
}

/// Match a full-line section header framed by exactly two equals signs with
/// whitespace inside the frame.
fn section_title(line: &str) -> Option<&str> {
    let t = line.trim();
    let rest = t.strip_prefix("==")?.strip_suffix("==")?;
    if rest.starts_with('=') || rest.ends_with('=') {
        return None;
    }
    if !rest.starts_with(char::is_whitespace) || !rest.ends_with(char::is_whitespace) {
        return None;
    }
    let title = rest.trim();
    (!title.is_empty()).then_some(title)
}

fn comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readme::PlainText;

    const BASIC: &str = "=== MyPlugin ===\n\
        Contributors: alice, bob\n\
        \n\
        Short desc.\n\
        == Installation ==\n\
        Step 1.\n\
        == FAQ ==\n\
        Q and A.";

    #[test]
    fn basic_roundtrip() {
        let doc = parse_readme(BASIC, None).unwrap();
        assert_eq!(doc.name, "MyPlugin");
        assert_eq!(doc.contributors, ["alice", "bob"]);
        assert_eq!(doc.short_description, "Short desc.");
        assert_eq!(
            doc.sections,
            [
                ("Installation".to_string(), "Step 1.".to_string()),
                ("FAQ".to_string(), "Q and A.".to_string()),
            ]
        );
    }

    #[test]
    fn invalid_title_yields_no_document() {
        assert!(parse_readme("MyPlugin\nContributors: alice", None).is_none());
        assert!(parse_readme("== MyPlugin ==\n", None).is_none());
        assert!(parse_readme("======\n", None).is_none());
        assert!(parse_readme("", None).is_none());
    }

    #[test]
    fn title_frame_variations() {
        let doc = parse_readme("====  Spaced  ====", None).unwrap();
        assert_eq!(doc.name, "Spaced");

        let doc = parse_readme("  === Indented ===  ", None).unwrap();
        assert_eq!(doc.name, "Indented");
    }

    #[test]
    fn full_header_block() {
        let text = "=== P ===\n\
            Contributors: a,b , c\n\
            Donate link: https://example.com/donate\n\
            Tags: one, two\n\
            Requires at least: 3.0\n\
            Tested up to: 6.4\n\
            Stable tag: 1.2\n\
            Unknown header: ignored\n\
            \n\
            Summary line.";
        let doc = parse_readme(text, None).unwrap();
        assert_eq!(doc.contributors, ["a", "b", "c"]);
        assert_eq!(doc.donate_link, "https://example.com/donate");
        assert_eq!(doc.tags, ["one", "two"]);
        assert_eq!(doc.requires, "3.0");
        assert_eq!(doc.tested, "6.4");
        assert_eq!(doc.stable_tag, "1.2");
        assert_eq!(doc.short_description, "Summary line.");
    }

    #[test]
    fn header_without_colon_has_empty_value() {
        let text = "=== P ===\nStable tag\n\nSummary.";
        let doc = parse_readme(text, None).unwrap();
        assert_eq!(doc.stable_tag, "");
        assert_eq!(doc.short_description, "Summary.");
    }

    #[test]
    fn colon_with_empty_key_terminates_block() {
        let text = "=== P ===\n: stray\nNot the summary: really\nSummary.";
        let doc = parse_readme(text, None).unwrap();
        // ": stray" ended the block, so the next line is the summary
        assert_eq!(doc.short_description, "Not the summary: really");
    }

    #[test]
    fn summary_missing_when_input_ends() {
        let doc = parse_readme("=== P ===", None).unwrap();
        assert_eq!(doc.name, "P");
        assert_eq!(doc.short_description, "");
        assert!(doc.sections.is_empty());
        assert!(doc.contributors.is_empty());
    }

    #[test]
    fn stray_lines_before_first_section_discarded() {
        let text = "=== P ===\n\nSummary.\nstray one\nstray two\n== Real ==\nBody.";
        let doc = parse_readme(text, None).unwrap();
        assert_eq!(doc.sections, [("Real".to_string(), "Body.".to_string())]);
    }

    #[test]
    fn section_bodies_joined_and_trimmed() {
        let text = "=== P ===\n\nS.\n== A ==\n\nline one\nline two\n\n== B ==\nx";
        let doc = parse_readme(text, None).unwrap();
        assert_eq!(doc.section("A"), Some("line one\nline two"));
        assert_eq!(doc.section("B"), Some("x"));
    }

    #[test]
    fn section_titles_preserve_case_and_spacing() {
        let text = "=== P ===\n\nS.\n== Frequently  Asked ==\nBody.";
        let doc = parse_readme(text, None).unwrap();
        assert_eq!(doc.sections[0].0, "Frequently  Asked");
    }

    #[test]
    fn triple_equals_is_not_a_section_header() {
        let text = "=== P ===\n\nS.\n== A ==\n=== not a header ===\nend";
        let doc = parse_readme(text, None).unwrap();
        assert_eq!(doc.section("A"), Some("=== not a header ===\nend"));
    }

    #[test]
    fn duplicate_section_keeps_position_takes_last_content() {
        let text = "=== P ===\n\nS.\n== A ==\nfirst\n== B ==\nmiddle\n== A ==\nsecond";
        let doc = parse_readme(text, None).unwrap();
        let titles: Vec<_> = doc.sections.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
        assert_eq!(doc.section("A"), Some("second"));
    }

    #[test]
    fn markup_rewrites_headings_per_section() {
        let text = "=== P ===\n\nS.\n== Changelog ==\n= 1.1 =\nFixed a bug.";
        let doc = parse_readme(text, Some(&PlainText)).unwrap();
        assert_eq!(doc.section("Changelog"), Some("<h4>1.1</h4>\nFixed a bug."));

        // Raw without the transform
        let doc = parse_readme(text, None).unwrap();
        assert_eq!(doc.section("Changelog"), Some("= 1.1 =\nFixed a bug."));
    }

    #[test]
    fn injected_closure_transforms_bodies() {
        let text = "=== P ===\n\nS.\n== A ==\nbody";
        let wrap = |s: &str| format!("<p>{}</p>", s);
        let doc = parse_readme(text, Some(&wrap)).unwrap();
        assert_eq!(doc.section("A"), Some("<p>body</p>"));
    }

    #[test]
    fn crlf_input_parses_identically() {
        let crlf = BASIC.replace('\n', "\r\n");
        assert_eq!(parse_readme(BASIC, None), parse_readme(&crlf, None));
    }
}
