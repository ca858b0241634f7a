//! Readme document parsing.
//!
//! A readme is a loosely structured text document: a `=== Title ===` line,
//! a `Label: value` header block, a one-line summary, and named sections
//! introduced by `== Section ==` lines. [`parser`] walks those phases with
//! an explicit state machine; [`markup`] holds the injectable
//! markup-transform seam and the small text helpers around it.

mod markup;
mod parser;

pub use markup::{MarkupTransform, PlainText, strip_tags};
pub use parser::{ReadmeDocument, parse_readme};
