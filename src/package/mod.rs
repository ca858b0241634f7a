//! Archive scanning and package assembly.
//!
//! [`scanner`] walks an archive's entry list looking for the two signals
//! that identify a package - a parseable header file and a readme - and
//! assembles them into a [`PackageResult`]. [`summary`] keeps the old
//! flattened-record surface alive for callers that still depend on it.

mod result;
mod scanner;
mod summary;

pub use result::{PackageHeaders, PackageResult, PackageType};
pub use scanner::{parse_package, scan_package};
#[allow(deprecated)]
pub use summary::{PackageSummary, summarize, summarize_path};
