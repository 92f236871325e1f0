//! Group the entries of a directory into numbered file series.
//!
//! Every digit run in a file name is a possible frame number. Files that can
//! be written with the same pattern (e.g. `frame%04d.png`) are grouped, and
//! each group is reported as its file count, its pattern and the ranges of
//! numbers seen:
//!
//! ```rust
//! use lss::group_names;
//!
//! let groups = group_names(["img1.png", "img2.png", "img5.png", "notes.txt"]);
//! let lines: Vec<String> = groups.iter().map(ToString::to_string).collect();
//! assert_eq!(lines, ["3 img%d.png 1-2 5 ", "1 notes.txt"]);
//! ```
pub mod consts;
pub mod fs;
pub mod group;
pub mod matcher;
pub mod pattern;
pub mod ranges;
pub mod report;

pub use group::Group;
pub use matcher::{MatchState, group_names};
pub use pattern::{Candidate, FileCandidate};

use eyre::Result;
use std::io::Write;
use std::path::Path;

/// List `dir`, group its entries and write the report to `out`.
///
/// A listing failure is returned before anything is written.
pub fn lss<W: Write>(dir: &Path, out: &mut W) -> Result<()> {
    let names = fs::list_dir(dir)?;
    let groups = group_names(&names);
    tracing::debug!(groups = groups.len(), "grouped entries");
    report::write_groups(out, &groups)?;
    Ok(())
}
