use crate::group::Group;
use std::io::{self, Write};

/// Write one line per group, in order.
pub fn write_groups<W: Write>(out: &mut W, groups: &[Group]) -> io::Result<()> {
    for group in groups {
        writeln!(out, "{group}")?;
    }
    out.flush()
}
