//! Placeholder merge — splices the generated sections into an existing
//! destination document at four marker-delimited regions.
//!
//! Everything outside the regenerated regions is preserved byte-for-byte.
//! Any marker occurring zero or multiple times makes an in-place merge
//! unsafe, so the merge fails before anything is written.

use crate::assemble::Sections;
use anyhow::{bail, Result};

pub const DEFAULT_SECTION_START: &str = "DEFAULT_SECTION_START";
pub const DEFAULT_SECTION_END: &str = "DEFAULT_SECTION_END";
pub const ALL_OTHER_SECTIONS_START: &str = "ALL_OTHER_SECTIONS_START";
pub const ALL_OTHER_SECTIONS_END: &str = "ALL_OTHER_SECTIONS_END";

/// Split `text` at a marker that must occur exactly once.
fn split_at_marker<'a>(text: &'a str, marker: &str) -> Result<(&'a str, &'a str)> {
    let parts: Vec<&str> = text.split(marker).collect();
    if parts.len() != 2 {
        bail!(
            "marker `{}` must occur exactly once in the destination document, found {} occurrence(s)",
            marker,
            parts.len() - 1
        );
    }
    Ok((parts[0], parts[1]))
}

/// Merge the two generated section buffers into the destination document.
///
/// The regions between `DEFAULT_SECTION_START`/`DEFAULT_SECTION_END` and
/// `ALL_OTHER_SECTIONS_START`/`ALL_OTHER_SECTIONS_END` hold the previous
/// run's output and are replaced; the closing markers are re-emitted behind
/// the RST comment prefix. All other destination content, including the
/// hand-authored prose between the two regions, is copied through unchanged.
pub fn merge_sections(dest: &str, sections: &Sections) -> Result<String> {
    let (before, rest) = split_at_marker(dest, DEFAULT_SECTION_START)?;
    let (_stale_first, rest) = split_at_marker(rest, DEFAULT_SECTION_END)?;
    let (between, rest) = split_at_marker(rest, ALL_OTHER_SECTIONS_START)?;
    let (_stale_others, tail) = split_at_marker(rest, ALL_OTHER_SECTIONS_END)?;

    let mut out = String::new();
    out.push_str(before);
    out.push_str(DEFAULT_SECTION_START);
    out.push_str("\n\n");
    out.push_str(&sections.first);
    out.push_str("\n.. ");
    out.push_str(DEFAULT_SECTION_END);
    out.push_str(between);
    out.push_str(ALL_OTHER_SECTIONS_START);
    out.push_str("\n\n");
    out.push_str(&sections.others);
    out.push_str("\n.. ");
    out.push_str(ALL_OTHER_SECTIONS_END);
    out.push_str(tail);
    Ok(out)
}
