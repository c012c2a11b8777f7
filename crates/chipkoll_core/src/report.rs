//! Report rendering

use std::fmt;

use crate::types::ChipCounts;

impl fmt::Display for ChipCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CH347 devices:")?;
        writeln!(f, "  CH347F: {}", self.ch347.ch347f)?;
        writeln!(f, "  CH347T: {}", self.ch347.ch347t)?;
        writeln!(f, "CH341 devices:")?;
        writeln!(f, "  CH341A: {}", self.ch341.ch341a)?;
        writeln!(f, "  CH341T: {}", self.ch341.ch341t)?;
        writeln!(f, "  CH341: {}", self.ch341.ch341)
    }
}

/// Render the counts as the two fixed report sections
///
/// Key order is fixed (declaration order of the count structs) so the
/// output is deterministic. Both sections are present even when every
/// counter is zero.
pub fn render(counts: &ChipCounts) -> String {
    counts.to_string()
}
