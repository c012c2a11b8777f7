//! Public data types

use compact_str::CompactString;

/// A single PnP device as reported by the host inventory tool
///
/// The id is the vendor-defined hierarchical instance string
/// (e.g. `USB\VID_1A86&PID_5512\5&...`), the name is the free-text
/// display label. Both are taken verbatim from the host.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct DeviceRecord {
    pub id: CompactString,
    pub name: CompactString,
}

impl DeviceRecord {
    pub fn new(id: impl Into<CompactString>, name: impl Into<CompactString>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Counts for the CH347 family (interface 04 only)
///
/// Deliberately a fixed-key struct rather than a map: the set of
/// recognized sub-models is closed and the report order is fixed.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Ch347Counts {
    pub ch347f: u32,
    pub ch347t: u32,
}

/// Counts for the CH341 family
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Ch341Counts {
    pub ch341a: u32,
    pub ch341t: u32,
    /// Family match without an A/T suffix in the name
    pub ch341: u32,
}

/// Result of classifying one device list
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct ChipCounts {
    pub ch347: Ch347Counts,
    pub ch341: Ch341Counts,
}

impl ChipCounts {
    /// Total number of devices that were counted at all
    pub fn total(&self) -> u32 {
        self.ch347.ch347f
            + self.ch347.ch347t
            + self.ch341.ch341a
            + self.ch341.ch341t
            + self.ch341.ch341
    }
}
