//! Classification of device records by chip family and sub-model

use crate::types::{ChipCounts, DeviceRecord};

/// CH347 family, interface 04 specifically (the other interfaces of the
/// composite device are not of interest)
const CH347_MI04_PREFIX: &str = r"USB\VID_1A86&PID_55DE&MI_04";
/// CH341 family
const CH341_PREFIX: &str = r"USB\VID_1A86&PID_5512";

/// Count CH341/CH347 devices by sub-model
///
/// Pure and total: every record lands in at most one counter, records
/// that match neither family (or match a family but carry no recognized
/// sub-model in the name) are ignored.
pub fn classify_devices(devices: &[DeviceRecord]) -> ChipCounts {
    let mut counts = ChipCounts::default();
    for device in devices {
        if device.id.starts_with(CH347_MI04_PREFIX) {
            if device.name.contains("CH347F") {
                counts.ch347.ch347f += 1;
            } else if device.name.contains("CH347T") {
                counts.ch347.ch347t += 1;
            }
        } else if device.id.starts_with(CH341_PREFIX) {
            // CH341A and CH341T both contain CH341 as a substring, the
            // specific models must be checked first.
            if device.name.contains("CH341A") {
                counts.ch341.ch341a += 1;
            } else if device.name.contains("CH341T") {
                counts.ch341.ch341t += 1;
            } else if device.name.contains("CH341") {
                counts.ch341.ch341 += 1;
            }
        }
    }
    counts
}
