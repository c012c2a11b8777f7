//! Device enumeration backend for wmic

use std::process::{Command, Stdio};

use anyhow::Context;
use smallvec::SmallVec;

use super::{Devices, HostQueryError, Name};
use crate::types::DeviceRecord;

const WMIC: &str = "wmic";

/// Wmic backend
///
/// Queries `Win32_PnPEntity` for the full PnP device list. This blocks
/// until wmic exits; there is no timeout.
#[derive(Debug)]
pub struct Wmic {}

#[derive(Debug, Default)]
pub struct WmicBuilder {}

impl WmicBuilder {
    pub fn build(self) -> Wmic {
        Wmic {}
    }
}

impl Name for Wmic {
    fn name(&self) -> &'static str {
        "wmic"
    }
}

impl Devices for Wmic {
    fn devices(&self) -> Result<Vec<DeviceRecord>, HostQueryError> {
        let cmd = Command::new(WMIC)
            .arg("path")
            .arg("Win32_PnPEntity")
            .arg("get")
            .arg("DeviceID,Name")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| HostQueryError::Spawn { tool: WMIC, source })?;
        let output = cmd
            .wait_with_output()
            .context("Failed to wait for wmic")?;
        if !output.status.success() {
            return Err(HostQueryError::Failed {
                tool: WMIC,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        let output =
            String::from_utf8(output.stdout).context("Failed to parse wmic output as UTF-8")?;

        Ok(parse_device_table(&output)?)
    }
}

/// Parse the two-column table printed by `wmic ... get DeviceID,Name`
///
/// Columns are separated by runs of two or more whitespace characters;
/// single spaces are part of the field (device names routinely contain
/// them). The first line is the column header and is always discarded.
///
/// Lines that don't split into exactly two fields are silently dropped.
/// This means a name containing a double space corrupts that record.
/// Known fragility, kept as-is: the alternative is asking wmic for CSV,
/// which changes the external contract.
fn parse_device_table(output: &str) -> anyhow::Result<Vec<DeviceRecord>> {
    let re = regex::Regex::new(r"\s{2,}")?;

    let mut devices = Vec::new();
    for line in output.lines().skip(1) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let fields: SmallVec<[&str; 3]> = re.split(trimmed).collect();
        if fields.len() == 2 {
            devices.push(DeviceRecord::new(fields[0], fields[1]));
        } else {
            log::debug!(
                "Dropping line with {} column(s) instead of 2: {trimmed}",
                fields.len()
            );
        }
    }
    Ok(devices)
}

#[cfg(test)]
mod tests {
    use super::parse_device_table;
    use crate::types::DeviceRecord;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_device_table() {
        // Trimmed-down wmic output from a real machine
        let input = indoc::indoc! {r"
            DeviceID                                          Name
            ACPI\PNP0C0C\2&DABA3FF&2                          ACPI Power Button
            USB\VID_1A86&PID_5512\5&2A9C8F&0&2                USB-SER CH341A
            USB\VID_1A86&PID_55DE&MI_04\6&2B3C11&0&0004       USB-Enhanced-SERIAL CH347F

            HID\VID_046D&PID_C077\7&1F4&0&0                   HID-compliant mouse
            "};

        let parsed = parse_device_table(input).unwrap();

        assert_eq!(
            parsed,
            vec![
                DeviceRecord::new("ACPI\\PNP0C0C\\2&DABA3FF&2", "ACPI Power Button"),
                DeviceRecord::new("USB\\VID_1A86&PID_5512\\5&2A9C8F&0&2", "USB-SER CH341A"),
                DeviceRecord::new(
                    "USB\\VID_1A86&PID_55DE&MI_04\\6&2B3C11&0&0004",
                    "USB-Enhanced-SERIAL CH347F"
                ),
                DeviceRecord::new("HID\\VID_046D&PID_C077\\7&1F4&0&0", "HID-compliant mouse"),
            ]
        );
    }

    #[test]
    fn test_header_always_discarded() {
        // Even a header that looks like data is dropped
        let input = "USB\\VID_1A86&PID_5512\\1  USB-SER CH341A\n";
        assert_eq!(parse_device_table(input).unwrap(), vec![]);
    }

    #[test]
    fn test_malformed_lines_dropped() {
        let input = indoc::indoc! {r"
            DeviceID                                          Name
            ID1 Name1
            ID2  Middle  Name2
            ID3  Name3
            "};

        let parsed = parse_device_table(input).unwrap();

        // Single-space line splits into one field, the double-double-space
        // line into three; both are dropped per the parsing policy.
        assert_eq!(parsed, vec![DeviceRecord::new("ID3", "Name3")]);
    }

    #[test]
    fn test_empty_output() {
        assert_eq!(parse_device_table("").unwrap(), vec![]);
        assert_eq!(parse_device_table("DeviceID  Name\n").unwrap(), vec![]);
    }
}
