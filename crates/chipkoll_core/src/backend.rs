//! Declaration of device enumeration backends

use crate::types::DeviceRecord;

mod wmic;

pub use wmic::Wmic;
pub use wmic::WmicBuilder;

/// Get the name of a backend (useful in dynamic dispatch for generating reports)
pub trait Name: std::fmt::Debug {
    /// The name of the backend (for logging and debugging purposes)
    fn name(&self) -> &'static str;
}

/// A device enumeration backend (reading the live PnP device list)
///
/// This is the seam that keeps classification testable against canned
/// device lists instead of live host state.
pub trait Devices: Name {
    /// Collect the full current device list, in host-reported order
    fn devices(&self) -> Result<Vec<DeviceRecord>, HostQueryError>;
}

/// Errors that querying the host device inventory can produce
#[derive(Debug, thiserror::Error)]
pub enum HostQueryError {
    /// The inventory tool could not be started at all
    #[error("failed to spawn \"{tool}\" (is it installed and in PATH?)")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },
    /// The inventory tool ran but exited with a non-zero status
    #[error("\"{tool}\" failed with {status}: {stderr}")]
    Failed {
        tool: &'static str,
        status: std::process::ExitStatus,
        stderr: String,
    },
    /// All other errors
    #[error("{0:?}")]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::HostQueryError;

    #[cfg(unix)]
    use std::os::unix::process::ExitStatusExt;
    #[cfg(windows)]
    use std::os::windows::process::ExitStatusExt;

    #[test]
    fn test_failed_query_surfaces_stderr() {
        let err = HostQueryError::Failed {
            tool: "wmic",
            status: std::process::ExitStatus::from_raw(256),
            stderr: "Invalid GET Expression.".into(),
        };

        let msg = err.to_string();
        assert!(msg.contains("\"wmic\" failed with"), "got: {msg}");
        assert!(msg.contains("Invalid GET Expression."), "got: {msg}");
    }
}
