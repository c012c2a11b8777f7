use clap::Parser;

/// Count WCH CH341/CH347 bridge chips attached to this machine
///
/// Queries the host PnP device inventory once, classifies the entries by
/// chip family and sub-model, and prints per-model counts.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {}
