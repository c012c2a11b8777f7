//! # `chipkoll_core` - Core functionality for chipkoll
//!
//! Enumerates PnP devices on the host and counts WCH CH341/CH347 bridge
//! chips by sub-model. The binary crate is a thin wrapper around this.

pub mod backend;
pub mod classify;
pub mod report;
pub mod types;
