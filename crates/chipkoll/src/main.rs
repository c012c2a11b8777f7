//! Implements the CLI for chipkoll

mod cli;

use anyhow::Context;
use chipkoll_core::backend::{Devices, Name, WmicBuilder};
use chipkoll_core::classify::classify_devices;
use chipkoll_core::report;
use clap::Parser;
use cli::Cli;
use proc_exit::{Code, Exit};

fn main() -> anyhow::Result<Exit> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.init();
    let _cli = Cli::parse();

    let backend = WmicBuilder::default().build();
    let devices = backend
        .devices()
        .with_context(|| format!("Failed to enumerate PnP devices via {}", backend.name()))?;
    log::debug!("Host reported {} parsable device record(s)", devices.len());

    let counts = classify_devices(&devices);
    print!("{}", report::render(&counts));

    Ok(Exit::new(Code::SUCCESS))
}
