//! Version command.

use std::io::Write;

use anyhow::Result;
use clap::Args;

/// Version string, overridable at build time through `NOMI_CLI_VERSION`.
pub const VERSION: &str = match option_env!("NOMI_CLI_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Arguments for the version command.
#[derive(Args, Debug)]
pub struct VersionArgs {}

/// Run the version command.
pub fn run(_args: VersionArgs) -> Result<()> {
    execute(&mut std::io::stdout())
}

fn execute<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "nomi-cli version {}", VERSION)?;
    Ok(())
}
