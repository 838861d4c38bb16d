//! CLI command handlers.

use std::fmt::Display;
use std::io::{self, Write};

use console::Style;
use nomi_client::NomiClient;

use crate::config::Config;

pub mod chat;
pub mod get_nomi;
pub mod list_nomis;
pub mod list_rooms;
pub mod repl;
pub mod version;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved API key and base URL.
    pub config: Config,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Build the API client, or print why not.
    ///
    /// A client that cannot be built aborts the command without failing the
    /// process, like any other request error.
    pub fn client_or_report<W: Write>(&self, out: &mut W) -> io::Result<Option<NomiClient>> {
        if self.verbose {
            let dim = Style::new().dim();
            eprintln!(
                "{}",
                dim.apply_to(format!("Sending to: {}", self.config.base_url))
            );
        }

        match self.config.client() {
            Ok(client) => Ok(Some(client)),
            Err(e) => {
                print_error(out, &e)?;
                Ok(None)
            }
        }
    }
}

/// Print a request-level error. These go to stdout along with normal output.
pub fn print_error<W: Write>(out: &mut W, err: &dyn Display) -> io::Result<()> {
    writeln!(out, "Error: {}", err)
}
