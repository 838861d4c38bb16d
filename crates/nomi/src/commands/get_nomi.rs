//! Get-nomi command - details of a single Nomi.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use nomi_client::NomiClient;

use super::{Context, print_error};
use crate::display;

/// Arguments for the get-nomi command.
#[derive(Args, Debug)]
pub struct GetNomiArgs {
    /// ID of the Nomi
    pub id: String,
}

/// Run the get-nomi command.
pub async fn run(args: GetNomiArgs, ctx: &Context) -> Result<()> {
    let mut out = std::io::stdout();
    let Some(client) = ctx.client_or_report(&mut out)? else {
        return Ok(());
    };
    execute(&client, &args.id, ctx.json_output, &mut out).await
}

async fn execute<W: Write>(client: &NomiClient, id: &str, json: bool, out: &mut W) -> Result<()> {
    match client.nomis().get(id).await {
        Ok(nomi) if json => writeln!(out, "{}", serde_json::to_string_pretty(&nomi)?)?,
        Ok(nomi) => {
            writeln!(out, "Nomi Details:")?;
            display::write_nomi_detail(out, &nomi)?;
        }
        Err(e) => print_error(out, &e)?,
    }
    Ok(())
}
