//! List-rooms command.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use nomi_client::NomiClient;

use super::{Context, print_error};
use crate::display;

/// Arguments for the list-rooms command.
#[derive(Args, Debug)]
pub struct ListRoomsArgs {}

/// Run the list-rooms command.
pub async fn run(_args: ListRoomsArgs, ctx: &Context) -> Result<()> {
    let mut out = std::io::stdout();
    let Some(client) = ctx.client_or_report(&mut out)? else {
        return Ok(());
    };
    execute(&client, ctx.json_output, &mut out).await
}

async fn execute<W: Write>(client: &NomiClient, json: bool, out: &mut W) -> Result<()> {
    let response = match client.rooms().list().await {
        Ok(response) => response,
        Err(e) => {
            print_error(out, &e)?;
            return Ok(());
        }
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&response.rooms)?)?;
        return Ok(());
    }

    writeln!(out, "Total Rooms: {}", response.rooms.len())?;
    writeln!(out)?;
    for room in &response.rooms {
        display::write_room(out, room)?;
        writeln!(out)?;
    }
    Ok(())
}
