//! Chat command - interactive session with a Nomi.

use std::io::IsTerminal;

use anyhow::Result;
use clap::Args;
use console::Term;

use super::repl::{ChatSession, EditorSource, LineSource, ReaderSource};
use super::{Context, print_error};

/// Arguments for the chat command.
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Name of the Nomi to chat with (case-insensitive)
    pub name: String,
}

/// Clears the terminal when dropped.
struct ClearOnDrop(Term);

impl Drop for ClearOnDrop {
    fn drop(&mut self) {
        if let Err(e) = self.0.clear_screen() {
            tracing::debug!(error = %e, "failed to clear screen");
        }
    }
}

/// Run the chat command.
pub async fn run(args: ChatArgs, ctx: &Context) -> Result<()> {
    let term = Term::stdout();
    // Cleared again on every way out of this function
    let _clear = ClearOnDrop(term.clone());

    let mut out = std::io::stdout();
    let Some(client) = ctx.client_or_report(&mut out)? else {
        return Ok(());
    };

    let nomi = match client.nomis().find_by_name(&args.name).await {
        Ok(nomi) => nomi,
        Err(e) => {
            print_error(&mut out, &e)?;
            return Ok(());
        }
    };
    tracing::debug!(name = %nomi.name, uuid = %nomi.uuid, "resolved Nomi");

    term.clear_screen()?;

    let mut input: Box<dyn LineSource> = if std::io::stdin().is_terminal() {
        Box::new(EditorSource::new()?)
    } else {
        Box::new(ReaderSource::new(std::io::stdin().lock()))
    };

    ChatSession::new(client, nomi, out)
        .run(input.as_mut())
        .await
}
