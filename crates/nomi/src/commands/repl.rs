//! Interactive chat session with a single Nomi.

use std::io::{BufRead, Write};

use anyhow::Result;
use console::Style;
use nomi_client::{Nomi, NomiClient};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use super::print_error;
use crate::spinner::Spinner;

/// Input that ends the session. Compared after trimming, ignoring case.
pub const EXIT_COMMAND: &str = "exit";

/// Prompt shown before each line of input.
const PROMPT: &str = "You: ";

/// A source of input lines.
pub trait LineSource {
    /// Read one line without its terminator. `None` means input is exhausted.
    ///
    /// Sources that do not draw their own prompt write it to `out`.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>>;
}

/// Line editor input for interactive terminals.
pub struct EditorSource {
    editor: Editor<(), DefaultHistory>,
}

impl EditorSource {
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();

        Ok(Self {
            editor: Editor::with_config(config)?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str, _out: &mut dyn Write) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl+C and Ctrl+D both end the session
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Plain buffered input, for piped stdin.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Option<String>> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Chat session state.
pub struct ChatSession<W> {
    client: NomiClient,
    nomi: Nomi,
    out: W,
    spinner: bool,
}

impl<W: Write> ChatSession<W> {
    /// Create a session talking to `nomi`, printing to `out`.
    pub fn new(client: NomiClient, nomi: Nomi, out: W) -> Self {
        Self {
            client,
            nomi,
            out,
            spinner: true,
        }
    }

    /// Don't show the progress spinner while waiting for replies.
    pub fn without_spinner(mut self) -> Self {
        self.spinner = false;
        self
    }

    /// Run until the exit command or the end of input.
    ///
    /// Request failures are printed and the session carries on.
    pub async fn run(&mut self, input: &mut dyn LineSource) -> Result<()> {
        self.print_welcome()?;

        while let Some(line) = input.read_line(PROMPT, &mut self.out)? {
            if line.trim().to_lowercase() == EXIT_COMMAND {
                writeln!(self.out, "Chat session ended.")?;
                break;
            }

            // Sent untrimmed; an empty line is a valid (empty) message.
            self.send_message(&line).await?;
        }

        Ok(())
    }

    async fn send_message(&mut self, text: &str) -> Result<()> {
        let spinner = self.spinner.then(|| Spinner::start(std::io::stdout()));

        let result = self.client.nomis().chat(&self.nomi.uuid, text).await;

        if let Some(spinner) = spinner {
            spinner.stop().await;
            write!(self.out, "\r")?;
        }

        match result {
            Ok(response) => {
                tracing::debug!(
                    sent = %response.sent_message.uuid,
                    reply = %response.reply_message.uuid,
                    "chat turn complete"
                );
                writeln!(self.out, "{}: {}", self.nomi.name, response.reply_message.text)?;
            }
            Err(e) => print_error(&mut self.out, &e)?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn print_welcome(&mut self) -> Result<()> {
        let dim = Style::new().dim();
        writeln!(
            self.out,
            "Chat session started with {}. Type your message and press Enter to send.",
            self.nomi.name
        )?;
        writeln!(
            self.out,
            "{}",
            dim.apply_to(format!("Type '{}' to end the session.", EXIT_COMMAND))
        )?;
        Ok(())
    }
}
