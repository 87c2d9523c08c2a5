use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::application::locator::Prompt;
use crate::application::recorder::{EntryReporter, LineOutcome};

/// Interactive terminal frontend. Prompts render bright white with a `→ `
/// continuation marker; per-entry status lands at the end of the just-echoed
/// input line via DEC cursor save/restore.
#[derive(Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Console
    }
}

impl Prompt for Console {
    fn show(&mut self, message: &str) -> io::Result<()> {
        let mut out = io::stdout();
        writeln!(out, "{}", message.bright_white())?;
        out.flush()
    }

    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        let mut out = io::stdout();
        write!(out, "{}\n{} ", message.bright_white(), "→".bright_white())?;
        out.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

impl EntryReporter for Console {
    fn report(&mut self, outcome: LineOutcome<'_>) {
        let (width, status) = match outcome {
            LineOutcome::Accepted { id, row } => (
                id.as_str().chars().count(),
                format!(" ✓ row {row}").green().to_string(),
            ),
            LineOutcome::Rejected { input } => (
                input.chars().count(),
                " ✗ Invalid input (must be exactly 7 digits)"
                    .red()
                    .to_string(),
            ),
        };

        // Save cursor, move up onto the echoed line, skip past the typed
        // text, print the status, restore.
        print!("\x1b7\x1b[1A\x1b[{width}C{status}\x1b8");
        let _ = io::stdout().flush();
    }
}
