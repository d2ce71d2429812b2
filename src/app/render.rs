use crate::core::coder::RemoteCallFailure;
use crate::core::session::SessionOutcome;
use std::io::{self, Write};

pub const CODES_HEADING: &str = "### Suggested Medical Codes:";
pub const ENRICHMENT_HEADING: &str = "### Enriched Clinical Statement:";
pub const EMPTY_NOTE_WARNING: &str = "⚠️ Please enter a clinical note.";

/// Writes session outcomes as plain text/markdown.
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render(&mut self, outcome: &SessionOutcome) -> io::Result<()> {
        match outcome {
            SessionOutcome::EmptyNote => writeln!(self.out, "{}", EMPTY_NOTE_WARNING),
            SessionOutcome::Failed(failure) => self.error_banner(failure),
            SessionOutcome::Coded { codes, enrichment } => {
                self.section(CODES_HEADING, codes)?;
                match enrichment {
                    Some(Ok(statement)) => self.section(ENRICHMENT_HEADING, statement),
                    Some(Err(failure)) => self.error_banner(failure),
                    None => Ok(()),
                }
            }
        }
    }

    // Returned text is shown verbatim inside a fence; empty text shows nothing.
    fn section(&mut self, heading: &str, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let fence = fence_for(text);
        writeln!(self.out, "{}", heading)?;
        writeln!(self.out, "{}", fence)?;
        writeln!(self.out, "{}", text)?;
        writeln!(self.out, "{}", fence)
    }

    fn error_banner(&mut self, failure: &RemoteCallFailure) -> io::Result<()> {
        writeln!(self.out, "❌ {}", failure)
    }
}

/// A backtick fence longer than any backtick run inside `text`.
fn fence_for(text: &str) -> String {
    let longest_run = text
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest_run.max(2) + 1)
}
