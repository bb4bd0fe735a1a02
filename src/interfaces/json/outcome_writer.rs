use crate::application::engine::Outcome;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct SequencedOutcome<'a> {
    seq: usize,
    #[serde(flatten)]
    outcome: &'a Outcome,
}

/// Writes outcomes as JSON lines, one object per command.
pub struct JsonOutcomeWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonOutcomeWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_outcome(&mut self, seq: usize, outcome: &Outcome) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &SequencedOutcome { seq, outcome })?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
