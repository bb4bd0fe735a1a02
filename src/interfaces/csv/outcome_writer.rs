use crate::application::engine::Outcome;
use crate::domain::coin::CoinTally;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq)]
struct OutcomeRecord {
    seq: usize,
    action: &'static str,
    display: Option<u32>,
    receipt: Option<u32>,
    coins: Option<String>,
    revenue: Option<u32>,
}

impl OutcomeRecord {
    fn new(seq: usize, action: &'static str) -> Self {
        Self {
            seq,
            action,
            display: None,
            receipt: None,
            coins: None,
            revenue: None,
        }
    }
}

impl From<(usize, &Outcome)> for OutcomeRecord {
    fn from((seq, outcome): (usize, &Outcome)) -> Self {
        match outcome {
            Outcome::Accepted { coin, display } => Self {
                display: Some(*display),
                coins: Some(format_tally(&CoinTally::from([(*coin, 1)]))),
                ..Self::new(seq, "insert")
            },
            Outcome::Display { display } => Self {
                display: Some(*display),
                ..Self::new(seq, "display")
            },
            Outcome::Purchased { receipt } => Self {
                receipt: Some(receipt.value()),
                ..Self::new(seq, "buy")
            },
            Outcome::Cancelled { returned } => Self {
                coins: Some(format_tally(returned)),
                ..Self::new(seq, "cancel")
            },
            Outcome::Emptied { revenue } => Self {
                revenue: Some(*revenue),
                ..Self::new(seq, "empty")
            },
            Outcome::Tally { coins } => Self {
                coins: Some(format_tally(coins)),
                ..Self::new(seq, "tally")
            },
        }
    }
}

/// Renders a tally as `5x1;25x2`, ordered by denomination.
pub fn format_tally(tally: &CoinTally) -> String {
    tally
        .iter()
        .map(|(coin, count)| format!("{coin}x{count}"))
        .collect::<Vec<_>>()
        .join(";")
}

/// Writes outcomes as CSV with a `seq,action,display,receipt,coins,revenue` header.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(destination: W) -> Self {
        let writer = csv::WriterBuilder::new().from_writer(destination);
        Self { writer }
    }

    pub fn write_outcome(&mut self, seq: usize, outcome: &Outcome) -> Result<()> {
        self.writer.serialize(OutcomeRecord::from((seq, outcome)))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
