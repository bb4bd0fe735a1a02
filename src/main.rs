use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use paystation::application::engine::{Outcome, StationEngine};
use paystation::interfaces::csv::command_reader::CommandReader;
use paystation::interfaces::csv::outcome_writer::OutcomeWriter;
use paystation::interfaces::json::outcome_writer::JsonOutcomeWriter;
use paystation::logger::init_logger;
use std::fs::File;
use std::io::{self, StdoutLock};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Operator session CSV file (`action, coin`)
    input: PathBuf,

    /// Output format for station outcomes
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Log every processed command
    #[arg(short, long)]
    verbose: bool,
}

enum Sink<'a> {
    Csv(OutcomeWriter<StdoutLock<'a>>),
    Json(JsonOutcomeWriter<StdoutLock<'a>>),
}

impl Sink<'_> {
    fn write(&mut self, seq: usize, outcome: &Outcome) -> paystation::error::Result<()> {
        match self {
            Sink::Csv(writer) => writer.write_outcome(seq, outcome),
            Sink::Json(writer) => writer.write_outcome(seq, outcome),
        }
    }

    fn flush(&mut self) -> paystation::error::Result<()> {
        match self {
            Sink::Csv(writer) => writer.flush(),
            Sink::Json(writer) => writer.flush(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let engine = StationEngine::default();

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);

    let stdout = io::stdout();
    let mut sink = match cli.format {
        OutputFormat::Csv => Sink::Csv(OutcomeWriter::new(stdout.lock())),
        OutputFormat::Json => Sink::Json(JsonOutcomeWriter::new(stdout.lock())),
    };

    let mut seq = 0;
    for command_result in reader.commands() {
        match command_result {
            Ok(command) => match engine.process_command(command).await {
                Ok(outcome) => {
                    seq += 1;
                    sink.write(seq, &outcome).into_diagnostic()?;
                }
                Err(e) => {
                    tracing::error!("Error processing command: {}", e);
                }
            },
            Err(e) => {
                tracing::error!("Error reading command: {}", e);
            }
        }
    }
    sink.flush().into_diagnostic()?;

    let revenue = engine.pending_revenue().await;
    tracing::info!(revenue, "session finished");

    Ok(())
}
