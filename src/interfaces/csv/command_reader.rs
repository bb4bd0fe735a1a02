use crate::application::command::StationCommand;
use crate::error::{PayStationError, Result};
use std::io::Read;

/// Reads operator commands from a CSV source with an `action, coin` header.
///
/// Whitespace is trimmed and the `coin` column may be left empty.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes commands. A malformed row yields an error for that
    /// row only; the iterator keeps going.
    pub fn commands(self) -> impl Iterator<Item = Result<StationCommand>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayStationError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::command::Action;

    #[test]
    fn test_reader_valid_stream() {
        let data = "action, coin\ninsert, 10\ninsert, 25\ndisplay\nbuy,";
        let reader = CommandReader::new(data.as_bytes());
        let results: Vec<Result<StationCommand>> = reader.commands().collect();

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap(), &StationCommand::insert(10));
        assert_eq!(
            results[2].as_ref().unwrap(),
            &StationCommand::action(Action::Display)
        );
        assert_eq!(results[3].as_ref().unwrap().coin, None);
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "action, coin\ninsert, quarter\nbuy,";
        let reader = CommandReader::new(data.as_bytes());
        let results: Vec<Result<StationCommand>> = reader.commands().collect();

        assert!(matches!(results[0], Err(PayStationError::CsvError(_))));
        assert!(results[1].is_ok());
    }
}
