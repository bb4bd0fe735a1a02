pub mod outcome_writer;
