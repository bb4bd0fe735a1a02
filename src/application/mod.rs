//! Application layer driving the pay station from operator commands.
//!
//! `StationEngine` owns one station behind a `tokio` mutex so that any number
//! of callers can share it while commands are still applied one at a time.

pub mod command;
pub mod engine;
