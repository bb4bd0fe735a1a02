//! Domain layer: coins, tariffs, receipts and the pay station itself.
//!
//! Nothing in here performs I/O or locking.

pub mod coin;
pub mod pay_station;
pub mod ports;
pub mod rate;
pub mod receipt;
