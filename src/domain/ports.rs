use std::fmt::Debug;

/// Converts the amount paid into parking minutes.
pub trait RateStrategy: Send + Sync + Debug {
    fn calculate_time(&self, cents: u32) -> u32;
}

pub type RateStrategyBox = Box<dyn RateStrategy>;
