use super::ports::RateStrategy;

/// Linear tariff: every full step of `cents_per_step` buys `minutes_per_step`.
///
/// Partial steps buy nothing. The default tariff is 2 minutes per 5 cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearRate {
    cents_per_step: u32,
    minutes_per_step: u32,
}

impl LinearRate {
    /// # Panics
    ///
    /// Panics if `cents_per_step` is zero.
    pub const fn new(cents_per_step: u32, minutes_per_step: u32) -> Self {
        assert!(cents_per_step > 0, "cents_per_step must be positive");
        Self {
            cents_per_step,
            minutes_per_step,
        }
    }
}

impl Default for LinearRate {
    fn default() -> Self {
        Self::new(5, 2)
    }
}

impl RateStrategy for LinearRate {
    fn calculate_time(&self, cents: u32) -> u32 {
        cents / self.cents_per_step * self.minutes_per_step
    }
}
