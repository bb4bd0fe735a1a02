use serde::Serialize;

/// Proof of purchase for a number of parking minutes.
///
/// Only [`PayStation::buy`](super::pay_station::PayStation::buy) issues receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Receipt {
    value: u32,
}

impl Receipt {
    pub(crate) fn new(value: u32) -> Self {
        Self { value }
    }

    /// Parking minutes purchased.
    pub fn value(&self) -> u32 {
        self.value
    }
}
