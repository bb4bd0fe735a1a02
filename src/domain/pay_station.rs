use super::coin::{Coin, CoinTally};
use super::ports::RateStrategyBox;
use super::rate::LinearRate;
use super::receipt::Receipt;
use crate::error::Result;

/// A coin-operated parking pay station.
///
/// The station accumulates coins for the open transaction and shows the
/// parking time they buy. A transaction ends with either [`buy`](Self::buy),
/// which commits the payment to revenue and issues a [`Receipt`], or
/// [`cancel`](Self::cancel), which hands the coins back.
///
/// `PayStation` is not synchronized. Wrap it in a lock (see
/// [`StationEngine`](crate::application::engine::StationEngine)) to share it.
#[derive(Debug)]
pub struct PayStation {
    inserted_so_far: u32,
    time_bought: u32,
    total_revenue: u32,
    coin_tally: CoinTally,
    rate: RateStrategyBox,
}

impl Default for PayStation {
    fn default() -> Self {
        Self::new()
    }
}

impl PayStation {
    /// Creates an idle station using the default linear tariff.
    pub fn new() -> Self {
        Self::with_rate(Box::new(LinearRate::default()))
    }

    /// Creates an idle station using the given tariff.
    pub fn with_rate(rate: RateStrategyBox) -> Self {
        Self {
            inserted_so_far: 0,
            time_bought: 0,
            total_revenue: 0,
            coin_tally: CoinTally::new(),
            rate,
        }
    }

    /// Accepts a raw coin value.
    ///
    /// Only 5, 10 and 25 are accepted. Any other value fails with
    /// `PayStationError::InvalidCoin` and leaves the station unchanged.
    pub fn add_payment(&mut self, coin_value: i32) -> Result<()> {
        let coin = Coin::try_from(coin_value)?;
        self.insert_coin(coin);
        Ok(())
    }

    /// Accepts an already validated coin.
    pub fn insert_coin(&mut self, coin: Coin) {
        *self.coin_tally.entry(coin).or_insert(0) += 1;
        self.inserted_so_far += coin.cents();
        self.time_bought = self.rate.calculate_time(self.inserted_so_far);
    }

    /// Minutes of parking the current payment buys.
    pub fn read_display(&self) -> u32 {
        self.time_bought
    }

    /// Commits the open transaction and issues a receipt for the displayed time.
    ///
    /// Buying with nothing inserted is allowed and yields a zero-minute receipt.
    pub fn buy(&mut self) -> Receipt {
        let receipt = Receipt::new(self.time_bought);
        self.total_revenue += self.inserted_so_far;
        self.reset();
        receipt
    }

    /// Aborts the open transaction and returns the inserted coins.
    ///
    /// The returned tally only holds denominations that were inserted, and is
    /// empty when nothing was. The station is fully reset, so returned coins
    /// never reach revenue.
    pub fn cancel(&mut self) -> CoinTally {
        let returned = std::mem::take(&mut self.coin_tally);
        self.reset();
        returned
    }

    /// Drains collected revenue, returning the amount in cents.
    ///
    /// Any open transaction is discarded as well.
    pub fn empty(&mut self) -> u32 {
        let revenue = std::mem::take(&mut self.total_revenue);
        self.reset();
        revenue
    }

    /// Snapshot of the coins inserted during the open transaction.
    pub fn current_tally(&self) -> CoinTally {
        self.coin_tally.clone()
    }

    /// Cents inserted during the open transaction.
    pub fn inserted_so_far(&self) -> u32 {
        self.inserted_so_far
    }

    /// Cents committed by `buy` since the last `empty`.
    pub fn total_revenue(&self) -> u32 {
        self.total_revenue
    }

    fn reset(&mut self) {
        self.coin_tally.clear();
        self.inserted_so_far = 0;
        self.time_bought = 0;
    }
}
