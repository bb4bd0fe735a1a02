use super::command::{Action, StationCommand};
use crate::domain::coin::{Coin, CoinTally};
use crate::domain::pay_station::PayStation;
use crate::domain::receipt::Receipt;
use crate::error::{PayStationError, Result};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// What the station reported back for a single command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum Outcome {
    Accepted { coin: Coin, display: u32 },
    Display { display: u32 },
    Purchased { receipt: Receipt },
    Cancelled { returned: CoinTally },
    Emptied { revenue: u32 },
    Tally { coins: CoinTally },
}

/// Serialized access to a single pay station.
///
/// Cloning the engine yields another handle to the same station. Every command
/// holds the station lock for its whole duration, so concurrent callers observe
/// commands one at a time.
#[derive(Clone, Default)]
pub struct StationEngine {
    station: Arc<Mutex<PayStation>>,
}

impl StationEngine {
    pub fn new(station: PayStation) -> Self {
        Self {
            station: Arc::new(Mutex::new(station)),
        }
    }

    /// Applies one command to the station.
    ///
    /// A rejected coin is returned as an error and leaves the station as it was.
    pub async fn process_command(&self, command: StationCommand) -> Result<Outcome> {
        let mut station = self.station.lock().await;

        let outcome = match command.action {
            Action::Insert => {
                let value = command.coin.ok_or_else(|| {
                    PayStationError::CommandError("Insert missing coin".to_string())
                })?;
                let coin = Coin::try_from(value).inspect_err(|_| {
                    tracing::warn!(coin = value, "coin rejected");
                })?;
                station.insert_coin(coin);
                Outcome::Accepted {
                    coin,
                    display: station.read_display(),
                }
            }
            Action::Display => Outcome::Display {
                display: station.read_display(),
            },
            Action::Buy => Outcome::Purchased {
                receipt: station.buy(),
            },
            Action::Cancel => Outcome::Cancelled {
                returned: station.cancel(),
            },
            Action::Empty => Outcome::Emptied {
                revenue: station.empty(),
            },
            Action::Tally => Outcome::Tally {
                coins: station.current_tally(),
            },
        };

        tracing::debug!(?command, ?outcome, "command processed");
        Ok(outcome)
    }

    /// Revenue collected since the last `empty`, in cents.
    pub async fn pending_revenue(&self) -> u32 {
        self.station.lock().await.total_revenue()
    }
}
