use crate::error::PayStationError;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A coin denomination accepted by the pay station.
///
/// Anything that is not one of these variants is rejected before it can touch
/// station state, so the tally can only ever be keyed by valid coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Coin {
    Nickel,
    Dime,
    Quarter,
}

/// Count of each coin inserted during the open transaction.
pub type CoinTally = BTreeMap<Coin, u32>;

impl Coin {
    pub const ALL: [Coin; 3] = [Coin::Nickel, Coin::Dime, Coin::Quarter];

    /// Value of the coin in cents.
    pub const fn cents(self) -> u32 {
        match self {
            Coin::Nickel => 5,
            Coin::Dime => 10,
            Coin::Quarter => 25,
        }
    }
}

impl TryFrom<i32> for Coin {
    type Error = PayStationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Coin::Nickel),
            10 => Ok(Coin::Dime),
            25 => Ok(Coin::Quarter),
            other => Err(PayStationError::InvalidCoin(other)),
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cents())
    }
}

impl Serialize for Coin {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.cents())
    }
}
