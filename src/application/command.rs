use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Insert,
    Display,
    Buy,
    Cancel,
    Empty,
    Tally,
}

/// One operator command against the station. `coin` is only used by `insert`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct StationCommand {
    pub action: Action,
    pub coin: Option<i32>,
}

impl StationCommand {
    pub fn insert(coin: i32) -> Self {
        Self {
            action: Action::Insert,
            coin: Some(coin),
        }
    }

    pub fn action(action: Action) -> Self {
        Self { action, coin: None }
    }
}
