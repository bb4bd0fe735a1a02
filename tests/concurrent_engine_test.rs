mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use paystation::application::command::{Action, StationCommand};
use paystation::application::engine::{Outcome, StationEngine};
use predicates::prelude::*;
use std::process::Command;

#[tokio::test]
async fn test_shared_engine_serializes_commands() {
    let engine = StationEngine::default();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let engine = engine.clone();
        handles.push(tokio::spawn(async move {
            let mut inserted = 0;
            for coin in common::random_coins(50) {
                engine
                    .process_command(StationCommand::insert(coin))
                    .await
                    .unwrap();
                inserted += coin as u32;
            }
            inserted
        }));
    }

    let mut expected = 0;
    for handle in handles {
        expected += handle.await.unwrap();
    }

    let outcome = engine
        .process_command(StationCommand::action(Action::Buy))
        .await
        .unwrap();
    let Outcome::Purchased { receipt } = outcome else {
        panic!("expected a receipt, got {outcome:?}");
    };
    assert_eq!(receipt.value(), expected / 5 * 2);
    assert_eq!(engine.pending_revenue().await, expected);
}

#[test]
fn test_generated_session_revenue() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let total = common::write_buy_session(&mut file, 200, 6).unwrap();

    let mut session = std::fs::read_to_string(file.path()).unwrap();
    session.push_str("empty,\n");
    std::fs::write(file.path(), session).unwrap();

    let mut cmd = Command::new(cargo_bin!("paystation"));
    cmd.arg(file.path()).arg("--format").arg("json");

    cmd.assert().success().stdout(predicate::str::contains(format!(
        "\"event\":\"emptied\",\"revenue\":{total}"
    )));
}
