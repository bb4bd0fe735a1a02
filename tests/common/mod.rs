#![allow(dead_code)]

use rand::Rng;
use rand::seq::SliceRandom;
use std::io::{Error, Write};

pub const VALID_COINS: [i32; 3] = [5, 10, 25];

/// Picks `count` random valid coin values.
pub fn random_coins(count: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| *VALID_COINS.choose(&mut rng).unwrap())
        .collect()
}

/// Writes a session that inserts `coins` and then buys, `rounds` times over.
/// Returns the total cents committed.
pub fn write_buy_session<W: Write>(
    destination: W,
    rounds: usize,
    max_coins: usize,
) -> Result<u32, Error> {
    let mut rng = rand::thread_rng();
    let mut wtr = csv::WriterBuilder::new().from_writer(destination);
    wtr.write_record(["action", "coin"])?;

    let mut total = 0;
    for _ in 0..rounds {
        let coins = random_coins(rng.gen_range(0..=max_coins));
        for coin in coins {
            wtr.write_record(["insert", &coin.to_string()])?;
            total += coin as u32;
        }
        wtr.write_record(["buy", ""])?;
    }

    wtr.flush()?;
    Ok(total)
}
