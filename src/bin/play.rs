//! Play a game against the bot in the terminal.
//!
//! Options: --seed, --fast, --think-min, --think-max

use clap::Parser;
use zhithead::cli::*;
use zhithead::gameroom::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    zhithead::log();
    let config = Config::from(Args::parse());
    log::info!("[main] seed {}", config.seed);
    Terminal::new(Room::spawn(config)).run().await
}
