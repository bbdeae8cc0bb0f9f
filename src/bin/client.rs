//! Client Binary
//!
//! Dials HOST:PORT, greets with `hello <GAMES>`, then plays GAMES rounds.
//!
//! Options: --port, --games, --host, --seed, --json

use anyhow::Context;
use clap::Parser;
use rochambeau::*;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let config = match Config::from_env(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    rochambeau::log("client")?;
    rochambeau::kys();
    println!("Games to play: {}", config.games);
    println!("Socket: tcp://{}", config.peer());
    let board = Guest::new(config.games, Random::from(config.seed))
        .join(config.peer())
        .await
        .with_context(|| format!("play against {}", config.peer()))?;
    println!("Score: {}", board);
    println!("Leader: {}", board.leader().winner());
    if config.json {
        println!("{}", board.json()?);
    }
    Ok(ExitCode::SUCCESS)
}
