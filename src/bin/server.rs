//! Server Binary
//!
//! Listens on PORT, waits for one peer's greeting, then plays GAMES rounds
//! of rock-paper-scissors against it with uniformly random moves.
//!
//! Options: --port, --games, --host, --seed, --json

use anyhow::Context;
use clap::Parser;
use rochambeau::*;
use std::process::ExitCode;
use tokio::net::TcpListener;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let config = match Config::from_env(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    rochambeau::log("server")?;
    rochambeau::kys();
    println!("Games to play: {}", config.games);
    let listener = TcpListener::bind(config.bind())
        .await
        .with_context(|| format!("bind {}", config.bind()))?;
    println!("Socket: tcp://{}", listener.local_addr()?);
    let board = Host::new(config.games, Random::from(config.seed))
        .serve(&listener)
        .await?;
    println!("Score: {}", board);
    println!("Leader: {}", board.leader().winner());
    if config.json {
        println!("{}", board.json()?);
    }
    Ok(ExitCode::SUCCESS)
}
