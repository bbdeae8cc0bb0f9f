use clap::Parser;

/// Command-line overrides. Anything left unset falls back to the environment.
#[derive(Debug, Default, Clone, Parser)]
#[command(version, about = "Play rock-paper-scissors against one peer over TCP")]
pub struct Args {
    /// Port to bind or dial (env: PORT)
    #[arg(long)]
    pub port: Option<u16>,
    /// Rounds to play (env: GAMES)
    #[arg(long)]
    pub games: Option<usize>,
    /// Host to bind or dial (env: HOST)
    #[arg(long)]
    pub host: Option<String>,
    /// Seed for reproducible moves (env: SEED)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the final scoreboard as JSON
    #[arg(long)]
    pub json: bool,
}
