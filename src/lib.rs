//! Two-process rock-paper-scissors.
//!
//! A listening [`Host`] and a connecting [`Guest`] open one line-framed
//! [`Session`], trade a greeting, then exchange exactly one [`Move`] per
//! round for a configured number of rounds.
//!
//! ## Modules
//!
//! - [`hand`] — the move domain and the cyclic comparator
//! - [`players`] — pluggable move sources
//! - [`session`] — wire framing and the two-party session state machine
//! - [`config`] — environment and command-line configuration
//! - [`play`] — round bookkeeping and the match loop for each side

pub mod config;
pub mod hand;
pub mod play;
pub mod players;
pub mod session;

pub use config::*;
pub use hand::*;
pub use play::*;
pub use players::*;
pub use session::*;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation from the thread-local generator.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// CONFIGURATION KEYS
// ============================================================================
/// Port the server binds and the client connects to.
pub const ENV_PORT: &str = "PORT";
/// Number of rounds each side plays.
pub const ENV_GAMES: &str = "GAMES";
/// Bind host for the server, connect host for the client.
pub const ENV_HOST: &str = "HOST";
/// Seed for reproducible random moves.
pub const ENV_SEED: &str = "SEED";

/// Default bind host for the listening side.
pub const BIND_HOST: &str = "0.0.0.0";
/// Default connect host for the connecting side.
pub const PEER_HOST: &str = "127.0.0.1";
/// Text token the connecting side opens its greeting with.
pub const GREETING: &str = "hello";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
/// The file is named `<name>-<pid>-<secs>.log`, so two processes started
/// from one directory in the same second never share a file.
#[cfg(feature = "server")]
pub fn log(name: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(logfile(name, std::process::id(), time))
            .context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

/// Per-process log file path under `logs/`.
pub fn logfile(name: &str, pid: u32, secs: u64) -> String {
    format!("logs/{}-{}-{}.log", name, pid, secs)
}

/// Register Ctrl+C handler for immediate termination, even mid-receive.
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, abandoning session");
            std::process::exit(130);
        }
    });
}
