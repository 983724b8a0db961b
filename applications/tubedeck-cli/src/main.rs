/// tubedeck - interactive playlist player driving a simulated engine
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;
mod config;
mod engine;
mod error;
mod session;

use command::Command;
use config::CliConfig;
use session::{Outcome, Session};

#[derive(Parser)]
#[command(name = "tubedeck")]
#[command(about = "Playlist and transport controller for an embedded video player", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "TUBEDECK_CONFIG")]
    config: Option<PathBuf>,

    /// Comma-separated track identifiers, replaces the configured playlist
    #[arg(short, long, value_delimiter = ',')]
    playlist: Option<Vec<String>>,

    /// Track identifier the simulated engine refuses to load (repeatable)
    #[arg(long = "fail-track")]
    fail_track: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tubedeck=info,tubedeck_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(playlist) = cli.playlist {
        config.playlist = playlist;
    }
    config.engine.unavailable.extend(cli.fail_track);
    config.validate()?;

    tracing::info!(
        tracks = config.playlist.len(),
        tick_ms = config.engine.tick_ms,
        "Starting tubedeck"
    );

    run(&config).await
}

async fn run(config: &CliConfig) -> anyhow::Result<()> {
    let mut session = Session::new(config)?;
    println!("{}", session.status());
    println!("type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_millis(config.engine.tick_ms));
    let mut last_tick = Instant::now();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                session.tick(now - last_tick);
                last_tick = now;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                match line.parse::<Command>() {
                    Ok(command) => match session.execute(command) {
                        Outcome::Continue(output) => println!("{}", output),
                        Outcome::Quit => break,
                    },
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    tracing::info!(track = %session.player().current_track(), "Shutting down");
    Ok(())
}
