/// CLI error types
use thiserror::Error;
use tubedeck_playback::PlaybackError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}
