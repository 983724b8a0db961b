//! Error types for the player controller

use thiserror::Error;

/// Player errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// Playlist was created without any tracks
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// Index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// Engine could not load the current track
    #[error("Failed to load track {track_id}: {reason}")]
    EngineLoadFailure {
        /// Track that failed to load
        track_id: String,
        /// Engine-provided reason
        reason: String,
    },

    /// Seek target is not a finite number
    #[error("Invalid seek target: {0}")]
    InvalidSeekTarget(f64),

    /// Volume level is not a finite number
    #[error("Invalid volume level: {0}")]
    InvalidVolume(f32),

    /// Reported duration is negative or not finite
    #[error("Invalid duration: {0}")]
    InvalidDuration(f64),

    /// Seek committed without a seek gesture in progress
    #[error("No seek gesture in progress")]
    NotSeeking,

    /// Engine command failed
    #[error("Engine error: {0}")]
    Engine(String),
}

impl PlaybackError {
    /// Create an engine error
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
