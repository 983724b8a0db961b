//! Player Events
//!
//! Event-based communication for UI synchronization.
//! Events are queued by the controller and drained by the host after each call:
//! - Play intent changes
//! - Track changes
//! - Duration reports
//! - Seek gesture start and dispatch
//! - Volume/mute changes
//! - Load failures

use serde::{Deserialize, Serialize};

/// Events emitted by the player controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerEvent {
    /// Play intent changed
    StateChanged {
        /// Whether the engine should now be playing
        playing: bool,
    },

    /// Current track changed (always paused afterwards)
    TrackChanged {
        /// Position of the new track in the playlist
        index: usize,
        /// ID of the new (current) track
        track_id: String,
        /// ID of the previous track
        previous_track_id: String,
    },

    /// Engine reported a new duration for the current track
    DurationChanged {
        /// Track length in seconds
        duration_secs: f64,
    },

    /// User started dragging the scrub control
    SeekStarted,

    /// Seek command sent to the engine
    SeekDispatched {
        /// Target position (0.0-1.0)
        fraction: f64,
        /// Target position in seconds, derived from the known duration
        position_secs: f64,
    },

    /// Volume or mute changed
    VolumeChanged {
        /// Stored volume level (0.0-1.0)
        level: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Non-fatal error the UI should surface
    Error {
        /// Error message
        message: String,
    },
}
