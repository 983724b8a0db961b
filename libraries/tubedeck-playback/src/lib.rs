//! tubedeck - Playback Control
//!
//! Playlist and transport state for a player whose media engine lives
//! somewhere else (an embedded web player, a native media stack, a test
//! double).
//!
//! This crate provides:
//! - Circular playlist navigation (next/previous with wraparound)
//! - Play intent that always resets on track change
//! - Seek gesture reconciliation (engine reports are ignored while scrubbing)
//! - Volume (0.0-1.0) with independent mute
//! - `minutes:seconds` time display
//! - Declarative engine synchronization and a UI event queue
//!
//! # Architecture
//!
//! The controller owns no media. The host implements [`PlaybackEngine`]
//! and forwards the engine's progress/duration callbacks back into the
//! controller. Everything runs on one thread, one call per UI event or
//! engine callback.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use tubedeck_playback::{PlayerConfig, PlayerController, TrackId};
//!
//! let tracks = vec![TrackId::from("jKty-A4h1Qk"), TrackId::from("paFtGQ22YlE")];
//! let mut player = PlayerController::new(tracks, PlayerConfig::default()).unwrap();
//!
//! player.toggle_play_pause();
//! assert!(player.is_playing());
//!
//! // Changing tracks always pauses
//! player.next();
//! assert!(!player.is_playing());
//!
//! // Engine callbacks
//! player.on_duration_reported(200.0).unwrap();
//! player.on_progress_reported(0.25).unwrap();
//! assert_eq!(player.time_display().to_string(), "0:50 / 3:20");
//! ```
//!
//! # Example: Scrubbing
//!
//! ```rust
//! use tubedeck_playback::{PlayerConfig, PlayerController, TrackId};
//!
//! let mut player = PlayerController::new(vec![TrackId::from("a")], PlayerConfig::default()).unwrap();
//!
//! player.begin_seek();
//! player.update_seek_preview(0.6).unwrap();
//! player.on_progress_reported(0.1).unwrap(); // suppressed
//! assert_eq!(player.seek_value(), 0.6);
//!
//! let target = player.commit_seek().unwrap();
//! assert_eq!(target, 0.6);
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use tubedeck_playback::{EngineParams, PlaybackEngine, PlayerConfig, PlayerController, Result, TrackId};
//!
//! struct EmbeddedPlayer {
//!     // ... platform-specific handle
//! }
//!
//! impl PlaybackEngine for EmbeddedPlayer {
//!     fn load(&mut self, url: &str) -> Result<()> {
//!         // Point the embedded player at `url`
//!         Ok(())
//!     }
//!
//!     fn apply(&mut self, params: &EngineParams) -> Result<()> {
//!         // Set playing/volume/muted on the embedded player
//!         Ok(())
//!     }
//!
//!     fn seek_to_fraction(&mut self, fraction: f64) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut player = PlayerController::new(vec![TrackId::from("a")], PlayerConfig::default()).unwrap();
//! player.set_engine(Box::new(EmbeddedPlayer {}));
//!
//! // Forward engine callbacks, then hand events to the UI
//! player.on_progress_reported(0.5).ok();
//! for event in player.drain_events() {
//!     println!("{:?}", event);
//! }
//! ```

mod controller;
mod engine;
mod error;
mod events;
mod playlist;
mod time;
mod transport;
pub mod types;
mod volume;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use controller::PlayerController;
pub use engine::{EngineParams, PlaybackEngine, DEFAULT_PLAYBACK_RATE};
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use playlist::Playlist;
pub use time::{format_time, TimeDisplay};
pub use transport::{SeekState, Transport};
pub use types::{PlayerConfig, TrackId};
pub use volume::Volume;
