//! Transport state
//!
//! Play intent, timing, volume and the seek gesture state machine for the
//! current track. Engine reports and user gestures both land here; the
//! controller decides when to forward the results to the engine.

use crate::error::{PlaybackError, Result};
use crate::types::normalize_fraction;
use crate::volume::Volume;
use serde::{Deserialize, Serialize};

/// Scrub gesture state
///
/// ```text
///   Idle --begin_seek--> Seeking --commit_seek--> Idle
///                          |  ^
///                          +--+ update_seek_preview
/// ```
///
/// While `Seeking`, engine progress reports are dropped so the scrub
/// position does not jump back under the user's pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeekState {
    /// Engine reports drive the displayed position
    #[default]
    Idle,

    /// User is dragging; the local seek value is authoritative
    Seeking,
}

/// Transport state for the current track
#[derive(Debug, Clone)]
pub struct Transport {
    /// Whether the engine should be playing
    playing: bool,

    /// Last accepted engine position (0.0-1.0)
    progress: f64,

    /// Position shown by the scrub control (0.0-1.0)
    seek_value: f64,

    /// Scrub gesture state
    seek: SeekState,

    /// Track length in seconds, 0 until reported
    duration: f64,

    volume: Volume,
}

impl Transport {
    /// Create a paused transport with the given initial volume
    pub fn new(initial_volume: f32) -> Self {
        Self {
            playing: false,
            progress: 0.0,
            seek_value: 0.0,
            seek: SeekState::Idle,
            duration: 0.0,
            volume: Volume::new(initial_volume),
        }
    }

    // ===== Play intent =====

    /// Flip the play intent, returning the new value
    pub fn toggle_play_pause(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Set the play intent, returning true if it changed
    pub fn set_playing(&mut self, playing: bool) -> bool {
        let changed = self.playing != playing;
        self.playing = playing;
        changed
    }

    /// Whether the engine should be playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    // ===== Engine reports =====

    /// Record the track length reported by the engine; last value wins
    pub fn on_duration_reported(&mut self, seconds: f64) -> Result<()> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(PlaybackError::InvalidDuration(seconds));
        }
        self.duration = seconds;
        Ok(())
    }

    /// Record a played fraction reported by the engine
    ///
    /// Returns false when the report was suppressed by an active seek gesture.
    pub fn on_progress_reported(&mut self, fraction: f64) -> Result<bool> {
        let fraction = normalize_fraction(fraction)?;

        if self.seek == SeekState::Seeking {
            tracing::trace!(fraction, "Progress report suppressed during seek");
            return Ok(false);
        }

        self.progress = fraction;
        self.seek_value = fraction;
        Ok(true)
    }

    // ===== Seek gesture =====

    /// Start a scrub gesture
    ///
    /// Returns false if a gesture was already in progress.
    pub fn begin_seek(&mut self) -> bool {
        if self.seek == SeekState::Seeking {
            return false;
        }
        self.seek = SeekState::Seeking;
        true
    }

    /// Move the scrub position without commanding the engine
    pub fn update_seek_preview(&mut self, fraction: f64) -> Result<()> {
        self.seek_value = normalize_fraction(fraction)?;
        Ok(())
    }

    /// End the scrub gesture and return the fraction to seek to
    pub fn commit_seek(&mut self) -> Result<f64> {
        if self.seek != SeekState::Seeking {
            return Err(PlaybackError::NotSeeking);
        }
        self.seek = SeekState::Idle;
        Ok(self.seek_value)
    }

    /// Abandon a scrub gesture without seeking
    pub fn cancel_seek(&mut self) {
        self.seek = SeekState::Idle;
    }

    /// Current scrub gesture state
    pub fn seek_state(&self) -> SeekState {
        self.seek
    }

    /// Check if a scrub gesture is active
    pub fn is_seeking(&self) -> bool {
        self.seek == SeekState::Seeking
    }

    /// Position shown by the scrub control (0.0-1.0)
    pub fn seek_value(&self) -> f64 {
        self.seek_value
    }

    /// Last accepted engine position (0.0-1.0)
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Track length in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Elapsed seconds derived from duration and progress
    pub fn elapsed(&self) -> f64 {
        self.duration * self.progress
    }

    // ===== Volume =====

    /// Set volume level (0.0-1.0); always unmutes
    pub fn set_volume(&mut self, level: f32) -> Result<()> {
        if !level.is_finite() {
            return Err(PlaybackError::InvalidVolume(level));
        }
        self.volume.set_level(level);
        Ok(())
    }

    /// Toggle mute, returning the new mute state
    pub fn toggle_mute(&mut self) -> bool {
        self.volume.toggle_mute();
        self.volume.is_muted()
    }

    /// Volume settings
    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    // ===== Track change =====

    /// Reset per-track state after the current track changed
    ///
    /// Play intent always drops to false and any scrub gesture is abandoned.
    /// Timing is zeroed only when `reset_timing` is set; volume is kept.
    pub fn reset_for_track_change(&mut self, reset_timing: bool) {
        self.playing = false;
        self.seek = SeekState::Idle;

        if reset_timing {
            self.progress = 0.0;
            self.seek_value = 0.0;
            self.duration = 0.0;
        }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new(0.8)
    }
}
