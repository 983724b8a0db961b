//! Core types for the player controller

use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder replaced by the track identifier in [`PlayerConfig::url_template`]
pub const TRACK_ID_PLACEHOLDER: &str = "{id}";

/// Opaque identifier of a track on the hosting service
///
/// Never parsed or validated; it is only substituted into the URL template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a track identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TrackId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Configuration for the player controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial volume (0.0-1.0, default: 0.8)
    pub initial_volume: f32,

    /// Playable URL pattern; `{id}` is replaced by the track identifier
    pub url_template: String,

    /// Zero duration and progress whenever the current track changes (default: true)
    ///
    /// When disabled, the previous track's timing stays on screen until the
    /// engine reports values for the new track.
    pub reset_timing_on_track_change: bool,
}

impl PlayerConfig {
    /// Build the playable URL for a track
    pub fn track_url(&self, id: &TrackId) -> String {
        self.url_template.replace(TRACK_ID_PLACEHOLDER, id.as_str())
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_volume: 0.8,
            url_template: "https://www.youtube.com/watch?v={id}".to_string(),
            reset_timing_on_track_change: true,
        }
    }
}

/// Clamp a position fraction into `[0, 1]`
///
/// Out-of-range values are clamped; only NaN and infinities are rejected.
pub fn normalize_fraction(fraction: f64) -> Result<f64> {
    if !fraction.is_finite() {
        return Err(PlaybackError::InvalidSeekTarget(fraction));
    }
    if !(0.0..=1.0).contains(&fraction) {
        tracing::debug!(fraction, "Clamping out-of-range position fraction");
    }
    Ok(fraction.clamp(0.0, 1.0))
}
