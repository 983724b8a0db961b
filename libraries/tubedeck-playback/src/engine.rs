//! External playback engine interface
//!
//! The controller never decodes or streams anything itself. The host
//! provides an engine (an embedded web player, a native media stack, a
//! simulator) and feeds its progress/duration callbacks back into
//! [`PlayerController`](crate::PlayerController).

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Playback rate handed to the engine; speed control is not exposed
pub const DEFAULT_PLAYBACK_RATE: f32 = 1.0;

/// Declarative engine parameters
///
/// A full snapshot of what the engine should be doing right now. Engines
/// apply it as a whole instead of receiving individual commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineParams {
    /// Playable URL of the current track
    pub url: String,

    /// Whether the engine should be playing
    pub playing: bool,

    /// Volume level (0.0-1.0), independent of `muted`
    pub volume: f32,

    /// Whether audio is muted
    pub muted: bool,

    /// Playback speed multiplier
    pub playback_rate: f32,
}

/// Platform playback engine
///
/// Calls arrive on the controller's thread only; implementations do not
/// need to be `Send`.
pub trait PlaybackEngine {
    /// Start loading a track
    ///
    /// # Returns
    /// * `Ok(())` - Load accepted (duration/progress will be reported later)
    /// * `Err(_)` - Track cannot be loaded
    fn load(&mut self, url: &str) -> Result<()>;

    /// Apply the declarative play/volume/mute parameters
    fn apply(&mut self, params: &EngineParams) -> Result<()>;

    /// Seek to an absolute position of the current track
    ///
    /// # Arguments
    /// * `fraction` - Target position in [0.0, 1.0] of the track duration
    fn seek_to_fraction(&mut self, fraction: f64) -> Result<()>;
}

/// Engine that records every call, for unit tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub calls: std::rc::Rc<std::cell::RefCell<Vec<EngineCall>>>,
    pub fail_loads: bool,
}

/// Call observed by [`RecordingEngine`]
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Load(String),
    Apply(EngineParams),
    Seek(f64),
}

#[cfg(test)]
impl PlaybackEngine for RecordingEngine {
    fn load(&mut self, url: &str) -> Result<()> {
        self.calls.borrow_mut().push(EngineCall::Load(url.to_string()));
        if self.fail_loads {
            return Err(crate::error::PlaybackError::engine("video unavailable"));
        }
        Ok(())
    }

    fn apply(&mut self, params: &EngineParams) -> Result<()> {
        self.calls.borrow_mut().push(EngineCall::Apply(params.clone()));
        Ok(())
    }

    fn seek_to_fraction(&mut self, fraction: f64) -> Result<()> {
        self.calls.borrow_mut().push(EngineCall::Seek(fraction));
        Ok(())
    }
}
