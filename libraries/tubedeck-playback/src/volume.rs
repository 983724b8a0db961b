//! Volume control
//!
//! Linear 0.0-1.0 level handed straight to the engine, plus a mute flag
//! that never touches the stored level.

/// Volume controller
///
/// Muting preserves the level so unmuting restores it exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    /// Volume level (0.0-1.0)
    level: f32,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (0.0-1.0, default: 0.8), clamped
    pub fn new(level: f32) -> Self {
        Self {
            level: Self::clamp_level(level),
            muted: false,
        }
    }

    /// Set volume level (0.0-1.0)
    ///
    /// Always unmutes: moving the volume control means the user wants sound.
    pub fn set_level(&mut self, level: f32) {
        self.level = Self::clamp_level(level);
        self.muted = false;
    }

    /// Get current volume level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Level the volume slider should display
    ///
    /// Returns 0.0 if muted, otherwise the stored level
    pub fn effective_level(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.level
        }
    }

    fn clamp_level(level: f32) -> f32 {
        if level.is_nan() {
            return 0.0;
        }
        level.clamp(0.0, 1.0)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(0.8) // Default to 80%
    }
}
