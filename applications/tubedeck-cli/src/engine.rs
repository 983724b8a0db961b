//! Simulated playback engine
//!
//! Stands in for an embedded web player: accepts loads, honors the
//! declarative parameters and reports duration/progress on every tick.

use crate::config::EngineSettings;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tubedeck_playback::{EngineParams, PlaybackEngine, PlaybackError, Result};

/// Report delivered back to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum EngineReport {
    Duration(f64),
    Progress(f64),
}

#[derive(Debug, Default)]
struct SimState {
    url: Option<String>,
    playing: bool,
    volume: f32,
    muted: bool,
    position_secs: f64,
    duration_secs: f64,
    duration_reported: bool,
}

/// Engine half handed to the controller
pub struct SimulatedEngine {
    state: Rc<RefCell<SimState>>,
    settings: EngineSettings,
}

/// Clock half kept by the event loop
#[derive(Clone)]
pub struct EngineClock {
    state: Rc<RefCell<SimState>>,
}

impl SimulatedEngine {
    pub fn new(settings: EngineSettings) -> (Self, EngineClock) {
        let state = Rc::new(RefCell::new(SimState::default()));
        let clock = EngineClock {
            state: Rc::clone(&state),
        };
        (Self { state, settings }, clock)
    }

    /// Deterministic fake length derived from the URL
    fn duration_for(&self, url: &str) -> f64 {
        let span = self.settings.max_duration_secs - self.settings.min_duration_secs + 1;
        let hash = url
            .bytes()
            .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)));
        (self.settings.min_duration_secs + hash % span) as f64
    }
}

/// Whether `url` ends with `id` as a whole query value or path segment
fn url_names_track(url: &str, id: &str) -> bool {
    url.strip_suffix(id)
        .is_some_and(|rest| rest.ends_with(['=', '/']))
}

impl PlaybackEngine for SimulatedEngine {
    fn load(&mut self, url: &str) -> Result<()> {
        let duration_secs = self.duration_for(url);
        let mut state = self.state.borrow_mut();
        state.playing = false;
        state.position_secs = 0.0;
        state.duration_reported = false;

        if self
            .settings
            .unavailable
            .iter()
            .any(|id| url_names_track(url, id))
        {
            // Nothing stays loaded, the previous track included
            state.url = None;
            state.duration_secs = 0.0;
            return Err(PlaybackError::engine("Video unavailable"));
        }

        state.url = Some(url.to_string());
        state.duration_secs = duration_secs;
        tracing::debug!(url, duration_secs, "Simulated engine loaded track");
        Ok(())
    }

    fn apply(&mut self, params: &EngineParams) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.playing = params.playing;
        state.volume = params.volume;
        state.muted = params.muted;
        Ok(())
    }

    fn seek_to_fraction(&mut self, fraction: f64) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.url.is_none() {
            return Err(PlaybackError::engine("Nothing loaded"));
        }
        state.position_secs = fraction * state.duration_secs;
        tracing::debug!(position_secs = state.position_secs, "Simulated engine seeked");
        Ok(())
    }
}

impl EngineClock {
    /// Advance playback by `elapsed` and collect the reports to deliver
    ///
    /// Duration is reported once per loaded track; progress on every tick
    /// while something is loaded. Playback stops at the end of the track.
    pub fn tick(&self, elapsed: Duration) -> Vec<EngineReport> {
        let mut state = self.state.borrow_mut();
        let mut reports = Vec::new();

        if state.url.is_none() || state.duration_secs <= 0.0 {
            return reports;
        }

        if !state.duration_reported {
            state.duration_reported = true;
            reports.push(EngineReport::Duration(state.duration_secs));
        }

        if state.playing {
            state.position_secs =
                (state.position_secs + elapsed.as_secs_f64()).min(state.duration_secs);
            if state.position_secs >= state.duration_secs {
                state.playing = false;
            }
        }

        reports.push(EngineReport::Progress(
            state.position_secs / state.duration_secs,
        ));
        reports
    }

    /// Whether the engine is currently producing sound
    pub fn is_audible(&self) -> bool {
        let state = self.state.borrow();
        state.playing && !state.muted && state.volume > 0.0
    }
}
