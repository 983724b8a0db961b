//! Player controller - core orchestration
//!
//! Couples the playlist with the transport state and keeps an external
//! playback engine in sync with both.

use crate::{
    engine::{EngineParams, PlaybackEngine, DEFAULT_PLAYBACK_RATE},
    error::{PlaybackError, Result},
    events::PlayerEvent,
    playlist::Playlist,
    time::TimeDisplay,
    transport::{SeekState, Transport},
    types::{PlayerConfig, TrackId},
};

/// Central player state
///
/// Orchestrates:
/// - Playlist navigation (circular next/previous, direct selection)
/// - Play intent (always reset on track change)
/// - Seek gesture reconciliation against engine progress reports
/// - Volume and mute
/// - Engine synchronization (load on track change, declarative params after every change)
///
/// Single-threaded: every method corresponds to one discrete UI event or
/// engine callback and applies fully before returning.
pub struct PlayerController {
    // State
    playlist: Playlist,
    transport: Transport,
    load_error: Option<PlaybackError>,

    // Settings
    config: PlayerConfig,

    // Platform engine (absent until the host attaches one)
    engine: Option<Box<dyn PlaybackEngine>>,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerController {
    /// Create a controller positioned on the first track, paused
    pub fn new(tracks: Vec<TrackId>, config: PlayerConfig) -> Result<Self> {
        let playlist = Playlist::new(tracks)?;
        let transport = Transport::new(config.initial_volume);

        Ok(Self {
            playlist,
            transport,
            load_error: None,
            config,
            engine: None,
            pending_events: Vec::new(),
        })
    }

    /// Attach the platform engine
    ///
    /// Loads the current track and pushes the current parameters. A load
    /// failure is recorded (see [`load_error`](Self::load_error)) rather
    /// than returned.
    pub fn set_engine(&mut self, engine: Box<dyn PlaybackEngine>) {
        self.engine = Some(engine);
        self.load_current_track();
        self.sync_engine();
    }

    /// Check if an engine is attached
    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    // ===== Playlist Navigation =====

    /// Skip to next track (wraps to the first track)
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &TrackId {
        let previous = self.playlist.current().clone();
        self.playlist.next();
        self.change_track(previous);
        self.playlist.current()
    }

    /// Go to previous track (wraps to the last track)
    pub fn previous(&mut self) -> &TrackId {
        let previous = self.playlist.current().clone();
        self.playlist.previous();
        self.change_track(previous);
        self.playlist.current()
    }

    /// Jump to the track at `index`
    ///
    /// Selecting the current track again is a no-op.
    pub fn select(&mut self, index: usize) -> Result<&TrackId> {
        if index == self.playlist.current_index() {
            return Ok(self.playlist.current());
        }

        let previous = self.playlist.current().clone();
        self.playlist.select(index)?;
        self.change_track(previous);
        Ok(self.playlist.current())
    }

    /// Internal: the one place a track change is handled
    ///
    /// Pauses, drops per-track state, loads the new track and re-syncs the engine.
    fn change_track(&mut self, previous: TrackId) {
        let was_playing = self.transport.is_playing();
        self.transport
            .reset_for_track_change(self.config.reset_timing_on_track_change);
        self.load_error = None;

        let current = self.playlist.current().clone();
        tracing::info!(
            index = self.playlist.current_index(),
            track = %current,
            previous = %previous,
            "Track changed"
        );

        self.pending_events.push(PlayerEvent::TrackChanged {
            index: self.playlist.current_index(),
            track_id: current.to_string(),
            previous_track_id: previous.to_string(),
        });
        if was_playing {
            self.emit_state_changed();
        }

        self.load_current_track();
        self.sync_engine();
    }

    /// Internal: hand the current track's URL to the engine
    fn load_current_track(&mut self) {
        let url = self.current_url();

        let outcome = match self.engine.as_mut() {
            Some(engine) => engine.load(&url),
            None => return,
        };

        match outcome {
            Ok(()) => {
                tracing::debug!(url = %url, "Track loaded");
                self.load_error = None;
            }
            Err(e) => self.record_load_failure(e.to_string()),
        }
    }

    // ===== Playback Control =====

    /// Flip the play intent, returning the new value
    ///
    /// No-op (returns false) while the current track has failed to load.
    pub fn toggle_play_pause(&mut self) -> bool {
        if self.load_error.is_some() {
            tracing::debug!("Ignoring play toggle: current track failed to load");
            return false;
        }

        self.transport.toggle_play_pause();
        self.emit_state_changed();
        self.sync_engine();
        self.transport.is_playing()
    }

    /// Start or resume playback
    pub fn play(&mut self) {
        if self.load_error.is_some() {
            tracing::debug!("Ignoring play: current track failed to load");
            return;
        }
        self.set_playing(true);
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.set_playing(false);
    }

    fn set_playing(&mut self, playing: bool) {
        if self.transport.set_playing(playing) {
            self.emit_state_changed();
            self.sync_engine();
        }
    }

    // ===== Engine Callbacks =====

    /// Engine reported the current track's length in seconds
    pub fn on_duration_reported(&mut self, seconds: f64) -> Result<()> {
        self.transport.on_duration_reported(seconds)?;
        self.pending_events.push(PlayerEvent::DurationChanged {
            duration_secs: seconds,
        });
        Ok(())
    }

    /// Engine reported the played fraction of the current track
    ///
    /// Ignored while a seek gesture is active.
    pub fn on_progress_reported(&mut self, fraction: f64) -> Result<()> {
        self.transport.on_progress_reported(fraction)?;
        Ok(())
    }

    /// Engine failed to load the current track after accepting it
    ///
    /// Forces the play intent off and surfaces the failure to the UI.
    pub fn on_load_failed(&mut self, reason: impl Into<String>) {
        self.record_load_failure(reason.into());
    }

    fn record_load_failure(&mut self, reason: String) {
        let error = PlaybackError::EngineLoadFailure {
            track_id: self.playlist.current().to_string(),
            reason,
        };
        tracing::warn!(error = %error, "Engine load failure");

        if self.transport.set_playing(false) {
            self.emit_state_changed();
        }
        self.pending_events.push(PlayerEvent::Error {
            message: error.to_string(),
        });
        self.load_error = Some(error);
        self.sync_engine();
    }

    // ===== Seek =====

    /// Start a scrub gesture (pointer down on the scrub control)
    pub fn begin_seek(&mut self) {
        if self.transport.begin_seek() {
            self.pending_events.push(PlayerEvent::SeekStarted);
        }
    }

    /// Move the scrub position during a drag; does not command the engine
    pub fn update_seek_preview(&mut self, fraction: f64) -> Result<()> {
        self.transport.update_seek_preview(fraction)
    }

    /// Finish the scrub gesture and seek the engine to the last preview
    ///
    /// Returns the fraction that was dispatched.
    pub fn commit_seek(&mut self) -> Result<f64> {
        let fraction = self.transport.commit_seek()?;
        let position_secs = fraction * self.transport.duration();

        match self.engine.as_mut() {
            Some(engine) => {
                engine.seek_to_fraction(fraction)?;
                tracing::debug!(fraction, position_secs, "Seek dispatched");
                self.pending_events.push(PlayerEvent::SeekDispatched {
                    fraction,
                    position_secs,
                });
            }
            None => tracing::debug!(fraction, "No engine attached, seek dropped"),
        }

        Ok(fraction)
    }

    /// Seek directly to a position (programmatic or keyboard seek)
    ///
    /// Runs a complete gesture: begin, preview, commit.
    pub fn seek_to(&mut self, fraction: f64) -> Result<f64> {
        self.begin_seek();
        if let Err(e) = self.transport.update_seek_preview(fraction) {
            self.transport.cancel_seek();
            return Err(e);
        }
        self.commit_seek()
    }

    // ===== Volume =====

    /// Set volume (0.0-1.0); always unmutes
    pub fn set_volume(&mut self, level: f32) -> Result<()> {
        self.transport.set_volume(level)?;
        self.emit_volume_changed();
        self.sync_engine();
        Ok(())
    }

    /// Toggle mute, returning the new mute state; the stored level is untouched
    pub fn toggle_mute(&mut self) -> bool {
        let muted = self.transport.toggle_mute();
        self.emit_volume_changed();
        self.sync_engine();
        muted
    }

    // ===== State Queries =====

    /// Current track
    pub fn current_track(&self) -> &TrackId {
        self.playlist.current()
    }

    /// Position of the current track in the playlist
    pub fn current_index(&self) -> usize {
        self.playlist.current_index()
    }

    /// Playable URL of the current track
    pub fn current_url(&self) -> String {
        self.config.track_url(self.playlist.current())
    }

    /// The playlist
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Whether the engine should be playing
    pub fn is_playing(&self) -> bool {
        self.transport.is_playing()
    }

    /// Stored volume level (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.transport.volume().level()
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.transport.volume().is_muted()
    }

    /// Value the volume slider shows (0.0 while muted)
    pub fn volume_slider_value(&self) -> f32 {
        self.transport.volume().effective_level()
    }

    /// Last accepted engine position (0.0-1.0)
    pub fn progress(&self) -> f64 {
        self.transport.progress()
    }

    /// Position shown by the scrub control (0.0-1.0)
    pub fn seek_value(&self) -> f64 {
        self.transport.seek_value()
    }

    /// Scrub gesture state
    pub fn seek_state(&self) -> SeekState {
        self.transport.seek_state()
    }

    /// Current track length in seconds (0 until reported)
    pub fn duration(&self) -> f64 {
        self.transport.duration()
    }

    /// Elapsed/total time for display
    pub fn time_display(&self) -> TimeDisplay {
        TimeDisplay {
            elapsed: self.transport.elapsed(),
            total: self.transport.duration(),
        }
    }

    /// Load failure of the current track, if any
    pub fn load_error(&self) -> Option<&PlaybackError> {
        self.load_error.as_ref()
    }

    /// Player configuration
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Declarative parameters the engine should currently honor
    pub fn engine_params(&self) -> EngineParams {
        let volume = self.transport.volume();
        EngineParams {
            url: self.current_url(),
            playing: self.transport.is_playing(),
            volume: volume.level(),
            muted: volume.is_muted(),
            playback_rate: DEFAULT_PLAYBACK_RATE,
        }
    }

    // ===== Events =====

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if events are waiting
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_state_changed(&mut self) {
        self.pending_events.push(PlayerEvent::StateChanged {
            playing: self.transport.is_playing(),
        });
    }

    fn emit_volume_changed(&mut self) {
        let volume = self.transport.volume();
        self.pending_events.push(PlayerEvent::VolumeChanged {
            level: volume.level(),
            is_muted: volume.is_muted(),
        });
    }

    /// Internal: push the declarative parameters to the engine
    ///
    /// Failures are surfaced as events; the next sync sends a full snapshot again.
    fn sync_engine(&mut self) {
        let params = self.engine_params();

        if let Some(engine) = self.engine.as_mut() {
            if let Err(e) = engine.apply(&params) {
                tracing::warn!(error = %e, "Failed to apply engine parameters");
                self.pending_events.push(PlayerEvent::Error {
                    message: e.to_string(),
                });
            }
        }
    }
}
