//! WASM-compatible PlayerController wrapper

use super::engine::JsEngine;
use crate::{PlaybackError, PlayerConfig, PlayerController, TrackId};
use js_sys::Function;
use wasm_bindgen::prelude::*;

/// WASM-compatible player controller
///
/// This wraps the core PlayerController with a JavaScript-friendly API.
/// Queued events are flushed to the `onEvent` callback after every call.
#[wasm_bindgen]
pub struct WasmPlayerController {
    inner: PlayerController,

    // Event callback
    on_event: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlayerController {
    /// Create a controller from an array of track identifiers
    ///
    /// `config` may be `undefined` to use defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(track_ids: JsValue, config: JsValue) -> Result<WasmPlayerController, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        let ids: Vec<String> = serde_wasm_bindgen::from_value(track_ids)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse track ids: {}", e)))?;

        let config: PlayerConfig = if config.is_undefined() || config.is_null() {
            PlayerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
        };

        let tracks = ids.into_iter().map(TrackId::from).collect();
        let inner = PlayerController::new(tracks, config).map_err(to_js)?;

        Ok(Self {
            inner,
            on_event: None,
        })
    }

    /// Attach the page's engine
    #[wasm_bindgen(js_name = setEngine)]
    pub fn set_engine(&mut self, engine: JsEngine) {
        self.inner.set_engine(Box::new(engine));
        self.flush_events();
    }

    // ===== Playlist Navigation =====

    /// Skip to next track, returning its identifier
    pub fn next(&mut self) -> String {
        let id = self.inner.next().to_string();
        self.flush_events();
        id
    }

    /// Go to previous track, returning its identifier
    pub fn previous(&mut self) -> String {
        let id = self.inner.previous().to_string();
        self.flush_events();
        id
    }

    /// Jump to track at index
    pub fn select(&mut self, index: usize) -> Result<String, JsValue> {
        let result = self.inner.select(index).map(|id| id.to_string());
        self.flush_events();
        result.map_err(to_js)
    }

    // ===== Playback Control =====

    /// Flip play/pause, returning the new play intent
    #[wasm_bindgen(js_name = togglePlayPause)]
    pub fn toggle_play_pause(&mut self) -> bool {
        let playing = self.inner.toggle_play_pause();
        self.flush_events();
        playing
    }

    /// Start or resume playback
    pub fn play(&mut self) {
        self.inner.play();
        self.flush_events();
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.inner.pause();
        self.flush_events();
    }

    // ===== Engine Callbacks =====

    /// Forward the engine's duration callback (seconds)
    #[wasm_bindgen(js_name = onDuration)]
    pub fn on_duration(&mut self, seconds: f64) -> Result<(), JsValue> {
        let result = self.inner.on_duration_reported(seconds);
        self.flush_events();
        result.map_err(to_js)
    }

    /// Forward the engine's progress callback (played fraction)
    #[wasm_bindgen(js_name = onProgress)]
    pub fn on_progress(&mut self, played: f64) -> Result<(), JsValue> {
        self.inner.on_progress_reported(played).map_err(to_js)
    }

    /// Forward the engine's error callback
    #[wasm_bindgen(js_name = onLoadError)]
    pub fn on_load_error(&mut self, reason: String) {
        web_sys::console::warn_1(&JsValue::from_str(&reason));
        self.inner.on_load_failed(reason);
        self.flush_events();
    }

    // ===== Seeking =====

    /// Pointer down on the scrub control
    #[wasm_bindgen(js_name = beginSeek)]
    pub fn begin_seek(&mut self) {
        self.inner.begin_seek();
        self.flush_events();
    }

    /// Scrub control value changing (fraction)
    #[wasm_bindgen(js_name = updateSeekPreview)]
    pub fn update_seek_preview(&mut self, fraction: f64) -> Result<(), JsValue> {
        self.inner.update_seek_preview(fraction).map_err(to_js)
    }

    /// Scrub control value committed; returns the dispatched fraction
    #[wasm_bindgen(js_name = commitSeek)]
    pub fn commit_seek(&mut self) -> Result<f64, JsValue> {
        let result = self.inner.commit_seek();
        self.flush_events();
        result.map_err(to_js)
    }

    /// Seek directly to a fraction
    #[wasm_bindgen(js_name = seekTo)]
    pub fn seek_to(&mut self, fraction: f64) -> Result<f64, JsValue> {
        let result = self.inner.seek_to(fraction);
        self.flush_events();
        result.map_err(to_js)
    }

    // ===== Volume Control =====

    /// Set volume (0.0 - 1.0); unmutes
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, level: f32) -> Result<(), JsValue> {
        let result = self.inner.set_volume(level);
        self.flush_events();
        result.map_err(to_js)
    }

    /// Toggle mute, returning the new mute state
    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&mut self) -> bool {
        let muted = self.inner.toggle_mute();
        self.flush_events();
        muted
    }

    // ===== State Queries =====

    /// Index of the current track
    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.inner.current_index()
    }

    /// Identifier of the current track
    #[wasm_bindgen(js_name = currentTrack)]
    pub fn current_track(&self) -> String {
        self.inner.current_track().to_string()
    }

    /// Playable URL of the current track
    #[wasm_bindgen(js_name = currentUrl)]
    pub fn current_url(&self) -> String {
        self.inner.current_url()
    }

    /// Current play intent
    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    /// Check if muted
    #[wasm_bindgen(js_name = isMuted)]
    pub fn is_muted(&self) -> bool {
        self.inner.is_muted()
    }

    /// Stored volume (0.0 - 1.0)
    #[wasm_bindgen(js_name = getVolume)]
    pub fn get_volume(&self) -> f32 {
        self.inner.volume()
    }

    /// Value for the volume slider (0 while muted)
    #[wasm_bindgen(js_name = volumeSliderValue)]
    pub fn volume_slider_value(&self) -> f32 {
        self.inner.volume_slider_value()
    }

    /// Value for the scrub slider (0.0 - 1.0)
    #[wasm_bindgen(js_name = seekValue)]
    pub fn seek_value(&self) -> f64 {
        self.inner.seek_value()
    }

    /// Current track length in seconds
    #[wasm_bindgen(js_name = getDuration)]
    pub fn get_duration(&self) -> f64 {
        self.inner.duration()
    }

    /// Formatted `elapsed / total`
    #[wasm_bindgen(js_name = timeDisplay)]
    pub fn time_display(&self) -> String {
        self.inner.time_display().to_string()
    }

    /// Load failure message for the current track, if any
    #[wasm_bindgen(js_name = loadError)]
    pub fn load_error(&self) -> Option<String> {
        self.inner.load_error().map(|e| e.to_string())
    }

    /// Current engine parameters as a plain object
    #[wasm_bindgen(js_name = engineParams)]
    pub fn engine_params(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.engine_params()).unwrap_or(JsValue::NULL)
    }

    // ===== Event Listeners =====

    /// Register event callback; receives `{ type, ... }` objects
    #[wasm_bindgen(js_name = onEvent)]
    pub fn on_event(&mut self, callback: Function) {
        self.on_event = Some(callback);
    }

    // ===== Internal Event Emitters =====

    fn flush_events(&mut self) {
        let events = self.inner.drain_events();

        if let Some(ref cb) = self.on_event {
            for event in &events {
                if let Ok(js_event) = serde_wasm_bindgen::to_value(event) {
                    cb.call1(&JsValue::NULL, &js_event).ok();
                }
            }
        }
    }
}

fn to_js(error: PlaybackError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
