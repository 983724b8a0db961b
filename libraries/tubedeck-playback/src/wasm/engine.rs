//! Engine backed by JavaScript callbacks

use crate::{EngineParams, PlaybackEngine, PlaybackError, Result};
use js_sys::Function;
use wasm_bindgen::prelude::*;

/// Playback engine implemented in JavaScript
///
/// Wraps three callbacks supplied by the page, typically forwarding to an
/// embedded video player:
/// - `load(url)`
/// - `apply({ url, playing, volume, muted, playback_rate })`
/// - `seek(fraction)`
///
/// A callback that throws is reported back as an engine error.
#[wasm_bindgen]
pub struct JsEngine {
    on_load: Function,
    on_apply: Function,
    on_seek: Function,
}

#[wasm_bindgen]
impl JsEngine {
    /// Create an engine from page callbacks
    #[wasm_bindgen(constructor)]
    pub fn new(load: Function, apply: Function, seek: Function) -> Self {
        Self {
            on_load: load,
            on_apply: apply,
            on_seek: seek,
        }
    }
}

fn js_error(error: JsValue) -> PlaybackError {
    PlaybackError::engine(
        error
            .as_string()
            .unwrap_or_else(|| format!("{:?}", error)),
    )
}

impl PlaybackEngine for JsEngine {
    fn load(&mut self, url: &str) -> Result<()> {
        self.on_load
            .call1(&JsValue::NULL, &JsValue::from_str(url))
            .map(|_| ())
            .map_err(js_error)
    }

    fn apply(&mut self, params: &EngineParams) -> Result<()> {
        let value = serde_wasm_bindgen::to_value(params)
            .map_err(|e| PlaybackError::engine(format!("Serialization error: {}", e)))?;

        self.on_apply
            .call1(&JsValue::NULL, &value)
            .map(|_| ())
            .map_err(js_error)
    }

    fn seek_to_fraction(&mut self, fraction: f64) -> Result<()> {
        self.on_seek
            .call1(&JsValue::NULL, &JsValue::from_f64(fraction))
            .map(|_| ())
            .map_err(js_error)
    }
}
