//! WASM bindings for tubedeck-playback
//!
//! This module provides WebAssembly bindings for the PlayerController,
//! so the controller can drive an embedded web player from the browser.

pub mod controller;
pub mod engine;

pub use controller::WasmPlayerController;
pub use engine::JsEngine;
