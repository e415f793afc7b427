//! # Configuration
//!
//! Client-side settings: where the backend lives and how to log. The browser
//! build bakes the backend origin in at compile time instead.

#[cfg(not(target_arch = "wasm32"))]
pub mod client;
