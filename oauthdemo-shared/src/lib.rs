#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

//! Shared building blocks for the OAuthDemo front-ends: wire models, origin
//! handling, configuration, the backend client, and the view state machine.

pub mod client;
pub mod config;
pub mod display;
pub mod endpoints;
pub mod models;
pub mod view;
