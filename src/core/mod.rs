//! # Core Application Logic
//!
//! Domain logic only. It knows nothing about any specific UI technology:
//! the `tui` module adapts it to a terminal, and a different adapter
//! could render the same core without changes here.
//!
//! ## Modules
//!
//! - [`route`]: the closed screen set and route string compose/parse
//! - [`nav`]: the back-stack state machine with its navigation policies
//! - [`state`]: the `App` struct — the shared view-model screens read
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: TOML config with the defaults → file → env → CLI chain

pub mod action;
pub mod config;
pub mod nav;
pub mod route;
pub mod state;
