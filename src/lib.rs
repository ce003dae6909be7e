//! Atmosphere - terminal weather companion on tui-dispatch
//!
//! The binary wires these modules into a runtime; they are exposed here for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod reducer;
pub mod state;
pub mod theme;
