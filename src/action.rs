//! Actions - everything that can happen to the app

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherReport;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Input category =====
    /// Search bar text changed
    InputChange(String),

    /// Search bar submitted with its current text
    InputSubmit(String),

    // ===== Weather category =====
    /// Intent: fetch current weather for a city (triggers async task)
    WeatherFetch(String),

    /// Result: request `request` finished with a report
    WeatherDidLoad {
        request: u64,
        report: WeatherReport,
    },

    /// Result: request `request` failed
    WeatherDidError { request: u64, message: String },

    // ===== Uncategorized (global) =====
    /// Force a re-render (cursor movement)
    Render,

    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}
