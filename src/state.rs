//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::theme::{self, Backdrop};

/// City fetched on startup when none is given on the command line.
pub const DEFAULT_CITY: &str = "Paris";

/// Spinner cadence while a request is in flight.
pub const LOADING_ANIM_TICK_MS: u64 = 80;

/// Current conditions for one city, as reported by OpenWeather
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub location_name: String,
    pub country_code: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_ms: f64,
    pub pressure_hpa: f64,
    pub condition_description: String,
    pub condition_icon_code: String,
}

impl WeatherReport {
    /// "Tokyo, JP"
    pub fn place(&self) -> String {
        format!("{}, {}", self.location_name, self.country_code)
    }

    pub fn icon(&self) -> &'static str {
        theme::icon_for(&self.condition_icon_code)
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Draft text in the search bar
    #[debug(section = "Query", label = "Input")]
    pub city_input: String,

    /// City of the most recently issued request
    #[debug(section = "Query", label = "City", debug_fmt)]
    pub query: Option<String>,

    /// Id of the most recently issued request; older completions are dropped
    #[debug(section = "Query", label = "Request")]
    pub request_seq: u64,

    /// Weather lifecycle: Empty → Loading → Loaded/Failed; a fetch over a
    /// loaded report keeps it and sets `is_refreshing` instead
    #[debug(section = "Weather", label = "Data", debug_fmt)]
    pub weather: DataResource<WeatherReport>,

    /// A fetch is in flight while the previous report stays loaded
    #[debug(section = "Weather", label = "Refreshing")]
    pub is_refreshing: bool,

    /// Spinner frame counter
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            city_input: String::new(),
            query: None,
            request_seq: 0,
            weather: DataResource::Empty,
            is_refreshing: false,
            tick_count: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.weather.is_loading() || self.is_refreshing
    }

    pub fn error_message(&self) -> Option<&str> {
        self.weather.error()
    }

    pub fn result(&self) -> Option<&WeatherReport> {
        self.weather.data()
    }

    /// Backdrop for the current result, or the default one before any data
    pub fn backdrop(&self) -> Backdrop {
        theme::gradient_for(self.result().map(|report| report.temperature_c))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokyo() -> WeatherReport {
        WeatherReport {
            location_name: "Tokyo".into(),
            country_code: "JP".into(),
            temperature_c: 20.0,
            feels_like_c: 19.0,
            humidity_pct: 50.0,
            wind_speed_ms: 3.0,
            pressure_hpa: 1012.0,
            condition_description: "clear sky".into(),
            condition_icon_code: "01d".into(),
        }
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = AppState::new();
        assert!(state.city_input.is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.error_message(), None);
        assert_eq!(state.result(), None);
        assert_eq!(state.backdrop(), Backdrop::Default);
    }

    #[test]
    fn test_accessors_follow_resource() {
        let mut state = AppState::new();

        state.weather = DataResource::Loaded(tokyo());
        assert_eq!(state.result().map(|r| r.location_name.as_str()), Some("Tokyo"));
        assert_eq!(state.error_message(), None);
        assert_eq!(state.backdrop(), Backdrop::Warm);

        state.weather = DataResource::Failed("City not found".into());
        assert_eq!(state.error_message(), Some("City not found"));
        assert_eq!(state.result(), None);
        assert_eq!(state.backdrop(), Backdrop::Default);
    }

    #[test]
    fn test_report_place_and_icon() {
        let report = tokyo();
        assert_eq!(report.place(), "Tokyo, JP");
        assert_eq!(report.icon(), "☀️");
    }
}
