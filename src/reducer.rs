//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Input actions =====
        Action::InputChange(text) => {
            state.city_input = text;
            DispatchResult::changed()
        }

        Action::InputSubmit(text) => {
            let city = text.trim().to_string();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            state.city_input = text;
            start_fetch(state, city)
        }

        // ===== Weather actions =====
        Action::WeatherFetch(city) => {
            let city = city.trim().to_string();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            start_fetch(state, city)
        }

        Action::WeatherDidLoad { request, report } => {
            if !is_current(state, request) {
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Loaded(report);
            state.is_refreshing = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError { request, message } => {
            if !is_current(state, request) {
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Failed(message);
            state.is_refreshing = false;
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Tick => {
            if state.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn start_fetch(state: &mut AppState, city: String) -> DispatchResult<Effect> {
    state.request_seq += 1;
    state.query = Some(city.clone());
    // A loaded report stays until the new request completes
    if state.weather.is_loaded() {
        state.is_refreshing = true;
    } else {
        state.weather = DataResource::Loading;
    }
    state.tick_count = 0;
    DispatchResult::changed_with(Effect::FetchWeather {
        request: state.request_seq,
        city,
    })
}

/// Only the latest request may complete the pending fetch.
fn is_current(state: &AppState, request: u64) -> bool {
    let current = request == state.request_seq && state.is_loading();
    if !current {
        tracing::debug!(
            request,
            latest = state.request_seq,
            "dropping stale weather completion"
        );
    }
    current
}
