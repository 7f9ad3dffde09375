//! Reducer - pure function: (state, action) -> DispatchResult

use tracing::debug;
use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, LookupStatus, RequestId};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherLoad(location) => {
            let request = state.next_request();
            state.status = LookupStatus::Loading;
            debug!(request, location = %location.name, "loading weather by coordinates");
            DispatchResult::changed_with(Effect::FetchWeather { request, location })
        }

        Action::WeatherDidLoad { request, snapshot } => {
            note_stale(state, request, "weather");
            state.query = snapshot.location.name.clone();
            state.snapshot = Some(snapshot);
            state.status = LookupStatus::Displaying;
            DispatchResult::changed()
        }

        Action::WeatherDidError { request, error } => {
            note_stale(state, request, "weather");
            state.status = LookupStatus::Failed(error);
            DispatchResult::changed()
        }

        // ===== Geocode actions =====
        Action::GeocodeDidResolve { request, location } => {
            note_stale(state, request, "geocode");
            debug!(request, location = %location.name, "geocoded");
            DispatchResult::changed_with(Effect::FetchWeather { request, location })
        }

        Action::GeocodeDidError { request, error } => {
            note_stale(state, request, "geocode");
            state.status = LookupStatus::Failed(error);
            DispatchResult::changed()
        }

        // ===== Search actions =====
        Action::SearchFocus => {
            if state.editing {
                return DispatchResult::unchanged();
            }
            state.editing = true;
            DispatchResult::changed()
        }

        Action::SearchBlur => {
            if !state.editing {
                return DispatchResult::unchanged();
            }
            state.editing = false;
            DispatchResult::changed()
        }

        Action::SearchQueryChange(query) => {
            state.query = query;
            DispatchResult::changed()
        }

        Action::SearchSubmit(query) => {
            let trimmed = query.trim().to_string();
            if trimmed.is_empty() {
                return DispatchResult::unchanged();
            }
            state.query = query;
            state.editing = false;
            start_search(state, trimmed)
        }

        Action::SearchRefresh => {
            let trimmed = state.query.trim().to_string();
            if trimmed.is_empty() {
                return DispatchResult::unchanged();
            }
            start_search(state, trimmed)
        }

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Loading is visible before the geocode effect is even issued.
fn start_search(state: &mut AppState, query: String) -> DispatchResult<Effect> {
    let request = state.next_request();
    state.status = LookupStatus::Loading;
    debug!(request, %query, "search started");
    DispatchResult::changed_with(Effect::Geocode { request, query })
}

/// Results are applied even when a newer lookup exists; the last one to arrive wins.
fn note_stale(state: &AppState, request: RequestId, stage: &str) {
    if request != state.last_request {
        debug!(
            request,
            latest = state.last_request,
            stage,
            "applying result from superseded lookup"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use crate::state::{Location, TempUnit, WeatherSnapshot};

    fn paris() -> Location {
        Location::new("Paris, FR", 48.8566, 2.3522)
    }

    fn snapshot(location: Location, temperature_celsius: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_celsius,
            relative_humidity_percent: 60,
            precipitation_probability_percent: 10,
            weather_code: 2,
            wind_speed_kmh: 8.4,
            location,
        }
    }

    #[test]
    fn test_weather_load_sets_loading() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::WeatherLoad(paris()));

        assert!(result.changed);
        assert!(state.is_loading());
        assert_eq!(result.effects.len(), 1);
        assert_eq!(
            result.effects[0],
            Effect::FetchWeather {
                request: 1,
                location: paris(),
            }
        );
    }

    #[test]
    fn test_submit_trims_and_geocodes() {
        let mut state = AppState {
            editing: true,
            ..Default::default()
        };
        let result = reducer(&mut state, Action::SearchSubmit("  Paris ".into()));

        assert!(result.changed);
        assert!(state.is_loading());
        assert!(!state.editing);
        assert_eq!(state.query, "  Paris ");
        assert!(matches!(
            &result.effects[0],
            Effect::Geocode { request: 1, query } if query == "Paris"
        ));
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut state = AppState {
            query: "   ".into(),
            editing: true,
            ..Default::default()
        };
        let before = state.clone();

        for action in [Action::SearchSubmit("   ".into()), Action::SearchRefresh] {
            let result = reducer(&mut state, action);
            assert!(!result.changed);
            assert!(result.effects.is_empty());
        }
        assert_eq!(state.status, before.status);
        assert_eq!(state.last_request, before.last_request);
        assert!(state.editing);
    }

    #[test]
    fn test_geocode_resolution_chains_fetch() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchSubmit("Paris".into()));

        let result = reducer(
            &mut state,
            Action::GeocodeDidResolve {
                request: 1,
                location: paris(),
            },
        );

        assert!(state.is_loading());
        assert!(matches!(
            &result.effects[0],
            Effect::FetchWeather { request: 1, location } if location.name == "Paris, FR"
        ));
    }

    #[test]
    fn test_weather_did_load_displays_and_fills_query() {
        let mut state = AppState {
            query: "paris".into(),
            status: LookupStatus::Loading,
            ..Default::default()
        };

        reducer(
            &mut state,
            Action::WeatherDidLoad {
                request: 0,
                snapshot: snapshot(paris(), 17.2),
            },
        );

        assert_eq!(state.status, LookupStatus::Displaying);
        assert_eq!(state.query, "Paris, FR");
        assert!(state.displayed_snapshot().is_some());
    }

    #[test]
    fn test_failure_keeps_snapshot_but_hides_it() {
        let mut state = AppState::default();
        reducer(
            &mut state,
            Action::WeatherDidLoad {
                request: 0,
                snapshot: snapshot(paris(), 17.2),
            },
        );
        reducer(&mut state, Action::SearchRefresh);
        reducer(
            &mut state,
            Action::WeatherDidError {
                request: 1,
                error: LookupError::NetworkError,
            },
        );

        assert_eq!(state.status, LookupStatus::Failed(LookupError::NetworkError));
        assert!(state.snapshot.is_some());
        assert!(state.displayed_snapshot().is_none());
    }

    #[test]
    fn test_not_found_keeps_query_text() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchSubmit("Xyzzyville".into()));
        reducer(
            &mut state,
            Action::GeocodeDidError {
                request: 1,
                error: LookupError::LocationNotFound,
            },
        );

        assert_eq!(
            state.status,
            LookupStatus::Failed(LookupError::LocationNotFound)
        );
        assert_eq!(state.query, "Xyzzyville");
    }

    #[test]
    fn test_last_resolver_wins() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchSubmit("Paris".into()));
        reducer(&mut state, Action::SearchSubmit("Oslo".into()));
        assert_eq!(state.last_request, 2);

        let oslo = Location::new("Oslo, NO", 59.91, 10.75);
        reducer(
            &mut state,
            Action::WeatherDidLoad {
                request: 2,
                snapshot: snapshot(oslo, 4.0),
            },
        );
        // The older lookup resolves afterwards and still overwrites.
        reducer(
            &mut state,
            Action::WeatherDidLoad {
                request: 1,
                snapshot: snapshot(paris(), 17.2),
            },
        );

        assert_eq!(state.query, "Paris, FR");
        assert_eq!(
            state.snapshot.as_ref().map(|s| s.location.name.as_str()),
            Some("Paris, FR")
        );
    }

    #[test]
    fn test_toggle_units() {
        let mut state = AppState::default();
        assert_eq!(state.unit, TempUnit::Celsius);

        reducer(&mut state, Action::UiToggleUnits);
        assert_eq!(state.unit, TempUnit::Fahrenheit);
        assert_eq!(state.status, LookupStatus::Idle);

        reducer(&mut state, Action::UiToggleUnits);
        assert_eq!(state.unit, TempUnit::Celsius);
    }

    #[test]
    fn test_focus_and_blur() {
        let mut state = AppState::default();
        assert!(reducer(&mut state, Action::SearchFocus).changed);
        assert!(!reducer(&mut state, Action::SearchFocus).changed);
        assert!(state.editing);
        assert!(reducer(&mut state, Action::SearchBlur).changed);
        assert!(!state.editing);
    }
}
