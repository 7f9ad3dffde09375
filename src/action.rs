//! Actions: user intents and async lookup results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::state::{Location, RequestId, WeatherSnapshot};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Intent: fetch conditions for known coordinates (startup path)
    WeatherLoad(Location),

    /// Result: conditions retrieved
    WeatherDidLoad {
        request: RequestId,
        snapshot: WeatherSnapshot,
    },

    /// Result: retrieval failed
    WeatherDidError {
        request: RequestId,
        error: LookupError,
    },

    // ===== Geocode category =====
    /// Result: query resolved to a location
    GeocodeDidResolve {
        request: RequestId,
        location: Location,
    },

    /// Result: query could not be resolved
    GeocodeDidError {
        request: RequestId,
        error: LookupError,
    },

    // ===== Search category =====
    /// Give the location input keyboard focus
    SearchFocus,

    /// Leave the location input, keeping its text
    SearchBlur,

    /// Input text changed
    SearchQueryChange(String),

    /// Submit the given query
    SearchSubmit(String),

    /// Re-submit whatever the input currently holds
    SearchRefresh,

    // ===== UI category =====
    /// Toggle between Celsius and Fahrenheit
    UiToggleUnits,

    /// Force a re-render (cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
