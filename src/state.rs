//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Identifies one started lookup; later lookups get larger ids.
pub type RequestId = u64;

/// A resolved place: display label plus coordinates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }
}

/// Current conditions for one location, as returned by Open-Meteo
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    pub temperature_celsius: f64,
    pub relative_humidity_percent: i32,
    pub precipitation_probability_percent: i32,
    pub weather_code: i32, // WMO weather code
    pub wind_speed_kmh: f64,
    pub location: Location,
}

/// Temperature unit preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "°C",
            TempUnit::Fahrenheit => "°F",
        }
    }

    /// Convert a Celsius reading into this unit.
    pub fn convert(&self, celsius: f64) -> f64 {
        match self {
            TempUnit::Celsius => celsius,
            TempUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    /// Whole-degree value for display. Halves round up.
    pub fn display(&self, celsius: f64) -> i64 {
        round_half_up(self.convert(celsius))
    }
}

/// Nearest integer, with .5 going toward positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Where the lookup state machine currently is
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LookupStatus {
    /// Nothing started yet
    #[default]
    Idle,
    /// A lookup has been started and nothing has resolved since
    Loading,
    /// Last resolved lookup succeeded; the snapshot is on screen
    Displaying,
    /// Last resolved lookup failed; the error replaces the output
    Failed(LookupError),
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Text of the location input; also shows the last resolved label
    #[debug(section = "Input", label = "Query", debug_fmt)]
    pub query: String,

    /// Whether the input has keyboard focus
    #[debug(section = "Input", label = "Editing")]
    pub editing: bool,

    #[debug(section = "Weather", label = "Unit", debug_fmt)]
    pub unit: TempUnit,

    /// Idle → Loading → Displaying/Failed
    #[debug(section = "Weather", label = "Status", debug_fmt)]
    pub status: LookupStatus,

    /// Last successful reading. Survives later failures.
    #[debug(section = "Weather", label = "Snapshot", debug_fmt)]
    pub snapshot: Option<WeatherSnapshot>,

    /// Id handed to the most recently started lookup
    #[debug(section = "Requests", label = "Last issued", debug_fmt)]
    pub last_request: RequestId,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            editing: false,
            unit: TempUnit::default(),
            status: LookupStatus::Idle,
            snapshot: None,
            last_request: 0,
        }
    }

    /// Allocate the id for a lookup that is about to start
    pub fn next_request(&mut self) -> RequestId {
        self.last_request = self.last_request.wrapping_add(1);
        self.last_request
    }

    pub fn is_loading(&self) -> bool {
        self.status == LookupStatus::Loading
    }

    /// Snapshot that is currently visible, if any
    pub fn displayed_snapshot(&self) -> Option<&WeatherSnapshot> {
        match self.status {
            LookupStatus::Displaying => self.snapshot.as_ref(),
            _ => None,
        }
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

    #[test]
    fn test_fahrenheit_conversion() {
        assert_eq!(TempUnit::Fahrenheit.convert(0.0), 32.0);
        assert_eq!(TempUnit::Fahrenheit.convert(100.0), 212.0);
        assert_eq!(TempUnit::Fahrenheit.convert(-40.0), -40.0);
        assert_eq!(TempUnit::Celsius.convert(21.7), 21.7);
    }

    #[test]
    fn test_display_rounding() {
        assert_eq!(TempUnit::Celsius.display(21.5), 22);
        assert_eq!(TempUnit::Celsius.display(21.49), 21);
        assert_eq!(TempUnit::Celsius.display(-2.5), -2);
        assert_eq!(TempUnit::Celsius.display(-2.6), -3);
        // 22.5°C = 72.5°F
        assert_eq!(TempUnit::Fahrenheit.display(22.5), 73);
    }

    #[test]
    fn test_fahrenheit_display_matches_formula() {
        let mut c = -60.0;
        while c <= 60.0 {
            let expected = round_half_up(c * 9.0 / 5.0 + 32.0);
            assert_eq!(TempUnit::Fahrenheit.display(c), expected, "at {c}°C");
            c += 0.3;
        }
    }

    #[test]
    fn test_toggle_round_trip() {
        let unit = TempUnit::default();
        assert_eq!(unit, TempUnit::Celsius);
        assert_eq!(unit.toggle(), TempUnit::Fahrenheit);
        assert_eq!(unit.toggle().toggle(), unit);
        assert_eq!(unit.toggle().toggle().display(18.4), unit.display(18.4));
    }

    #[test]
    fn test_request_ids_increase() {
        let mut state = AppState::new();
        let first = state.next_request();
        let second = state.next_request();
        assert!(second > first);
        assert_eq!(state.last_request, second);
    }

    #[test]
    fn test_snapshot_hidden_unless_displaying() {
        let snapshot = WeatherSnapshot {
            temperature_celsius: 10.0,
            relative_humidity_percent: 50,
            precipitation_probability_percent: 0,
            weather_code: 0,
            wind_speed_kmh: 3.0,
            location: Location::new("Oslo, NO", 59.91, 10.75),
        };
        let mut state = AppState {
            snapshot: Some(snapshot.clone()),
            status: LookupStatus::Failed(LookupError::NetworkError),
            ..Default::default()
        };
        assert!(state.displayed_snapshot().is_none());

        state.status = LookupStatus::Displaying;
        assert_eq!(state.displayed_snapshot(), Some(&snapshot));
    }
}
