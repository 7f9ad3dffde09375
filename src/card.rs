//! Pure rendering of the output region
//!
//! Everything here is a function of state: no I/O, no mutation. The terminal
//! components and the headless markup printer both consume these views.

use std::fmt::Write as _;

use crate::codes::{self, IconCategory};
use crate::state::{AppState, LookupStatus, TempUnit, WeatherSnapshot, round_half_up};

pub const LOADING_MESSAGE: &str = "Loading weather...";

/// Display-ready values for one weather card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub icon: IconCategory,
    /// Rounded, in the preferred unit
    pub temperature: i64,
    pub unit: TempUnit,
    pub condition: &'static str,
    pub wind_kmh: i64,
    pub humidity_percent: i32,
    pub precipitation_percent: i32,
}

impl CardView {
    pub fn new(snapshot: &WeatherSnapshot, unit: TempUnit) -> Self {
        Self {
            icon: IconCategory::from_code(snapshot.weather_code),
            temperature: unit.display(snapshot.temperature_celsius),
            unit,
            condition: codes::condition_label(snapshot.weather_code),
            wind_kmh: round_half_up(snapshot.wind_speed_kmh),
            humidity_percent: snapshot.relative_humidity_percent,
            precipitation_percent: snapshot.precipitation_probability_percent,
        }
    }

    /// Temperature with a bare degree mark, e.g. `22°`
    pub fn temperature_text(&self) -> String {
        format!("{}°", self.temperature)
    }

    /// Label/value rows in display order: wind, humidity, precipitation
    pub fn stats(&self) -> [(&'static str, String); 3] {
        [
            ("Wind", format!("{} km/h", self.wind_kmh)),
            ("Humidity", format!("{}%", self.humidity_percent)),
            ("Precipitation", format!("{}%", self.precipitation_percent)),
        ]
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            concat!(
                "<div class=\"weather\">",
                "<div class=\"weather-icon\" data-icon=\"{icon}\"></div>",
                "<div class=\"temperature\">{temp}</div>",
                "</div>",
                "<div class=\"condition\">{condition}</div>",
                "<div class=\"weather-stats\">",
            ),
            icon = self.icon.slug(),
            temp = self.temperature_text(),
            condition = self.condition,
        );
        let _ = write!(
            out,
            "<div class=\"stat-item\" data-stat=\"wind\"><div class=\"stat-value\">{}</div><div class=\"stat-unit\">km/h</div></div>",
            self.wind_kmh
        );
        let _ = write!(
            out,
            "<div class=\"stat-item\" data-stat=\"humidity\"><div class=\"stat-value\">{}%</div></div>",
            self.humidity_percent
        );
        let _ = write!(
            out,
            "<div class=\"stat-item\" data-stat=\"precipitation\"><div class=\"stat-value\">{}%</div></div>",
            self.precipitation_percent
        );
        out.push_str("</div>");
        out
    }
}

/// Render a snapshot straight to card markup
pub fn render(snapshot: &WeatherSnapshot, unit: TempUnit) -> String {
    CardView::new(snapshot, unit).to_markup()
}

/// What the output region holds. Exactly one at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputView {
    Empty,
    Loading,
    Card(CardView),
    Error(String),
}

impl OutputView {
    pub fn from_state(state: &AppState) -> Self {
        match &state.status {
            LookupStatus::Idle => OutputView::Empty,
            LookupStatus::Loading => OutputView::Loading,
            LookupStatus::Failed(error) => OutputView::Error(error.to_string()),
            LookupStatus::Displaying => match &state.snapshot {
                Some(snapshot) => OutputView::Card(CardView::new(snapshot, state.unit)),
                None => OutputView::Empty,
            },
        }
    }

    pub fn to_markup(&self) -> String {
        match self {
            OutputView::Empty => String::new(),
            OutputView::Loading => format!("<div class=\"loading\">{LOADING_MESSAGE}</div>"),
            OutputView::Card(card) => card.to_markup(),
            OutputView::Error(message) => format!("<div class=\"error\">{message}</div>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use crate::state::Location;
    use pretty_assertions::assert_eq;

    fn snapshot(temperature_celsius: f64, weather_code: i32) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_celsius,
            relative_humidity_percent: 48,
            precipitation_probability_percent: 20,
            weather_code,
            wind_speed_kmh: 12.5,
            location: Location::new("Delhi, IN", 28.6139, 77.209),
        }
    }

    #[test]
    fn test_card_view_celsius() {
        let card = CardView::new(&snapshot(22.4, 3), TempUnit::Celsius);
        assert_eq!(card.temperature, 22);
        assert_eq!(card.condition, "Overcast");
        assert_eq!(card.icon, IconCategory::Overcast);
        assert_eq!(card.wind_kmh, 13);
        assert_eq!(card.temperature_text(), "22°");
    }

    #[test]
    fn test_card_view_fahrenheit() {
        let card = CardView::new(&snapshot(22.4, 3), TempUnit::Fahrenheit);
        // 22.4 * 9/5 + 32 = 72.32
        assert_eq!(card.temperature, 72);
    }

    #[test]
    fn test_unknown_code_renders_unknown() {
        let markup = render(&snapshot(5.0, 42), TempUnit::Celsius);
        assert!(markup.contains("<div class=\"condition\">Unknown</div>"));
        assert!(markup.contains("data-icon=\"generic-cloudy\""));
    }

    #[test]
    fn test_every_table_label_reaches_markup() {
        for (code, label) in codes::CONDITIONS {
            let markup = render(&snapshot(0.0, *code), TempUnit::Celsius);
            assert!(
                markup.contains(&format!("<div class=\"condition\">{label}</div>")),
                "code {code}: {markup}"
            );
        }
    }

    #[test]
    fn test_markup_contains_all_parts() {
        let markup = render(&snapshot(31.6, 0), TempUnit::Celsius);
        assert!(markup.contains("data-icon=\"clear\""));
        assert!(markup.contains("<div class=\"temperature\">32°</div>"));
        assert!(markup.contains("<div class=\"stat-value\">13</div><div class=\"stat-unit\">km/h</div>"));
        assert!(markup.contains("<div class=\"stat-value\">48%</div>"));
        assert!(markup.contains("<div class=\"stat-value\">20%</div>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let snap = snapshot(-3.5, 61);
        assert_eq!(
            render(&snap, TempUnit::Fahrenheit),
            render(&snap, TempUnit::Fahrenheit)
        );
    }

    #[test]
    fn test_output_view_follows_status() {
        let mut state = AppState::default();
        assert_eq!(OutputView::from_state(&state), OutputView::Empty);
        assert_eq!(OutputView::from_state(&state).to_markup(), "");

        state.status = LookupStatus::Loading;
        assert_eq!(
            OutputView::from_state(&state).to_markup(),
            "<div class=\"loading\">Loading weather...</div>"
        );

        state.snapshot = Some(snapshot(10.0, 2));
        state.status = LookupStatus::Displaying;
        assert!(matches!(OutputView::from_state(&state), OutputView::Card(_)));

        state.status = LookupStatus::Failed(LookupError::LocationNotFound);
        assert_eq!(
            OutputView::from_state(&state),
            OutputView::Error("Location not found".into())
        );
        assert_eq!(
            OutputView::from_state(&state).to_markup(),
            "<div class=\"error\">Location not found</div>"
        );
    }
}
