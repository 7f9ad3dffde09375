//! WMO weather code tables
//!
//! Condition labels come from a flat lookup table; icon categories come from a
//! total function over every integer code.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Label shown for codes the table does not know about.
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// Condition labels keyed by WMO code.
pub const CONDITIONS: &[(i32, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Foggy"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (71, "Slight snow"),
    (73, "Moderate snow"),
    (75, "Heavy snow"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// Human-readable label for a weather code, `"Unknown"` when absent.
pub fn condition_label(code: i32) -> &'static str {
    CONDITIONS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_CONDITION)
}

/// Coarse icon bucket used by every renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum IconCategory {
    Clear,
    PartlyCloudy,
    Overcast,
    Rain,
    Cloudy,
}

impl IconCategory {
    /// First match wins; `51..=65` covers drizzle and rain alike.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 | 1 => IconCategory::Clear,
            2 => IconCategory::PartlyCloudy,
            3 => IconCategory::Overcast,
            51..=65 => IconCategory::Rain,
            _ => IconCategory::Cloudy,
        }
    }

    /// Stable identifier used in markup
    pub fn slug(self) -> &'static str {
        match self {
            IconCategory::Clear => "clear",
            IconCategory::PartlyCloudy => "partly-cloudy",
            IconCategory::Overcast => "overcast",
            IconCategory::Rain => "drizzle-rain",
            IconCategory::Cloudy => "generic-cloudy",
        }
    }
}
