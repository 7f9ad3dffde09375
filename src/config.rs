//! Command-line configuration

use std::path::PathBuf;

use clap::Parser;
use tui_dispatch_debug::DebugCliArgs;

use crate::api::{ApiConfig, FORECAST_URL, GEOCODING_URL};
use crate::state::Location;

pub const DEFAULT_LOCATION_LABEL: &str = "Delhi, IN";
pub const DEFAULT_LATITUDE: f64 = 28.6139;
pub const DEFAULT_LONGITUDE: f64 = 77.209;

/// Current weather for a place, from Open-Meteo
#[derive(Parser, Debug)]
#[command(name = "weather-widget")]
#[command(about = "Look up current weather conditions and toggle the temperature unit")]
pub struct Args {
    /// Label shown for the location loaded at startup
    #[arg(long, default_value = DEFAULT_LOCATION_LABEL)]
    pub location_label: String,

    /// Latitude of the startup location
    #[arg(long, default_value_t = DEFAULT_LATITUDE, allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude of the startup location
    #[arg(long, default_value_t = DEFAULT_LONGITUDE, allow_negative_numbers = true)]
    pub longitude: f64,

    /// Language requested from the geocoder
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Geocoding endpoint
    #[arg(long, default_value = GEOCODING_URL)]
    pub geocoding_url: String,

    /// Forecast endpoint
    #[arg(long, default_value = FORECAST_URL)]
    pub forecast_url: String,

    /// Print the output region as markup instead of starting the terminal UI
    #[arg(long)]
    pub markup: bool,

    /// Search for this place instead of loading the startup location (with --markup)
    #[arg(long, requires = "markup")]
    pub query: Option<String>,

    /// Write logs to this file (RUST_LOG filters them)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub debug: DebugCliArgs,
}

/// Everything the widget needs to start, minus the debug session
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub api: ApiConfig,
    pub startup: Location,
}

impl From<&Args> for WidgetConfig {
    fn from(args: &Args) -> Self {
        Self {
            api: ApiConfig {
                geocoding_url: args.geocoding_url.clone(),
                forecast_url: args.forecast_url.clone(),
                language: args.language.clone(),
            },
            startup: Location::new(args.location_label.clone(), args.latitude, args.longitude),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            startup: Location::new(DEFAULT_LOCATION_LABEL, DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
        }
    }
}
