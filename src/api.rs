//! Open-Meteo API client

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::{Location, WeatherSnapshot};

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Fields requested from the `current` block of the forecast endpoint
const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,precipitation_probability,weather_code,wind_speed_10m";

/// Endpoints and request parameters
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub geocoding_url: String,
    pub forecast_url: String,
    /// Language passed to the geocoder
    pub language: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
            language: "en".to_string(),
        }
    }
}

// ============================================================================
// Geocoding API
// ============================================================================

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        let label = match result.country {
            Some(country) => format!("{}, {}", result.name, country),
            None => result.name,
        };
        Location::new(label, result.latitude, result.longitude)
    }
}

// ============================================================================
// Forecast API
// ============================================================================

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    relative_humidity_2m: i32,
    precipitation_probability: i32,
    weather_code: i32,
    wind_speed_10m: f64,
}

impl CurrentConditions {
    fn into_snapshot(self, location: Location) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_celsius: self.temperature_2m,
            relative_humidity_percent: self.relative_humidity_2m,
            precipitation_probability_percent: self.precipitation_probability,
            weather_code: self.weather_code,
            wind_speed_kmh: self.wind_speed_10m,
            location,
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client for both Open-Meteo endpoints. Cheap to clone.
#[derive(Clone, Debug)]
pub struct OpenMeteoClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl OpenMeteoClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn geocode_url(&self, query: &str) -> String {
        format!(
            "{}?name={}&count=1&language={}&format=json",
            self.config.geocoding_url,
            urlencoding::encode(query),
            urlencoding::encode(&self.config.language),
        )
    }

    fn forecast_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}?latitude={}&longitude={}&current={}&timezone=auto&forecast_days=1",
            self.config.forecast_url, lat, lon, CURRENT_FIELDS
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Open-Meteo returned an error status");
            return Err(ApiError::Status(status));
        }
        Ok(response.json().await?)
    }

    /// Resolve a place name to its best match
    pub async fn geocode(&self, query: &str) -> Result<Location, ApiError> {
        let data: GeocodingResponse = self.get_json(&self.geocode_url(query)).await?;

        data.results
            .and_then(|results| results.into_iter().next())
            .map(Location::from)
            .ok_or_else(|| ApiError::NotFound(query.to_string()))
    }

    /// Fetch current conditions for a location
    pub async fn current_conditions(&self, location: &Location) -> Result<WeatherSnapshot, ApiError> {
        let url = self.forecast_url(location.lat, location.lon);
        let data: ForecastResponse = self.get_json(&url).await?;
        Ok(data.current.into_snapshot(location.clone()))
    }
}
