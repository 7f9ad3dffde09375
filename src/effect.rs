//! Effects - side effects declared by the reducer

use tracing::warn;

use crate::action::Action;
use crate::api::OpenMeteoClient;
use crate::error::LookupError;
use crate::state::{Location, RequestId};

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Resolve a free-text query to a location
    Geocode { request: RequestId, query: String },
    /// Fetch current conditions for a resolved location
    FetchWeather {
        request: RequestId,
        location: Location,
    },
}

impl Effect {
    pub fn request(&self) -> RequestId {
        match self {
            Effect::Geocode { request, .. } | Effect::FetchWeather { request, .. } => *request,
        }
    }

    /// Task key unique to this lookup, so a newer lookup never cancels an older one
    pub fn task_key(&self) -> String {
        match self {
            Effect::Geocode { request, .. } => format!("geocode-{request}"),
            Effect::FetchWeather { request, .. } => format!("weather-{request}"),
        }
    }
}

/// Run an effect to completion and turn its outcome into a result action
pub async fn perform(client: OpenMeteoClient, effect: Effect) -> Action {
    match effect {
        Effect::Geocode { request, query } => match client.geocode(&query).await {
            Ok(location) => Action::GeocodeDidResolve { request, location },
            Err(error) => {
                warn!(request, %query, %error, "geocoding failed");
                Action::GeocodeDidError {
                    request,
                    error: LookupError::from(error),
                }
            }
        },
        Effect::FetchWeather { request, location } => {
            match client.current_conditions(&location).await {
                Ok(snapshot) => Action::WeatherDidLoad { request, snapshot },
                Err(error) => {
                    warn!(request, location = %location.name, %error, "weather retrieval failed");
                    Action::WeatherDidError {
                        request,
                        error: LookupError::from(error),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_keys_are_per_request() {
        let first = Effect::Geocode {
            request: 1,
            query: "Paris".into(),
        };
        let second = Effect::Geocode {
            request: 2,
            query: "Paris".into(),
        };
        assert_ne!(first.task_key(), second.task_key());
        assert_eq!(second.request(), 2);

        let fetch = Effect::FetchWeather {
            request: 1,
            location: Location::new("Paris, FR", 48.8566, 2.3522),
        };
        assert_ne!(first.task_key(), fetch.task_key());
    }
}
