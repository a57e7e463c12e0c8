//! OpenWeather client with a static fallback payload
//!
//! Weather is an optional enrichment: any upstream failure degrades to a
//! fixed payload rather than surfacing an error to the caller.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CITY: &str = "Delhi";
const COUNTRY_CODE: &str = "IN";

/// Weather report shaped for the frontend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    pub temp_c: f64,
    pub desc: String,
    /// Mood-friendly activity suggestion derived from the conditions
    pub suggestion: String,
}

impl WeatherReport {
    /// Fixed payload served whenever the upstream is unavailable
    pub fn fallback() -> Self {
        Self {
            temp_c: 22.0,
            desc: "light rain".to_string(),
            suggestion: suggestion_for("light rain", 22.0).to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    main: OpenWeatherMain,
    weather: Vec<OpenWeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherCondition {
    description: String,
}

/// OpenWeather API client
pub struct WeatherClient {
    http_client: reqwest::Client,
    api_key: Option<String>,
}

impl WeatherClient {
    /// `api_key = None` means the upstream is never called and every
    /// request gets the fallback payload.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Fetch current weather for a zip code or city name. Never fails;
    /// degrades to the fallback payload.
    pub async fn get_weather(&self, zip_or_city: Option<&str>) -> WeatherReport {
        let Some(api_key) = &self.api_key else {
            tracing::debug!("No OpenWeather API key configured, serving fallback");
            return WeatherReport::fallback();
        };

        let location = zip_or_city.unwrap_or(DEFAULT_CITY);
        let query = if location.chars().all(|c| c.is_ascii_digit()) && !location.is_empty() {
            [("zip", format!("{},{}", location, COUNTRY_CODE))]
        } else {
            [("q", format!("{},{}", location, COUNTRY_CODE))]
        };

        let result = self
            .http_client
            .get(OPENWEATHER_BASE_URL)
            .timeout(REQUEST_TIMEOUT)
            .query(&query)
            .query(&[("units", "metric"), ("appid", api_key.as_str())])
            .send()
            .await;

        let response = match result {
            Ok(resp) if resp.status().is_success() => resp,
            Ok(resp) => {
                tracing::warn!(status = %resp.status(), "OpenWeather returned error status");
                return WeatherReport::fallback();
            }
            Err(e) => {
                tracing::warn!(error = %e, "OpenWeather request failed");
                return WeatherReport::fallback();
            }
        };

        let data: OpenWeatherResponse = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse OpenWeather response");
                return WeatherReport::fallback();
            }
        };

        let Some(condition) = data.weather.first() else {
            return WeatherReport::fallback();
        };

        let temp_c = data.main.temp;
        let desc = condition.description.clone();
        let suggestion = suggestion_for(&desc, temp_c).to_string();

        WeatherReport {
            temp_c,
            desc,
            suggestion,
        }
    }
}

/// Map conditions to a small activity suggestion
fn suggestion_for(desc: &str, temp_c: f64) -> &'static str {
    if desc.contains("rain") {
        "Try indoor breathing + warm tea"
    } else if temp_c > 32.0 {
        "Stay hydrated, maybe meditation indoors"
    } else if temp_c < 15.0 {
        "Bundle up and do light stretching indoors"
    } else {
        "Try a 10-minute mindful walk outside"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_rules() {
        assert_eq!(suggestion_for("light rain", 22.0), "Try indoor breathing + warm tea");
        assert_eq!(
            suggestion_for("clear sky", 35.0),
            "Stay hydrated, maybe meditation indoors"
        );
        assert_eq!(
            suggestion_for("clear sky", 10.0),
            "Bundle up and do light stretching indoors"
        );
        assert_eq!(
            suggestion_for("clear sky", 22.0),
            "Try a 10-minute mindful walk outside"
        );
    }

    #[tokio::test]
    async fn missing_api_key_serves_fallback() {
        let client = WeatherClient::new(None);
        let report = client.get_weather(Some("400001")).await;
        assert_eq!(report, WeatherReport::fallback());
    }
}
