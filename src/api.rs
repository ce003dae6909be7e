//! OpenWeather current-weather client

use serde::Deserialize;
use thiserror::Error;

use crate::config::WeatherConfig;
use crate::state::WeatherReport;

/// Why a fetch produced no report
#[derive(Debug, Error)]
pub enum FetchError {
    /// Any non-2xx status, whatever the body says
    #[error("City not found")]
    NotFound,
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    name: String,
    sys: Sys,
    main: Main,
    wind: Wind,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct Sys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct Main {
    temp: f64,
    feels_like: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

/// Decode a 2xx current-weather body. Only the first condition is used.
pub fn parse_report(body: &str) -> Result<WeatherReport, FetchError> {
    let data: CurrentWeatherResponse = serde_json::from_str(body)?;
    let Some(condition) = data.weather.into_iter().next() else {
        return Err(FetchError::Decode(serde::de::Error::invalid_length(
            0,
            &"at least one weather condition",
        )));
    };

    Ok(WeatherReport {
        location_name: data.name,
        country_code: data.sys.country,
        temperature_c: data.main.temp,
        feels_like_c: data.main.feels_like,
        humidity_pct: data.main.humidity,
        wind_speed_ms: data.wind.speed,
        pressure_hpa: data.main.pressure,
        condition_description: condition.description,
        condition_icon_code: condition.icon,
    })
}

// ============================================================================
// Client
// ============================================================================

/// Thin wrapper over a shared reqwest client and the configured endpoint
#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    fn current_weather_url(&self, city: &str) -> String {
        format!(
            "{}/data/2.5/weather?q={}&appid={}&units=metric",
            self.config.base_url,
            urlencoding::encode(city),
            urlencoding::encode(&self.config.api_key)
        )
    }

    /// Fetch current conditions for `city` in metric units
    #[tracing::instrument(skip(self))]
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherReport, FetchError> {
        let url = self.current_weather_url(city);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "weather request rejected");
            return Err(FetchError::NotFound);
        }

        let body = response.text().await?;
        let report = parse_report(&body)?;
        tracing::debug!(
            place = %report.place(),
            temperature = report.temperature_c,
            "weather loaded"
        );
        Ok(report)
    }
}
