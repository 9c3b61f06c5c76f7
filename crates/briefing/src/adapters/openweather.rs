//! OpenWeatherMap current-weather client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use super::{ensure_success, http_client, request_failed, trim_base_url};
use crate::config::{ConfigError, ConfigReader, WEATHER_SERVICE};
use crate::domain::{DomainError, WeatherSnapshot};
use crate::ports::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    country_code: Option<String>,
}

impl fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("country_code", &self.country_code)
            .finish()
    }
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, DomainError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(DomainError::Validation(
                "Weather API key cannot be empty.".to_string(),
            ));
        }

        Ok(Self {
            client: http_client(REQUEST_TIMEOUT)?,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            country_code: None,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, DomainError> {
        self.base_url = trim_base_url(base_url)?;
        Ok(self)
    }

    /// Appended to every city query as `City,CC`
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        let country_code = country_code.into();
        self.country_code = Some(country_code).filter(|cc| !cc.trim().is_empty());
        self
    }

    /// Overrides the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, DomainError> {
        self.client = http_client(timeout)?;
        Ok(self)
    }

    /// Reads the API key and the optional `[openweathermap]` overrides
    pub fn from_config(config: &ConfigReader) -> Result<Self, ConfigError> {
        let http_error = |e: DomainError| ConfigError::HttpClient(e.to_string());

        let mut client = Self::new(config.get_api_key(WEATHER_SERVICE)?).map_err(http_error)?;
        if let Some(base_url) = config.base_url(WEATHER_SERVICE) {
            client = client.with_base_url(base_url).map_err(http_error)?;
        }
        if let Some(country_code) = config.country_code(WEATHER_SERVICE) {
            client = client.with_country_code(country_code);
        }
        Ok(client)
    }

    fn location_query(&self, city: &str) -> String {
        match &self.country_code {
            Some(cc) => format!("{city},{cc}"),
            None => city.to_string(),
        }
    }
}

// ============================================
// Response Types
// ============================================

#[derive(Deserialize)]
struct CurrentWeatherDto {
    name: String,
    main: MainDto,
    weather: Vec<ConditionDto>,
}

#[derive(Deserialize)]
struct MainDto {
    temp: f64,
    feels_like: f64,
}

#[derive(Deserialize)]
struct ConditionDto {
    description: String,
    #[serde(default)]
    icon: String,
}

impl TryFrom<CurrentWeatherDto> for WeatherSnapshot {
    type Error = DomainError;

    fn try_from(dto: CurrentWeatherDto) -> Result<Self, Self::Error> {
        let condition = dto.weather.into_iter().next().ok_or_else(|| {
            DomainError::ExternalService("Weather payload has no conditions".to_string())
        })?;

        Ok(Self {
            location: dto.name,
            temperature: dto.main.temp,
            feels_like: dto.main.feels_like,
            description: condition.description,
            icon_code: condition.icon,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn get_weather(&self, city: &str) -> Result<Option<WeatherSnapshot>, DomainError> {
        let url = format!("{}/weather", self.base_url);
        let query = self.location_query(city);
        tracing::info!(city = %query, "Fetching weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(request_failed)?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::warn!(city = %query, "City not found");
            return Ok(None);
        }

        let dto: CurrentWeatherDto = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Malformed weather payload: {e}")))?;

        let snapshot = WeatherSnapshot::try_from(dto)?;
        tracing::info!(city = %query, location = %snapshot.location, "Fetched weather");
        Ok(Some(snapshot))
    }
}
