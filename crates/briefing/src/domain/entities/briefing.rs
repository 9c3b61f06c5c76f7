//! Briefing - Validated request and assembled result

use std::fmt;

use crate::domain::entities::{Celsius, WeatherSnapshot};
use crate::domain::errors::DomainError;

/// Latest-post placeholder when the user has no posts or they could not be fetched
pub const NO_POSTS_MARKER: &str = "No new posts.";

/// Weather placeholder when the provider failed or did not know the city
pub const WEATHER_UNAVAILABLE_MARKER: &str = "Weather data not available.";

/// A briefing request checked at the transport boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BriefingRequest {
    user_id: i64,
    city: String,
}

impl BriefingRequest {
    /// Rejects non-positive user ids and blank cities.
    ///
    /// The city is kept verbatim so the result echoes exactly what was asked.
    pub fn new(user_id: i64, city: impl Into<String>) -> Result<Self, DomainError> {
        let city = city.into();
        if user_id <= 0 {
            return Err(DomainError::Validation(format!(
                "User ID must be a positive integer, got {user_id}"
            )));
        }
        if city.trim().is_empty() {
            return Err(DomainError::Validation(
                "City must not be empty".to_string(),
            ));
        }
        Ok(Self { user_id, city })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Outcome of a successful briefing.
///
/// Weather and latest post are independent: either may be missing without
/// affecting the other.
#[derive(Debug, Clone, PartialEq)]
pub struct BriefingResult {
    pub user_name: String,
    /// The requested city, verbatim
    pub city: String,
    pub weather: Option<WeatherSnapshot>,
    pub latest_post_title: Option<String>,
    pub error_message: Option<String>,
}

impl BriefingResult {
    /// One-sentence weather summary, or [`WEATHER_UNAVAILABLE_MARKER`]
    pub fn weather_summary(&self) -> String {
        match &self.weather {
            Some(weather) => format!(
                "The current weather in {} is {}, feels like {}°C.",
                weather.location,
                weather.description,
                Celsius(weather.feels_like)
            ),
            None => WEATHER_UNAVAILABLE_MARKER.to_string(),
        }
    }

    /// Latest post title, or [`NO_POSTS_MARKER`]
    pub fn latest_post_title_or_marker(&self) -> &str {
        self.latest_post_title.as_deref().unwrap_or(NO_POSTS_MARKER)
    }
}

impl fmt::Display for BriefingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Good morning, {}! ", self.user_name)?;

        match &self.weather {
            Some(weather) => write!(
                f,
                "The current weather in {} is {}. It's {}°C. ",
                weather.location,
                weather.description,
                Celsius(weather.temperature)
            )?,
            None => f.write_str("Could not retrieve weather information. ")?,
        }

        match &self.latest_post_title {
            Some(title) => write!(f, "Your latest post is titled: '{title}'."),
            None => f.write_str("You have no new posts."),
        }
    }
}
