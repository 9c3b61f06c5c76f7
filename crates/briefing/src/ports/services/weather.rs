//! Weather Provider Port
//!
//! Abstract interface for current weather lookups.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, WeatherSnapshot};

/// Service interface for the weather provider
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current weather for a named location.
    ///
    /// An unknown location is `Ok(None)`. Transport and parse failures are
    /// errors.
    async fn get_weather(&self, location: &str) -> Result<Option<WeatherSnapshot>, DomainError>;
}
