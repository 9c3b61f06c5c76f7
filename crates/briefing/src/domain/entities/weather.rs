//! WeatherSnapshot - Current conditions for a location

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current weather as reported by the weather provider.
///
/// `location` is the provider's own name for the place, which may differ
/// from the string the caller asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: String,
    /// Degrees Celsius
    pub temperature: f64,
    /// Degrees Celsius
    pub feels_like: f64,
    pub description: String,
    pub icon_code: String,
}

/// Celsius value rendered the way the briefing sentences expect:
/// shortest round-trip decimal, whole numbers keep one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Celsius(pub f64);

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
