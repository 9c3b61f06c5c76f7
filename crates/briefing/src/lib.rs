//! Daily Briefing Domain Library
//!
//! Core domain types, ports and the briefing workflow shared by the
//! `briefing` CLI and the HTTP API server.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure entities and errors
//!   - `entities/`: UserProfile, Post, WeatherSnapshot, BriefingResult, BriefingLogEntry
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Upstream user directory and weather provider
//!   - `repositories/`: Briefing request log persistence
//!
//! - **Application** (`application/`): BriefingAssembler use case
//!
//! - **Adapters** (`adapters/`): reqwest clients for JSONPlaceholder and OpenWeatherMap
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use briefing::{BriefingAssembler, BriefingRequest, ConfigReader, JsonPlaceholderClient, OpenWeatherClient};
//!
//! let config = ConfigReader::load("config.toml")?;
//! let assembler = BriefingAssembler::new(
//!     Arc::new(JsonPlaceholderClient::from_config(&config)?),
//!     Arc::new(OpenWeatherClient::from_config(&config)?),
//! );
//! let briefing = assembler.assemble(&BriefingRequest::new(1, "Wrocław")?).await?;
//! println!("{briefing}");
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use adapters::{JsonPlaceholderClient, OpenWeatherClient};
pub use application::BriefingAssembler;
pub use config::{ConfigError, ConfigReader, WEATHER_API_KEY_ENV, WEATHER_SERVICE};
pub use domain::{
    BriefingError, BriefingLogEntry, BriefingRequest, BriefingResult, DomainError, Post,
    UserProfile, WeatherSnapshot, NO_POSTS_MARKER, WEATHER_UNAVAILABLE_MARKER,
};
pub use ports::{BriefingLogRepository, UserDirectory, WeatherProvider};
