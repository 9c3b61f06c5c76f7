//! Daily Briefing API Routes
//!
//! - /briefing/:user_id - Assemble a briefing (records a log entry)
//! - /token - Issue bearer tokens
//! - /logs - Briefing request log (bearer protected)

pub mod briefing;
pub mod error;
pub mod logs;
pub mod swagger;
pub mod token;

pub use error::ApiError;
