//! API Data Models
//!
//! - Briefing: query parameters and response body
//! - Log: persisted briefing request entries
//! - Auth: token request and response

mod auth;
mod briefing;
mod log;

pub use self::auth::*;
pub use self::briefing::*;
pub use self::log::*;
