//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - UserProfile: Directory user (critical input)
//! - Post: Directory post, only the newest title is used
//! - WeatherSnapshot: Current conditions for a location
//! - Briefing: Validated request and assembled result
//! - BriefingLogEntry: Persisted record of a served briefing

mod briefing;
mod briefing_log;
mod post;
mod user;
mod weather;

pub use briefing::*;
pub use briefing_log::*;
pub use post::*;
pub use user::*;
pub use weather::*;
