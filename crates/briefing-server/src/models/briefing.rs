//! Briefing - Response body of `GET /briefing/{user_id}`

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use briefing::BriefingResult;

/// Query parameters of the briefing endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BriefingQuery {
    /// City to report the weather for
    pub city: Option<String>,
}

/// Briefing response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BriefingResponse {
    pub user_name: String,
    /// The requested city, verbatim
    pub city: String,
    /// Weather sentence, or "Weather data not available."
    pub weather_summary: Option<String>,
    /// Title of the latest post, or "No new posts."
    pub latest_post_title: Option<String>,
    pub error_message: Option<String>,
}

impl From<BriefingResult> for BriefingResponse {
    fn from(result: BriefingResult) -> Self {
        Self {
            weather_summary: Some(result.weather_summary()),
            latest_post_title: Some(result.latest_post_title_or_marker().to_string()),
            user_name: result.user_name,
            city: result.city,
            error_message: result.error_message,
        }
    }
}
