//! User Directory Port
//!
//! Abstract interface for looking up users and their posts.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Post, UserProfile};

/// Service interface for the user/post directory
///
/// Implementations must bound every request with a timeout so a briefing
/// cannot hang on a stalled upstream.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch a profile by id. An unknown id is `Ok(None)`, not an error.
    async fn get_profile(&self, user_id: i64) -> Result<Option<UserProfile>, DomainError>;

    /// Fetch a user's posts, newest first as far as the directory orders them
    async fn get_recent_posts(&self, user_id: i64) -> Result<Vec<Post>, DomainError>;
}
