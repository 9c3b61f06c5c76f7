//! UserProfile - Directory user

use serde::{Deserialize, Serialize};

/// Greeting used when the directory returns a profile without a name
pub const ANONYMOUS_USER_NAME: &str = "there";

/// A user as reported by the user directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
}

impl UserProfile {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Name to greet the user with, as returned unless it is blank
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            ANONYMOUS_USER_NAME
        } else {
            &self.name
        }
    }
}
