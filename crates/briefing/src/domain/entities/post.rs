//! Post - Directory post

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: i64, user_id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: String::new(),
        }
    }
}
