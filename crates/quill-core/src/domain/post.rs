use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Category;

/// Post entity - a content record with an optional category.
///
/// `title` and `slug` map to 255-character columns in storage; `content` is
/// unbounded text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category: Option<Category>,
}

/// A post's attributes before the store has assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category: Option<Category>,
}

impl NewPost {
    /// Attach the store-assigned id, completing the entity.
    pub fn into_post(self, id: i64) -> Post {
        Post {
            id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
            category: self.category,
        }
    }
}
