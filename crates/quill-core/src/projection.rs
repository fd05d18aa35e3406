//! Read projections for the Post resource.
//!
//! Each read operation renders a different subset of the entity, per the
//! policy table: the collection listing stays compact, the single-item
//! payload carries everything including the category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, Post};

/// List-read projection: id, title and slug only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

/// Item-read projection: every field, category included when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category: Option<CategoryDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: i64,
    pub name: String,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
        }
    }
}

impl From<&Post> for PostDetail {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            content: post.content.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
            category: post.category.as_ref().map(CategoryDetail::from),
        }
    }
}

impl From<&Category> for CategoryDetail {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Operation;
    use chrono::TimeZone;
    use std::collections::BTreeSet;

    fn sample_post() -> Post {
        Post {
            id: 1,
            title: "Hello world".to_string(),
            slug: "hello-world".to_string(),
            content: "Body text".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
            category: Some(Category {
                id: 3,
                name: "news".to_string(),
            }),
        }
    }

    fn json_keys<T: Serialize>(value: &T) -> BTreeSet<String> {
        match serde_json::to_value(value).unwrap() {
            serde_json::Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("expected an object, got {other}"),
        }
    }

    fn policy_keys(operation: Operation) -> BTreeSet<String> {
        operation
            .included_fields()
            .map(|f| f.wire_name().to_string())
            .collect()
    }

    #[test]
    fn summary_keys_match_the_list_read_policy() {
        let summary = PostSummary::from(&sample_post());
        assert_eq!(json_keys(&summary), policy_keys(Operation::ListRead));
    }

    #[test]
    fn detail_keys_match_the_item_read_policy() {
        let detail = PostDetail::from(&sample_post());
        assert_eq!(json_keys(&detail), policy_keys(Operation::ItemRead));
    }

    #[test]
    fn summary_never_carries_content_or_timestamps() {
        let keys = json_keys(&PostSummary::from(&sample_post()));
        for hidden in ["content", "createdAt", "updatedAt", "category"] {
            assert!(!keys.contains(hidden), "{hidden} leaked into the listing");
        }
    }

    #[test]
    fn detail_includes_the_category_when_set() {
        let detail = PostDetail::from(&sample_post());
        assert_eq!(
            detail.category,
            Some(CategoryDetail {
                id: 3,
                name: "news".to_string()
            })
        );
    }

    #[test]
    fn detail_serializes_an_unset_category_as_null() {
        let mut post = sample_post();
        post.category = None;
        let value = serde_json::to_value(PostDetail::from(&post)).unwrap();
        assert!(value.get("category").unwrap().is_null());
    }
}
