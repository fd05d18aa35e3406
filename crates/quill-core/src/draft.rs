//! Write payloads for the Post resource.
//!
//! A draft is the payload a create or update request carries: every writable
//! field from the policy table, and nothing else (`id` is read-only, so the
//! deserializer rejects it along with any other unknown key). Fields are
//! optional at the type level so that a missing required field surfaces as a
//! violation naming the field rather than a deserialization failure.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::error::{
    DomainError, RULE_MALFORMED, RULE_TIMESTAMP_ORDER, RULE_UNKNOWN_FIELD, ValidationReport,
    Violation,
};

/// Candidate write payload for a Post. Validated exhaustively by
/// [`PostDraft::into_valid`] before anything is persisted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PostDraft {
    #[validate(required)]
    pub title: Option<String>,
    #[validate(required, length(min = 5, message = "slug must be at least 5 characters"))]
    pub slug: Option<String>,
    #[validate(required)]
    pub content: Option<String>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(nested)]
    pub category: Option<CategoryDraft>,
}

/// Inline category in a write payload; cascade-persisted as a new row
/// before the post that references it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CategoryDraft {
    #[validate(required, length(min = 3, message = "name must be at least 3 characters"))]
    pub name: Option<String>,
}

/// A draft every constraint has passed on. Required fields are materialized,
/// so downstream code never re-checks presence.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category: Option<ValidCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCategory {
    pub name: String,
}

impl PostDraft {
    /// Parse a raw write payload. Shape problems (a read-only or unknown
    /// field, a mistyped value) are reported through the same validation
    /// taxonomy as constraint violations.
    pub fn from_payload(payload: serde_json::Value) -> Result<Self, DomainError> {
        serde_json::from_value(payload).map_err(|err| {
            let message = err.to_string();
            let violation = match message
                .strip_prefix("unknown field `")
                .and_then(|rest| rest.split('`').next())
            {
                Some(field) => Violation::new(
                    field,
                    RULE_UNKNOWN_FIELD,
                    format!("field `{field}` is not writable"),
                ),
                None => Violation::new("", RULE_MALFORMED, message),
            };
            DomainError::Validation(ValidationReport::from_violation(violation))
        })
    }

    /// Evaluate every constraint and, on success, hand back the materialized
    /// draft. The report collects all violations, including nested category
    /// ones under the `category.` path prefix.
    pub fn into_valid(self) -> Result<ValidPost, ValidationReport> {
        let mut report = ValidationReport::new();
        if let Err(errors) = Validate::validate(&self) {
            report.extend_from_validator(&errors);
        }
        if let (Some(created), Some(updated)) = (&self.created_at, &self.updated_at) {
            if updated < created {
                report.push(Violation::new(
                    "updatedAt",
                    RULE_TIMESTAMP_ORDER,
                    "updatedAt must not precede createdAt",
                ));
            }
        }

        let PostDraft {
            title,
            slug,
            content,
            created_at,
            updated_at,
            category,
        } = self;
        match (title, slug, content, created_at, updated_at) {
            (Some(title), Some(slug), Some(content), Some(created_at), Some(updated_at))
                if report.is_empty() =>
            {
                Ok(ValidPost {
                    title,
                    slug,
                    content,
                    created_at,
                    updated_at,
                    category: category
                        .and_then(|c| c.name)
                        .map(|name| ValidCategory { name }),
                })
            }
            _ => Err(report),
        }
    }
}
