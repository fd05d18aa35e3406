//! Domain-level error types.

use std::fmt;

use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::policy::Field;

/// Rule code for a missing required field.
pub const RULE_REQUIRED: &str = "required";
/// Rule code for a length constraint violation.
pub const RULE_LENGTH: &str = "length";
/// Rule code for `updatedAt` preceding `createdAt`.
pub const RULE_TIMESTAMP_ORDER: &str = "timestamp_order";
/// Rule code for a field the write policy does not accept.
pub const RULE_UNKNOWN_FIELD: &str = "unknown_field";
/// Rule code for a payload that does not deserialize into the draft shape.
pub const RULE_MALFORMED: &str = "malformed";

/// One violated constraint: the wire-name path of the offending field
/// (`slug`, `createdAt`, `category.name`), the rule code, and a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub rule: String,
    pub message: String,
}

impl Violation {
    pub fn new(
        path: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            rule: rule.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{} ({})", self.message, self.rule)
        } else {
            write!(f, "{}: {} ({})", self.path, self.message, self.rule)
        }
    }
}

/// Every constraint a rejected write violated. Evaluation is exhaustive:
/// the report carries all violations, not just the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_violation(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether any violation anchors at `path`.
    pub fn names(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }

    /// Flatten the validation derive's nested error tree into wire-name
    /// paths. Nested struct errors get the parent field as a `.`-separated
    /// prefix; the result is sorted by path so reports are deterministic.
    pub fn extend_from_validator(&mut self, errors: &ValidationErrors) {
        let start = self.violations.len();
        flatten(None, errors, self);
        self.violations[start..].sort_by(|a, b| a.path.cmp(&b.path));
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
            first = false;
        }
        Ok(())
    }
}

impl From<&ValidationErrors> for ValidationReport {
    fn from(errors: &ValidationErrors) -> Self {
        let mut report = ValidationReport::new();
        report.extend_from_validator(errors);
        report
    }
}

fn flatten(prefix: Option<&str>, errors: &ValidationErrors, report: &mut ValidationReport) {
    for (ident, kind) in errors.errors() {
        let ident: &str = ident.as_ref();
        let name = Field::from_ident(ident).map_or(ident, |f| f.wire_name());
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| default_message(&failure.code));
                    report.push(Violation::new(path.clone(), failure.code.to_string(), message));
                }
            }
            ValidationErrorsKind::Struct(inner) => flatten(Some(&path), inner, report),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    flatten(Some(&format!("{path}[{index}]")), inner, report);
                }
            }
        }
    }
}

fn default_message(code: &str) -> String {
    match code {
        RULE_REQUIRED => "this value is required".to_string(),
        RULE_LENGTH => "this value has an invalid length".to_string(),
        _ => format!("violates the `{code}` constraint"),
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(ValidationReport),

    #[error("{entity_type} with id {id} not found")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error("internal error: {0}")]
    Internal(String),
}

/// Repository-level errors, raised by the persistence collaborator.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("entity not found")]
    NotFound,

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_display_joins_violations() {
        let mut report = ValidationReport::new();
        report.push(Violation::new("slug", RULE_LENGTH, "too short"));
        report.push(Violation::new("title", RULE_REQUIRED, "this value is required"));
        assert_eq!(
            report.to_string(),
            "slug: too short (length); title: this value is required (required)"
        );
    }

    #[test]
    fn names_matches_exact_paths_only() {
        let report =
            ValidationReport::from_violation(Violation::new("category.name", RULE_LENGTH, "x"));
        assert!(report.names("category.name"));
        assert!(!report.names("category"));
        assert!(!report.names("name"));
    }

    #[test]
    fn not_found_is_distinguishable_from_validation() {
        let err = DomainError::NotFound {
            entity_type: "Post",
            id: 7,
        };
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.to_string(), "Post with id 7 not found");
    }
}
