//! Field-visibility policy for the Post resource.
//!
//! One declarative table decides, per (field, operation) pair, whether the
//! field participates in that operation's payload, and which constraints the
//! field carries on writes. The read projections and write drafts are typed
//! renditions of this table; tests pin them to it so there is a single source
//! of truth instead of hand-duplicated declarations.

/// The five operations the resource framework maps onto a Post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Collection read - the compact listing payload.
    ListRead,
    /// Single-item read - the full payload.
    ItemRead,
    Create,
    Update,
    /// Carries no payload fields; permitted or not as a whole.
    Delete,
}

/// The declared fields of the Post resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Title,
    Slug,
    Content,
    CreatedAt,
    UpdatedAt,
    Category,
}

/// A write-side rule a field's value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Must be present in every write payload.
    Required,
    /// Minimum length in characters when present.
    MinLength(u64),
    /// Never accepted from callers; the store assigns it.
    ReadOnly,
    /// Validated recursively against the referenced resource's own rules.
    Nested,
}

impl Field {
    /// Every declared field, in declaration order.
    pub const ALL: [Field; 7] = [
        Field::Id,
        Field::Title,
        Field::Slug,
        Field::Content,
        Field::CreatedAt,
        Field::UpdatedAt,
        Field::Category,
    ];

    /// The field's name as it appears on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::Slug => "slug",
            Field::Content => "content",
            Field::CreatedAt => "createdAt",
            Field::UpdatedAt => "updatedAt",
            Field::Category => "category",
        }
    }

    /// Look a field up by its Rust-side identifier, as reported by the
    /// validation derive.
    pub fn from_ident(ident: &str) -> Option<Field> {
        match ident {
            "id" => Some(Field::Id),
            "title" => Some(Field::Title),
            "slug" => Some(Field::Slug),
            "content" => Some(Field::Content),
            "created_at" => Some(Field::CreatedAt),
            "updated_at" => Some(Field::UpdatedAt),
            "category" => Some(Field::Category),
            _ => None,
        }
    }

    /// The constraints that apply to this field on writes.
    pub fn constraints(self) -> &'static [Constraint] {
        match self {
            Field::Id => &[Constraint::ReadOnly],
            Field::Title => &[Constraint::Required],
            Field::Slug => &[Constraint::Required, Constraint::MinLength(5)],
            Field::Content => &[Constraint::Required],
            Field::CreatedAt => &[Constraint::Required],
            Field::UpdatedAt => &[Constraint::Required],
            Field::Category => &[Constraint::Nested],
        }
    }
}

impl Operation {
    /// Whether `field` participates in this operation's payload.
    pub fn includes(self, field: Field) -> bool {
        match (self, field) {
            (Operation::Delete, _) => false,
            (Operation::ListRead, Field::Id | Field::Title | Field::Slug) => true,
            (Operation::ListRead, _) => false,
            (Operation::ItemRead, _) => true,
            (Operation::Create | Operation::Update, Field::Id) => false,
            (Operation::Create | Operation::Update, _) => true,
        }
    }

    /// The fields included in this operation's payload, in declaration order.
    pub fn included_fields(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |f| self.includes(*f))
    }

    pub fn is_write(self) -> bool {
        matches!(self, Operation::Create | Operation::Update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_read_is_the_compact_projection() {
        let fields: Vec<_> = Operation::ListRead.included_fields().collect();
        assert_eq!(fields, vec![Field::Id, Field::Title, Field::Slug]);
    }

    #[test]
    fn item_read_includes_every_field() {
        let fields: Vec<_> = Operation::ItemRead.included_fields().collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn writes_never_include_id() {
        assert!(!Operation::Create.includes(Field::Id));
        assert!(!Operation::Update.includes(Field::Id));
        for field in Field::ALL.into_iter().filter(|f| *f != Field::Id) {
            assert!(Operation::Create.includes(field), "{field:?} should be writable");
            assert!(Operation::Update.includes(field), "{field:?} should be writable");
        }
    }

    #[test]
    fn delete_has_no_payload_fields() {
        assert_eq!(Operation::Delete.included_fields().count(), 0);
    }

    #[test]
    fn slug_carries_the_min_length_rule() {
        assert!(
            Field::Slug
                .constraints()
                .contains(&Constraint::MinLength(5))
        );
    }

    #[test]
    fn wire_names_are_camel_case() {
        assert_eq!(Field::CreatedAt.wire_name(), "createdAt");
        assert_eq!(Field::UpdatedAt.wire_name(), "updatedAt");
        assert_eq!(Field::from_ident("created_at"), Some(Field::CreatedAt));
    }
}
