//! Field rules: the static schema every entity field is validated against.

use crate::{EntityKind, ValueKind};

/// Definition of a single entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Entity that owns the field.
    pub entity: EntityKind,
    /// Field name.
    pub name: &'static str,
    /// Required value kind.
    pub kind: ValueKind,
    /// Minimum length in characters (text fields only).
    pub length_min: Option<usize>,
    /// Maximum length in characters (text fields only).
    pub length_max: Option<usize>,
    /// Whether the field is fixed at construction.
    pub readonly: bool,
}

impl FieldRule {
    /// Qualified name used in error reports, e.g. `Magazine.name`.
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.entity, self.name)
    }

    /// Human-readable description of the length rule.
    pub fn length_desc(&self) -> String {
        match (self.length_min, self.length_max) {
            (Some(min), Some(max)) => format!("must be {}-{} characters", min, max),
            (Some(1), None) => "must be non-empty".to_string(),
            (Some(min), None) => format!("must be at least {} characters", min),
            (None, Some(max)) => format!("must be at most {} characters", max),
            (None, None) => "has no length rule".to_string(),
        }
    }
}

pub const AUTHOR_NAME: FieldRule = FieldRule {
    entity: EntityKind::Author,
    name: "name",
    kind: ValueKind::String,
    length_min: Some(1),
    length_max: None,
    readonly: true,
};

pub const MAGAZINE_NAME: FieldRule = FieldRule {
    entity: EntityKind::Magazine,
    name: "name",
    kind: ValueKind::String,
    length_min: Some(2),
    length_max: Some(16),
    readonly: false,
};

pub const MAGAZINE_CATEGORY: FieldRule = FieldRule {
    entity: EntityKind::Magazine,
    name: "category",
    kind: ValueKind::String,
    length_min: Some(1),
    length_max: None,
    readonly: false,
};

pub const ARTICLE_TITLE: FieldRule = FieldRule {
    entity: EntityKind::Article,
    name: "title",
    kind: ValueKind::String,
    length_min: Some(5),
    length_max: Some(50),
    readonly: true,
};

pub const ARTICLE_AUTHOR: FieldRule = FieldRule {
    entity: EntityKind::Article,
    name: "author",
    kind: ValueKind::AuthorRef,
    length_min: None,
    length_max: None,
    readonly: false,
};

pub const ARTICLE_MAGAZINE: FieldRule = FieldRule {
    entity: EntityKind::Article,
    name: "magazine",
    kind: ValueKind::MagazineRef,
    length_min: None,
    length_max: None,
    readonly: false,
};

const AUTHOR_FIELDS: &[FieldRule] = &[AUTHOR_NAME];
const MAGAZINE_FIELDS: &[FieldRule] = &[MAGAZINE_NAME, MAGAZINE_CATEGORY];
const ARTICLE_FIELDS: &[FieldRule] = &[ARTICLE_TITLE, ARTICLE_AUTHOR, ARTICLE_MAGAZINE];

/// All field rules of an entity kind, in declaration order.
pub fn fields_of(entity: EntityKind) -> &'static [FieldRule] {
    match entity {
        EntityKind::Author => AUTHOR_FIELDS,
        EntityKind::Magazine => MAGAZINE_FIELDS,
        EntityKind::Article => ARTICLE_FIELDS,
    }
}

/// Look up a field rule by entity kind and field name.
pub fn field_rule(entity: EntityKind, name: &str) -> Option<&'static FieldRule> {
    fields_of(entity).iter().find(|rule| rule.name == name)
}
