//! Field validation shared by constructors and setters.
//!
//! Every field write goes through [`validate_field`]: the kind check comes
//! first and raises `TypeConstraint`, the length check second and raises
//! `ValueConstraint`. Setters call [`check_writable`] before either.

use crate::{AuthorId, FieldRule, MagazineId, ModelError, ModelResult, Value, ValueKind};

/// Validate a value against a field rule.
pub fn validate_field(rule: &FieldRule, value: &Value) -> ModelResult<()> {
    let actual = value.kind();
    if actual != rule.kind {
        return Err(ModelError::type_constraint(
            rule.qualified(),
            rule.kind.name(),
            actual.name(),
        ));
    }

    if let Some(text) = value.as_str() {
        validate_length(rule, text)?;
    }

    Ok(())
}

/// Validate the length rule of a text field. Lengths count characters.
pub fn validate_length(rule: &FieldRule, text: &str) -> ModelResult<()> {
    let len = text.chars().count();
    let too_short = rule.length_min.is_some_and(|min| len < min);
    let too_long = rule.length_max.is_some_and(|max| len > max);

    if too_short || too_long {
        return Err(ModelError::value_constraint(
            rule.qualified(),
            format!("{:?} ({} chars)", text, len),
            rule.length_desc(),
        ));
    }

    Ok(())
}

/// Reject writes to fields fixed at construction.
pub fn check_writable(rule: &FieldRule) -> ModelResult<()> {
    if rule.readonly {
        return Err(ModelError::immutable(rule.entity, rule.name));
    }
    Ok(())
}

/// Validate a text field and take ownership of the string.
pub fn expect_text(rule: &FieldRule, value: Value) -> ModelResult<String> {
    debug_assert_eq!(rule.kind, ValueKind::String);
    validate_field(rule, &value)?;
    value.into_string().ok_or_else(|| {
        ModelError::type_constraint(rule.qualified(), rule.kind.name(), "unknown")
    })
}

/// Validate an author reference field.
pub fn expect_author(rule: &FieldRule, value: &Value) -> ModelResult<AuthorId> {
    validate_field(rule, value)?;
    value.as_author_ref().ok_or_else(|| {
        ModelError::type_constraint(rule.qualified(), rule.kind.name(), value.type_name())
    })
}

/// Validate a magazine reference field.
pub fn expect_magazine(rule: &FieldRule, value: &Value) -> ModelResult<MagazineId> {
    validate_field(rule, value)?;
    value.as_magazine_ref().ok_or_else(|| {
        ModelError::type_constraint(rule.qualified(), rule.kind.name(), value.type_name())
    })
}
