//! Value types for Masthead fields.
//!
//! Constructors and setters accept any `Value`, and the validation layer
//! decides whether it carries the capability a field needs: a string for
//! text fields, an author or magazine reference for the article's
//! endpoints.

use crate::{ArticleId, AuthorId, MagazineId};
use std::fmt;

/// A value that can be written into an entity field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Reference to an author.
    AuthorRef(AuthorId),
    /// Reference to a magazine.
    MagazineRef(MagazineId),
    /// Reference to an article.
    ArticleRef(ArticleId),
}

/// The kind tag of a [`Value`], used by field rules and error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    AuthorRef,
    MagazineRef,
    ArticleRef,
}

impl ValueKind {
    /// Returns the type name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "Null",
            ValueKind::Bool => "Bool",
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::String => "String",
            ValueKind::AuthorRef => "Author",
            ValueKind::MagazineRef => "Magazine",
            ValueKind::ArticleRef => "Article",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::AuthorRef(_) => ValueKind::AuthorRef,
            Value::MagazineRef(_) => ValueKind::MagazineRef,
            Value::ArticleRef(_) => ValueKind::ArticleRef,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as author ID if this is an AuthorRef value.
    pub fn as_author_ref(&self) -> Option<AuthorId> {
        match self {
            Value::AuthorRef(id) => Some(*id),
            _ => None,
        }
    }

    /// Get as magazine ID if this is a MagazineRef value.
    pub fn as_magazine_ref(&self) -> Option<MagazineId> {
        match self {
            Value::MagazineRef(id) => Some(*id),
            _ => None,
        }
    }

    /// Consume the value, returning the owned string if this is a String value.
    pub fn into_string(self) -> Option<String> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::AuthorRef(id) => write!(f, "#{}", id),
            Value::MagazineRef(id) => write!(f, "#{}", id),
            Value::ArticleRef(id) => write!(f, "#{}", id),
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<AuthorId> for Value {
    fn from(id: AuthorId) -> Self {
        Value::AuthorRef(id)
    }
}

impl From<MagazineId> for Value {
    fn from(id: MagazineId) -> Self {
        Value::MagazineRef(id)
    }
}

impl From<ArticleId> for Value {
    fn from(id: ArticleId) -> Self {
        Value::ArticleRef(id)
    }
}
