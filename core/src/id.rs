//! Identity types for Masthead entities.
//!
//! All identifiers are 64-bit values that are:
//! - Assigned by the catalog in creation order, starting at 1
//! - Immutable once assigned
//! - Opaque to external users
//!
//! Identity is the identifier, never the field values: two magazines
//! sharing a name are still two magazines.

use std::fmt;

/// Unique identifier for an author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuthorId(pub u64);

impl AuthorId {
    /// Create a new AuthorId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// Zero-based storage slot, or None for the unassigned raw value 0.
    pub fn slot(&self) -> Option<usize> {
        slot_of(self.0)
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "au{}", self.0)
    }
}

/// Unique identifier for a magazine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MagazineId(pub u64);

impl MagazineId {
    /// Create a new MagazineId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// Zero-based storage slot, or None for the unassigned raw value 0.
    pub fn slot(&self) -> Option<usize> {
        slot_of(self.0)
    }
}

impl fmt::Display for MagazineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mg{}", self.0)
    }
}

/// Unique identifier for an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub u64);

impl ArticleId {
    /// Create a new ArticleId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// Zero-based storage slot, or None for the unassigned raw value 0.
    pub fn slot(&self) -> Option<usize> {
        slot_of(self.0)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ar{}", self.0)
    }
}

fn slot_of(raw: u64) -> Option<usize> {
    raw.checked_sub(1).and_then(|s| usize::try_from(s).ok())
}

/// The three kinds of entity in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Author,
    Magazine,
    Article,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Author => "Author",
            EntityKind::Magazine => "Magazine",
            EntityKind::Article => "Article",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
