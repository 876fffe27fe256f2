//! Masthead Graph Storage
//!
//! This crate provides the catalog that owns the whole relationship graph:
//! - Entity storage for authors, magazines and articles
//! - Relation index: the back-references from each endpoint to its articles
//! - Article registry: every article in construction order
//! - Read views with the derived queries (magazines, topic areas,
//!   contributors, article titles, contributing authors)
//! - A serializable snapshot for export

mod aggregates;
mod catalog;
mod config;
mod export;
mod index;
mod registry;
mod view;

pub use aggregates::CONTRIBUTOR_THRESHOLD;
pub use catalog::*;
pub use config::*;
pub use export::*;
pub use index::RelationIndex;
pub use registry::ArticleRegistry;
pub use view::*;
