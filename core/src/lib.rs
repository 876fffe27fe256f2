//! Masthead Core Types
//!
//! This crate provides the foundational types used throughout Masthead:
//! - Identity types (AuthorId, MagazineId, ArticleId)
//! - Value types (the Value enum passed into constructors and setters)
//! - Field rules and the validation applied to every field write
//! - Entity records (Author, Magazine, Article)
//! - Aggregate results and common error types

mod aggregate;
mod entity;
mod error;
mod id;
mod rule;
mod validation;
mod value;

pub use aggregate::*;
pub use entity::*;
pub use error::*;
pub use id::*;
pub use rule::*;
pub use validation::*;
pub use value::*;
