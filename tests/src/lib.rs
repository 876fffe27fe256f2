//! Masthead scenario test support.
//!
//! Scenarios are built with [`Fixture`], which creates entities by name so
//! tests can refer to them without threading ids around.
//!
//! # Example
//!
//! ```ignore
//! use masthead_tests::prelude::*;
//!
//! let fixture = Fixture::new()
//!     .author("Carry Bradshaw")
//!     .magazine("Vogue", "Fashion")
//!     .article("Carry Bradshaw", "Vogue", "Dating Life in NYC");
//!
//! assert_eq!(fixture.author_view("Carry Bradshaw").articles().len(), 1);
//! ```

mod fixture;

pub use fixture::Fixture;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::fixture::Fixture;
    pub use masthead_core::{
        Aggregate, ArticleId, AuthorId, EntityKind, MagazineId, ModelError, Value,
    };
    pub use masthead_graph::{Catalog, CatalogConfig, ReassignPolicy, CONTRIBUTOR_THRESHOLD};
}
