//! Named-entity fixture over a catalog.

use masthead_core::{ArticleId, AuthorId, MagazineId};
use masthead_graph::{AuthorView, Catalog, CatalogConfig, MagazineView};
use std::collections::HashMap;

/// A catalog plus name lookups for the entities created through it.
///
/// Builder methods panic on invalid input: a fixture is a test setup, and
/// a setup that cannot be built is a broken test.
#[derive(Debug, Default)]
pub struct Fixture {
    pub catalog: Catalog,
    authors: HashMap<String, AuthorId>,
    magazines: HashMap<String, MagazineId>,
    articles: Vec<ArticleId>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            catalog: Catalog::with_config(config),
            ..Self::default()
        }
    }

    /// Add an author.
    pub fn author(mut self, name: &str) -> Self {
        let id = self
            .catalog
            .create_author(name)
            .unwrap_or_else(|e| panic!("fixture author '{}': {}", name, e));
        self.authors.insert(name.to_string(), id);
        self
    }

    /// Add a magazine.
    pub fn magazine(mut self, name: &str, category: &str) -> Self {
        let id = self
            .catalog
            .create_magazine(name, category)
            .unwrap_or_else(|e| panic!("fixture magazine '{}': {}", name, e));
        self.magazines.insert(name.to_string(), id);
        self
    }

    /// Add an article by a named author in a named magazine.
    pub fn article(mut self, author: &str, magazine: &str, title: &str) -> Self {
        let author_id = self.author_id(author);
        let magazine_id = self.magazine_id(magazine);
        let id = self
            .catalog
            .add_article(author_id, magazine_id, title)
            .unwrap_or_else(|e| panic!("fixture article '{}': {}", title, e));
        self.articles.push(id);
        self
    }

    pub fn author_id(&self, name: &str) -> AuthorId {
        *self
            .authors
            .get(name)
            .unwrap_or_else(|| panic!("no fixture author '{}'", name))
    }

    pub fn magazine_id(&self, name: &str) -> MagazineId {
        *self
            .magazines
            .get(name)
            .unwrap_or_else(|| panic!("no fixture magazine '{}'", name))
    }

    /// Articles added through the fixture, in order.
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub fn author_view(&self, name: &str) -> AuthorView<'_> {
        let id = self.author_id(name);
        self.catalog
            .author(id)
            .unwrap_or_else(|| panic!("author {} missing from catalog", id))
    }

    pub fn magazine_view(&self, name: &str) -> MagazineView<'_> {
        let id = self.magazine_id(name);
        self.catalog
            .magazine(id)
            .unwrap_or_else(|| panic!("magazine {} missing from catalog", id))
    }
}
