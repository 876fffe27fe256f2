//! The catalog: owner of every entity, the relation index and the
//! article registry.

use crate::view::{ArticleView, AuthorView, MagazineView};
use crate::{ArticleRegistry, CatalogConfig, ReassignPolicy, RelationIndex};
use masthead_core::{
    check_writable, expect_author, expect_magazine, field_rule, Article, ArticleId, Author,
    AuthorId, EntityKind, Magazine, MagazineId, ModelError, ModelResult, Value, ARTICLE_AUTHOR,
    ARTICLE_MAGAZINE,
};
use tracing::{debug, trace, warn};

/// The in-memory relationship graph.
///
/// Constructing an article is the only operation that adds relations.
/// Nothing is ever deleted, so ids are dense and follow creation order.
#[derive(Debug, Default)]
pub struct Catalog {
    config: CatalogConfig,
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    registry: ArticleRegistry,
    index: RelationIndex,
}

impl Catalog {
    /// Create an empty catalog with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with the given configuration.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    // ==================== Construction ====================

    /// Create an author. Fails if the name is not a non-empty string.
    pub fn create_author(&mut self, name: impl Into<Value>) -> ModelResult<AuthorId> {
        let id = AuthorId::new(self.authors.len() as u64 + 1);
        let author = Author::new(id, name.into())?;

        debug!(author = %id, name = author.name(), "created author");
        self.authors.push(author);
        Ok(id)
    }

    /// Create a magazine. Name must be 2-16 characters, category non-empty.
    pub fn create_magazine(
        &mut self,
        name: impl Into<Value>,
        category: impl Into<Value>,
    ) -> ModelResult<MagazineId> {
        let id = MagazineId::new(self.magazines.len() as u64 + 1);
        let magazine = Magazine::new(id, name.into(), category.into())?;

        debug!(
            magazine = %id,
            name = magazine.name(),
            category = magazine.category(),
            "created magazine"
        );
        self.magazines.push(magazine);
        Ok(id)
    }

    /// Create an article binding an author and a magazine.
    ///
    /// Everything is validated before anything is registered: on error the
    /// catalog is unchanged. On success the article is appended to the
    /// author's list, the magazine's list and the registry, in that order.
    pub fn create_article(
        &mut self,
        author: impl Into<Value>,
        magazine: impl Into<Value>,
        title: impl Into<Value>,
    ) -> ModelResult<ArticleId> {
        let id = self.registry.next_id();
        let article = Article::new(id, author.into(), magazine.into(), title.into())?;
        self.ensure_author(article.author())?;
        self.ensure_magazine(article.magazine())?;

        self.index.insert(id, article.author(), article.magazine());
        trace!(article = %id, author = %article.author(), magazine = %article.magazine(), "attached back-references");

        debug!(article = %id, title = article.title(), "created article");
        Ok(self.registry.register(article))
    }

    /// Author-side construction: a new article by `author` in `magazine`.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: impl Into<Value>,
        title: impl Into<Value>,
    ) -> ModelResult<ArticleId> {
        self.create_article(author, magazine, title)
    }

    // ==================== Field Updates ====================

    /// Rename a magazine. On failure the previous name is kept.
    pub fn set_magazine_name(&mut self, id: MagazineId, value: impl Into<Value>) -> ModelResult<()> {
        let magazine = self.magazine_mut(id)?;
        magazine.set_name(value.into())?;
        debug!(magazine = %id, name = magazine.name(), "renamed magazine");
        Ok(())
    }

    /// Change a magazine's category. On failure the previous category is kept.
    pub fn set_magazine_category(
        &mut self,
        id: MagazineId,
        value: impl Into<Value>,
    ) -> ModelResult<()> {
        let magazine = self.magazine_mut(id)?;
        magazine.set_category(value.into())?;
        debug!(magazine = %id, category = magazine.category(), "recategorized magazine");
        Ok(())
    }

    /// Point an article at another author.
    ///
    /// Back-references follow [`CatalogConfig::reassign`].
    pub fn set_article_author(&mut self, id: ArticleId, value: impl Into<Value>) -> ModelResult<()> {
        let author = expect_author(&ARTICLE_AUTHOR, &value.into())?;
        self.ensure_author(author)?;
        let article = self
            .registry
            .get_mut(id)
            .ok_or(ModelError::UnknownArticle(id))?;

        let previous = article.replace_author(author);
        debug!(article = %id, %previous, %author, "reassigned article author");
        if previous == author {
            return Ok(());
        }

        match self.config.reassign {
            ReassignPolicy::KeepStale => {
                warn!(article = %id, author = %previous, "stale back-reference kept on previous author");
            }
            ReassignPolicy::Reconcile => {
                self.index.detach_author(id, previous);
                self.index.attach_author(id, author);
                trace!(article = %id, from = %previous, to = %author, "moved author back-reference");
            }
        }
        Ok(())
    }

    /// Point an article at another magazine.
    ///
    /// Back-references follow [`CatalogConfig::reassign`].
    pub fn set_article_magazine(
        &mut self,
        id: ArticleId,
        value: impl Into<Value>,
    ) -> ModelResult<()> {
        let magazine = expect_magazine(&ARTICLE_MAGAZINE, &value.into())?;
        self.ensure_magazine(magazine)?;
        let article = self
            .registry
            .get_mut(id)
            .ok_or(ModelError::UnknownArticle(id))?;

        let previous = article.replace_magazine(magazine);
        debug!(article = %id, %previous, %magazine, "reassigned article magazine");
        if previous == magazine {
            return Ok(());
        }

        match self.config.reassign {
            ReassignPolicy::KeepStale => {
                warn!(article = %id, magazine = %previous, "stale back-reference kept on previous magazine");
            }
            ReassignPolicy::Reconcile => {
                self.index.detach_magazine(id, previous);
                self.index.attach_magazine(id, magazine);
                trace!(article = %id, from = %previous, to = %magazine, "moved magazine back-reference");
            }
        }
        Ok(())
    }

    /// Write an author field by name.
    pub fn set_author_attr(
        &mut self,
        id: AuthorId,
        field: &str,
        _value: impl Into<Value>,
    ) -> ModelResult<()> {
        self.ensure_author(id)?;
        let rule = field_rule(EntityKind::Author, field)
            .ok_or_else(|| ModelError::unknown_field(EntityKind::Author, field))?;
        check_writable(rule)?;
        // Every author field is readonly.
        Err(ModelError::immutable(EntityKind::Author, rule.name))
    }

    /// Write a magazine field by name.
    pub fn set_magazine_attr(
        &mut self,
        id: MagazineId,
        field: &str,
        value: impl Into<Value>,
    ) -> ModelResult<()> {
        self.ensure_magazine(id)?;
        let rule = field_rule(EntityKind::Magazine, field)
            .ok_or_else(|| ModelError::unknown_field(EntityKind::Magazine, field))?;
        check_writable(rule)?;
        match rule.name {
            "name" => self.set_magazine_name(id, value),
            "category" => self.set_magazine_category(id, value),
            _ => Err(ModelError::unknown_field(EntityKind::Magazine, field)),
        }
    }

    /// Write an article field by name.
    pub fn set_article_attr(
        &mut self,
        id: ArticleId,
        field: &str,
        value: impl Into<Value>,
    ) -> ModelResult<()> {
        self.ensure_article(id)?;
        let rule = field_rule(EntityKind::Article, field)
            .ok_or_else(|| ModelError::unknown_field(EntityKind::Article, field))?;
        check_writable(rule)?;
        match rule.name {
            "author" => self.set_article_author(id, value),
            "magazine" => self.set_article_magazine(id, value),
            _ => Err(ModelError::unknown_field(EntityKind::Article, field)),
        }
    }

    // ==================== Read Access ====================

    /// View an author with its derived queries.
    pub fn author(&self, id: AuthorId) -> Option<AuthorView<'_>> {
        self.get_author(id).map(|author| AuthorView::new(self, author))
    }

    /// View a magazine with its derived queries.
    pub fn magazine(&self, id: MagazineId) -> Option<MagazineView<'_>> {
        self.get_magazine(id)
            .map(|magazine| MagazineView::new(self, magazine))
    }

    /// View an article.
    pub fn article(&self, id: ArticleId) -> Option<ArticleView<'_>> {
        self.get_article(id)
            .map(|article| ArticleView::new(self, article))
    }

    pub fn get_author(&self, id: AuthorId) -> Option<&Author> {
        id.slot().and_then(|slot| self.authors.get(slot))
    }

    pub fn get_magazine(&self, id: MagazineId) -> Option<&Magazine> {
        id.slot().and_then(|slot| self.magazines.get(slot))
    }

    pub fn get_article(&self, id: ArticleId) -> Option<&Article> {
        self.registry.get(id)
    }

    /// Every article in construction order.
    pub fn all_articles(&self) -> &[Article] {
        self.registry.all()
    }

    pub fn registry(&self) -> &ArticleRegistry {
        &self.registry
    }

    /// Back-references of an author, in registration order.
    pub fn articles_by(&self, author: AuthorId) -> &[ArticleId] {
        self.index.authored(author)
    }

    /// Back-references of a magazine, in registration order.
    pub fn articles_in(&self, magazine: MagazineId) -> &[ArticleId] {
        self.index.published(magazine)
    }

    /// All authors in creation order.
    pub fn authors(&self) -> impl Iterator<Item = AuthorView<'_>> {
        self.authors
            .iter()
            .map(move |author| AuthorView::new(self, author))
    }

    /// All magazines in creation order.
    pub fn magazines(&self) -> impl Iterator<Item = MagazineView<'_>> {
        self.magazines
            .iter()
            .map(move |magazine| MagazineView::new(self, magazine))
    }

    // ==================== Statistics ====================

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    pub fn article_count(&self) -> usize {
        self.registry.len()
    }

    // ==================== Helpers ====================

    fn ensure_author(&self, id: AuthorId) -> ModelResult<()> {
        self.get_author(id)
            .map(|_| ())
            .ok_or(ModelError::UnknownAuthor(id))
    }

    fn ensure_magazine(&self, id: MagazineId) -> ModelResult<()> {
        self.get_magazine(id)
            .map(|_| ())
            .ok_or(ModelError::UnknownMagazine(id))
    }

    fn ensure_article(&self, id: ArticleId) -> ModelResult<()> {
        self.get_article(id)
            .map(|_| ())
            .ok_or(ModelError::UnknownArticle(id))
    }

    fn magazine_mut(&mut self, id: MagazineId) -> ModelResult<&mut Magazine> {
        id.slot()
            .and_then(|slot| self.magazines.get_mut(slot))
            .ok_or(ModelError::UnknownMagazine(id))
    }
}
