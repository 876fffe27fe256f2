//! Read views over catalog entities.
//!
//! A view pairs an entity record with the catalog it lives in, so the
//! derived queries can follow back-references and resolve endpoints.

use crate::aggregates::{self, CONTRIBUTOR_THRESHOLD};
use crate::Catalog;
use masthead_core::{Aggregate, Article, ArticleId, Author, AuthorId, Magazine, MagazineId};
use std::collections::HashSet;
use std::fmt;

/// An author and its derived queries.
#[derive(Clone, Copy)]
pub struct AuthorView<'a> {
    catalog: &'a Catalog,
    author: &'a Author,
}

impl<'a> AuthorView<'a> {
    pub(crate) fn new(catalog: &'a Catalog, author: &'a Author) -> Self {
        Self { catalog, author }
    }

    pub fn id(&self) -> AuthorId {
        self.author.id()
    }

    pub fn name(&self) -> &'a str {
        self.author.name()
    }

    pub fn record(&self) -> &'a Author {
        self.author
    }

    /// Articles registered under this author, in registration order.
    pub fn articles(&self) -> &'a [ArticleId] {
        self.catalog.articles_by(self.id())
    }

    /// Distinct magazines this author's articles appear in.
    pub fn magazines(&self) -> HashSet<MagazineId> {
        aggregates::distinct_magazines(self.catalog, self.articles())
    }

    /// Distinct categories of [`magazines`](Self::magazines).
    ///
    /// `NoData` when the author has no articles.
    pub fn topic_areas(&self) -> Aggregate<HashSet<&'a str>> {
        aggregates::topic_areas(self.catalog, self.articles())
    }
}

impl fmt::Debug for AuthorView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorView")
            .field("id", &self.id())
            .field("name", &self.name())
            .finish()
    }
}

/// A magazine and its derived queries.
#[derive(Clone, Copy)]
pub struct MagazineView<'a> {
    catalog: &'a Catalog,
    magazine: &'a Magazine,
}

impl<'a> MagazineView<'a> {
    pub(crate) fn new(catalog: &'a Catalog, magazine: &'a Magazine) -> Self {
        Self { catalog, magazine }
    }

    pub fn id(&self) -> MagazineId {
        self.magazine.id()
    }

    pub fn name(&self) -> &'a str {
        self.magazine.name()
    }

    pub fn category(&self) -> &'a str {
        self.magazine.category()
    }

    pub fn record(&self) -> &'a Magazine {
        self.magazine
    }

    /// Articles registered under this magazine, in registration order.
    pub fn articles(&self) -> &'a [ArticleId] {
        self.catalog.articles_in(self.id())
    }

    /// Distinct authors of this magazine's articles.
    pub fn contributors(&self) -> HashSet<AuthorId> {
        aggregates::distinct_authors(self.catalog, self.articles())
    }

    /// Titles in registration order; `NoData` when there are no articles.
    pub fn article_titles(&self) -> Aggregate<Vec<&'a str>> {
        aggregates::titles(self.catalog, self.articles())
    }

    /// Authors with more than [`CONTRIBUTOR_THRESHOLD`] articles here.
    ///
    /// `NoData` without articles, `Empty` when nobody crosses the threshold.
    pub fn contributing_authors(&self) -> Aggregate<HashSet<AuthorId>> {
        aggregates::authors_above(self.catalog, self.articles(), CONTRIBUTOR_THRESHOLD)
    }
}

impl fmt::Debug for MagazineView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MagazineView")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("category", &self.category())
            .finish()
    }
}

/// An article with its endpoints resolved.
#[derive(Clone, Copy)]
pub struct ArticleView<'a> {
    catalog: &'a Catalog,
    article: &'a Article,
}

impl<'a> ArticleView<'a> {
    pub(crate) fn new(catalog: &'a Catalog, article: &'a Article) -> Self {
        Self { catalog, article }
    }

    pub fn id(&self) -> ArticleId {
        self.article.id()
    }

    pub fn title(&self) -> &'a str {
        self.article.title()
    }

    pub fn record(&self) -> &'a Article {
        self.article
    }

    pub fn author_id(&self) -> AuthorId {
        self.article.author()
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.article.magazine()
    }

    pub fn author(&self) -> Option<AuthorView<'a>> {
        self.catalog.author(self.author_id())
    }

    pub fn magazine(&self) -> Option<MagazineView<'a>> {
        self.catalog.magazine(self.magazine_id())
    }
}

impl fmt::Debug for ArticleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArticleView")
            .field("id", &self.id())
            .field("title", &self.title())
            .field("author", &self.author_id())
            .field("magazine", &self.magazine_id())
            .finish()
    }
}
