//! Entity records for Masthead.
//!
//! Authors and magazines are the two endpoints; an article is the join
//! entity binding one of each. Records validate their own fields. The
//! back-reference lists from an endpoint to its articles live in the
//! catalog's relation index, not here.

use crate::validation::{expect_author, expect_magazine, expect_text};
use crate::{
    ArticleId, AuthorId, MagazineId, ModelResult, Value, ARTICLE_AUTHOR, ARTICLE_MAGAZINE,
    ARTICLE_TITLE, AUTHOR_NAME, MAGAZINE_CATEGORY, MAGAZINE_NAME,
};

/// An author. The name is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Create an author, validating the name.
    pub fn new(id: AuthorId, name: Value) -> ModelResult<Self> {
        let name = expect_text(&AUTHOR_NAME, name)?;
        Ok(Self { id, name })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A magazine. Name and category stay mutable but every write is
/// validated with the construction rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Create a magazine, validating name then category.
    pub fn new(id: MagazineId, name: Value, category: Value) -> ModelResult<Self> {
        let name = expect_text(&MAGAZINE_NAME, name)?;
        let category = expect_text(&MAGAZINE_CATEGORY, category)?;
        Ok(Self { id, name, category })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replace the name. On failure the previous name is kept.
    pub fn set_name(&mut self, value: Value) -> ModelResult<()> {
        self.name = expect_text(&MAGAZINE_NAME, value)?;
        Ok(())
    }

    /// Replace the category. On failure the previous category is kept.
    pub fn set_category(&mut self, value: Value) -> ModelResult<()> {
        self.category = expect_text(&MAGAZINE_CATEGORY, value)?;
        Ok(())
    }
}

/// An article binding one author and one magazine.
///
/// The title is fixed at construction. The endpoints can be replaced, but
/// membership of the new endpoint in a catalog is the caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    id: ArticleId,
    title: String,
    author: AuthorId,
    magazine: MagazineId,
}

impl Article {
    /// Create an article, validating title, author, then magazine.
    pub fn new(id: ArticleId, author: Value, magazine: Value, title: Value) -> ModelResult<Self> {
        let title = expect_text(&ARTICLE_TITLE, title)?;
        let author = expect_author(&ARTICLE_AUTHOR, &author)?;
        let magazine = expect_magazine(&ARTICLE_MAGAZINE, &magazine)?;
        Ok(Self {
            id,
            title,
            author,
            magazine,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    /// Point the article at another author, returning the previous one.
    pub fn replace_author(&mut self, author: AuthorId) -> AuthorId {
        std::mem::replace(&mut self.author, author)
    }

    /// Point the article at another magazine, returning the previous one.
    pub fn replace_magazine(&mut self, magazine: MagazineId) -> MagazineId {
        std::mem::replace(&mut self.magazine, magazine)
    }
}
