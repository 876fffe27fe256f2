//! Relation index: back-references from each endpoint to its articles.

use masthead_core::{ArticleId, AuthorId, MagazineId};
use std::collections::HashMap;

/// Author -> articles and Magazine -> articles, each list in
/// registration order.
///
/// The lists are non-owning: article records live in the registry.
#[derive(Debug, Default)]
pub struct RelationIndex {
    by_author: HashMap<AuthorId, Vec<ArticleId>>,
    by_magazine: HashMap<MagazineId, Vec<ArticleId>>,
}

impl RelationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new article with both endpoints, author first.
    pub fn insert(&mut self, article: ArticleId, author: AuthorId, magazine: MagazineId) {
        self.attach_author(article, author);
        self.attach_magazine(article, magazine);
    }

    pub fn attach_author(&mut self, article: ArticleId, author: AuthorId) {
        self.by_author.entry(author).or_default().push(article);
    }

    pub fn attach_magazine(&mut self, article: ArticleId, magazine: MagazineId) {
        self.by_magazine.entry(magazine).or_default().push(article);
    }

    /// Remove the article from an author's list. Returns false if absent.
    pub fn detach_author(&mut self, article: ArticleId, author: AuthorId) -> bool {
        detach(&mut self.by_author, &author, article)
    }

    /// Remove the article from a magazine's list. Returns false if absent.
    pub fn detach_magazine(&mut self, article: ArticleId, magazine: MagazineId) -> bool {
        detach(&mut self.by_magazine, &magazine, article)
    }

    /// Articles registered under an author.
    pub fn authored(&self, author: AuthorId) -> &[ArticleId] {
        self.by_author.get(&author).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Articles registered under a magazine.
    pub fn published(&self, magazine: MagazineId) -> &[ArticleId] {
        self.by_magazine
            .get(&magazine)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn detach<K>(index: &mut HashMap<K, Vec<ArticleId>>, key: &K, article: ArticleId) -> bool
where
    K: std::hash::Hash + Eq,
{
    let Some(list) = index.get_mut(key) else {
        return false;
    };
    let Some(pos) = list.iter().position(|id| *id == article) else {
        return false;
    };
    list.remove(pos);
    if list.is_empty() {
        index.remove(key);
    }
    true
}
