//! Article registry: every article ever constructed, in construction order.

use masthead_core::{Article, ArticleId};

/// Append-only store of article records.
///
/// Ids are dense: the n-th registered article has raw id n. Nothing is
/// ever removed, so the registry order is the construction order.
#[derive(Debug, Default)]
pub struct ArticleRegistry {
    articles: Vec<Article>,
}

impl ArticleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next registered article will receive.
    pub fn next_id(&self) -> ArticleId {
        ArticleId::new(self.articles.len() as u64 + 1)
    }

    /// Append an article. Its id must be `next_id()`.
    pub fn register(&mut self, article: Article) -> ArticleId {
        debug_assert_eq!(article.id(), self.next_id());
        let id = article.id();
        self.articles.push(article);
        id
    }

    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        id.slot().and_then(|slot| self.articles.get(slot))
    }

    pub fn get_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        id.slot().and_then(|slot| self.articles.get_mut(slot))
    }

    /// All articles in construction order.
    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    pub fn ids(&self) -> impl Iterator<Item = ArticleId> + '_ {
        self.articles.iter().map(Article::id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
