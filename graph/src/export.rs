//! Serializable snapshot of a catalog.

use crate::Catalog;
use masthead_core::ArticleId;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CatalogData {
    pub authors: Vec<AuthorData>,
    pub magazines: Vec<MagazineData>,
    /// Registry order.
    pub articles: Vec<ArticleData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorData {
    pub id: u64,
    pub name: String,
    pub articles: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MagazineData {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub articles: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleData {
    pub id: u64,
    pub title: String,
    pub author: u64,
    pub magazine: u64,
}

fn raw_ids(ids: &[ArticleId]) -> Vec<u64> {
    ids.iter().map(ArticleId::raw).collect()
}

/// Snapshot every entity with raw ids. Back-reference lists are exported
/// as stored, stale entries included.
pub fn export_catalog(catalog: &Catalog) -> CatalogData {
    let authors = catalog
        .authors()
        .map(|author| AuthorData {
            id: author.id().raw(),
            name: author.name().to_string(),
            articles: raw_ids(author.articles()),
        })
        .collect();

    let magazines = catalog
        .magazines()
        .map(|magazine| MagazineData {
            id: magazine.id().raw(),
            name: magazine.name().to_string(),
            category: magazine.category().to_string(),
            articles: raw_ids(magazine.articles()),
        })
        .collect();

    let articles = catalog
        .all_articles()
        .iter()
        .map(|article| ArticleData {
            id: article.id().raw(),
            title: article.title().to_string(),
            author: article.author().raw(),
            magazine: article.magazine().raw(),
        })
        .collect();

    CatalogData {
        authors,
        magazines,
        articles,
    }
}
