//! Derived queries over an endpoint's back-references.
//!
//! Each function takes the article list of one author or magazine and
//! resolves every article's *current* endpoints through the catalog.

use crate::Catalog;
use masthead_core::{Aggregate, Article, ArticleId, AuthorId, Magazine, MagazineId};
use std::collections::{HashMap, HashSet};

/// An author contributes to a magazine with strictly more articles than this.
pub const CONTRIBUTOR_THRESHOLD: usize = 2;

fn resolve<'a>(
    catalog: &'a Catalog,
    articles: &'a [ArticleId],
) -> impl Iterator<Item = &'a Article> + 'a {
    articles.iter().filter_map(|id| catalog.get_article(*id))
}

/// Distinct magazines across the articles.
pub(crate) fn distinct_magazines(catalog: &Catalog, articles: &[ArticleId]) -> HashSet<MagazineId> {
    resolve(catalog, articles).map(Article::magazine).collect()
}

/// Distinct authors across the articles.
pub(crate) fn distinct_authors(catalog: &Catalog, articles: &[ArticleId]) -> HashSet<AuthorId> {
    resolve(catalog, articles).map(Article::author).collect()
}

/// Distinct categories of the articles' magazines.
pub(crate) fn topic_areas<'a>(
    catalog: &'a Catalog,
    articles: &[ArticleId],
) -> Aggregate<HashSet<&'a str>> {
    let categories: HashSet<&'a str> = distinct_magazines(catalog, articles)
        .into_iter()
        .filter_map(|id| catalog.get_magazine(id))
        .map(Magazine::category)
        .collect();
    Aggregate::from_collection(!articles.is_empty(), categories)
}

/// Titles in back-reference order.
pub(crate) fn titles<'a>(catalog: &'a Catalog, articles: &'a [ArticleId]) -> Aggregate<Vec<&'a str>> {
    let titles: Vec<&'a str> = resolve(catalog, articles).map(Article::title).collect();
    Aggregate::from_collection(!articles.is_empty(), titles)
}

/// Authors with strictly more than `threshold` of the articles.
pub(crate) fn authors_above(
    catalog: &Catalog,
    articles: &[ArticleId],
    threshold: usize,
) -> Aggregate<HashSet<AuthorId>> {
    let mut counts: HashMap<AuthorId, usize> = HashMap::new();
    for article in resolve(catalog, articles) {
        *counts.entry(article.author()).or_default() += 1;
    }

    let above: HashSet<AuthorId> = counts
        .into_iter()
        .filter(|(_, count)| *count > threshold)
        .map(|(author, _)| author)
        .collect();
    Aggregate::from_collection(!articles.is_empty(), above)
}
