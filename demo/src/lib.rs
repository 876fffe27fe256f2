//! Masthead demo: builds a small catalog, prints the derived queries and
//! checks that invalid writes are rejected.

mod error;

pub use error::{DemoError, DemoResult};

use masthead_core::{EntityKind, ModelError, ModelResult};
use masthead_graph::{export_catalog, Catalog, CatalogConfig};
use std::io::Write;
use tracing::info;

/// Command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Print the catalog snapshot as JSON instead of the report.
    pub json: bool,
    /// Reconcile back-references when articles are reassigned.
    pub reconcile: bool,
}

impl Options {
    pub fn parse<I, S>(args: I) -> DemoResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for arg in args {
            match arg.as_ref() {
                "--json" => options.json = true,
                "--reconcile" => options.reconcile = true,
                other => return Err(DemoError::UnknownArgument(other.to_string())),
            }
        }
        Ok(options)
    }

    fn catalog_config(&self) -> CatalogConfig {
        if self.reconcile {
            CatalogConfig::reconciling()
        } else {
            CatalogConfig::default()
        }
    }
}

/// Build the demo catalog: two authors, two magazines, four articles.
pub fn build_catalog(config: CatalogConfig) -> ModelResult<Catalog> {
    let mut catalog = Catalog::with_config(config);

    let carry = catalog.create_author("Carry Bradshaw")?;
    let nathaniel = catalog.create_author("Nathaniel Hawthorne")?;
    let vogue = catalog.create_magazine("Vogue", "Fashion")?;
    let tech = catalog.create_magazine("Tech Today", "Technology")?;

    catalog.add_article(carry, vogue, "How to Wear a Tutu with Style")?;
    catalog.add_article(carry, vogue, "Dating Life in NYC")?;
    catalog.add_article(carry, vogue, "How to Be Single and Happy")?;
    catalog.add_article(nathaniel, tech, "2023 Tech Trends Unveiled")?;

    Ok(catalog)
}

/// Run the demo, writing its output to `out`.
pub fn run(options: &Options, out: &mut impl Write) -> DemoResult<()> {
    let mut catalog = build_catalog(options.catalog_config())?;
    info!(
        authors = catalog.author_count(),
        magazines = catalog.magazine_count(),
        articles = catalog.article_count(),
        "catalog built"
    );

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &export_catalog(&catalog))?;
        writeln!(out)?;
        return Ok(());
    }

    write_report(&catalog, out)?;
    run_checks(&mut catalog, out)
}

fn write_report(catalog: &Catalog, out: &mut impl Write) -> DemoResult<()> {
    writeln!(out, "All articles: {}", catalog.all_articles().len())?;

    for author in catalog.authors() {
        let titles: Vec<&str> = author
            .articles()
            .iter()
            .filter_map(|id| catalog.article(*id))
            .map(|article| article.title())
            .collect();
        writeln!(out, "{}'s articles: {:?}", author.name(), titles)?;
    }

    for magazine in catalog.magazines() {
        match magazine.article_titles().into_option() {
            Some(titles) => writeln!(out, "{}'s titles: {:?}", magazine.name(), titles)?,
            None => writeln!(out, "{}'s titles: None", magazine.name())?,
        }

        match magazine.contributing_authors().into_option() {
            Some(ids) => {
                let mut names: Vec<&str> = ids
                    .into_iter()
                    .filter_map(|id| catalog.author(id))
                    .map(|author| author.name())
                    .collect();
                names.sort_unstable();
                writeln!(out, "{}'s contributing authors: {:?}", magazine.name(), names)?;
            }
            None => writeln!(out, "{}'s contributing authors: None", magazine.name())?,
        }
    }

    Ok(())
}

fn run_checks(catalog: &mut Catalog, out: &mut impl Write) -> DemoResult<()> {
    let article = catalog
        .all_articles()
        .first()
        .map(|article| article.id())
        .ok_or_else(|| DemoError::check_failed("setup", "catalog has no articles"))?;
    let author = catalog
        .authors()
        .next()
        .map(|author| author.id())
        .ok_or_else(|| DemoError::check_failed("setup", "catalog has no authors"))?;
    let magazine = catalog
        .magazines()
        .next()
        .map(|magazine| magazine.id())
        .ok_or_else(|| DemoError::check_failed("setup", "catalog has no magazines"))?;

    let immutable = |entity: EntityKind| move |e: &ModelError| matches!(e, ModelError::Immutable { entity: k, .. } if *k == entity);
    let type_error = |e: &ModelError| matches!(e, ModelError::TypeConstraint { .. });
    let value_error = |e: &ModelError| matches!(e, ModelError::ValueConstraint { .. });

    expect_rejection(
        out,
        "Title is immutable",
        catalog.set_article_attr(article, "title", "New Title"),
        immutable(EntityKind::Article),
    )?;
    expect_rejection(
        out,
        "Author name is immutable",
        catalog.set_author_attr(author, "name", "New Name"),
        immutable(EntityKind::Author),
    )?;
    expect_rejection(
        out,
        "Magazine name must be string",
        catalog.set_magazine_name(magazine, 2i64),
        type_error,
    )?;
    expect_rejection(
        out,
        "Magazine name must be 2-16 chars",
        catalog.set_magazine_name(magazine, "New Yorker Plus X"),
        value_error,
    )?;
    expect_rejection(
        out,
        "Category must be string",
        catalog.set_magazine_category(magazine, 2i64),
        type_error,
    )?;
    expect_rejection(
        out,
        "Category must be non-empty",
        catalog.set_magazine_category(magazine, ""),
        value_error,
    )?;

    Ok(())
}

fn expect_rejection(
    out: &mut impl Write,
    check: &str,
    result: ModelResult<()>,
    expected: impl Fn(&ModelError) -> bool,
) -> DemoResult<()> {
    match result {
        Err(e) if expected(&e) => {
            writeln!(out, "Success: {}", check)?;
            Ok(())
        }
        Err(e) => Err(DemoError::check_failed(check, format!("wrong error: {}", e))),
        Ok(()) => Err(DemoError::check_failed(check, "write was accepted")),
    }
}
