//! Article integration tests.
//!
//! Covers title constraints, endpoint validation, registration and
//! reassignment under both back-reference policies.

use masthead_tests::prelude::*;

fn pair() -> Fixture {
    Fixture::new()
        .author("Carry Bradshaw")
        .magazine("Vogue", "Fashion")
}

mod title {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_length_boundaries() {
        let mut fixture = pair();
        let author = fixture.author_id("Carry Bradshaw");
        let vogue = fixture.magazine_id("Vogue");
        let catalog = &mut fixture.catalog;

        assert!(matches!(
            catalog.add_article(author, vogue, "Four"),
            Err(ModelError::ValueConstraint { .. })
        ));
        assert!(catalog.add_article(author, vogue, "Five!").is_ok());
        assert!(catalog.add_article(author, vogue, "x".repeat(50)).is_ok());
        assert!(matches!(
            catalog.add_article(author, vogue, "x".repeat(51)),
            Err(ModelError::ValueConstraint { .. })
        ));
        assert_eq!(catalog.article_count(), 2);
    }

    #[test]
    fn test_title_must_be_string() {
        let mut fixture = pair();
        let author = fixture.author_id("Carry Bradshaw");
        let vogue = fixture.magazine_id("Vogue");

        assert!(matches!(
            fixture.catalog.add_article(author, vogue, 12345i64),
            Err(ModelError::TypeConstraint { .. })
        ));
    }

    #[test]
    fn test_title_is_immutable() {
        // GIVEN an article
        let mut fixture = pair().article("Carry Bradshaw", "Vogue", "Dating Life in NYC");
        let id = fixture.articles()[0];

        // WHEN the title is reassigned
        let result = fixture.catalog.set_article_attr(id, "title", "New Title");

        // THEN the write fails AND the title is unchanged
        assert_eq!(result, Err(ModelError::immutable(EntityKind::Article, "title")));
        assert_eq!(fixture.catalog.article(id).unwrap().title(), "Dating Life in NYC");
    }
}

mod endpoints {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_author_must_be_author_reference() {
        let mut fixture = pair();
        let vogue = fixture.magazine_id("Vogue");

        assert!(matches!(
            fixture.catalog.create_article("Carry Bradshaw", vogue, "Dating Life in NYC"),
            Err(ModelError::TypeConstraint { .. })
        ));
        assert!(matches!(
            fixture.catalog.create_article(vogue, vogue, "Dating Life in NYC"),
            Err(ModelError::TypeConstraint { .. })
        ));
    }

    #[test]
    fn test_magazine_must_be_magazine_reference() {
        let mut fixture = pair();
        let author = fixture.author_id("Carry Bradshaw");

        assert!(matches!(
            fixture.catalog.create_article(author, "Vogue", "Dating Life in NYC"),
            Err(ModelError::TypeConstraint { .. })
        ));
        assert!(matches!(
            fixture.catalog.create_article(author, author, "Dating Life in NYC"),
            Err(ModelError::TypeConstraint { .. })
        ));
    }

    #[test]
    fn test_title_is_checked_first() {
        let mut catalog = Catalog::new();

        let err = catalog.create_article("nobody", "nowhere", "Tiny").unwrap_err();
        assert!(matches!(err, ModelError::ValueConstraint { ref field, .. } if field == "Article.title"));
    }

    #[test]
    fn test_unknown_endpoints_are_rejected() {
        let mut fixture = pair();
        let author = fixture.author_id("Carry Bradshaw");
        let vogue = fixture.magazine_id("Vogue");

        assert_eq!(
            fixture.catalog.create_article(AuthorId::new(7), vogue, "Dating Life in NYC"),
            Err(ModelError::UnknownAuthor(AuthorId::new(7)))
        );
        assert_eq!(
            fixture.catalog.create_article(author, MagazineId::new(7), "Dating Life in NYC"),
            Err(ModelError::UnknownMagazine(MagazineId::new(7)))
        );
        assert_eq!(fixture.catalog.article_count(), 0);
    }
}

mod registration {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_article_registered_exactly_once() {
        // GIVEN an author and a magazine
        let fixture = pair().article("Carry Bradshaw", "Vogue", "Dating Life in NYC");
        let id = fixture.articles()[0];

        // THEN the article appears once in each collection
        let count = |ids: &[ArticleId]| ids.iter().filter(|a| **a == id).count();
        assert_eq!(count(fixture.author_view("Carry Bradshaw").articles()), 1);
        assert_eq!(count(fixture.magazine_view("Vogue").articles()), 1);
        let registered: Vec<ArticleId> = fixture.catalog.registry().ids().collect();
        assert_eq!(count(&registered), 1);
    }

    #[test]
    fn test_failed_construction_registers_nothing() {
        let mut fixture = pair().article("Carry Bradshaw", "Vogue", "Dating Life in NYC");
        let author = fixture.author_id("Carry Bradshaw");
        let vogue = fixture.magazine_id("Vogue");

        assert!(fixture.catalog.add_article(author, vogue, "Tiny").is_err());

        assert_eq!(fixture.catalog.all_articles().len(), 1);
        assert_eq!(fixture.author_view("Carry Bradshaw").articles().len(), 1);
        assert_eq!(fixture.magazine_view("Vogue").articles().len(), 1);
    }

    #[test]
    fn test_article_view_resolves_endpoints() {
        let fixture = pair().article("Carry Bradshaw", "Vogue", "Dating Life in NYC");
        let article = fixture.catalog.article(fixture.articles()[0]).unwrap();

        assert_eq!(article.author().map(|a| a.name()), Some("Carry Bradshaw"));
        assert_eq!(article.magazine().map(|m| m.category()), Some("Fashion"));
    }
}

mod reassignment {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(config: CatalogConfig) -> Fixture {
        Fixture::with_config(config)
            .author("Carry Bradshaw")
            .author("Nathaniel Hawthorne")
            .magazine("Vogue", "Fashion")
            .magazine("AD", "Architecture")
            .article("Carry Bradshaw", "Vogue", "Dating Life in NYC")
    }

    #[test]
    fn test_default_policy_keeps_stale_back_references() {
        // GIVEN the default policy
        let mut fixture = build(CatalogConfig::default());
        let id = fixture.articles()[0];
        let nathaniel = fixture.author_id("Nathaniel Hawthorne");
        let ad = fixture.magazine_id("AD");
        assert_eq!(fixture.catalog.config().reassign, ReassignPolicy::KeepStale);

        // WHEN both endpoints are reassigned
        fixture.catalog.set_article_author(id, nathaniel).unwrap();
        fixture.catalog.set_article_magazine(id, ad).unwrap();

        // THEN the article points at the new endpoints
        let article = fixture.catalog.article(id).unwrap();
        assert_eq!(article.author_id(), nathaniel);
        assert_eq!(article.magazine_id(), ad);
        // AND the previous endpoints still list it
        assert_eq!(fixture.author_view("Carry Bradshaw").articles(), &[id]);
        assert_eq!(fixture.magazine_view("Vogue").articles(), &[id]);
        assert!(fixture.author_view("Nathaniel Hawthorne").articles().is_empty());
        assert!(fixture.magazine_view("AD").articles().is_empty());
    }

    #[test]
    fn test_reconcile_policy_moves_back_references() {
        let mut fixture = build(CatalogConfig::reconciling());
        let id = fixture.articles()[0];
        let nathaniel = fixture.author_id("Nathaniel Hawthorne");
        let ad = fixture.magazine_id("AD");

        fixture.catalog.set_article_attr(id, "author", nathaniel).unwrap();
        fixture.catalog.set_article_attr(id, "magazine", ad).unwrap();

        assert!(fixture.author_view("Carry Bradshaw").articles().is_empty());
        assert!(fixture.magazine_view("Vogue").articles().is_empty());
        assert_eq!(fixture.author_view("Nathaniel Hawthorne").articles(), &[id]);
        assert_eq!(fixture.magazine_view("AD").articles(), &[id]);
        assert_eq!(fixture.magazine_view("Vogue").article_titles(), Aggregate::NoData);
    }

    #[test]
    fn test_invalid_reassignment_is_rejected() {
        let mut fixture = build(CatalogConfig::reconciling());
        let id = fixture.articles()[0];
        let carry = fixture.author_id("Carry Bradshaw");

        assert!(matches!(
            fixture.catalog.set_article_author(id, "Nathaniel Hawthorne"),
            Err(ModelError::TypeConstraint { .. })
        ));
        assert_eq!(
            fixture.catalog.set_article_author(id, AuthorId::new(99)),
            Err(ModelError::UnknownAuthor(AuthorId::new(99)))
        );

        assert_eq!(fixture.catalog.article(id).unwrap().author_id(), carry);
        assert_eq!(fixture.author_view("Carry Bradshaw").articles(), &[id]);
    }
}
