//! Dispatcher tests against mocked catalogs.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use catalog::{CatalogItem, MediaKind};
use dispatcher::{Dispatcher, Mode, Outcome, PipelineReport};
use pipeline::filters::AuthorOrCategoryFilter;
use pipeline::{BookRecommender, MatchTier, Recommendations};
use sources::{BookCatalog, MovieCatalog, SourceError, SourceResult};

mock! {
    pub Movies {}

    #[async_trait]
    impl MovieCatalog for Movies {
        async fn search(&self, query: &str) -> SourceResult<Vec<CatalogItem>>;
        async fn trending(&self) -> SourceResult<Vec<CatalogItem>>;
        fn name(&self) -> &'static str;
    }
}

mock! {
    pub Books {}

    #[async_trait]
    impl BookCatalog for Books {
        async fn search(&self, query: &str) -> SourceResult<Vec<CatalogItem>>;
        fn name(&self) -> &'static str;
    }
}

fn movie(title: &str, genres: &[&str]) -> CatalogItem {
    CatalogItem::new(MediaKind::Movie, title).with_tags(genres.iter().copied())
}

fn book(title: &str, authors: &[&str], categories: &[&str]) -> CatalogItem {
    CatalogItem::new(MediaKind::Book, title)
        .with_authors(authors.iter().copied())
        .with_tags(categories.iter().copied())
}

fn server_error() -> SourceError {
    SourceError::Status {
        service: "mock",
        status: 503,
        body: "unavailable".to_string(),
    }
}

fn trending() -> Vec<CatalogItem> {
    vec![
        movie("Heat", &["Action", "Crime", "Drama"]),
        movie("Ronin", &["Action", "Crime", "Thriller"]),
        movie("Collateral", &["Action", "Crime", "Drama"]),
        movie("Notting Hill", &["Romance", "Comedy"]),
    ]
}

fn named_movies() -> MockMovies {
    let mut movies = MockMovies::new();
    movies.expect_name().return_const("mock movies");
    movies
}

fn named_books() -> MockBooks {
    let mut books = MockBooks::new();
    books.expect_name().return_const("mock books");
    books
}

/// Book catalog answering the free-text, author and category queries of
/// the "Q" scenario
fn scenario_books() -> MockBooks {
    let mut books = named_books();
    books.expect_search().returning(|query| match query {
        "q" => Ok(vec![book("Q", &["S"], &["Fiction"])]),
        "inauthor:S" => Ok(vec![book("R", &["S"], &["Nonfiction"])]),
        "subject:Fiction" => Ok(vec![book("T", &["V"], &["Fiction"])]),
        other => panic!("unexpected book query {other}"),
    });
    books
}

fn ranked(report: &PipelineReport) -> (&[CatalogItem], &Recommendations) {
    match &report.outcome {
        Outcome::Ranked {
            searched,
            recommendations,
        } => (searched.as_slice(), recommendations),
        Outcome::NoResults => panic!("expected ranked outcome for {:?}", report.kind),
    }
}

#[tokio::test]
async fn test_movie_pipeline_uses_first_result_as_anchor() {
    let mut movies = named_movies();
    movies
        .expect_search()
        .withf(|query: &str| query == "heat")
        .times(1)
        .returning(|_| {
            Ok(vec![
                movie("Heat", &["Action", "Crime", "Drama"]),
                movie("Heat Wave", &["Documentary"]),
            ])
        });
    movies.expect_trending().times(1).returning(|| Ok(trending()));

    let dispatcher = Dispatcher::new(Arc::new(movies), Arc::new(named_books()));
    let reports = dispatcher.run(Mode::Movies, "heat").await;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].kind, MediaKind::Movie);

    let (searched, recs) = ranked(&reports[0]);
    assert_eq!(searched.len(), 2);
    assert_eq!(recs.titles(), vec!["Collateral"]);
    assert_eq!(recs.tier, Some(MatchTier::Exact));
}

#[tokio::test]
async fn test_movie_search_without_hits_skips_the_pool() {
    let mut movies = named_movies();
    movies.expect_search().returning(|_| Ok(Vec::new()));
    movies.expect_trending().times(0);

    let dispatcher = Dispatcher::new(Arc::new(movies), Arc::new(named_books()));
    let report = dispatcher.run_movies("zzzz").await;

    assert_eq!(report.outcome, Outcome::NoResults);
}

#[tokio::test]
async fn test_failed_movie_search_reports_no_results() {
    let mut movies = named_movies();
    movies.expect_search().returning(|_| Err(server_error()));
    movies.expect_trending().times(0);

    let dispatcher = Dispatcher::new(Arc::new(movies), Arc::new(named_books()));
    let report = dispatcher.run_movies("heat").await;

    assert_eq!(report.outcome, Outcome::NoResults);
}

#[tokio::test]
async fn test_failed_pool_fetch_means_no_recommendations() {
    let mut movies = named_movies();
    movies
        .expect_search()
        .returning(|_| Ok(vec![movie("Heat", &["Action"])]));
    movies.expect_trending().returning(|| Err(server_error()));

    let dispatcher = Dispatcher::new(Arc::new(movies), Arc::new(named_books()));
    let report = dispatcher.run_movies("heat").await;

    // Found the movie, but there is nothing to recommend
    let (searched, recs) = ranked(&report);
    assert_eq!(searched.len(), 1);
    assert!(recs.is_empty());
}

#[tokio::test]
async fn test_book_pipeline_filters_author_matches_by_category() {
    let dispatcher = Dispatcher::new(Arc::new(named_movies()), Arc::new(scenario_books()));
    let reports = dispatcher.run(Mode::Books, "q").await;

    assert_eq!(reports.len(), 1);
    let (searched, recs) = ranked(&reports[0]);
    assert_eq!(searched[0].title, "Q");
    assert_eq!(recs.titles(), vec!["T"]);
}

#[tokio::test]
async fn test_book_pipeline_with_corrected_relevance_filter() {
    let dispatcher = Dispatcher::new(Arc::new(named_movies()), Arc::new(scenario_books()))
        .with_book_recommender(BookRecommender::new().with_relevance_filter(AuthorOrCategoryFilter));

    let report = dispatcher.run_books("q").await;
    let (_, recs) = ranked(&report);
    assert_eq!(recs.titles(), vec!["R", "T"]);
}

#[tokio::test]
async fn test_book_without_authors_only_searches_categories() {
    let mut books = named_books();
    books.expect_search().times(2).returning(|query| match query {
        "anonymous" => Ok(vec![book("Beowulf", &[], &["Poetry"])]),
        "subject:Poetry" => Ok(vec![
            book("Beowulf", &[], &["Poetry"]),
            book("The Odyssey", &["Homer"], &["Poetry"]),
        ]),
        other => panic!("unexpected book query {other}"),
    });

    let dispatcher = Dispatcher::new(Arc::new(named_movies()), Arc::new(books));
    let report = dispatcher.run_books("anonymous").await;

    let (_, recs) = ranked(&report);
    assert_eq!(recs.titles(), vec!["The Odyssey"]);
}

#[tokio::test]
async fn test_failed_author_search_still_uses_category_pool() {
    let mut books = named_books();
    books.expect_search().returning(|query| match query {
        "q" => Ok(vec![book("Q", &["S"], &["Fiction"])]),
        "inauthor:S" => Err(server_error()),
        "subject:Fiction" => Ok(vec![book("T", &["V"], &["Fiction"])]),
        other => panic!("unexpected book query {other}"),
    });

    let dispatcher = Dispatcher::new(Arc::new(named_movies()), Arc::new(books));
    let report = dispatcher.run_books("q").await;

    let (_, recs) = ranked(&report);
    assert_eq!(recs.titles(), vec!["T"]);
}

#[tokio::test]
async fn test_both_mode_runs_books_then_movies() {
    let mut movies = named_movies();
    movies.expect_search().returning(|_| Ok(Vec::new()));

    let dispatcher = Dispatcher::new(Arc::new(movies), Arc::new(scenario_books()));
    let reports = dispatcher.run(Mode::Both, "q").await;

    let kinds: Vec<MediaKind> = reports.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![MediaKind::Book, MediaKind::Movie]);

    // Books found and ranked, movies reported separately as not found
    let (_, book_recs) = ranked(&reports[0]);
    assert_eq!(book_recs.titles(), vec!["T"]);
    assert_eq!(reports[1].outcome, Outcome::NoResults);
}
