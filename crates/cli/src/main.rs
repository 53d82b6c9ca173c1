mod config;
mod render;
mod session;

use anyhow::{Context, Result};
use auth::{Authenticator, InMemoryUserStore, JsonFileUserStore, UserStore};
use clap::Parser;
use colored::Colorize;
use config::Config;
use dispatcher::{Dispatcher, Mode};
use pipeline::filters::AuthorOrCategoryFilter;
use pipeline::BookRecommender;
use session::{HiddenInput, Session};
use sources::{GoogleBooksClient, TmdbClient};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// ReedNReels - Movie and Book Recommendations
#[derive(Parser)]
#[command(name = "reed-n-reels")]
#[command(about = "Search movies or books and get recommendations for the first hit", long_about = None)]
struct Cli {
    /// "B" for books, "M" for movies, "BH" for both; prompted when omitted
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Search query; prompted when omitted
    #[arg(short, long)]
    query: Option<String>,

    /// Show which genre tier produced the movie recommendations
    #[arg(long)]
    explain: bool,

    /// Keep author-search books even when they share no category
    #[arg(long)]
    keep_author_matches: bool,

    /// JSON file holding registered users (overrides USERS_FILE).
    ///
    /// Without one, users live in memory for this run only, so sign up
    /// before logging in.
    #[arg(long)]
    users_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Set TMDB_READ_TOKEN and BOOKS_API_KEY")?;

    let store = open_user_store(cli.users_file.as_ref().or(config.users_file.as_ref()))?;
    let authenticator = Authenticator::new(store);

    let stdin = io::stdin();
    let hidden_passwords = stdin.is_terminal();
    let mut session = Session::new(stdin.lock(), io::stdout());
    if hidden_passwords {
        session = session.with_secret_reader(HiddenInput);
    }

    if !session.authenticate(&authenticator)? {
        return Ok(());
    }

    session.say(
        &"Welcome to ReedNReels, where you can get access to multiple streams of movies or books."
            .bold()
            .green()
            .to_string(),
    )?;

    let mode = match cli.mode {
        Some(mode) => mode,
        None => match session.choose_mode()? {
            Some(mode) => mode,
            None => return Ok(()),
        },
    };

    let query = match cli.query {
        Some(query) => query,
        None => match session.ask_query(mode)? {
            Some(query) => query,
            None => return Ok(()),
        },
    };

    let dispatcher = build_dispatcher(&config, cli.keep_author_matches);
    info!("Running mode {} for '{}'", mode, query);
    let reports = dispatcher.run(mode, &query).await;

    let out = session.output();
    for report in &reports {
        render::write_report(out, report, cli.explain)?;
    }
    out.flush()?;

    Ok(())
}

/// Users persist to `path` when given, otherwise they live for this run only
fn open_user_store(path: Option<&PathBuf>) -> Result<Box<dyn UserStore>> {
    match path {
        Some(path) => {
            let store = JsonFileUserStore::open(path)
                .with_context(|| format!("Failed to open user store {}", path.display()))?;
            info!("Loaded user store from {}", path.display());
            Ok(Box::new(store))
        }
        None => Ok(Box::new(InMemoryUserStore::new())),
    }
}

fn build_dispatcher(config: &Config, keep_author_matches: bool) -> Dispatcher {
    let movies = TmdbClient::new(config.tmdb_read_token.clone(), config.tmdb_api_url.clone());
    let books = GoogleBooksClient::new(config.books_api_key.clone(), config.books_api_url.clone());
    let dispatcher = Dispatcher::new(Arc::new(movies), Arc::new(books));

    if keep_author_matches || config.keep_author_matches {
        dispatcher
            .with_book_recommender(BookRecommender::new().with_relevance_filter(AuthorOrCategoryFilter))
    } else {
        dispatcher
    }
}
