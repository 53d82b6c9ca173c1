use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Deserialize, Clone)]
pub struct Config {
    /// TMDB v4 read access token (sent as a bearer token)
    pub tmdb_read_token: String,

    /// Google Books API key
    pub books_api_key: String,

    /// TMDB v3 API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Google Books volumes endpoint
    #[serde(default = "default_books_api_url")]
    pub books_api_url: String,

    /// JSON user store; users live only in memory when unset
    #[serde(default)]
    pub users_file: Option<PathBuf>,

    /// Keep author-search books that share no category with the searched book
    #[serde(default)]
    pub keep_author_matches: bool,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_books_api_url() -> String {
    "https://www.googleapis.com/books/v1/volumes".to_string()
}

impl Config {
    /// Load configuration from `.env` and environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
