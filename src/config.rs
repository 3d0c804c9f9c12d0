use rocket::figment::providers::Env;
use rocket::figment::Figment;
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::PathBuf;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStoreKind {
  Postgres,
  Memory,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
  #[serde(default)]
  pub tmdb_api_key: String,
  #[serde(default = "default_tmdb_base_url")]
  pub tmdb_base_url: String,
  #[serde(default = "default_review_store")]
  pub review_store: ReviewStoreKind,
  pub database_url: Option<String>,
  /// File holding the database URL, checked before `database_url`.
  pub database_url_file: Option<PathBuf>,
  pub sentry_dsn: Option<String>,
}

fn default_tmdb_base_url() -> String {
  DEFAULT_TMDB_BASE_URL.to_owned()
}

fn default_review_store() -> ReviewStoreKind {
  ReviewStoreKind::Postgres
}

/// Rocket's figment plus the plain environment variables the deployment sets.
pub fn figment() -> Figment {
  let mut figment = rocket::Config::figment();

  if let Some(port) = Env::var("PORT").and_then(|port| port.parse::<u16>().ok()) {
    figment = figment.merge(("port", port));
  }

  if let Some(database_url) = Env::var("DATABASE_URL") {
    figment = figment.merge(("database_url", database_url));
  }

  if let Some(tmdb_api_key) = Env::var("TMDB_API_KEY") {
    figment = figment.merge(("tmdb_api_key", tmdb_api_key));
  }

  if let Some(sentry_dsn) = Env::var("SENTRY_DSN") {
    figment = figment.merge(("sentry_dsn", sentry_dsn));
  }

  figment
}

impl Config {
  /// Resolves the persistence credential, preferring the file over the inline value.
  pub fn resolve_database_url(&self) -> Option<String> {
    if let Some(path) = &self.database_url_file {
      match read_to_string(path) {
        Ok(contents) if !contents.trim().is_empty() => return Some(contents.trim().to_owned()),
        Ok(_) => log::warn!("Database URL file {} is empty", path.display()),
        Err(error) => log::warn!(
          "Failed to read database URL file {}: {}",
          path.display(),
          error
        ),
      }
    }

    self
      .database_url
      .as_ref()
      .map(|url| url.trim().to_owned())
      .filter(|url| !url.is_empty())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  fn config() -> Config {
    Config {
      tmdb_api_key: String::new(),
      tmdb_base_url: default_tmdb_base_url(),
      review_store: ReviewStoreKind::Postgres,
      database_url: None,
      database_url_file: None,
      sentry_dsn: None,
    }
  }

  #[test]
  fn extracts_defaults_from_figment() {
    let config: Config = Figment::new()
      .merge(("tmdb_api_key", "secret"))
      .extract()
      .unwrap();

    assert_eq!(config.tmdb_api_key, "secret");
    assert_eq!(config.tmdb_base_url, DEFAULT_TMDB_BASE_URL);
    assert_eq!(config.review_store, ReviewStoreKind::Postgres);
    assert!(config.database_url.is_none());
  }

  #[test]
  fn parses_memory_store_kind() {
    let config: Config = Figment::new()
      .merge(("review_store", "memory"))
      .extract()
      .unwrap();

    assert_eq!(config.review_store, ReviewStoreKind::Memory);
  }

  #[test]
  fn blank_database_url_counts_as_missing() {
    let mut config = config();
    config.database_url = Some("  ".into());

    assert_eq!(config.resolve_database_url(), None);
  }

  #[test]
  fn database_url_file_wins_over_inline_value() {
    let path = std::env::temp_dir().join(format!("movie-reviews-db-{}", uuid::Uuid::new_v4()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "postgres://from-file/reviews").unwrap();

    let mut config = config();
    config.database_url = Some("postgres://inline/reviews".into());
    config.database_url_file = Some(path.clone());

    assert_eq!(
      config.resolve_database_url().as_deref(),
      Some("postgres://from-file/reviews")
    );

    std::fs::remove_file(path).unwrap();
  }

  #[test]
  fn unreadable_file_falls_back_to_inline_value() {
    let mut config = config();
    config.database_url = Some("postgres://inline/reviews".into());
    config.database_url_file = Some(PathBuf::from("/nonexistent/movie-reviews/database-url"));

    assert_eq!(
      config.resolve_database_url().as_deref(),
      Some("postgres://inline/reviews")
    );
  }
}
