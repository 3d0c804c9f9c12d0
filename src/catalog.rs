//! Pass-through access to the external movie catalog.
//!
//! Every operation forwards to the catalog backend and returns its JSON
//! untouched. Input checks that must happen before the vendor is contacted
//! (a missing search query) live in the route handlers.

use rocket::serde::json::Value;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
  #[error("catalog request failed: {0}")]
  Transport(#[from] reqwest::Error),
  #[error("invalid catalog base URL: {0}")]
  BaseUrl(String),
}

/// A catalog reachable by path segments and query parameters.
#[rocket::async_trait]
pub trait CatalogBackend: Send + Sync {
  async fn get(
    &self,
    segments: &[&str],
    params: Vec<(&'static str, String)>,
  ) -> Result<Value, CatalogError>;
}

#[derive(Clone)]
pub struct CatalogProxy {
  backend: Arc<dyn CatalogBackend>,
}

impl CatalogProxy {
  pub fn new<B: CatalogBackend + 'static>(backend: B) -> Self {
    Self {
      backend: Arc::new(backend),
    }
  }

  pub async fn popular(&self, page: u32) -> Result<Value, CatalogError> {
    self
      .backend
      .get(&["movie", "popular"], vec![("page", page.to_string())])
      .await
  }

  pub async fn search(&self, query: &str, page: u32) -> Result<Value, CatalogError> {
    self
      .backend
      .get(
        &["search", "movie"],
        vec![("query", query.to_owned()), ("page", page.to_string())],
      )
      .await
  }

  pub async fn details(&self, id: &str) -> Result<Value, CatalogError> {
    self.backend.get(&["movie", id], vec![]).await
  }

  pub async fn genres(&self) -> Result<Value, CatalogError> {
    self.backend.get(&["genre", "movie", "list"], vec![]).await
  }

  pub async fn discover_by_genre(&self, genre_id: &str, page: u32) -> Result<Value, CatalogError> {
    self
      .backend
      .get(
        &["discover", "movie"],
        vec![
          ("with_genres", genre_id.to_owned()),
          ("page", page.to_string()),
        ],
      )
      .await
  }
}
