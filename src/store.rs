mod memory;
mod postgres;

pub use memory::MemoryReviewStore;
pub use postgres::PgReviewStore;

use crate::config::{Config, ReviewStoreKind};
use crate::models::{Review, ReviewChangeset};
use rocket::tokio::task::JoinError;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
  #[error("query failed: {0}")]
  Query(#[from] diesel::result::Error),
  #[error("connection pool failed: {0}")]
  Pool(#[from] diesel::r2d2::PoolError),
  #[error("blocking task failed: {0}")]
  Task(#[from] JoinError),
  #[error("migrations failed: {0}")]
  Migration(String),
  #[error("incomplete review: {0}")]
  Incomplete(String),
}

/// Review persistence. Listings are newest first.
#[rocket::async_trait]
pub trait ReviewStore: Send + Sync {
  async fn find(&self, id: Uuid) -> Result<Option<Review>, StoreError>;
  async fn filter_by_movie(&self, movie_id: &str) -> Result<Vec<Review>, StoreError>;
  async fn filter_by_user(&self, user_id: &str) -> Result<Vec<Review>, StoreError>;
  async fn create(&self, review: ReviewChangeset) -> Result<Review, StoreError>;
  /// Returns `None` when no review has this id.
  async fn update(&self, id: Uuid, changes: ReviewChangeset) -> Result<Option<Review>, StoreError>;
  /// Returns whether a review was removed.
  async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// The store chosen at startup, absent when it could not be established.
#[derive(Clone)]
pub struct ReviewStoreHandle(Option<Arc<dyn ReviewStore>>);

impl ReviewStoreHandle {
  pub fn new<S: ReviewStore + 'static>(store: S) -> Self {
    Self(Some(Arc::new(store)))
  }

  pub fn unavailable() -> Self {
    Self(None)
  }

  pub fn get(&self) -> Option<Arc<dyn ReviewStore>> {
    self.0.clone()
  }

  pub fn is_available(&self) -> bool {
    self.0.is_some()
  }
}

pub async fn init(config: &Config) -> ReviewStoreHandle {
  match config.review_store {
    ReviewStoreKind::Memory => {
      log::info!("Using in-memory review store");
      ReviewStoreHandle::new(MemoryReviewStore::default())
    }
    ReviewStoreKind::Postgres => {
      let database_url = match config.resolve_database_url() {
        Some(database_url) => database_url,
        None => {
          log::warn!("Database URL not found in file or environment variables");
          log::warn!("Running without a review store, review endpoints will respond 503");
          return ReviewStoreHandle::unavailable();
        }
      };

      match PgReviewStore::connect(database_url).await {
        Ok(store) => {
          log::info!("Review store connected");
          ReviewStoreHandle::new(store)
        }
        Err(error) => {
          log::warn!("Review store initialization failed: {}", error);
          log::warn!("Running without a review store, review endpoints will respond 503");
          ReviewStoreHandle::unavailable()
        }
      }
    }
  }
}
