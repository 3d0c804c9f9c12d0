use super::{ReviewStore, StoreError};
use crate::models::{Review, ReviewChangeset};
use rocket::tokio::sync::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// Process-local review store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryReviewStore {
  reviews: RwLock<HashMap<Uuid, Review>>,
}

impl MemoryReviewStore {
  pub async fn len(&self) -> usize {
    self.reviews.read().await.len()
  }

  pub async fn is_empty(&self) -> bool {
    self.reviews.read().await.is_empty()
  }

  async fn filter<P>(&self, predicate: P) -> Vec<Review>
  where
    P: Fn(&Review) -> bool,
  {
    let mut found: Vec<Review> = self
      .reviews
      .read()
      .await
      .values()
      .filter(|review| predicate(review))
      .cloned()
      .collect();

    found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    found
  }
}

#[rocket::async_trait]
impl ReviewStore for MemoryReviewStore {
  async fn find(&self, id: Uuid) -> Result<Option<Review>, StoreError> {
    Ok(self.reviews.read().await.get(&id).cloned())
  }

  async fn filter_by_movie(&self, movie_id: &str) -> Result<Vec<Review>, StoreError> {
    Ok(self.filter(|review| review.movie_id == movie_id).await)
  }

  async fn filter_by_user(&self, user_id: &str) -> Result<Vec<Review>, StoreError> {
    Ok(
      self
        .filter(|review| review.user_id.as_deref() == Some(user_id))
        .await,
    )
  }

  async fn create(&self, review: ReviewChangeset) -> Result<Review, StoreError> {
    let review = review
      .build()
      .map_err(|error| StoreError::Incomplete(error.to_string()))?;

    self
      .reviews
      .write()
      .await
      .insert(review.id, review.clone());

    Ok(review)
  }

  async fn update(&self, id: Uuid, changes: ReviewChangeset) -> Result<Option<Review>, StoreError> {
    let mut reviews = self.reviews.write().await;

    Ok(reviews.get_mut(&id).map(|review| {
      review.apply(changes);
      review.clone()
    }))
  }

  async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
    Ok(self.reviews.write().await.remove(&id).is_some())
  }
}
