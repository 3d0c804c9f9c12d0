use crate::models::Review;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, JsonSchema, Debug)]
#[serde(rename = "Review", rename_all = "camelCase")]
pub struct ReviewView {
  pub id: Uuid,
  pub movie_id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user_id: Option<String>,
  pub rating: i32,
  pub comment: String,
  pub reviewer_name: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewView {
  fn from(review: Review) -> Self {
    ReviewView {
      id: review.id,
      movie_id: review.movie_id,
      user_id: review.user_id,
      rating: review.rating,
      comment: review.comment,
      reviewer_name: review.reviewer_name,
      created_at: review.created_at.and_utc(),
      updated_at: review.updated_at.and_utc(),
    }
  }
}

#[derive(Serialize, JsonSchema, Debug)]
#[serde(rename = "Deleted")]
pub struct DeletedView {
  pub message: String,
}

impl DeletedView {
  pub fn review() -> Self {
    DeletedView {
      message: "Review deleted successfully".to_owned(),
    }
  }
}
