mod movies;
mod reviews;

pub use self::movies::MovieService;
pub use self::reviews::ReviewService;

use crate::client::types::{CatalogMovie, Deleted, GenreList, MoviePage, NewReview, Review, ReviewChanges};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
  #[error("request failed: {0}")]
  Transport(#[from] reqwest::Error),
  #[error("server responded {status}: {message}")]
  Status { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorResponse {
  error: String,
}

/// Client of the `/movies` route group.
#[rocket::async_trait]
pub trait MovieApi: Send + Sync {
  async fn popular(&self, page: u32) -> Result<MoviePage, ClientError>;
  async fn search(&self, query: &str, page: u32) -> Result<MoviePage, ClientError>;
  async fn details(&self, id: &str) -> Result<CatalogMovie, ClientError>;
  async fn genres(&self) -> Result<GenreList, ClientError>;
  async fn by_genre(&self, genre_id: u64, page: u32) -> Result<MoviePage, ClientError>;
}

/// Client of the `/reviews` route group.
#[rocket::async_trait]
pub trait ReviewApi: Send + Sync {
  async fn movie_reviews(&self, movie_id: &str) -> Result<Vec<Review>, ClientError>;
  async fn review(&self, id: &str) -> Result<Review, ClientError>;
  async fn create(&self, review: &NewReview) -> Result<Review, ClientError>;
  async fn update(&self, id: &str, changes: &ReviewChanges) -> Result<Review, ClientError>;
  async fn delete(&self, id: &str) -> Result<Deleted, ClientError>;
  async fn user_reviews(&self, user_id: &str) -> Result<Vec<Review>, ClientError>;
}

/// Sends the request and decodes a JSON body, turning error statuses into
/// [`ClientError::Status`] with the server's `error` message when present.
async fn send<T: DeserializeOwned>(
  request: reqwest::RequestBuilder,
  context: &str,
) -> Result<T, ClientError> {
  let result = receive(request).await;

  if let Err(error) = &result {
    log::error!("Error {}: {}", context, error);
  }

  result
}

async fn receive<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ClientError> {
  let response = request.send().await?;
  let status = response.status();

  if status.is_success() {
    return Ok(response.json::<T>().await?);
  }

  let body = response.text().await?;
  let message = match serde_json::from_str::<ErrorResponse>(&body) {
    Ok(error) => error.error,
    Err(_) => body,
  };

  Err(ClientError::Status {
    status: status.as_u16(),
    message,
  })
}
