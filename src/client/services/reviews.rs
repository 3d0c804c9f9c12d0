use super::{send, ClientError, ReviewApi};
use crate::client::config::ClientConfig;
use crate::client::types::{Deleted, NewReview, Review, ReviewChanges};

pub struct ReviewService {
  http: reqwest::Client,
  base_url: String,
}

impl ReviewService {
  pub fn new(config: &ClientConfig) -> Self {
    Self {
      http: reqwest::Client::new(),
      base_url: format!("{}/reviews", config.api_url),
    }
  }
}

#[rocket::async_trait]
impl ReviewApi for ReviewService {
  async fn movie_reviews(&self, movie_id: &str) -> Result<Vec<Review>, ClientError> {
    let request = self.http.get(format!("{}/movie/{}", self.base_url, movie_id));

    send(request, "fetching movie reviews").await
  }

  async fn review(&self, id: &str) -> Result<Review, ClientError> {
    let request = self.http.get(format!("{}/{}", self.base_url, id));

    send(request, "fetching review").await
  }

  async fn create(&self, review: &NewReview) -> Result<Review, ClientError> {
    let request = self.http.post(&self.base_url).json(review);

    send(request, "creating review").await
  }

  async fn update(&self, id: &str, changes: &ReviewChanges) -> Result<Review, ClientError> {
    let request = self
      .http
      .put(format!("{}/{}", self.base_url, id))
      .json(changes);

    send(request, "updating review").await
  }

  async fn delete(&self, id: &str) -> Result<Deleted, ClientError> {
    let request = self.http.delete(format!("{}/{}", self.base_url, id));

    send(request, "deleting review").await
  }

  async fn user_reviews(&self, user_id: &str) -> Result<Vec<Review>, ClientError> {
    let request = self.http.get(format!("{}/user/{}", self.base_url, user_id));

    send(request, "fetching user reviews").await
  }
}
