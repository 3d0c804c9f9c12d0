use super::{send, ClientError, MovieApi};
use crate::client::config::ClientConfig;
use crate::client::types::{CatalogMovie, GenreList, MoviePage};

pub struct MovieService {
  http: reqwest::Client,
  base_url: String,
}

impl MovieService {
  pub fn new(config: &ClientConfig) -> Self {
    Self {
      http: reqwest::Client::new(),
      base_url: format!("{}/movies", config.api_url),
    }
  }
}

#[rocket::async_trait]
impl MovieApi for MovieService {
  async fn popular(&self, page: u32) -> Result<MoviePage, ClientError> {
    let request = self
      .http
      .get(format!("{}/popular", self.base_url))
      .query(&[("page", page)]);

    send(request, "fetching popular movies").await
  }

  async fn search(&self, query: &str, page: u32) -> Result<MoviePage, ClientError> {
    let page = page.to_string();
    let request = self
      .http
      .get(format!("{}/search", self.base_url))
      .query(&[("query", query), ("page", page.as_str())]);

    send(request, "searching movies").await
  }

  async fn details(&self, id: &str) -> Result<CatalogMovie, ClientError> {
    let request = self.http.get(format!("{}/{}", self.base_url, id));

    send(request, "fetching movie details").await
  }

  async fn genres(&self) -> Result<GenreList, ClientError> {
    let request = self.http.get(format!("{}/genres/list", self.base_url));

    send(request, "fetching genres").await
  }

  async fn by_genre(&self, genre_id: u64, page: u32) -> Result<MoviePage, ClientError> {
    let request = self
      .http
      .get(format!("{}/discover/genre/{}", self.base_url, genre_id))
      .query(&[("page", page)]);

    send(request, "fetching movies by genre").await
  }
}
