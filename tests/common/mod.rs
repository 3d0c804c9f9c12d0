#![allow(dead_code)]

use movie_reviews::catalog::{CatalogBackend, CatalogError, CatalogProxy};
use movie_reviews::store::{MemoryReviewStore, ReviewStoreHandle};
use rocket::local::asynchronous::Client;
use rocket::serde::json::{json, Value};
use std::sync::{Arc, Mutex};

/// Catalog stand-in answering every request with the path and parameters it received.
#[derive(Clone, Default)]
pub struct FakeCatalog {
  calls: Arc<Mutex<Vec<String>>>,
}

impl FakeCatalog {
  pub fn calls(&self) -> Vec<String> {
    self.calls.lock().unwrap().clone()
  }
}

#[rocket::async_trait]
impl CatalogBackend for FakeCatalog {
  async fn get(
    &self,
    segments: &[&str],
    params: Vec<(&'static str, String)>,
  ) -> Result<Value, CatalogError> {
    let path = segments.join("/");
    self.calls.lock().unwrap().push(path.clone());

    let params: serde_json::Map<String, Value> = params
      .into_iter()
      .map(|(key, value)| (key.to_owned(), Value::String(value)))
      .collect();

    Ok(json!({ "path": path, "params": params }))
  }
}

/// Catalog stand-in answering with TMDB-shaped movie JSON.
pub struct MovieCatalog;

fn fight_club() -> Value {
  json!({
    "id": 550,
    "title": "Fight Club",
    "release_date": "1999-10-15",
    "vote_average": 8.4,
    "overview": "An insomniac office worker meets a soap salesman.",
    "poster_path": "/fight-club.jpg"
  })
}

#[rocket::async_trait]
impl CatalogBackend for MovieCatalog {
  async fn get(
    &self,
    segments: &[&str],
    params: Vec<(&'static str, String)>,
  ) -> Result<Value, CatalogError> {
    let param = |name: &str| {
      params
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
    };
    let page = param("page").parse::<u32>().unwrap_or(1);

    let body = match segments {
      ["genre", "movie", "list"] => json!({ "genres": [{ "id": 18, "name": "Drama" }] }),
      ["search", "movie"] => json!({
        "page": page,
        "results": [{ "id": 603, "title": param("query") }],
        "total_pages": 1,
        "total_results": 1
      }),
      ["movie", "popular"] | ["discover", "movie"] => json!({
        "page": page,
        "results": [fight_club()],
        "total_pages": 3,
        "total_results": 60
      }),
      ["movie", id] => {
        let mut movie = fight_club();
        movie["id"] = json!(id.parse::<u64>().unwrap_or_default());
        movie["genres"] = json!([{ "id": 18, "name": "Drama" }]);
        movie
      }
      _ => return Err(CatalogError::BaseUrl(segments.join("/"))),
    };

    Ok(body)
  }
}

/// A failing catalog, as when the vendor is unreachable.
pub struct OfflineCatalog;

#[rocket::async_trait]
impl CatalogBackend for OfflineCatalog {
  async fn get(
    &self,
    _segments: &[&str],
    _params: Vec<(&'static str, String)>,
  ) -> Result<Value, CatalogError> {
    Err(CatalogError::BaseUrl("unreachable".into()))
  }
}

pub async fn client_with<B: CatalogBackend + 'static>(catalog: B) -> Client {
  let rocket = movie_reviews::mount(rocket::build())
    .manage(CatalogProxy::new(catalog))
    .manage(ReviewStoreHandle::new(MemoryReviewStore::default()));

  Client::tracked(rocket).await.unwrap()
}

pub async fn client() -> Client {
  client_with(FakeCatalog::default()).await
}
