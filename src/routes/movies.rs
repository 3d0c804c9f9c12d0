use crate::catalog::CatalogProxy;
use crate::response::{ApiError, QueryResponse, Response};
use rocket::serde::json::Value;
use rocket::{Route, State};
use rocket_okapi::{openapi, openapi_get_routes};

const FIRST_PAGE: u32 = 1;

#[openapi(tag = "Movies")]
#[get("/popular?<page>")]
pub async fn popular(page: Option<u32>, catalog: &State<CatalogProxy>) -> QueryResponse<Value> {
  let movies = catalog
    .popular(page.unwrap_or(FIRST_PAGE))
    .await
    .map_err(ApiError::internal("Failed to fetch popular movies"))?;

  Response::success(movies)
}

#[openapi(tag = "Movies")]
#[get("/search?<query>&<page>")]
pub async fn search(
  query: Option<String>,
  page: Option<u32>,
  catalog: &State<CatalogProxy>,
) -> QueryResponse<Value> {
  let query = match query.filter(|query| !query.is_empty()) {
    Some(query) => query,
    None => return Err(ApiError::BadRequest("Query parameter is required".to_owned())),
  };

  let movies = catalog
    .search(&query, page.unwrap_or(FIRST_PAGE))
    .await
    .map_err(ApiError::internal("Failed to search movies"))?;

  Response::success(movies)
}

#[openapi(tag = "Movies")]
#[get("/<id>")]
pub async fn details(id: &str, catalog: &State<CatalogProxy>) -> QueryResponse<Value> {
  let movie = catalog
    .details(id)
    .await
    .map_err(ApiError::internal("Failed to fetch movie details"))?;

  Response::success(movie)
}

#[openapi(tag = "Movies")]
#[get("/genres/list")]
pub async fn genres(catalog: &State<CatalogProxy>) -> QueryResponse<Value> {
  let genres = catalog
    .genres()
    .await
    .map_err(ApiError::internal("Failed to fetch genres"))?;

  Response::success(genres)
}

#[openapi(tag = "Movies")]
#[get("/discover/genre/<genre_id>?<page>")]
pub async fn discover_by_genre(
  genre_id: &str,
  page: Option<u32>,
  catalog: &State<CatalogProxy>,
) -> QueryResponse<Value> {
  let movies = catalog
    .discover_by_genre(genre_id, page.unwrap_or(FIRST_PAGE))
    .await
    .map_err(ApiError::internal("Failed to fetch movies by genre"))?;

  Response::success(movies)
}

pub fn build() -> Vec<Route> {
  openapi_get_routes![popular, search, details, genres, discover_by_genre]
}
