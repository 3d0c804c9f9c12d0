use crate::catalog::{CatalogBackend, CatalogError};
use crate::config::Config;
use reqwest::Url;
use rocket::serde::json::Value;

/// TMDB v3 client. The API key travels as the `api_key` query parameter.
pub struct TmdbClient {
  http: reqwest::Client,
  base_url: Url,
  api_key: String,
}

impl TmdbClient {
  pub fn new(config: &Config) -> Result<Self, CatalogError> {
    let base_url = Url::parse(&config.tmdb_base_url)
      .map_err(|error| CatalogError::BaseUrl(format!("{}: {}", config.tmdb_base_url, error)))?;

    if base_url.cannot_be_a_base() {
      return Err(CatalogError::BaseUrl(config.tmdb_base_url.clone()));
    }

    if config.tmdb_api_key.is_empty() {
      log::warn!("TMDB API key is not configured, catalog requests will be rejected upstream");
    }

    Ok(Self {
      http: reqwest::Client::builder().build()?,
      base_url,
      api_key: config.tmdb_api_key.clone(),
    })
  }

  fn url(&self, segments: &[&str]) -> Result<Url, CatalogError> {
    let mut url = self.base_url.clone();

    url
      .path_segments_mut()
      .map_err(|_| CatalogError::BaseUrl(self.base_url.to_string()))?
      .pop_if_empty()
      .extend(segments);

    Ok(url)
  }
}

#[rocket::async_trait]
impl CatalogBackend for TmdbClient {
  async fn get(
    &self,
    segments: &[&str],
    params: Vec<(&'static str, String)>,
  ) -> Result<Value, CatalogError> {
    let response = self
      .http
      .get(self.url(segments)?)
      .query(&[("api_key", self.api_key.as_str())])
      .query(&params)
      .send()
      .await?
      .error_for_status()?;

    Ok(response.json::<Value>().await?)
  }
}
