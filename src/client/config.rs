use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
  /// Base URL of the review API, including the `/api` prefix.
  pub api_url: String,
  /// Public key of the authentication provider. Login is a stub, so this is only reported.
  pub public_api_key: Option<String>,
}

impl ClientConfig {
  pub fn new<S: Into<String>>(api_url: S) -> Self {
    Self {
      api_url: api_url.into().trim_end_matches('/').to_owned(),
      public_api_key: None,
    }
  }

  pub fn from_env() -> Self {
    let api_url = env::var("MOVIE_REVIEWS_API_URL").unwrap_or_else(|_| {
      log::info!("MOVIE_REVIEWS_API_URL not set, using default: {}", DEFAULT_API_URL);
      DEFAULT_API_URL.to_owned()
    });

    let public_api_key = env::var("MOVIE_REVIEWS_PUBLIC_API_KEY")
      .ok()
      .filter(|key| !key.is_empty());

    if public_api_key.is_none() {
      log::warn!("MOVIE_REVIEWS_PUBLIC_API_KEY not set, authentication stays disabled");
    }

    Self {
      public_api_key,
      ..Self::new(api_url)
    }
  }
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self::new(DEFAULT_API_URL)
  }
}
