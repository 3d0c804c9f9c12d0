use crate::client::config::ClientConfig;
use crate::client::navigation::{Route, Sidebar};
use crate::client::pages::Page;
use crate::client::services::{MovieApi, MovieService, ReviewApi, ReviewService};
use std::sync::Arc;

/// A rendered screen: the sidebar around the page the path points at.
pub struct Screen {
  pub route: Route,
  pub sidebar: Sidebar,
  pub page: Page,
}

/// Owns the configuration and both API clients, and opens screens by path.
pub struct App {
  config: ClientConfig,
  movies: Arc<dyn MovieApi>,
  reviews: Arc<dyn ReviewApi>,
}

impl App {
  pub fn new(config: ClientConfig) -> Self {
    let movies = Arc::new(MovieService::new(&config));
    let reviews = Arc::new(ReviewService::new(&config));

    Self::with_services(config, movies, reviews)
  }

  pub fn from_env() -> Self {
    Self::new(ClientConfig::from_env())
  }

  pub fn with_services(
    config: ClientConfig,
    movies: Arc<dyn MovieApi>,
    reviews: Arc<dyn ReviewApi>,
  ) -> Self {
    Self {
      config,
      movies,
      reviews,
    }
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  /// Login is only wired up when a public key for the auth provider is configured.
  pub fn auth_enabled(&self) -> bool {
    self.config.public_api_key.is_some()
  }

  pub fn movies(&self) -> &dyn MovieApi {
    self.movies.as_ref()
  }

  pub fn reviews(&self) -> &dyn ReviewApi {
    self.reviews.as_ref()
  }

  /// Loads the screen for `path`. Unknown paths give `None`.
  pub async fn open(&self, path: &str) -> Option<Screen> {
    let route = match Route::parse(path) {
      Some(route) => route,
      None => {
        log::warn!("No page for path {}", path);
        return None;
      }
    };

    let page = Page::open(
      &route,
      self.movies(),
      self.reviews(),
      self.auth_enabled(),
    )
    .await;

    Some(Screen {
      sidebar: Sidebar::new(&route.path()),
      route,
      page,
    })
  }
}
