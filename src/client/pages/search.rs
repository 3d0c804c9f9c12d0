use crate::client::fallback::{load, Fallback, Loadable};
use crate::client::samples;
use crate::client::services::{ClientError, MovieApi};
use crate::client::types::Movie;

pub struct SearchPage {
  pub query: String,
  pub results: Loadable<Vec<Movie>>,
}

impl Default for SearchPage {
  fn default() -> Self {
    Self {
      query: String::new(),
      results: Loadable::ready(Vec::new()),
    }
  }
}

impl SearchPage {
  /// Runs the query. A blank query clears the results without a request and a
  /// failed one filters the samples locally.
  pub async fn submit(&mut self, movies: &dyn MovieApi) {
    if self.query.trim().is_empty() {
      self.results = Loadable::ready(Vec::new());
      return;
    }

    self.results = Loadable::loading();

    let query = self.query.as_str();
    let request = async {
      let page = movies.search(query, 1).await?;
      Ok::<_, ClientError>(page.results.iter().map(Movie::from).collect())
    };

    let fallback = Fallback::Use(samples::search(query));
    self.results = load(request, "Failed to search movies", fallback).await;
  }

  pub fn heading(&self) -> Option<String> {
    match self.results.data() {
      Some(results) if !results.is_empty() => Some(format!("Search Results ({})", results.len())),
      _ => None,
    }
  }

  pub fn empty_message(&self) -> Option<String> {
    let empty = self.results.data().map_or(true, Vec::is_empty);

    if self.results.is_loading() || self.query.is_empty() || !empty {
      return None;
    }

    Some(format!("No movies found for \"{}\"", self.query))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::client::testing::FakeMovies;

  fn page(query: &str) -> SearchPage {
    SearchPage {
      query: query.to_owned(),
      ..Default::default()
    }
  }

  #[rocket::async_test]
  async fn blank_queries_clear_without_a_request() {
    let movies = FakeMovies::with_movies(3);
    let mut search = page("  ");

    search.submit(&movies).await;

    assert!(movies.calls().is_empty());
    assert_eq!(search.results.data().map(Vec::len), Some(0));
  }

  #[rocket::async_test]
  async fn shows_catalog_results() {
    let movies = FakeMovies::with_movies(3);
    let mut search = page("movie");

    search.submit(&movies).await;

    assert_eq!(movies.calls(), vec!["search movie 1"]);
    assert_eq!(search.heading().as_deref(), Some("Search Results (3)"));
  }

  #[rocket::async_test]
  async fn filters_samples_when_the_catalog_fails() {
    let mut search = page("Nolan");

    search.submit(&FakeMovies::failing()).await;

    let titles: Vec<&str> = search
      .results
      .data()
      .unwrap()
      .iter()
      .map(|movie| movie.title.as_str())
      .collect();
    assert_eq!(titles, vec!["The Dark Knight", "Inception"]);
    assert_eq!(search.results.error.as_deref(), Some("Failed to search movies"));
  }

  #[rocket::async_test]
  async fn reports_queries_without_matches() {
    let mut search = page("zzz");

    search.submit(&FakeMovies::failing()).await;

    assert_eq!(search.heading(), None);
    assert_eq!(
      search.empty_message().as_deref(),
      Some("No movies found for \"zzz\"")
    );
  }
}
