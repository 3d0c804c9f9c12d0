use super::{load_movie, MOVIE_NOT_FOUND};
use crate::client::fallback::Loadable;
use crate::client::navigation::Route;
use crate::client::services::MovieApi;
use crate::client::types::Movie;

pub struct MovieDetailPage {
  pub id: String,
  pub movie: Loadable<Movie>,
}

impl MovieDetailPage {
  pub async fn load(movies: &dyn MovieApi, id: &str) -> Self {
    MovieDetailPage {
      id: id.to_owned(),
      movie: load_movie(movies, id).await,
    }
  }

  /// Neither the catalog nor the samples know this movie.
  pub fn not_found(&self) -> bool {
    !self.movie.is_loading() && self.movie.data().is_none()
  }

  pub fn heading(&self) -> &str {
    self
      .movie
      .data()
      .map_or(MOVIE_NOT_FOUND, |movie| movie.title.as_str())
  }

  pub fn add_review(&self) -> Route {
    Route::AddReview(self.id.clone())
  }

  pub fn reviews(&self) -> Route {
    Route::Reviews(self.id.clone())
  }

  pub fn back(&self) -> Route {
    Route::Browse
  }
}
