use super::delete_review;
use crate::client::fallback::{load, Fallback, Loadable};
use crate::client::samples;
use crate::client::services::{MovieApi, ReviewApi};
use crate::client::types::{Movie, Review};

/// Reviews are listed for this id until sign-in exists.
pub const CURRENT_USER_ID: &str = "mock-user-id";
pub const POSTER_PLACEHOLDER: &str = "/placeholder-poster.jpg";

pub struct MyReviewsPage {
  pub reviews: Loadable<Vec<Review>>,
  pub notice: Option<String>,
}

impl MyReviewsPage {
  pub const EMPTY_MESSAGE: &'static str = "You haven't written any reviews yet.";

  pub async fn load(reviews: &dyn ReviewApi) -> Self {
    let fallback = Fallback::Use(samples::mock_user_reviews());
    let loaded = load(reviews.user_reviews(CURRENT_USER_ID), "Failed to load reviews", fallback).await;

    MyReviewsPage {
      reviews: loaded,
      notice: None,
    }
  }

  /// Looks up posters for reviews that came without one.
  pub async fn fill_posters(&mut self, movies: &dyn MovieApi) {
    if let Some(reviews) = self.reviews.data.as_mut() {
      for review in reviews.iter_mut().filter(|review| review.movie_poster.is_none()) {
        review.movie_poster = Some(poster_for(movies, review).await);
      }
    }
  }

  pub async fn delete(&mut self, reviews: &dyn ReviewApi, review_id: &str) {
    self.notice = match self.reviews.data.as_mut() {
      Some(list) => delete_review(reviews, list, review_id).await,
      None => None,
    };
  }
}

/// Poster of the reviewed movie, from the catalog or else the samples. Empty when neither knows it.
pub async fn poster_for(movies: &dyn MovieApi, review: &Review) -> String {
  if let Some(poster) = &review.movie_poster {
    return poster.clone();
  }

  let movie_id = review.movie_id.as_deref().unwrap_or_default();

  match movies.details(movie_id).await {
    Ok(movie) => Movie::from(&movie).poster,
    Err(error) => {
      log::error!("Error fetching movie poster: {}", error);
      samples::find_by_param(movie_id)
        .map(|movie| movie.poster.clone())
        .unwrap_or_default()
    }
  }
}

pub fn poster_or_placeholder(review: &Review) -> &str {
  review
    .movie_poster
    .as_deref()
    .filter(|poster| !poster.is_empty())
    .unwrap_or(POSTER_PLACEHOLDER)
}
