use super::review_form::ReviewForm;
use super::{load_movie, Redirect, MOVIE_NOT_FOUND};
use crate::client::fallback::Loadable;
use crate::client::navigation::Route;
use crate::client::services::{MovieApi, ReviewApi};
use crate::client::types::Movie;

pub const SUBMITTED: &str = "Review submitted successfully!";
pub const SUBMIT_FAILED: &str = "Failed to submit review. Please try again.";
pub const REQUIRED_FIELDS: &str = "Please fill in your name and a comment.";

pub struct AddReviewPage {
  pub movie_id: String,
  pub movie: Loadable<Movie>,
  pub form: ReviewForm,
  pub submitting: bool,
}

impl AddReviewPage {
  pub async fn load(movies: &dyn MovieApi, movie_id: &str) -> Self {
    AddReviewPage {
      movie_id: movie_id.to_owned(),
      movie: load_movie(movies, movie_id).await,
      form: ReviewForm::default(),
      submitting: false,
    }
  }

  /// Creates the review and heads back to the movie. The error is the alert to show.
  pub async fn submit(&mut self, reviews: &dyn ReviewApi) -> Result<Redirect, String> {
    if !self.form.missing().is_empty() {
      return Err(REQUIRED_FIELDS.to_owned());
    }

    self.submitting = true;
    let result = reviews.create(&self.form.to_new_review(&self.movie_id)).await;
    self.submitting = false;

    match result {
      Ok(_) => Ok(Redirect::new(self.cancel(), SUBMITTED)),
      Err(error) => {
        log::error!("Error submitting review: {}", error);
        Err(SUBMIT_FAILED.to_owned())
      }
    }
  }

  pub fn heading(&self) -> String {
    match self.movie.data() {
      Some(movie) => format!("Add Review for {}", movie.title),
      None => MOVIE_NOT_FOUND.to_owned(),
    }
  }

  pub fn cancel(&self) -> Route {
    Route::Movie(self.movie_id.clone())
  }
}
