use super::add_review::REQUIRED_FIELDS;
use super::review_form::ReviewForm;
use super::Redirect;
use crate::client::fallback::{load, Fallback, Loadable, UiStatus};
use crate::client::navigation::Route;
use crate::client::samples;
use crate::client::services::{ClientError, MovieApi, ReviewApi};
use crate::client::types::{Movie, Review};

pub const UPDATED: &str = "Review updated successfully!";
pub const UPDATE_FAILED: &str = "Failed to update review. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewWithMovie {
  pub review: Review,
  pub movie: Option<Movie>,
}

pub struct UpdateReviewPage {
  pub review_id: String,
  pub content: Loadable<ReviewWithMovie>,
  pub form: ReviewForm,
  pub submitting: bool,
}

impl UpdateReviewPage {
  /// Loads the review, then the movie it belongs to. A review that loaded is
  /// kept even when its movie does not.
  pub async fn load(movies: &dyn MovieApi, reviews: &dyn ReviewApi, review_id: &str) -> Self {
    const LOAD_FAILED: &str = "Failed to load review data";

    let loaded = load(
      reviews.review(review_id),
      LOAD_FAILED,
      Fallback::Use(samples::mock_review(review_id)),
    )
    .await;

    let content = match (loaded.status, loaded.data) {
      (UiStatus::Ready, Some(review)) => {
        let movie_id = review.movie_id.clone().unwrap_or_default();
        let fallback = ReviewWithMovie {
          review: review.clone(),
          movie: samples::find_by_param(&movie_id).cloned(),
        };

        let request = async {
          let movie = movies.details(&movie_id).await?;

          Ok::<_, ClientError>(ReviewWithMovie {
            review,
            movie: Some(Movie::from(&movie)),
          })
        };

        load(request, LOAD_FAILED, Fallback::Use(fallback)).await
      }
      (status, data) => Loadable {
        status,
        data: data.map(|review| ReviewWithMovie {
          review,
          movie: samples::find_by_param(review_id).cloned(),
        }),
        error: loaded.error,
      },
    };

    let form = content
      .data()
      .map(|content| ReviewForm::from_review(&content.review))
      .unwrap_or_default();

    UpdateReviewPage {
      review_id: review_id.to_owned(),
      content,
      form,
      submitting: false,
    }
  }

  pub fn movie(&self) -> Option<&Movie> {
    self.content.data().and_then(|content| content.movie.as_ref())
  }

  pub fn heading(&self) -> String {
    match self.movie() {
      Some(movie) => format!("Update Review for {}", movie.title),
      None => "Review not found".to_owned(),
    }
  }

  /// Back to the review's movie, or to the user's reviews when it has none.
  pub fn cancel(&self) -> Route {
    self
      .content
      .data()
      .and_then(|content| content.review.movie_id.clone())
      .map_or(Route::MyReviews, Route::Movie)
  }

  pub async fn submit(&mut self, reviews: &dyn ReviewApi) -> Result<Redirect, String> {
    if !self.form.missing().is_empty() {
      return Err(REQUIRED_FIELDS.to_owned());
    }

    self.submitting = true;
    let result = reviews.update(&self.review_id, &self.form.to_changes()).await;
    self.submitting = false;

    match result {
      Ok(_) => Ok(Redirect::new(self.cancel(), UPDATED)),
      Err(error) => {
        log::error!("Error updating review: {}", error);
        Err(UPDATE_FAILED.to_owned())
      }
    }
  }
}
