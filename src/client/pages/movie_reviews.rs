use super::delete_review;
use crate::client::fallback::{load, Fallback, Loadable};
use crate::client::navigation::Route;
use crate::client::samples;
use crate::client::services::{ClientError, MovieApi, ReviewApi};
use crate::client::types::{average_rating, Movie, Review};

#[derive(Debug, Clone, PartialEq)]
pub struct MovieWithReviews {
  pub movie: Movie,
  pub reviews: Vec<Review>,
}

pub struct MovieReviewsPage {
  pub movie_id: String,
  pub content: Loadable<MovieWithReviews>,
  /// Result of the last delete, shown as an alert.
  pub notice: Option<String>,
}

impl MovieReviewsPage {
  pub const EMPTY_MESSAGE: &'static str = "No reviews yet. Be the first to review this movie!";

  pub async fn load(movies: &dyn MovieApi, reviews: &dyn ReviewApi, movie_id: &str) -> Self {
    let request = async {
      let movie = movies.details(movie_id).await?;
      let list = reviews.movie_reviews(movie_id).await?;

      Ok::<_, ClientError>(MovieWithReviews {
        movie: Movie::from(&movie),
        reviews: list,
      })
    };

    let fallback = samples::find_by_param(movie_id).map(|movie| MovieWithReviews {
      movie: movie.clone(),
      reviews: samples::mock_movie_reviews(),
    });

    let content = load(
      request,
      "Failed to load movie and reviews",
      Fallback::from_option(fallback),
    )
    .await;

    MovieReviewsPage {
      movie_id: movie_id.to_owned(),
      content,
      notice: None,
    }
  }

  pub fn movie(&self) -> Option<&Movie> {
    self.content.data().map(|content| &content.movie)
  }

  pub fn reviews(&self) -> &[Review] {
    self
      .content
      .data()
      .map_or(&[][..], |content| content.reviews.as_slice())
  }

  pub fn average_rating(&self) -> f64 {
    average_rating(self.reviews())
  }

  /// Average and count as shown in the movie summary, e.g. `4.5/5 (2 reviews)`.
  pub fn summary(&self) -> String {
    format!(
      "{:.1}/5 ({} reviews)",
      self.average_rating(),
      self.reviews().len()
    )
  }

  pub fn add_review(&self) -> Route {
    Route::AddReview(self.movie_id.clone())
  }

  pub async fn delete(&mut self, reviews: &dyn ReviewApi, review_id: &str) {
    self.notice = match self.content.data.as_mut() {
      Some(content) => delete_review(reviews, &mut content.reviews, review_id).await,
      None => None,
    };
  }
}
