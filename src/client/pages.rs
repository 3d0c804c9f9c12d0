//! One view model per screen. Each is loaded through [`fallback::load`] and
//! exposes what its screen renders.
//!
//! [`fallback::load`]: crate::client::fallback::load

pub mod about;
pub mod add_review;
pub mod browse;
pub mod home;
pub mod login;
pub mod movie_detail;
pub mod movie_reviews;
pub mod my_reviews;
pub mod review_form;
pub mod search;
pub mod update_review;

use crate::client::fallback::{load, Fallback, Loadable};
use crate::client::navigation::Route;
use crate::client::samples;
use crate::client::services::{ClientError, MovieApi, ReviewApi};
use crate::client::types::{Movie, Review};

pub const MOVIE_NOT_FOUND: &str = "Movie not found";

/// Where a page sends the user after a successful action, with the notice to show.
#[derive(Debug, Clone, PartialEq)]
pub struct Redirect {
  pub to: Route,
  pub notice: String,
}

impl Redirect {
  pub fn new(to: Route, notice: &str) -> Self {
    Self {
      to,
      notice: notice.to_owned(),
    }
  }
}

/// Loads a movie by route param, falling back to the sample with the same id.
async fn load_movie(movies: &dyn MovieApi, id: &str) -> Loadable<Movie> {
  let request = async {
    let movie = movies.details(id).await?;
    Ok::<_, ClientError>(Movie::from(&movie))
  };

  let fallback = Fallback::from_option(samples::find_by_param(id).cloned());
  load(request, "Failed to load movie details", fallback).await
}

/// Deletes a review and drops it from `list`. Returns the notice to show on failure.
async fn delete_review(reviews: &dyn ReviewApi, list: &mut Vec<Review>, id: &str) -> Option<String> {
  match reviews.delete(id).await {
    Ok(_) => {
      list.retain(|review| review.id != id);
      None
    }
    Err(error) => {
      log::error!("Error deleting review: {}", error);
      Some("Failed to delete review".to_owned())
    }
  }
}

pub enum Page {
  Home(home::HomePage),
  Browse(browse::BrowsePage),
  Search(search::SearchPage),
  MyReviews(my_reviews::MyReviewsPage),
  About(about::AboutPage),
  Login(login::LoginPage),
  MovieDetail(movie_detail::MovieDetailPage),
  AddReview(add_review::AddReviewPage),
  UpdateReview(update_review::UpdateReviewPage),
  MovieReviews(movie_reviews::MovieReviewsPage),
}

impl Page {
  /// Builds and loads the page a route points at.
  pub async fn open(
    route: &Route,
    movies: &dyn MovieApi,
    reviews: &dyn ReviewApi,
    auth_enabled: bool,
  ) -> Page {
    match route {
      Route::Home => Page::Home(home::HomePage::load(movies).await),
      Route::Browse => Page::Browse(browse::BrowsePage::load(movies).await),
      Route::Search => Page::Search(search::SearchPage::default()),
      Route::MyReviews => Page::MyReviews(my_reviews::MyReviewsPage::load(reviews).await),
      Route::About => Page::About(about::AboutPage::default()),
      Route::Login => Page::Login(login::LoginPage::new(auth_enabled)),
      Route::Movie(id) => Page::MovieDetail(movie_detail::MovieDetailPage::load(movies, id).await),
      Route::AddReview(id) => Page::AddReview(add_review::AddReviewPage::load(movies, id).await),
      Route::UpdateReview(id) => {
        Page::UpdateReview(update_review::UpdateReviewPage::load(movies, reviews, id).await)
      }
      Route::Reviews(id) => {
        Page::MovieReviews(movie_reviews::MovieReviewsPage::load(movies, reviews, id).await)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::client::testing::{review, FakeMovies, FakeReviews};

  #[rocket::async_test]
  async fn opens_the_page_a_route_points_at() {
    let movies = FakeMovies::with_movies(2);
    let reviews = FakeReviews::default();

    let page = Page::open(&Route::Movie("101".into()), &movies, &reviews, false).await;

    match page {
      Page::MovieDetail(page) => assert_eq!(
        page.movie.data().map(|movie| movie.title.as_str()),
        Some("Movie 1")
      ),
      _ => panic!("expected the movie detail page"),
    }
  }

  #[rocket::async_test]
  async fn failed_deletes_keep_the_review() {
    let api = FakeReviews::failing();
    let mut list = vec![review("1", "550", 4)];

    let notice = delete_review(&api, &mut list, "1").await;

    assert_eq!(notice.as_deref(), Some("Failed to delete review"));
    assert_eq!(list.len(), 1);
  }
}
