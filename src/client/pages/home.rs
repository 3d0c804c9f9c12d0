use crate::client::fallback::{load, Fallback, Loadable};
use crate::client::samples;
use crate::client::services::{ClientError, MovieApi};
use crate::client::types::Movie;

const FEATURED_COUNT: usize = 3;

pub struct HomePage {
  pub featured: Loadable<Vec<Movie>>,
}

impl HomePage {
  pub const TITLE: &'static str = "Welcome to Movie Review Platform";
  pub const TAGLINE: &'static str = "Discover, review, and share your thoughts on the best movies";

  /// Features the first few popular movies.
  pub async fn load(movies: &dyn MovieApi) -> Self {
    let request = async {
      let page = movies.popular(1).await?;

      Ok::<_, ClientError>(
        page
          .results
          .iter()
          .take(FEATURED_COUNT)
          .map(Movie::from)
          .collect(),
      )
    };

    let fallback = samples::sample_movies()
      .iter()
      .take(FEATURED_COUNT)
      .cloned()
      .collect();

    let featured = load(request, "Failed to load featured movies", Fallback::Use(fallback)).await;
    HomePage { featured }
  }
}
