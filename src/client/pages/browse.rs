use crate::client::fallback::{load, Fallback, Loadable, UiStatus};
use crate::client::samples;
use crate::client::services::{ClientError, MovieApi};
use crate::client::types::{Genre, Movie, MoviePage};

const MAX_VISIBLE_PAGES: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
  pub pages: Vec<u32>,
  pub current: u32,
  pub previous_disabled: bool,
  pub next_disabled: bool,
}

pub struct BrowsePage {
  pub genres: Vec<Genre>,
  pub movies: Loadable<Vec<Movie>>,
  pub search_term: String,
  pub selected_genre: Option<u64>,
  pub current_page: u32,
  pub total_pages: u32,
}

impl Default for BrowsePage {
  fn default() -> Self {
    Self {
      genres: Vec::new(),
      movies: Loadable::loading(),
      search_term: String::new(),
      selected_genre: None,
      current_page: 1,
      total_pages: 1,
    }
  }
}

fn listing(page: MoviePage) -> (Vec<Movie>, u32) {
  (page.results.iter().map(Movie::from).collect(), page.total_pages)
}

impl BrowsePage {
  pub const EMPTY_MESSAGE: &'static str = "No movies found matching your criteria.";

  pub async fn load(movies: &dyn MovieApi) -> Self {
    let mut page = BrowsePage::default();

    match movies.genres().await {
      Ok(list) => page.genres = list.genres,
      Err(error) => log::error!("Error fetching genres: {}", error),
    }

    page.refresh(movies).await;
    page
  }

  /// Reloads the current page of the selected genre, or of popular movies.
  pub async fn refresh(&mut self, movies: &dyn MovieApi) {
    self.movies = Loadable::loading();

    let (selected_genre, current_page) = (self.selected_genre, self.current_page);
    let request = async {
      let page = match selected_genre {
        Some(genre_id) => movies.by_genre(genre_id, current_page).await?,
        None => movies.popular(current_page).await?,
      };
      Ok::<_, ClientError>(listing(page))
    };

    let fallback = (samples::sample_movies().clone(), self.total_pages);
    let loaded = load(request, "Failed to load movies", Fallback::Use(fallback)).await;

    if let Some((_, total_pages)) = loaded.data() {
      self.total_pages = *total_pages;
    }
    self.movies = loaded.map(|(movies, _)| movies);
  }

  /// Searches by the current term. A failed search keeps the movies on screen.
  pub async fn search(&mut self, movies: &dyn MovieApi) {
    let term = self.search_term.trim().to_owned();
    if term.is_empty() {
      return;
    }

    let request = async { Ok::<_, ClientError>(listing(movies.search(&term, 1).await?)) };
    let loaded = load(request, "Failed to search movies", Fallback::Empty).await;

    match loaded.data {
      Some((results, total_pages)) => {
        self.movies = Loadable::ready(results);
        self.total_pages = total_pages;
        self.current_page = 1;
        self.selected_genre = None;
      }
      None => {
        self.movies.status = UiStatus::Error;
        self.movies.error = loaded.error;
      }
    }
  }

  /// Switches genre, starting over from the first page without a search term.
  pub async fn select_genre(&mut self, movies: &dyn MovieApi, genre_id: Option<u64>) {
    self.selected_genre = genre_id;
    self.current_page = 1;
    self.search_term.clear();
    self.refresh(movies).await;
  }

  pub async fn change_page(&mut self, movies: &dyn MovieApi, page: u32) {
    self.current_page = page;
    self.refresh(movies).await;
  }

  /// Page links to show, `None` when everything fits on one page.
  pub fn pagination(&self) -> Option<Pagination> {
    if self.total_pages <= 1 {
      return None;
    }

    Some(Pagination {
      pages: (1..=self.total_pages.min(MAX_VISIBLE_PAGES)).collect(),
      current: self.current_page,
      previous_disabled: self.current_page == 1,
      next_disabled: self.current_page == self.total_pages,
    })
  }
}
