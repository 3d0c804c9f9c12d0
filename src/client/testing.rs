use crate::client::services::{ClientError, MovieApi, ReviewApi};
use crate::client::types::{
  CatalogMovie, Deleted, Genre, GenreList, MoviePage, NewReview, Review, ReviewChanges,
};
use std::sync::Mutex;

fn offline() -> ClientError {
  ClientError::Status {
    status: 503,
    message: "Database not available".into(),
  }
}

pub fn catalog_movie(id: u64, title: &str) -> CatalogMovie {
  CatalogMovie {
    id,
    title: title.to_owned(),
    release_date: Some("2001-07-20".into()),
    genres: None,
    vote_average: Some(7.5),
    overview: Some(format!("{} overview", title)),
    poster_path: Some(format!("/{}.jpg", id)),
  }
}

pub fn review(id: &str, movie_id: &str, rating: i32) -> Review {
  Review {
    id: id.to_owned(),
    movie_id: Some(movie_id.to_owned()),
    movie_title: None,
    movie_poster: None,
    rating,
    comment: format!("Review {}", id),
    reviewer_name: Some("Sam".into()),
    created_at: None,
    updated_at: None,
  }
}

#[derive(Default)]
pub struct FakeMovies {
  pub fail: bool,
  pub movies: Vec<CatalogMovie>,
  pub total_pages: u32,
  pub calls: Mutex<Vec<String>>,
}

impl FakeMovies {
  pub fn with_movies(count: u64) -> Self {
    Self {
      movies: (1..=count)
        .map(|id| catalog_movie(100 + id, &format!("Movie {}", id)))
        .collect(),
      total_pages: 1,
      ..Default::default()
    }
  }

  pub fn failing() -> Self {
    Self {
      fail: true,
      ..Default::default()
    }
  }

  pub fn calls(&self) -> Vec<String> {
    self.calls.lock().unwrap().clone()
  }

  fn record(&self, call: String) -> Result<(), ClientError> {
    self.calls.lock().unwrap().push(call);

    if self.fail {
      return Err(offline());
    }

    Ok(())
  }

  fn page(&self, page: u32) -> MoviePage {
    MoviePage {
      page,
      results: self.movies.clone(),
      total_pages: self.total_pages,
      total_results: self.movies.len() as u64,
    }
  }
}

#[rocket::async_trait]
impl MovieApi for FakeMovies {
  async fn popular(&self, page: u32) -> Result<MoviePage, ClientError> {
    self.record(format!("popular {}", page))?;
    Ok(self.page(page))
  }

  async fn search(&self, query: &str, page: u32) -> Result<MoviePage, ClientError> {
    self.record(format!("search {} {}", query, page))?;
    Ok(self.page(page))
  }

  async fn details(&self, id: &str) -> Result<CatalogMovie, ClientError> {
    self.record(format!("details {}", id))?;

    self
      .movies
      .iter()
      .find(|movie| movie.id.to_string() == id)
      .cloned()
      .ok_or(ClientError::Status {
        status: 500,
        message: "Failed to fetch movie details".into(),
      })
  }

  async fn genres(&self) -> Result<GenreList, ClientError> {
    self.record("genres".into())?;

    Ok(GenreList {
      genres: vec![
        Genre {
          id: 18,
          name: "Drama".into(),
        },
        Genre {
          id: 35,
          name: "Comedy".into(),
        },
      ],
    })
  }

  async fn by_genre(&self, genre_id: u64, page: u32) -> Result<MoviePage, ClientError> {
    self.record(format!("genre {} {}", genre_id, page))?;
    Ok(self.page(page))
  }
}

#[derive(Default)]
pub struct FakeReviews {
  pub fail: bool,
  pub reviews: Mutex<Vec<Review>>,
  pub calls: Mutex<Vec<String>>,
}

impl FakeReviews {
  pub fn with_reviews(reviews: Vec<Review>) -> Self {
    Self {
      reviews: Mutex::new(reviews),
      ..Default::default()
    }
  }

  pub fn failing() -> Self {
    Self {
      fail: true,
      ..Default::default()
    }
  }

  pub fn calls(&self) -> Vec<String> {
    self.calls.lock().unwrap().clone()
  }

  fn record(&self, call: String) -> Result<(), ClientError> {
    self.calls.lock().unwrap().push(call);

    if self.fail {
      return Err(offline());
    }

    Ok(())
  }

  fn not_found() -> ClientError {
    ClientError::Status {
      status: 404,
      message: "Review not found".into(),
    }
  }
}

#[rocket::async_trait]
impl ReviewApi for FakeReviews {
  async fn movie_reviews(&self, movie_id: &str) -> Result<Vec<Review>, ClientError> {
    self.record(format!("movie {}", movie_id))?;

    let reviews = self.reviews.lock().unwrap();
    Ok(
      reviews
        .iter()
        .filter(|review| review.movie_id.as_deref() == Some(movie_id))
        .cloned()
        .collect(),
    )
  }

  async fn review(&self, id: &str) -> Result<Review, ClientError> {
    self.record(format!("get {}", id))?;

    let reviews = self.reviews.lock().unwrap();
    reviews
      .iter()
      .find(|review| review.id == id)
      .cloned()
      .ok_or_else(Self::not_found)
  }

  async fn create(&self, new: &NewReview) -> Result<Review, ClientError> {
    self.record(format!("create {}", new.movie_id))?;

    let mut reviews = self.reviews.lock().unwrap();
    let created = Review {
      id: (reviews.len() + 1).to_string(),
      movie_id: Some(new.movie_id.clone()),
      movie_title: None,
      movie_poster: None,
      rating: new.rating,
      comment: new.comment.clone(),
      reviewer_name: Some(new.reviewer_name.clone()),
      created_at: None,
      updated_at: None,
    };
    reviews.push(created.clone());
    Ok(created)
  }

  async fn update(&self, id: &str, changes: &ReviewChanges) -> Result<Review, ClientError> {
    self.record(format!("update {}", id))?;

    let mut reviews = self.reviews.lock().unwrap();
    let review = reviews
      .iter_mut()
      .find(|review| review.id == id)
      .ok_or_else(Self::not_found)?;

    if let Some(rating) = changes.rating {
      review.rating = rating;
    }
    if let Some(comment) = &changes.comment {
      review.comment = comment.clone();
    }
    if let Some(reviewer_name) = &changes.reviewer_name {
      review.reviewer_name = Some(reviewer_name.clone());
    }

    Ok(review.clone())
  }

  async fn delete(&self, id: &str) -> Result<Deleted, ClientError> {
    self.record(format!("delete {}", id))?;

    let mut reviews = self.reviews.lock().unwrap();
    reviews.retain(|review| review.id != id);

    Ok(Deleted {
      message: "Review deleted successfully".into(),
    })
  }

  async fn user_reviews(&self, user_id: &str) -> Result<Vec<Review>, ClientError> {
    self.record(format!("user {}", user_id))?;
    Ok(self.reviews.lock().unwrap().clone())
  }
}
