//! Built-in data pages fall back to when the API cannot be reached.

use crate::client::types::{Movie, Review};
use chrono::{DateTime, TimeZone, Utc};
use lazy_static::lazy_static;

lazy_static! {
  static ref SAMPLE_MOVIES: Vec<Movie> = vec![
    sample(
      1,
      "The Shawshank Redemption",
      1994,
      "Drama",
      "Frank Darabont",
      9.3,
      "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
      "https://m.media-amazon.com/images/M/MV5BNDE3ODcxYzMtY2YzZC00NmNlLWJiNDMtZDViZWM2MzIxZDYwXkEyXkFqcGdeQXVyNjAwNDUxODI@._V1_SX300.jpg",
    ),
    sample(
      2,
      "The Godfather",
      1972,
      "Crime, Drama",
      "Francis Ford Coppola",
      9.2,
      "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
      "https://m.media-amazon.com/images/M/MV5BM2MyNjYxNmUtYTAwNi00MTYxLWJmNWYtYzZlODY3ZTk3OTFlXkEyXkFqcGdeQXVyNzkwMjQ5NzM@._V1_SX300.jpg",
    ),
    sample(
      3,
      "The Dark Knight",
      2008,
      "Action, Crime, Drama",
      "Christopher Nolan",
      9.0,
      "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
      "https://m.media-amazon.com/images/M/MV5BMTMxNTMwODM0NF5BMl5BanBnXkFtZTcwODAyMTk2Mw@@._V1_SX300.jpg",
    ),
    sample(
      4,
      "Pulp Fiction",
      1994,
      "Crime, Drama",
      "Quentin Tarantino",
      8.9,
      "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner bandits intertwine in four tales of violence and redemption.",
      "https://m.media-amazon.com/images/M/MV5BNGNhMDIzZTUtNTBlZi00MTRlLWFjM2ItYzViMjE3YzI5MjljXkEyXkFqcGdeQXVyNzkwMjQ5NzM@._V1_SX300.jpg",
    ),
    sample(
      5,
      "Inception",
      2010,
      "Action, Sci-Fi, Thriller",
      "Christopher Nolan",
      8.8,
      "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
      "https://m.media-amazon.com/images/M/MV5BMjAxMzY3NjcxNF5BMl5BanBnXkFtZTcwNTI5OTM0Mw@@._V1_SX300.jpg",
    ),
  ];
}

#[allow(clippy::too_many_arguments)]
fn sample(
  id: u64,
  title: &str,
  year: i32,
  genre: &str,
  director: &str,
  rating: f64,
  description: &str,
  poster: &str,
) -> Movie {
  Movie {
    id,
    title: title.to_owned(),
    year: Some(year),
    genre: genre.to_owned(),
    director: director.to_owned(),
    rating,
    description: description.to_owned(),
    poster: poster.to_owned(),
  }
}

pub fn sample_movies() -> &'static Vec<Movie> {
  &SAMPLE_MOVIES
}

pub fn find(id: u64) -> Option<&'static Movie> {
  sample_movies().iter().find(|movie| movie.id == id)
}

/// Looks a sample up by a route parameter, which may not be numeric.
pub fn find_by_param(id: &str) -> Option<&'static Movie> {
  id.trim().parse().ok().and_then(find)
}

pub fn search(query: &str) -> Vec<Movie> {
  sample_movies()
    .iter()
    .filter(|movie| movie.matches(query))
    .cloned()
    .collect()
}

fn day(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
  Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

fn mock(id: &str, rating: i32, comment: &str, created_at: Option<DateTime<Utc>>) -> Review {
  Review {
    id: id.to_owned(),
    movie_id: None,
    movie_title: None,
    movie_poster: None,
    rating,
    comment: comment.to_owned(),
    reviewer_name: None,
    created_at,
    updated_at: created_at,
  }
}

pub fn mock_movie_reviews() -> Vec<Review> {
  vec![
    Review {
      reviewer_name: Some("Alice Johnson".into()),
      ..mock(
        "1",
        5,
        "Absolutely brilliant! One of the best movies I've ever seen.",
        day(2023, 11, 15),
      )
    },
    Review {
      reviewer_name: Some("Bob Smith".into()),
      ..mock(
        "2",
        4,
        "Great story and excellent performances. Highly recommended.",
        day(2023, 11, 10),
      )
    },
    Review {
      reviewer_name: Some("Charlie Brown".into()),
      ..mock(
        "3",
        5,
        "Masterpiece! The direction and cinematography are outstanding.",
        day(2023, 11, 8),
      )
    },
  ]
}

pub fn mock_user_reviews() -> Vec<Review> {
  vec![
    Review {
      movie_id: Some("1".into()),
      movie_title: Some("The Shawshank Redemption".into()),
      ..mock(
        "1",
        5,
        "An absolute masterpiece. The story and performances are incredible.",
        day(2023, 11, 15),
      )
    },
    Review {
      movie_id: Some("2".into()),
      movie_title: Some("The Godfather".into()),
      ..mock(
        "2",
        4,
        "Classic film with great acting. A bit long but worth it.",
        day(2023, 11, 12),
      )
    },
  ]
}

/// Stand-in for a review that failed to load on the edit page.
pub fn mock_review(id: &str) -> Review {
  Review {
    reviewer_name: Some("John Doe".into()),
    ..mock(id, 4, "Great movie! Highly recommended.", None)
  }
}
