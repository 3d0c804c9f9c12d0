use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/300x450?text=No+Image";
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Genre {
  pub id: u64,
  pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreList {
  #[serde(default)]
  pub genres: Vec<Genre>,
}

/// A movie as the catalog returns it, in listings or in full detail.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogMovie {
  pub id: u64,
  #[serde(default)]
  pub title: String,
  pub release_date: Option<String>,
  pub genres: Option<Vec<Genre>>,
  pub vote_average: Option<f64>,
  pub overview: Option<String>,
  pub poster_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoviePage {
  #[serde(default)]
  pub page: u32,
  #[serde(default)]
  pub results: Vec<CatalogMovie>,
  #[serde(default)]
  pub total_pages: u32,
  #[serde(default)]
  pub total_results: u64,
}

/// The movie shape every page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
  pub id: u64,
  pub title: String,
  pub year: Option<i32>,
  pub genre: String,
  pub director: String,
  pub rating: f64,
  pub description: String,
  pub poster: String,
}

impl Movie {
  pub fn year_label(&self) -> String {
    self
      .year
      .map(|year| year.to_string())
      .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
  }

  pub fn rating_label(&self) -> String {
    format!("{:.1}", self.rating)
  }

  /// First `len` characters of the description followed by an ellipsis.
  pub fn excerpt(&self, len: usize) -> String {
    let cut: String = self.description.chars().take(len).collect();
    format!("{}...", cut)
  }

  pub fn matches(&self, query: &str) -> bool {
    let query = query.to_lowercase();

    [&self.title, &self.director, &self.genre, &self.description]
      .iter()
      .any(|field| field.to_lowercase().contains(&query))
  }
}

impl From<&CatalogMovie> for Movie {
  fn from(movie: &CatalogMovie) -> Self {
    let year = movie
      .release_date
      .as_deref()
      .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
      .map(|date| date.year());

    let genre = match &movie.genres {
      Some(genres) => genres
        .iter()
        .map(|genre| genre.name.as_str())
        .collect::<Vec<_>>()
        .join(", "),
      None => NOT_AVAILABLE.to_owned(),
    };

    let description = movie
      .overview
      .clone()
      .filter(|overview| !overview.is_empty())
      .unwrap_or_else(|| "No description available".to_owned());

    let poster = match &movie.poster_path {
      Some(path) if !path.is_empty() => format!("{}{}", POSTER_BASE_URL, path),
      _ => POSTER_PLACEHOLDER.to_owned(),
    };

    Movie {
      id: movie.id,
      title: movie.title.clone(),
      year,
      genre,
      director: NOT_AVAILABLE.to_owned(),
      rating: movie.vote_average.unwrap_or(0.0),
      description,
      poster,
    }
  }
}

/// A review as the API returns it. Fallback reviews carry a title and no reviewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
  pub id: String,
  #[serde(default)]
  pub movie_id: Option<String>,
  #[serde(default)]
  pub movie_title: Option<String>,
  #[serde(default)]
  pub movie_poster: Option<String>,
  pub rating: i32,
  pub comment: String,
  #[serde(default)]
  pub reviewer_name: Option<String>,
  #[serde(default)]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub updated_at: Option<DateTime<Utc>>,
}

impl Review {
  pub fn stars(&self) -> String {
    stars(self.rating)
  }

  pub fn created_label(&self) -> String {
    self
      .created_at
      .map(|created_at| created_at.format("%-m/%-d/%Y").to_string())
      .unwrap_or_default()
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
  pub movie_id: String,
  pub rating: i32,
  pub comment: String,
  pub reviewer_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewChanges {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rating: Option<i32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comment: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reviewer_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Deleted {
  pub message: String,
}

/// Filled stars for the rating, hollow ones up to five.
pub fn stars(rating: i32) -> String {
  let filled = rating.max(0).min(5) as usize;
  format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Average of the ratings, zero for no reviews.
pub fn average_rating(reviews: &[Review]) -> f64 {
  if reviews.is_empty() {
    return 0.0;
  }

  let total: i64 = reviews.iter().map(|review| i64::from(review.rating)).sum();
  total as f64 / reviews.len() as f64
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn normalizes_a_full_catalog_movie() {
    let movie: CatalogMovie = serde_json::from_value(json!({
      "id": 603,
      "title": "The Matrix",
      "release_date": "1999-03-30",
      "genres": [{ "id": 28, "name": "Action" }, { "id": 878, "name": "Science Fiction" }],
      "vote_average": 8.2,
      "overview": "A hacker learns the truth.",
      "poster_path": "/matrix.jpg"
    }))
    .unwrap();

    let movie = Movie::from(&movie);

    assert_eq!(movie.year, Some(1999));
    assert_eq!(movie.genre, "Action, Science Fiction");
    assert_eq!(movie.director, "N/A");
    assert_eq!(movie.poster, "https://image.tmdb.org/t/p/w500/matrix.jpg");
    assert_eq!(movie.rating_label(), "8.2");
  }

  #[test]
  fn fills_gaps_in_listing_entries() {
    let movie: CatalogMovie = serde_json::from_value(json!({
      "id": 1,
      "title": "Untitled",
      "release_date": "",
      "genre_ids": [18],
      "overview": ""
    }))
    .unwrap();

    let movie = Movie::from(&movie);

    assert_eq!(movie.year_label(), "N/A");
    assert_eq!(movie.genre, "N/A");
    assert_eq!(movie.rating, 0.0);
    assert_eq!(movie.description, "No description available");
    assert_eq!(movie.poster, POSTER_PLACEHOLDER);
  }

  #[test]
  fn stars_are_capped_at_five() {
    assert_eq!(stars(3), "★★★☆☆");
    assert_eq!(stars(9), "★★★★★");
    assert_eq!(stars(-1), "☆☆☆☆☆");
  }

  #[test]
  fn excerpt_counts_characters() {
    let movie = Movie {
      id: 1,
      title: "Amélie".into(),
      year: Some(2001),
      genre: "Comedy".into(),
      director: "N/A".into(),
      rating: 7.9,
      description: "Amélie décide".into(),
      poster: POSTER_PLACEHOLDER.into(),
    };

    assert_eq!(movie.excerpt(6), "Amélie...");
  }

  #[test]
  fn averages_review_ratings() {
    let review = |rating: i32| Review {
      id: rating.to_string(),
      movie_id: None,
      movie_title: None,
      movie_poster: None,
      rating,
      comment: String::new(),
      reviewer_name: None,
      created_at: None,
      updated_at: None,
    };

    assert_eq!(average_rating(&[]), 0.0);
    assert_eq!(average_rating(&[review(5), review(4)]), 4.5);
  }

  #[test]
  fn change_requests_omit_absent_fields() {
    let changes = ReviewChanges {
      rating: Some(3),
      ..Default::default()
    };

    assert_eq!(serde_json::to_value(changes).unwrap(), json!({ "rating": 3 }));
  }
}
