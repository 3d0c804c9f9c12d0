use crate::client::types::{NewReview, Review, ReviewChanges};

pub const DEFAULT_RATING: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
  ReviewerName,
  Rating,
  Comment,
}

impl FormField {
  pub fn label(self) -> &'static str {
    match self {
      FormField::ReviewerName => "Your Name",
      FormField::Rating => "Rating",
      FormField::Comment => "Review Comment",
    }
  }
}

/// Shared by the add and edit pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewForm {
  pub rating: i32,
  pub comment: String,
  pub reviewer_name: String,
}

impl Default for ReviewForm {
  fn default() -> Self {
    Self {
      rating: DEFAULT_RATING,
      comment: String::new(),
      reviewer_name: String::new(),
    }
  }
}

impl ReviewForm {
  pub const COMMENT_PLACEHOLDER: &'static str = "Share your thoughts about this movie...";

  pub fn from_review(review: &Review) -> Self {
    Self {
      rating: review.rating,
      comment: review.comment.clone(),
      reviewer_name: review.reviewer_name.clone().unwrap_or_default(),
    }
  }

  /// The options of the rating select.
  pub fn rating_options() -> Vec<(i32, String)> {
    (1..=5)
      .map(|rating| match rating {
        1 => (rating, "1 Star".to_owned()),
        _ => (rating, format!("{} Stars", rating)),
      })
      .collect()
  }

  /// Applies an edit. Ratings outside the select's options are ignored.
  pub fn set(&mut self, field: FormField, value: &str) {
    match field {
      FormField::ReviewerName => self.reviewer_name = value.to_owned(),
      FormField::Comment => self.comment = value.to_owned(),
      FormField::Rating => {
        if let Some(rating) = value.parse::<i32>().ok().filter(|rating| (1..=5).contains(rating)) {
          self.rating = rating;
        }
      }
    }
  }

  /// Required fields left blank.
  pub fn missing(&self) -> Vec<FormField> {
    let mut missing = Vec::new();

    if self.reviewer_name.trim().is_empty() {
      missing.push(FormField::ReviewerName);
    }
    if self.comment.trim().is_empty() {
      missing.push(FormField::Comment);
    }

    missing
  }

  pub fn to_new_review(&self, movie_id: &str) -> NewReview {
    NewReview {
      movie_id: movie_id.to_owned(),
      rating: self.rating,
      comment: self.comment.clone(),
      reviewer_name: self.reviewer_name.clone(),
    }
  }

  pub fn to_changes(&self) -> ReviewChanges {
    ReviewChanges {
      rating: Some(self.rating),
      comment: Some(self.comment.clone()),
      reviewer_name: Some(self.reviewer_name.clone()),
    }
  }
}
