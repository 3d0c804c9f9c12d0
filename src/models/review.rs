use crate::schema::reviews;
use chrono::NaiveDateTime;
use derive_builder::Builder;
use diesel::dsl::{Desc, Eq, Filter, Find, Order};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Builder, Queryable, Identifiable, Clone, Debug, PartialEq)]
#[builder(
  derive(AsChangeset, Insertable, Debug),
  pattern = "owned",
  name = "ReviewChangeset",
  field(public)
)]
#[builder_struct_attr(diesel(table_name = reviews))]
pub struct Review {
  pub id: Uuid,
  pub movie_id: String,
  #[builder(default)]
  pub user_id: Option<String>,
  pub rating: i32,
  pub comment: String,
  pub reviewer_name: String,
  pub created_at: NaiveDateTime,
  pub updated_at: NaiveDateTime,
}

#[allow(clippy::type_complexity)]
impl Review {
  pub fn find_by_id(id: &Uuid) -> Find<reviews::table, Uuid> {
    reviews::table.find(*id)
  }

  pub fn filter_by_movie_id(
    movie_id: &str,
  ) -> Order<Filter<reviews::table, Eq<reviews::movie_id, String>>, Desc<reviews::created_at>> {
    reviews::table
      .filter(reviews::movie_id.eq(movie_id.to_string()))
      .order(reviews::created_at.desc())
  }

  pub fn filter_by_user_id(
    user_id: &str,
  ) -> Order<Filter<reviews::table, Eq<reviews::user_id, String>>, Desc<reviews::created_at>> {
    reviews::table
      .filter(reviews::user_id.eq(user_id.to_string()))
      .order(reviews::created_at.desc())
  }

  /// Overwrites the fields present in `changes`, leaving the rest untouched.
  pub fn apply(&mut self, changes: ReviewChangeset) {
    if let Some(movie_id) = changes.movie_id {
      self.movie_id = movie_id;
    }
    if let Some(user_id) = changes.user_id {
      self.user_id = user_id;
    }
    if let Some(rating) = changes.rating {
      self.rating = rating;
    }
    if let Some(comment) = changes.comment {
      self.comment = comment;
    }
    if let Some(reviewer_name) = changes.reviewer_name {
      self.reviewer_name = reviewer_name;
    }
    if let Some(created_at) = changes.created_at {
      self.created_at = created_at;
    }
    if let Some(updated_at) = changes.updated_at {
      self.updated_at = updated_at;
    }
  }
}
