use crate::guards::Reviews;
use crate::models::ReviewChangeset;
use crate::response::{ApiError, MutationResponse, QueryResponse, Response};
use crate::views::{DeletedView, ReviewView};
use chrono::{NaiveDateTime, Utc};
use rocket::response::status::Created;
use rocket::serde::json::{Json, Value};
use rocket::Route;
use rocket_okapi::{openapi, openapi_get_routes};
use schemars::JsonSchema;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// `movieId` may be a string or a number and `rating` a number or a numeric string.
/// Text fields of the wrong JSON type are a 400, not a body parse failure.
#[derive(Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
  movie_id: Option<Value>,
  rating: Option<Value>,
  comment: Option<Value>,
  reviewer_name: Option<Value>,
  user_id: Option<Value>,
}

#[derive(Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
  rating: Option<Value>,
  comment: Option<Value>,
  reviewer_name: Option<Value>,
}

#[derive(Debug, Validate)]
struct NewReview {
  movie_id: String,
  #[validate(range(min = 1, max = 5))]
  rating: i64,
  comment: String,
  reviewer_name: String,
  user_id: Option<String>,
}

#[derive(Debug, Validate)]
struct ReviewChanges {
  #[validate(range(min = 1, max = 5))]
  rating: Option<i64>,
  comment: Option<String>,
  reviewer_name: Option<String>,
}

/// Empty strings and nulls read as absent.
fn text(value: Option<Value>, field: &str) -> Result<Option<String>, ApiError> {
  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(text)) if text.is_empty() => Ok(None),
    Some(Value::String(text)) => Ok(Some(text)),
    Some(_) => Err(ApiError::BadRequest(format!("{} must be a string", field))),
  }
}

fn movie_reference(value: Option<Value>) -> Option<String> {
  match value {
    Some(Value::String(movie_id)) if !movie_id.is_empty() => Some(movie_id),
    Some(Value::Number(movie_id)) => Some(movie_id.to_string()),
    _ => None,
  }
}

/// Parses like an integer prompt would: leading whitespace and sign, then digits up to the first non-digit.
fn leading_integer(text: &str) -> Option<i64> {
  let text = text.trim_start();
  let (sign, digits) = match text.strip_prefix('-') {
    Some(rest) => (-1, rest),
    None => (1, text.strip_prefix('+').unwrap_or(text)),
  };
  let end = digits
    .find(|c: char| !c.is_ascii_digit())
    .unwrap_or_else(|| digits.len());

  digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

fn coerce_rating(value: &Value) -> Result<i64, ApiError> {
  let rating = match value {
    Value::Number(number) => number.as_i64().or_else(|| {
      number
        .as_f64()
        .filter(|rating| rating.is_finite())
        .map(|rating| rating.trunc() as i64)
    }),
    Value::String(text) => leading_integer(text),
    _ => None,
  };

  rating.ok_or_else(|| ApiError::BadRequest("Rating must be a whole number".to_owned()))
}

fn supplied(value: Option<Value>) -> Option<Value> {
  value.filter(|value| value.as_str() != Some(""))
}

impl CreateReviewRequest {
  fn into_new_review(self) -> Result<NewReview, ApiError> {
    let fields = (
      movie_reference(self.movie_id),
      supplied(self.rating),
      text(self.comment, "comment")?,
      text(self.reviewer_name, "reviewerName")?,
    );
    let user_id = text(self.user_id, "userId")?;

    let review = match fields {
      (Some(movie_id), Some(rating), Some(comment), Some(reviewer_name)) => NewReview {
        movie_id,
        rating: coerce_rating(&rating)?,
        comment,
        reviewer_name,
        user_id,
      },
      _ => return Err(ApiError::missing_fields()),
    };

    review.validate().map_err(ApiError::Validation)?;
    Ok(review)
  }
}

impl UpdateReviewRequest {
  fn into_changes(self) -> Result<ReviewChanges, ApiError> {
    let rating = match supplied(self.rating) {
      Some(rating) => Some(coerce_rating(&rating)?),
      None => None,
    };

    let changes = ReviewChanges {
      rating,
      comment: text(self.comment, "comment")?,
      reviewer_name: text(self.reviewer_name, "reviewerName")?,
    };

    changes.validate().map_err(ApiError::Validation)?;
    Ok(changes)
  }
}

impl NewReview {
  fn into_changeset(self, id: Uuid, now: NaiveDateTime) -> ReviewChangeset {
    ReviewChangeset::default()
      .id(id)
      .movie_id(self.movie_id)
      .user_id(self.user_id)
      .rating(self.rating as i32)
      .comment(self.comment)
      .reviewer_name(self.reviewer_name)
      .created_at(now)
      .updated_at(now)
  }
}

impl ReviewChanges {
  fn into_changeset(self, now: NaiveDateTime) -> ReviewChangeset {
    let mut changeset = ReviewChangeset::default().updated_at(now);
    changeset.rating = self.rating.map(|rating| rating as i32);
    changeset.comment = self.comment;
    changeset.reviewer_name = self.reviewer_name;
    changeset
  }
}

fn review_id(id: &str) -> Result<Uuid, ApiError> {
  Uuid::parse_str(id).map_err(|_| ApiError::NotFound)
}

#[openapi(tag = "Reviews")]
#[get("/movie/<movie_id>")]
pub async fn list_for_movie(movie_id: &str, reviews: Reviews) -> QueryResponse<Vec<ReviewView>> {
  let found = reviews
    .filter_by_movie(movie_id)
    .await
    .map_err(ApiError::internal("Failed to get reviews"))?;

  Response::success(found.into_iter().map(ReviewView::from).collect())
}

#[openapi(tag = "Reviews")]
#[get("/<id>")]
pub async fn get(id: &str, reviews: Reviews) -> QueryResponse<ReviewView> {
  let id = review_id(id)?;

  let review = reviews
    .find(id)
    .await
    .map_err(ApiError::internal("Failed to get review"))?
    .ok_or(ApiError::NotFound)?;

  Response::success(review.into())
}

#[openapi(tag = "Reviews")]
#[post("/", data = "<body>")]
pub async fn create(
  reviews: Reviews,
  body: Json<CreateReviewRequest>,
) -> Result<Created<Json<ReviewView>>, ApiError> {
  let review = body.into_inner().into_new_review()?;
  let now = Utc::now().naive_utc();

  let created = reviews
    .create(review.into_changeset(Uuid::new_v4(), now))
    .await
    .map_err(ApiError::internal("Failed to create review"))?;

  let view = ReviewView::from(created);
  Ok(Created::new(format!("/api/reviews/{}", view.id)).body(Json(view)))
}

#[openapi(tag = "Reviews")]
#[put("/<id>", data = "<body>")]
pub async fn update(
  id: &str,
  reviews: Reviews,
  body: Json<UpdateReviewRequest>,
) -> MutationResponse<ReviewView> {
  let id = review_id(id)?;
  let changes = body.into_inner().into_changes()?;

  let updated = reviews
    .update(id, changes.into_changeset(Utc::now().naive_utc()))
    .await
    .map_err(ApiError::internal("Failed to update review"))?
    .ok_or(ApiError::NotFound)?;

  Response::success(updated.into())
}

#[openapi(tag = "Reviews")]
#[delete("/<id>")]
pub async fn delete(id: &str, reviews: Reviews) -> MutationResponse<DeletedView> {
  let id = review_id(id)?;

  let deleted = reviews
    .delete(id)
    .await
    .map_err(ApiError::internal("Failed to delete review"))?;

  if !deleted {
    return Err(ApiError::NotFound);
  }

  Response::success(DeletedView::review())
}

#[openapi(tag = "Reviews")]
#[get("/user/<user_id>")]
pub async fn list_for_user(user_id: &str, reviews: Reviews) -> QueryResponse<Vec<ReviewView>> {
  let found = reviews
    .filter_by_user(user_id)
    .await
    .map_err(ApiError::internal("Failed to get user reviews"))?;

  Response::success(found.into_iter().map(ReviewView::from).collect())
}

pub fn build() -> Vec<Route> {
  openapi_get_routes![list_for_movie, get, create, update, delete, list_for_user]
}
