use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{response, Request};
use rocket_okapi::okapi::openapi3::{Response as OpenApiResponse, Responses};
use rocket_okapi::{gen::OpenApiGenerator, response::OpenApiResponderInner, Result as OpenApiResult};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

pub const DATABASE_UNAVAILABLE: &str = "Database not available";
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const REVIEW_NOT_FOUND: &str = "Review not found";

fn add_error(responses: &mut Responses, code: u16, reason: &str) {
  responses
    .responses
    .entry(code.to_string())
    .or_insert_with(|| {
      let response = OpenApiResponse {
        description: format!(
          "# [{code} {reason}](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/{code})",
          code = code,
          reason = reason
        ),
        ..Default::default()
      };
      response.into()
    });
}

/// JSON body of every error response.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
  pub error: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fields: Option<ValidationErrors>,
}

impl ErrorBody {
  pub fn new<S: Into<String>>(error: S) -> Self {
    Self {
      error: error.into(),
      fields: None,
    }
  }
}

#[derive(Error, Debug)]
pub enum ApiError {
  #[error("{0}")]
  BadRequest(String),
  #[error("Invalid review fields")]
  Validation(ValidationErrors),
  #[error("{}", REVIEW_NOT_FOUND)]
  NotFound,
  #[error("{}", DATABASE_UNAVAILABLE)]
  Unavailable,
  /// The cause is logged when the error is built and never sent to the caller.
  #[error("{0}")]
  Internal(&'static str),
}

impl ApiError {
  pub fn status(&self) -> Status {
    match self {
      ApiError::BadRequest(_) | ApiError::Validation(_) => Status::BadRequest,
      ApiError::NotFound => Status::NotFound,
      ApiError::Unavailable => Status::ServiceUnavailable,
      ApiError::Internal(_) => Status::InternalServerError,
    }
  }

  pub fn missing_fields() -> Self {
    ApiError::BadRequest(MISSING_REQUIRED_FIELDS.to_owned())
  }

  /// Builds a `map_err` adapter that reports `error` and hides it behind `message`.
  pub fn internal<E>(message: &'static str) -> impl FnOnce(E) -> ApiError
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |error| {
      log::error!("{}: {}", message, error);
      sentry::capture_error(&error);
      ApiError::Internal(message)
    }
  }
}

pub type QueryResponse<T> = Result<Json<T>, ApiError>;
pub type MutationResponse<T> = Result<Json<T>, ApiError>;
pub struct Response;

impl Response {
  pub fn success<T>(response: T) -> Result<Json<T>, ApiError> {
    Ok(Json(response))
  }
}

impl<'r> Responder<'r, 'static> for ApiError {
  fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
    let status = self.status();
    let body = match self {
      ApiError::Validation(errors) => ErrorBody {
        error: "Invalid review fields".to_owned(),
        fields: Some(errors),
      },
      error => ErrorBody::new(error.to_string()),
    };

    Custom(status, Json(body)).respond_to(req)
  }
}

impl OpenApiResponderInner for ApiError {
  fn responses(_gen: &mut OpenApiGenerator) -> OpenApiResult<Responses> {
    let mut responses = Responses::default();
    add_error(&mut responses, 400, "Bad Request");
    add_error(&mut responses, 404, "Not Found");
    add_error(&mut responses, 500, "Internal Server Error");
    add_error(&mut responses, 503, "Service Unavailable");
    Ok(responses)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::CatalogError;

  #[test]
  fn maps_each_variant_to_its_status() {
    assert_eq!(ApiError::missing_fields().status(), Status::BadRequest);
    assert_eq!(
      ApiError::Validation(ValidationErrors::new()).status(),
      Status::BadRequest
    );
    assert_eq!(ApiError::NotFound.status(), Status::NotFound);
    assert_eq!(ApiError::Unavailable.status(), Status::ServiceUnavailable);
    assert_eq!(
      ApiError::Internal("Failed to get reviews").status(),
      Status::InternalServerError
    );
  }

  #[test]
  fn internal_errors_hide_their_cause() {
    let error = ApiError::internal("Failed to fetch genres")(CatalogError::BaseUrl(
      "postgres://user:secret@db".into(),
    ));

    assert_eq!(error.to_string(), "Failed to fetch genres");
  }

  #[test]
  fn messages_match_the_public_error_bodies() {
    assert_eq!(ApiError::NotFound.to_string(), "Review not found");
    assert_eq!(ApiError::Unavailable.to_string(), "Database not available");
    assert_eq!(
      ApiError::missing_fields().to_string(),
      "Missing required fields"
    );
  }
}
