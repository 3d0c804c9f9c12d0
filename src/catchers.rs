use crate::response::{ErrorBody, DATABASE_UNAVAILABLE};
use rocket::serde::json::Json;
use rocket::Catcher;

#[catch(400)]
fn bad_request() -> Json<ErrorBody> {
  Json(ErrorBody::new("Malformed request"))
}

#[catch(404)]
fn not_found() -> Json<ErrorBody> {
  Json(ErrorBody::new("Not found"))
}

#[catch(422)]
fn unprocessable() -> Json<ErrorBody> {
  Json(ErrorBody::new("Request body has the wrong shape"))
}

#[catch(500)]
fn internal() -> Json<ErrorBody> {
  Json(ErrorBody::new("Internal server error"))
}

#[catch(503)]
fn unavailable() -> Json<ErrorBody> {
  Json(ErrorBody::new(DATABASE_UNAVAILABLE))
}

pub fn all() -> Vec<Catcher> {
  catchers![bad_request, not_found, unprocessable, internal, unavailable]
}
