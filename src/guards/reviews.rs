use crate::response::ApiError;
use crate::store::{ReviewStore, ReviewStoreHandle};
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};
use rocket_okapi::{
  gen::OpenApiGenerator,
  request::{OpenApiFromRequest, RequestHeaderInput},
};
use std::ops::Deref;
use std::sync::Arc;

/// The review store, or a 503 when it was never established.
pub struct Reviews(pub Arc<dyn ReviewStore>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Reviews {
  type Error = ApiError;

  async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
    match req
      .rocket()
      .state::<ReviewStoreHandle>()
      .and_then(ReviewStoreHandle::get)
    {
      Some(store) => Outcome::Success(Reviews(store)),
      None => Outcome::Error((Status::ServiceUnavailable, ApiError::Unavailable)),
    }
  }
}

impl Deref for Reviews {
  type Target = dyn ReviewStore;

  fn deref(&self) -> &Self::Target {
    self.0.as_ref()
  }
}

impl<'a> OpenApiFromRequest<'a> for Reviews {
  fn from_request_input(
    _gen: &mut OpenApiGenerator,
    _name: String,
    _required: bool,
  ) -> rocket_okapi::Result<RequestHeaderInput> {
    Ok(RequestHeaderInput::None)
  }
}
