//! The load-or-fall-back pattern every page follows: issue one request, keep
//! its data on success, and on failure log the cause, show a warning banner and
//! render the page's fallback data instead.

use crate::client::services::ClientError;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiStatus {
  Loading,
  Error,
  Ready,
}

/// What a page renders while or after loading one piece of data.
#[derive(Debug, Clone, PartialEq)]
pub struct Loadable<T> {
  pub status: UiStatus,
  pub data: Option<T>,
  /// Warning banner shown above the data.
  pub error: Option<String>,
}

impl<T> Loadable<T> {
  pub fn loading() -> Self {
    Self {
      status: UiStatus::Loading,
      data: None,
      error: None,
    }
  }

  pub fn ready(data: T) -> Self {
    Self {
      status: UiStatus::Ready,
      data: Some(data),
      error: None,
    }
  }

  pub fn failed(error: &str, data: Option<T>) -> Self {
    Self {
      status: UiStatus::Error,
      data,
      error: Some(error.to_owned()),
    }
  }

  pub fn data(&self) -> Option<&T> {
    self.data.as_ref()
  }

  pub fn is_loading(&self) -> bool {
    self.status == UiStatus::Loading
  }

  pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Loadable<U> {
    Loadable {
      status: self.status,
      data: self.data.map(f),
      error: self.error,
    }
  }
}

/// Data shown when the request fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback<T> {
  Empty,
  Use(T),
}

impl<T> Fallback<T> {
  pub fn from_option(data: Option<T>) -> Self {
    match data {
      Some(data) => Fallback::Use(data),
      None => Fallback::Empty,
    }
  }

  fn into_option(self) -> Option<T> {
    match self {
      Fallback::Use(data) => Some(data),
      Fallback::Empty => None,
    }
  }
}

pub async fn load<T, F>(request: F, error_message: &str, fallback: Fallback<T>) -> Loadable<T>
where
  F: Future<Output = Result<T, ClientError>>,
{
  match request.await {
    Ok(data) => Loadable::ready(data),
    Err(error) => {
      log::error!("{}: {}", error_message, error);
      Loadable::failed(error_message, fallback.into_option())
    }
  }
}
