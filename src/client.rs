//! Client side of the review app.
//!
//! [`services`] mirrors the two server route groups one method per endpoint,
//! [`pages`] holds the view model of every screen and [`navigation`] the
//! route table and sidebar. Pages never talk HTTP directly: they receive
//! [`MovieApi`]/[`ReviewApi`] implementations and go through
//! [`fallback::load`] so a failed request leaves them populated with the
//! embedded [`samples`]. [`App`] ties the configuration, the services and
//! the pages together.

pub mod app;
mod config;
pub mod fallback;
pub mod navigation;
pub mod pages;
pub mod samples;
pub mod services;
pub mod types;

#[cfg(test)]
mod testing;

pub use self::app::{App, Screen};
pub use self::config::ClientConfig;
pub use self::services::{ClientError, MovieApi, MovieService, ReviewApi, ReviewService};
