#[macro_use]
extern crate rocket;

pub mod catalog;
pub mod catchers;
pub mod client;
pub mod clients;
pub mod config;
pub mod fairings;
pub mod guards;
pub mod models;
pub mod response;
pub mod routes;
pub mod schema;
pub mod store;
pub mod views;

use crate::catalog::CatalogProxy;
use crate::clients::TmdbClient;
use crate::config::Config;
use crate::fairings::SentryFairing;
use rocket::fairing::{self, AdHoc};
use rocket::figment::Figment;
use rocket::{Build, Rocket};

/// Routes and catchers without any services. Callers manage a
/// [`CatalogProxy`] and a [`store::ReviewStoreHandle`] themselves.
pub fn mount(rocket: Rocket<Build>) -> Rocket<Build> {
  rocket
    .mount("/", routes::index())
    .mount("/api/movies", routes::movies())
    .mount("/api/reviews", routes::reviews())
    .register("/", catchers::all())
}

async fn init_catalog(rocket: Rocket<Build>) -> fairing::Result {
  let client = match rocket.state::<Config>().map(TmdbClient::new) {
    Some(Ok(client)) => client,
    Some(Err(error)) => {
      log::error!("Failed to build the catalog client: {}", error);
      return Err(rocket);
    }
    None => return Err(rocket),
  };

  Ok(rocket.manage(CatalogProxy::new(client)))
}

async fn init_review_store(rocket: Rocket<Build>) -> fairing::Result {
  let config = match rocket.state::<Config>() {
    Some(config) => config.clone(),
    None => return Err(rocket),
  };

  let handle = store::init(&config).await;
  Ok(rocket.manage(handle))
}

pub fn build(figment: Figment) -> Rocket<Build> {
  mount(rocket::custom(figment))
    .attach(AdHoc::config::<Config>())
    .attach(SentryFairing::fairing())
    .attach(AdHoc::try_on_ignite("Catalog Client", init_catalog))
    .attach(AdHoc::try_on_ignite("Review Store", init_review_store))
}
