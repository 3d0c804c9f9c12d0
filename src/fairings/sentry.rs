use std::sync::Mutex;

use crate::config::Config;
use rocket::fairing::{self, Fairing, Info, Kind};
use rocket::{Build, Rocket};
use sentry::types::Dsn;
use sentry::ClientInitGuard;

/// Starts Sentry when the config carries a DSN. Must be attached after the config fairing.
pub struct SentryFairing {
  guard: Mutex<Option<ClientInitGuard>>,
}

impl SentryFairing {
  pub fn fairing() -> impl Fairing {
    Self {
      guard: Mutex::new(None),
    }
  }

  /// A DSN that does not parse leaves reporting off instead of aborting ignite.
  fn init(&self, dsn: &str) {
    let dsn = match dsn.parse::<Dsn>() {
      Ok(dsn) => dsn,
      Err(error) => {
        log::warn!("Ignoring invalid Sentry DSN: {}", error);
        return;
      }
    };

    let guard = sentry::init(dsn);

    if guard.is_enabled() {
      log::info!("Sentry error reporting enabled");
    }

    if let Ok(mut slot) = self.guard.lock() {
      *slot = Some(guard);
    }
  }
}

#[rocket::async_trait]
impl Fairing for SentryFairing {
  fn info(&self) -> Info {
    Info {
      name: "sentry",
      kind: Kind::Ignite,
    }
  }

  async fn on_ignite(&self, rocket: Rocket<Build>) -> fairing::Result {
    let dsn = rocket
      .state::<Config>()
      .and_then(|config| config.sentry_dsn.clone())
      .filter(|dsn| !dsn.is_empty());

    if let Some(dsn) = dsn {
      self.init(&dsn);
    }

    Ok(rocket)
  }
}
