#[macro_use]
extern crate rocket;

use rocket::{Build, Rocket};

#[launch]
fn rocket() -> Rocket<Build> {
  dotenv::dotenv().ok();

  movie_reviews::build(movie_reviews::config::figment())
}
