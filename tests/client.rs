mod common;

use common::MovieCatalog;
use movie_reviews::catalog::CatalogProxy;
use movie_reviews::client::types::{NewReview, ReviewChanges};
use movie_reviews::client::{ClientConfig, ClientError, MovieApi, MovieService, ReviewApi, ReviewService};
use movie_reviews::store::{MemoryReviewStore, ReviewStoreHandle};
use rocket::fairing::AdHoc;
use rocket::tokio::sync::oneshot;
use std::net::TcpListener;

/// Serves the API on a free local port and returns a client config pointing at it.
async fn serve() -> ClientConfig {
  let port = TcpListener::bind("127.0.0.1:0")
    .and_then(|listener| listener.local_addr())
    .unwrap()
    .port();

  let figment = rocket::Config::figment()
    .merge(("address", "127.0.0.1"))
    .merge(("port", port))
    .merge(("log_level", "off"));

  let (ready, launched) = oneshot::channel();
  let rocket = movie_reviews::mount(rocket::custom(figment))
    .manage(CatalogProxy::new(MovieCatalog))
    .manage(ReviewStoreHandle::new(MemoryReviewStore::default()))
    .attach(AdHoc::on_liftoff("Ready", |_| {
      Box::pin(async move {
        let _ = ready.send(());
      })
    }));

  rocket::tokio::spawn(rocket.launch());
  launched.await.unwrap();

  ClientConfig::new(format!("http://127.0.0.1:{}/api", port))
}

fn new_review() -> NewReview {
  NewReview {
    movie_id: "550".into(),
    rating: 4,
    comment: "The first rule holds.".into(),
    reviewer_name: "Marla".into(),
  }
}

#[rocket::async_test]
async fn review_service_round_trips_through_the_api() {
  let reviews = ReviewService::new(&serve().await);

  let created = reviews.create(&new_review()).await.unwrap();
  assert_eq!(created.movie_id.as_deref(), Some("550"));
  assert_eq!(created.rating, 4);
  assert_eq!(created.reviewer_name.as_deref(), Some("Marla"));
  assert!(created.created_at.is_some());

  assert_eq!(reviews.review(&created.id).await.unwrap(), created);

  let changes = ReviewChanges {
    rating: Some(2),
    ..ReviewChanges::default()
  };
  let updated = reviews.update(&created.id, &changes).await.unwrap();
  assert_eq!(updated.rating, 2);
  assert_eq!(updated.comment, "The first rule holds.");

  let listed = reviews.movie_reviews("550").await.unwrap();
  assert_eq!(listed, vec![updated]);
  assert!(reviews.user_reviews("mock-user-id").await.unwrap().is_empty());

  let deleted = reviews.delete(&created.id).await.unwrap();
  assert_eq!(deleted.message, "Review deleted successfully");
  assert!(reviews.movie_reviews("550").await.unwrap().is_empty());
}

#[rocket::async_test]
async fn error_bodies_become_status_errors() {
  let reviews = ReviewService::new(&serve().await);

  match reviews.review(&uuid::Uuid::new_v4().to_string()).await {
    Err(ClientError::Status { status, message }) => {
      assert_eq!(status, 404);
      assert_eq!(message, "Review not found");
    }
    other => panic!("expected a 404, got {:?}", other),
  }

  let blank = NewReview {
    comment: String::new(),
    ..new_review()
  };
  match reviews.create(&blank).await {
    Err(ClientError::Status { status, message }) => {
      assert_eq!(status, 400);
      assert_eq!(message, "Missing required fields");
    }
    other => panic!("expected a 400, got {:?}", other),
  }
}

#[rocket::async_test]
async fn movie_service_decodes_catalog_responses() {
  let movies = MovieService::new(&serve().await);

  let popular = movies.popular(2).await.unwrap();
  assert_eq!(popular.page, 2);
  assert_eq!(popular.total_pages, 3);
  assert_eq!(popular.results[0].title, "Fight Club");

  let found = movies.search("The Matrix", 1).await.unwrap();
  assert_eq!(found.results[0].id, 603);
  assert_eq!(found.results[0].title, "The Matrix");

  let details = movies.details("550").await.unwrap();
  assert_eq!(details.id, 550);
  assert_eq!(details.genres.map(|genres| genres.len()), Some(1));

  let genres = movies.genres().await.unwrap();
  assert_eq!(genres.genres[0].name, "Drama");

  let drama = movies.by_genre(18, 1).await.unwrap();
  assert_eq!(drama.results.len(), 1);
}
