use super::{ReviewStore, StoreError};
use crate::models::{Review, ReviewChangeset};
use crate::schema::reviews;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use rocket::tokio::task;
use std::time::Duration;
use uuid::Uuid;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

type PgPool = Pool<ConnectionManager<PgConnection>>;

pub struct PgReviewStore {
  pool: PgPool,
}

impl PgReviewStore {
  /// Builds the pool and runs pending migrations before handing out the store.
  pub async fn connect(database_url: String) -> Result<Self, StoreError> {
    task::spawn_blocking(move || -> Result<Self, StoreError> {
      let manager = ConnectionManager::<PgConnection>::new(database_url);
      let pool = Pool::builder()
        .connection_timeout(Duration::from_secs(5))
        .build(manager)?;

      let mut conn = pool.get()?;
      conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|error| StoreError::Migration(error.to_string()))?;

      Ok(Self { pool })
    })
    .await?
  }

  async fn run<T, F>(&self, query: F) -> Result<T, StoreError>
  where
    F: FnOnce(&mut PgConnection) -> QueryResult<T> + Send + 'static,
    T: Send + 'static,
  {
    let pool = self.pool.clone();

    task::spawn_blocking(move || -> Result<T, StoreError> {
      let mut conn = pool.get()?;
      Ok(query(&mut *conn)?)
    })
    .await?
  }
}

#[rocket::async_trait]
impl ReviewStore for PgReviewStore {
  async fn find(&self, id: Uuid) -> Result<Option<Review>, StoreError> {
    self
      .run(move |conn| Review::find_by_id(&id).first::<Review>(conn).optional())
      .await
  }

  async fn filter_by_movie(&self, movie_id: &str) -> Result<Vec<Review>, StoreError> {
    let query = Review::filter_by_movie_id(movie_id);
    self.run(move |conn| query.load::<Review>(conn)).await
  }

  async fn filter_by_user(&self, user_id: &str) -> Result<Vec<Review>, StoreError> {
    let query = Review::filter_by_user_id(user_id);
    self.run(move |conn| query.load::<Review>(conn)).await
  }

  async fn create(&self, review: ReviewChangeset) -> Result<Review, StoreError> {
    self
      .run(move |conn| {
        diesel::insert_into(reviews::table)
          .values(review)
          .get_result::<Review>(conn)
      })
      .await
  }

  async fn update(&self, id: Uuid, changes: ReviewChangeset) -> Result<Option<Review>, StoreError> {
    self
      .run(move |conn| {
        diesel::update(Review::find_by_id(&id))
          .set(changes)
          .get_result::<Review>(conn)
          .optional()
      })
      .await
  }

  async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
    let deleted = self
      .run(move |conn| diesel::delete(Review::find_by_id(&id)).execute(conn))
      .await?;

    Ok(deleted > 0)
  }
}
