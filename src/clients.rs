mod tmdb;

pub use self::tmdb::TmdbClient;
