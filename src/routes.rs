mod index;
mod movies;
mod reviews;

pub use index::build as index;
pub use movies::build as movies;
pub use reviews::build as reviews;
