mod review;

pub use review::{Review, ReviewChangeset};
