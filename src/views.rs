mod review;

pub use review::{DeletedView, ReviewView};
