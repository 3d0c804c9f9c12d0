pub mod reviews;

pub use reviews::Reviews;
