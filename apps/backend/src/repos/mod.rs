//! In-memory repositories.

pub mod series;

pub use series::SeriesStore;
