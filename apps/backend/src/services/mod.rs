//! Application services.

pub mod series;

pub use series::SeriesService;
