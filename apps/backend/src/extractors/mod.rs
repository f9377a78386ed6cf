pub mod series_id;
pub mod validated_json;

pub use series_id::SeriesIdPath;
pub use validated_json::ValidatedJson;
