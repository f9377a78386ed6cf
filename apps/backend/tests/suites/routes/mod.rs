pub mod catalog_routes;
pub mod series_flow;
pub mod series_if_match;
