//! Helpers shared by the backend integration test binaries: logging setup, problem
//! details assertions and unique test data.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
