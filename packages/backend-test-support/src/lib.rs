//! Backend test support utilities
//!
//! Shared by unit and integration tests of the contacts backend: logging
//! bootstrap, Problem Details assertions and unique test data.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
