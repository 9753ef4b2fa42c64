//! Shared helpers for backend integration tests: one-time logging setup,
//! unique fixture values and problem-details assertions.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
