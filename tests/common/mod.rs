//! Common utilities for integration tests
#![allow(dead_code)]

pub mod reference;
pub mod test_helpers;

// Re-export commonly used items
pub use reference::{dense_heat_reference, thomas_heat_reference, thomas_solve};
pub use test_helpers::{is_single_apex, max_abs_diff, relative_error, steel_rod};
