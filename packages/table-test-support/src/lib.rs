//! Test support for the table crates: logging bootstrap and unique fixture names.

pub mod logging;
pub mod unique_helpers;
