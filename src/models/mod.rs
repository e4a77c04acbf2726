//! Data models for the WGW backend.
//!
//! Wire field names are snake_case to match the site's existing data layer.

mod case;

pub use case::*;
