//! Serialization boundary: flat JSON and CSV transforms over the
//! registry snapshot. Imports are atomic; a failed restore commits
//! nothing.

mod csv;
mod errors;
mod json;

pub use csv::{from_csv, to_csv, CSV_HEADER};
pub use errors::{ImportError, ImportResult};
pub use json::{from_json, to_json};
