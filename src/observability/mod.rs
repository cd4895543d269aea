//! Structured logging for registry operations

mod logger;

pub use logger::{Logger, Severity};
