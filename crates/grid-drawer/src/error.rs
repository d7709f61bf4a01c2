//! Error type for pattern generation.
//!
//! ## Rust Lesson #20: Error Handling with thiserror
//!
//! `#[derive(Error)]` writes the `Display` and `std::error::Error` impls from
//! the `#[error("...")]` attributes, so each variant documents its own
//! message right where it is declared.
//!
//! Only `NonFinite` and `TooManyLines` come back from the generators.
//! `InvalidSpacing` and `DegenerateArea` are reported by
//! [`PatternConfig::validate`](crate::config::PatternConfig::validate); the
//! generators answer those inputs with an empty sequence.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// A configuration value is NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// A spacing would never advance the generator loop.
    #[error("{field} must be greater than zero, got {value}")]
    InvalidSpacing { field: &'static str, value: f64 },

    /// The margins consume the whole canvas.
    #[error("margin {margin} leaves no drawing area on a {width} x {height} canvas")]
    DegenerateArea { width: f64, height: f64, margin: f64 },

    /// The guide scan would emit an unreasonable number of lines.
    #[error("guide line scan needs {count} lines, limit is {limit} (is the angle close to 90 degrees?)")]
    TooManyLines { count: u64, limit: u64 },
}
