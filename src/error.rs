//! Error types for secant sampling
//!
//! This module defines the failures that can occur while deriving slopes
//! from a sampled function, along with a convenient `Result` alias.

/// Errors that can occur while sampling a function and deriving its slopes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Two consecutive domain values are equal, so the secant between them is undefined.
    ///
    /// Cannot happen with [`crate::sampler::generate_domain`], which is strictly increasing.
    #[error("Division by zero: domain values at index {index} and {} are equal", .index + 1)]
    DivisionByZero {
        /// Index of the first point of the offending pair
        index: usize,
    },

    /// The domain and range sequences do not pair up point for point.
    #[error("Domain has {domain} values but range has {range}")]
    LengthMismatch {
        /// Number of domain values
        domain: usize,
        /// Number of range values
        range: usize,
    },

    /// A numeric value could not be cast to the target type. This is usually a custom type much smaller than f64/f32
    #[error("Failed to cast value to target type")]
    CastFailed,
}

/// Result type for secant sampling
pub type Result<T> = std::result::Result<T, Error>;
