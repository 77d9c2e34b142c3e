//! Error types for the NeoFit core

use thiserror::Error;

/// Core error types
///
/// Degenerate numeric results (an infinite BMI from a zero height, a
/// negative body-fat estimate) are *not* errors: they propagate as plain
/// numbers. Errors are reserved for structurally invalid mutations and
/// programming-level misuse.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
