//! Errors and error-related utilities.

use serde::Serialize;
use std::{error, fmt, result};

/// The result type used throughout this library.
pub type Result<T> = result::Result<T, Box<dyn error::Error>>;

/// Invalid input.
#[derive(Debug)]
pub struct InvalidInput(pub String);

/// Invalid command line argument.
#[derive(Debug)]
pub struct InvalidArgument(pub String);

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid input: {}", self.0)
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid argument: {}", self.0)
    }
}

impl error::Error for InvalidInput {}

impl error::Error for InvalidArgument {}

/// A helper for constructing [InvalidInput].
pub fn invalid_input(s: String) -> Box<dyn error::Error> {
    InvalidInput(s).into()
}

/// A helper for constructing [InvalidArgument].
pub fn invalid_argument(s: String) -> Box<dyn error::Error> {
    InvalidArgument(s).into()
}

/// A document that could not be loaded.
///
/// Failures are collected while loading a corpus; they never abort the batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoadFailure {
    /// Path of the offending file.
    pub file: String,
    /// Human-readable cause.
    pub error: String,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.error)
    }
}

/// A fatal error, as reported in the error file.
#[derive(Serialize)]
pub struct OError {
    pub error: String,
}
