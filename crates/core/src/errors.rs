//! Core error types for the Foliotrack engine.
//!
//! The engine is pure computation: every failure is either a violated
//! calculation precondition or malformed caller input. Nothing here is
//! retried; errors propagate to the caller with no partial results.

use chrono::{NaiveDate, ParseError as ChronoParseError};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalculationError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised when a calculation's input contract is violated.
///
/// These are precondition violations, always fatal to the call that raised
/// them. The caller must fix the data upstream (re-sort, gap-fill) and run
/// the computation again.
#[derive(Error, Debug)]
pub enum CalculationError {
    /// An algorithm requiring descending-date order received unsorted rows.
    #[error("series for '{ticker}' is not sorted by descending date")]
    UnsortedData { ticker: String },

    /// A price series is missing calendar days inside the requested range.
    #[error(
        "price series for '{ticker}' is not dense over {start}..{end}: \
         expected {expected} daily rows, found {found}"
    )]
    SparseSeries {
        ticker: String,
        start: NaiveDate,
        end: NaiveDate,
        expected: usize,
        found: usize,
    },

    /// No quotes were supplied at all for a ticker the portfolio holds.
    #[error("no price series supplied for '{0}'")]
    MissingSeries(String),
}

/// Validation errors for caller-provided input data.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Transaction history is empty")]
    EmptyTransactions,

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
