//! Error types for signal ingestion.

use thiserror::Error;

/// Errors raised when sample data from outside the library is turned
/// into a [`Signal`](crate::Signal).
///
/// The operation library itself never fails: operations on well-formed
/// signals are total. Validation happens once, at the boundary where
/// untrusted data (user input, decoded audio) enters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    /// A sample was NaN or infinite.
    #[error("non-finite sample {value} at storage index {index}")]
    NonFinite {
        /// Storage index of the offending sample.
        index: usize,
        /// The rejected value.
        value: f64,
    },
}
