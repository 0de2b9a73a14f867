//! # Error Types
//!
//! Every rejection path of the CPF validator converges on one error kind.
//! The error deliberately carries no detail about *why* the input was
//! rejected: wrong length, too few significant digits, and either check
//! digit mismatching all look the same to the caller.

use thiserror::Error;

/// Error returned when input does not describe a valid CPF.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// Input failed the length, range, or check-digit rules.
    #[error("not a valid CPF")]
    InvalidCpf,
}
