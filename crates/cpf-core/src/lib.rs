//! # cpf-core — Brazilian CPF Validation and Formatting
//!
//! Validates and formats CPF numbers (Cadastro de Pessoas Físicas), the
//! 11-digit Brazilian individual taxpayer registry number whose last two
//! digits are modulo-11 check digits.
//!
//! ```
//! use cpf_core::Cpf;
//!
//! let cpf = Cpf::new("394.833.508-75")?;
//! assert_eq!(cpf.as_str(), "39483350875");
//! assert_eq!(cpf.formatted(), "394.833.508-75");
//! assert!(!cpf_core::is_valid("99"));
//! # Ok::<(), cpf_core::ValidationError>(())
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Validated newtype.** [`Cpf`] can only be obtained through a
//!    validating constructor. Holding one means holding 11 ASCII digits with
//!    both check digits correct.
//!
//! 2. **One error kind.** Every rejection is [`ValidationError::InvalidCpf`].
//!    The error does not say which rule failed.
//!
//! 3. **Panicking is opt-in.** [`Cpf::must`] is the only entry point that
//!    panics on invalid input, and it is named distinctly from the fallible
//!    constructors.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests; no `panic!()` outside [`Cpf::must`].
//! - No I/O, no logging, no global state. Every function is pure and safe
//!   to call from any thread.

pub mod checksum;
pub mod cpf;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use checksum::{check_digit, normalize, CPF_LENGTH};
pub use cpf::{is_valid, Cpf};
pub use error::ValidationError;
