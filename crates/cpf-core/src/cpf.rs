//! # CPF Newtype
//!
//! [`Cpf`] is a Brazilian individual taxpayer registry number (Cadastro de
//! Pessoas Físicas) that has passed length, range, and check-digit
//! validation. The only way to obtain one is through a validating
//! constructor, so every instance holds exactly 11 ASCII digits.
//!
//! The canonical storage format is the raw 11 digits. Constructors accept
//! both:
//! - `"39483350875"` (11 digits)
//! - `"394.833.508-75"` (punctuated, or any other non-digit separators)

use serde::{Deserialize, Serialize};

use crate::checksum;
use crate::error::ValidationError;

/// A validated CPF, stored as 11 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl Cpf {
    /// Create a CPF from free-form text, validating it.
    ///
    /// Non-digit characters are stripped before validation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] if the digits are not exactly
    /// 11 long, are numerically below 100,000,000, or either check digit
    /// does not match.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        checksum::validate(value.as_ref()).map(Self)
    }

    /// Create a CPF from a signed integer.
    ///
    /// The integer is rendered in decimal first. Leading zeros cannot be
    /// expressed this way, so a CPF starting with `0` is always rejected.
    ///
    /// # Errors
    ///
    /// Same as [`Cpf::new`].
    pub fn from_int(value: i64) -> Result<Self, ValidationError> {
        Self::new(value.to_string())
    }

    /// Create a CPF from an unsigned integer. See [`Cpf::from_int`].
    ///
    /// # Errors
    ///
    /// Same as [`Cpf::new`].
    pub fn from_uint(value: u64) -> Result<Self, ValidationError> {
        Self::new(value.to_string())
    }

    /// Create a CPF from raw bytes, decoded as UTF-8.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected; the
    /// replacement characters are stripped along with other non-digits.
    ///
    /// # Errors
    ///
    /// Same as [`Cpf::new`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ValidationError> {
        Self::new(String::from_utf8_lossy(bytes))
    }

    /// Create a CPF, panicking if the input is invalid.
    ///
    /// For literals and other call sites where an invalid CPF is a bug in
    /// the caller rather than a recoverable condition. Use [`Cpf::new`]
    /// for anything derived from user input.
    ///
    /// # Panics
    ///
    /// Panics with the [`ValidationError`] message if validation fails.
    #[track_caller]
    pub fn must(value: impl AsRef<str>) -> Self {
        match Self::new(value) {
            Ok(cpf) => cpf,
            Err(err) => panic!("{err}"),
        }
    }

    /// Access the CPF in canonical 11-digit format (no punctuation).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Re-run full validation on the stored digits.
    ///
    /// Always true for a constructed `Cpf`.
    pub fn is_valid(&self) -> bool {
        is_valid(&self.0)
    }

    /// Return the CPF in punctuated form: `XXX.XXX.XXX-XX`.
    pub fn formatted(&self) -> String {
        let s = &self.0;
        format!("{}.{}.{}-{}", &s[..3], &s[3..6], &s[6..9], &s[9..])
    }
}

/// Whether `value` is a valid CPF, raw or punctuated.
pub fn is_valid(value: &str) -> bool {
    checksum::validate(value).is_ok()
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Cpf {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Cpf {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Cpf {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_int(value)
    }
}

impl TryFrom<u64> for Cpf {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_uint(value)
    }
}

impl TryFrom<&[u8]> for Cpf {
    type Error = ValidationError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}
