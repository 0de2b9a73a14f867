//! # Normalization and Check Digits
//!
//! A CPF is 11 decimal digits: a 9-digit base followed by two check digits.
//! Each check digit is a weighted modulo-11 sum over everything before it,
//! with weights descending from `len + 1` down to 2.
//!
//! Normalization is best-effort and never rejects anything on its own.
//! All rejection happens in [`validate`].

use crate::error::ValidationError;

/// Number of digits in a canonical CPF.
pub const CPF_LENGTH: usize = 11;

/// Smallest numeric value accepted. Rejects all-zero input and anything
/// with fewer than 9 significant digits.
pub const MIN_VALUE: u64 = 100_000_000;

const MODULUS: usize = 11;

/// Reduce free-form input to a candidate digit string.
///
/// Input that is already all ASCII digits is returned untouched. Otherwise
/// every non-digit character is stripped, which also removes the `.` and
/// `-` of the punctuated form.
///
/// Candidates shorter than [`CPF_LENGTH`] are never zero-padded; they are
/// left short and fail the length check.
pub fn normalize(raw: &str) -> String {
    let mut candidate = raw.to_owned();
    if !candidate.bytes().all(|b| b.is_ascii_digit()) {
        candidate.retain(|c| c.is_ascii_digit());
    }
    candidate
}

/// Compute the check digit for `sequence`.
///
/// Returns `None` if `sequence` contains anything other than ASCII digits.
pub fn check_digit(sequence: &str) -> Option<u8> {
    let initial = sequence.len() + 1;
    let mut sum = 0usize;
    for (i, c) in sequence.chars().enumerate() {
        let d = c.to_digit(10)? as usize;
        sum += (initial - i) * d;
    }
    let digit = MODULUS - sum % MODULUS;
    Some(if digit >= 10 { 0 } else { digit as u8 })
}

/// Normalize `raw` and run the structural and check-digit rules, in order.
///
/// On success returns the normalized 11-digit string.
pub(crate) fn validate(raw: &str) -> Result<String, ValidationError> {
    let candidate = normalize(raw);

    // A candidate that does not parse (empty, or too long for u64) compares
    // as zero and fails the range check below.
    let value = candidate.parse::<u64>().unwrap_or(0);
    if candidate.len() != CPF_LENGTH || value < MIN_VALUE {
        return Err(ValidationError::InvalidCpf);
    }

    for position in [CPF_LENGTH - 2, CPF_LENGTH - 1] {
        let expected = check_digit(&candidate[..position]);
        let actual = candidate[position..=position].parse::<u8>().ok();
        if expected.is_none() || expected != actual {
            return Err(ValidationError::InvalidCpf);
        }
    }

    Ok(candidate)
}
