//! Textual input parsing for partitions and quasi-Dyck vectors.
//!
//! Input is a comma-separated integer list, optionally parenthesized:
//! `5,4,4,1` or `(5, 4, 4, 1)` for a partition, `0,1,2,-1` for a QDV.
//! Malformed text is the one hard-failure category of the crate; every
//! other out-of-domain situation is an `Option` sentinel.

use thiserror::Error;

use crate::partition::Partition;
use crate::qdv::Qdv;

/// Why a textual input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No integers in the input.
    #[error("empty input: expected comma-separated integers")]
    Empty,
    /// A token failed integer parsing.
    #[error("invalid integer `{0}`")]
    InvalidInteger(String),
    /// A partition part was zero or negative.
    #[error("partition parts must be positive integers, got {0}")]
    NonPositivePart(i64),
    /// A QDV did not start with 0.
    #[error("a quasi-Dyck vector must start with 0, got {0}")]
    BadLeadingEntry(i64),
}

fn integers(input: &str) -> Result<Vec<i64>, ParseError> {
    let cleaned: String = input.chars().filter(|&c| c != '(' && c != ')').collect();
    let mut values = Vec::new();
    for token in cleaned.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = token
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidInteger(token.to_string()))?;
        values.push(value);
    }
    if values.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(values)
}

/// Parse a partition from a comma-separated list of positive integers.
///
/// # Errors
///
/// [`ParseError`] on empty input, non-integer tokens, or non-positive
/// parts.
pub fn parse_partition(input: &str) -> Result<Partition, ParseError> {
    let values = integers(input)?;
    let mut parts = Vec::with_capacity(values.len());
    for value in values {
        if value <= 0 {
            return Err(ParseError::NonPositivePart(value));
        }
        let part =
            u32::try_from(value).map_err(|_| ParseError::InvalidInteger(value.to_string()))?;
        parts.push(part);
    }
    Ok(Partition::new(parts))
}

/// Parse a quasi-Dyck vector from a comma-separated integer list starting
/// with 0.
///
/// # Errors
///
/// [`ParseError`] on empty input, non-integer tokens, or a nonzero leading
/// entry.
pub fn parse_qdv(input: &str) -> Result<Qdv, ParseError> {
    let values = integers(input)?;
    if values[0] != 0 {
        return Err(ParseError::BadLeadingEntry(values[0]));
    }
    let mut entries = Vec::with_capacity(values.len());
    for value in values {
        let entry =
            i32::try_from(value).map_err(|_| ParseError::InvalidInteger(value.to_string()))?;
        entries.push(entry);
    }
    Ok(Qdv::new(entries))
}
