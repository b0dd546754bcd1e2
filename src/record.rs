//! Records found in the body of an hseq file.

use std::num::ParseIntError;

use crate::Number;

pub mod contig;
pub mod data;

pub use contig::Record as ContigRecord;
pub use data::Record as DataRecord;

/// An error related to parsing a single coordinate field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NumberError {
    /// The field contains something other than ASCII digits.
    NotDigits(String),

    /// The field is made of digits but does not fit in a [`Number`].
    Overflow(ParseIntError),
}

impl std::fmt::Display for NumberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberError::NotDigits(field) => {
                write!(f, "expected a non-negative integer, found \"{field}\"")
            }
            NumberError::Overflow(err) => write!(f, "integer out of range: {err}"),
        }
    }
}

impl std::error::Error for NumberError {}

/// Parses a field made only of ASCII digits.
///
/// Signs are rejected: `+1` and `-1` are not valid coordinates.
///
/// # Examples
///
/// ```
/// use holoseq::record::parse_number;
///
/// assert_eq!(parse_number("42"), Ok(42));
/// assert!(parse_number("+42").is_err());
/// ```
pub fn parse_number(field: &str) -> Result<Number, NumberError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumberError::NotDigits(field.into()));
    }

    field.parse::<Number>().map_err(NumberError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert_eq!(parse_number("0"), Ok(0));
        assert_eq!(parse_number("0012"), Ok(12));
    }

    #[test]
    fn signs_are_rejected() {
        assert!(matches!(parse_number("+1"), Err(NumberError::NotDigits(_))));
        assert!(matches!(parse_number("-1"), Err(NumberError::NotDigits(_))));
    }

    #[test]
    fn overflow() {
        let err = parse_number("99999999999999999999999").unwrap_err();
        assert!(matches!(err, NumberError::Overflow(_)));
    }
}
