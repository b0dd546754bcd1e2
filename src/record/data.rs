//! A coordinate data record.

use crate::Number;
use crate::header::Format;
use crate::record::NumberError;
use crate::record::parse_number;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with parsing a data record.
#[derive(Debug)]
pub enum ParseError {
    /// Fewer fields than the format has coordinates.
    IncorrectNumberOfFields(Format, usize),

    /// An invalid `x` coordinate.
    InvalidX(NumberError),

    /// An invalid `y` coordinate.
    InvalidY(NumberError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(format, n) => match format {
                Format::OneDimensional => write!(
                    f,
                    "invalid number of fields in 1D data: expected an x coordinate and optional \
                     annotation, found {n} fields"
                ),
                Format::TwoDimensional => write!(
                    f,
                    "invalid number of fields in 2D data: expected x and y coordinates and \
                     optional annotation, found {n} fields"
                ),
            },
            ParseError::InvalidX(err) => write!(f, "invalid x coordinate: {err}"),
            ParseError::InvalidY(err) => write!(f, "invalid y coordinate: {err}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// An error related to a [`Record`].
#[derive(Debug)]
pub enum Error {
    /// A parse error.
    Parse(ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "parse error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Record
////////////////////////////////////////////////////////////////////////////////////////

/// One row of coordinates within an hseq file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The `x` coordinate.
    x: Number,

    /// The `y` coordinate (two-dimensional files only).
    y: Option<Number>,

    /// Any trailing annotation tokens.
    annotation: Vec<String>,
}

impl Record {
    /// Attempts to parse a data record with the number of coordinates
    /// dictated by `format`.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::header::Format;
    /// use holoseq::record::DataRecord;
    ///
    /// let record = DataRecord::try_from_str("10 20 cis", Format::TwoDimensional)?;
    /// assert_eq!(record.x(), 10);
    /// assert_eq!(record.y(), Some(20));
    /// assert_eq!(record.annotation(), &[String::from("cis")]);
    ///
    /// let record = DataRecord::try_from_str("10 20 cis", Format::OneDimensional)?;
    /// assert_eq!(record.y(), None);
    /// assert_eq!(record.annotation().len(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_from_str(s: &str, format: Format) -> Result<Self> {
        let parts = s.split_whitespace().collect::<Vec<_>>();
        let n = format.dimensions();

        if parts.len() < n {
            return Err(Error::Parse(ParseError::IncorrectNumberOfFields(
                format,
                parts.len(),
            )));
        }

        let x = parse_number(parts[0]).map_err(|err| Error::Parse(ParseError::InvalidX(err)))?;

        let y = match format {
            Format::OneDimensional => None,
            Format::TwoDimensional => Some(
                parse_number(parts[1]).map_err(|err| Error::Parse(ParseError::InvalidY(err)))?,
            ),
        };

        let annotation = parts[n..].iter().map(|s| s.to_string()).collect();

        Ok(Self { x, y, annotation })
    }

    /// Gets the `x` coordinate.
    pub fn x(&self) -> Number {
        self.x
    }

    /// Gets the `y` coordinate, if the record has one.
    pub fn y(&self) -> Option<Number> {
        self.y
    }

    /// Gets the annotation tokens.
    pub fn annotation(&self) -> &[String] {
        &self.annotation
    }

    /// Consumes `self` and returns the coordinates and annotation.
    pub fn into_parts(self) -> (Number, Option<Number>, Vec<String>) {
        (self.x, self.y, self.annotation)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.x)?;

        if let Some(y) = self.y {
            write!(f, " {y}")?;
        }

        for token in &self.annotation {
            write!(f, " {token}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_dimensional() {
        let record = Record::try_from_str("1\t2", Format::TwoDimensional).unwrap();

        assert_eq!(record.x(), 1);
        assert_eq!(record.y(), Some(2));
        assert!(record.annotation().is_empty());
    }

    #[test]
    fn parse_one_dimensional_with_annotation() {
        let record = Record::try_from_str("7 a b", Format::OneDimensional).unwrap();

        assert_eq!(record.x(), 7);
        assert_eq!(record.y(), None);
        assert_eq!(record.annotation(), &[String::from("a"), String::from("b")]);
        assert_eq!(record.to_string(), "7 a b");
    }

    #[test]
    fn too_few_fields_two_dimensional() {
        let err = Record::try_from_str("1", Format::TwoDimensional).unwrap_err();

        assert!(matches!(
            err,
            Error::Parse(ParseError::IncorrectNumberOfFields(
                Format::TwoDimensional,
                1
            ))
        ));
        assert_eq!(
            err.to_string(),
            "parse error: invalid number of fields in 2D data: expected x and y coordinates and \
             optional annotation, found 1 fields"
        );
    }

    #[test]
    fn non_numeric_x() {
        let err = Record::try_from_str("chr1 2", Format::TwoDimensional).unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::InvalidX(_))));
    }

    #[test]
    fn non_numeric_y() {
        let err = Record::try_from_str("1 2.5", Format::TwoDimensional).unwrap_err();

        assert!(matches!(err, Error::Parse(ParseError::InvalidY(_))));
        assert_eq!(
            err.to_string(),
            "parse error: invalid y coordinate: expected a non-negative integer, found \"2.5\""
        );
    }

    #[test]
    fn negative_coordinate() {
        let err = Record::try_from_str("-1", Format::OneDimensional).unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::InvalidX(_))));
    }
}
