//! A line within the body of an hseq file.

use crate::header::Format;
use crate::record::ContigRecord;
use crate::record::DataRecord;
use crate::record::contig;
use crate::record::data;

/// The marker character that starts title and contig lines.
pub const MARKER: char = '@';

/// The directive (following the [`MARKER`]) that introduces the plot title.
pub const TITLE_DIRECTIVE: &str = "title";

/// An error associated with parsing a line.
#[derive(Debug)]
pub enum Error {
    /// An invalid contig record.
    InvalidContigRecord(contig::Error, String),

    /// An invalid data record.
    InvalidDataRecord(data::Error, String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidContigRecord(err, line) => {
                write!(f, "invalid contig record: {err}\n\nline: {line}")
            }
            Error::InvalidDataRecord(err, line) => {
                write!(f, "invalid data record: {err}\n\nline: {line}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A line within the body of an hseq file (every line after the header).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// An empty line.
    Empty,

    /// A title directive.
    Title(String),

    /// A contig line.
    Contig(ContigRecord),

    /// A data line.
    Data(DataRecord),
}

impl Line {
    /// Attempts to parse a body line. The `format` decides how many
    /// coordinates a data line must carry.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::Line;
    /// use holoseq::header::Format;
    ///
    /// let line = Line::try_from_str("@title Hi-C contacts", Format::TwoDimensional)?;
    /// assert_eq!(line, Line::Title(String::from("Hi-C contacts")));
    ///
    /// let line = Line::try_from_str("@H1 chr1 0", Format::TwoDimensional)?;
    /// assert!(matches!(line, Line::Contig(_)));
    ///
    /// let line = Line::try_from_str("5 7", Format::TwoDimensional)?;
    /// assert!(matches!(line, Line::Data(_)));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_from_str(s: &str, format: Format) -> Result<Self, Error> {
        if s.trim().is_empty() {
            Ok(Self::Empty)
        } else if let Some(rest) = s.strip_prefix(MARKER) {
            match rest.strip_prefix(TITLE_DIRECTIVE) {
                Some(title) => Ok(Self::Title(title.trim().to_string())),
                None => rest
                    .parse::<ContigRecord>()
                    .map(Line::Contig)
                    .map_err(|e| Error::InvalidContigRecord(e, s.into())),
            }
        } else {
            DataRecord::try_from_str(s, format)
                .map(Line::Data)
                .map_err(|e| Error::InvalidDataRecord(e, s.into()))
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Empty => write!(f, ""),
            Line::Title(title) => write!(f, "{MARKER}{TITLE_DIRECTIVE} {title}"),
            Line::Contig(record) => write!(f, "{MARKER}{record}"),
            Line::Data(record) => write!(f, "{record}"),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    pub fn test_empty_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = Line::try_from_str(" \t", Format::OneDimensional)?;
        assert_eq!(line, Line::Empty);
        Ok(())
    }

    #[test]
    pub fn test_title_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = Line::try_from_str("@title   mUroPar1 cis  ", Format::TwoDimensional)?;
        assert_eq!(line, Line::Title(String::from("mUroPar1 cis")));
        assert_eq!(line.to_string(), "@title mUroPar1 cis");
        Ok(())
    }

    #[test]
    pub fn test_contig_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = Line::try_from_str("@H1 SUPER_1H1 0", Format::TwoDimensional)?;
        assert_eq!(
            line,
            Line::Contig(ContigRecord::new("H1", "SUPER_1H1", 0))
        );
        assert_eq!(line.to_string(), "@H1 SUPER_1H1 0");
        Ok(())
    }

    #[test]
    pub fn test_one_dimensional_data_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = Line::try_from_str("42 peak", Format::OneDimensional)?;
        if let Line::Data(record) = line {
            assert_eq!(record.x(), 42);
            assert_eq!(record.y(), None);
        } else {
            panic!("expected a data line");
        }
        Ok(())
    }

    #[test]
    pub fn test_invalid_contig_line() {
        let err = Line::try_from_str("@H1 chr1", Format::TwoDimensional).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid contig record: parse error: invalid number of fields in contig record: \
             expected at least 3 fields (haplotype, contig name and start), found 2 fields\n\n\
             line: @H1 chr1"
        );
    }

    #[test]
    pub fn test_invalid_data_line() {
        let err = Line::try_from_str("x 1", Format::TwoDimensional).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid data record: parse error: invalid x coordinate: expected a non-negative \
             integer, found \"x\"\n\nline: x 1"
        );
    }
}
