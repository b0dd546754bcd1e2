//! A contig record (`@<haplotype> <contig> <start>`).

use std::str::FromStr;

use crate::Number;
use crate::record::NumberError;
use crate::record::parse_number;

/// The minimum number of fields in a contig record.
pub const NUM_CONTIG_FIELDS: usize = 3;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with parsing a contig record.
#[derive(Debug)]
pub enum ParseError {
    /// Too few fields in the contig record.
    IncorrectNumberOfFields(usize),

    /// An invalid start offset.
    InvalidStart(NumberError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(n) => write!(
                f,
                "invalid number of fields in contig record: expected at least \
                 {NUM_CONTIG_FIELDS} fields (haplotype, contig name and start), found {n} fields"
            ),
            ParseError::InvalidStart(err) => write!(f, "invalid start: {err}"),
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

/// The placement of one contig in the global coordinate space of a
/// haplotype.
///
/// The string form excludes the leading marker, so `"H1 chr1 0"` parses but
/// `"@H1 chr1 0"` does not.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The haplotype label.
    haplotype: String,

    /// The contig name.
    contig: String,

    /// The start offset of the contig.
    start: Number,
}

impl Record {
    /// Creates a new contig record.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::record::ContigRecord;
    ///
    /// let record = ContigRecord::new("H1", "chr1", 0);
    /// assert_eq!(record.to_string(), "H1 chr1 0");
    /// ```
    pub fn new(haplotype: impl Into<String>, contig: impl Into<String>, start: Number) -> Self {
        Self {
            haplotype: haplotype.into(),
            contig: contig.into(),
            start,
        }
    }

    /// Gets the haplotype label.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::record::ContigRecord;
    ///
    /// let record = "H1 chr1 100".parse::<ContigRecord>()?;
    /// assert_eq!(record.haplotype(), "H1");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn haplotype(&self) -> &str {
        &self.haplotype
    }

    /// Gets the contig name.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::record::ContigRecord;
    ///
    /// let record = "H1 chr1 100".parse::<ContigRecord>()?;
    /// assert_eq!(record.contig(), "chr1");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn contig(&self) -> &str {
        &self.contig
    }

    /// Gets the start offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::record::ContigRecord;
    ///
    /// let record = "H1 chr1 100".parse::<ContigRecord>()?;
    /// assert_eq!(record.start(), 100);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn start(&self) -> Number {
        self.start
    }

    /// Consumes `self` and returns the haplotype, contig name and start.
    pub fn into_parts(self) -> (String, String, Number) {
        (self.haplotype, self.contig, self.start)
    }
}

impl FromStr for Record {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts = s.split_whitespace().collect::<Vec<_>>();
        if parts.len() < NUM_CONTIG_FIELDS {
            return Err(Error::Parse(ParseError::IncorrectNumberOfFields(
                parts.len(),
            )));
        }

        let start = parse_number(parts[2])
            .map_err(|err| Error::Parse(ParseError::InvalidStart(err)))?;

        Ok(Self::new(parts[0], parts[1], start))
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.haplotype, self.contig, self.start)
    }
}
