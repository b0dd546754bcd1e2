//! The header record on the first line of an hseq file.

use std::str::FromStr;

/// The header tag for files containing one coordinate per row.
pub const ONE_DIMENSIONAL_TAG: &str = "@v1HoloSeq1D";

/// The header tag for files containing a pair of coordinates per row.
pub const TWO_DIMENSIONAL_TAG: &str = "@v1HoloSeq2D";

/// Every header tag that is accepted on the first line.
pub const TAGS: [&str; 2] = [ONE_DIMENSIONAL_TAG, TWO_DIMENSIONAL_TAG];

/// The plot subtype used for one-dimensional files that don't name one.
pub const DEFAULT_PLOT_TYPE: &str = "bar";

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with parsing a header record.
#[derive(Debug)]
pub enum ParseError {
    /// The header line was empty.
    Empty,

    /// The header tag is not one of the accepted [`TAGS`].
    InvalidTag(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty header line"),
            ParseError::InvalidTag(tag) => write!(
                f,
                "invalid header tag: expected one of {}, found \"{tag}\"",
                TAGS.join(", ")
            ),
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
// Format
////////////////////////////////////////////////////////////////////////////////////////

/// The dimensionality of the coordinates within an hseq file.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Format {
    /// One coordinate per data row.
    OneDimensional,

    /// An `x` and a `y` coordinate per data row.
    TwoDimensional,
}

impl Format {
    /// Gets the header tag for the format.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::header::Format;
    ///
    /// assert_eq!(Format::TwoDimensional.tag(), "@v1HoloSeq2D");
    /// ```
    pub fn tag(&self) -> &'static str {
        match self {
            Format::OneDimensional => ONE_DIMENSIONAL_TAG,
            Format::TwoDimensional => TWO_DIMENSIONAL_TAG,
        }
    }

    /// Gets the number of coordinates expected on each data row.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::header::Format;
    ///
    /// assert_eq!(Format::OneDimensional.dimensions(), 1);
    /// assert_eq!(Format::TwoDimensional.dimensions(), 2);
    /// ```
    pub fn dimensions(&self) -> usize {
        match self {
            Format::OneDimensional => 1,
            Format::TwoDimensional => 2,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}D", self.dimensions())
    }
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            ONE_DIMENSIONAL_TAG => Ok(Format::OneDimensional),
            TWO_DIMENSIONAL_TAG => Ok(Format::TwoDimensional),
            _ => Err(ParseError::InvalidTag(s.into())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Record
////////////////////////////////////////////////////////////////////////////////////////

/// The header record of an hseq file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The coordinate format.
    format: Format,

    /// The plot subtype (one-dimensional files only).
    plot_type: Option<String>,
}

impl Record {
    /// Creates a new header record.
    ///
    /// For one-dimensional files a missing plot type falls back to
    /// [`DEFAULT_PLOT_TYPE`]. Two-dimensional files never carry a plot type.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::header::Format;
    /// use holoseq::header::Record;
    ///
    /// let record = Record::new(Format::OneDimensional, None);
    /// assert_eq!(record.plot_type(), Some("bar"));
    ///
    /// let record = Record::new(Format::TwoDimensional, Some(String::from("bar")));
    /// assert_eq!(record.plot_type(), None);
    /// ```
    pub fn new(format: Format, plot_type: Option<String>) -> Self {
        let plot_type = match format {
            Format::OneDimensional => {
                Some(plot_type.unwrap_or_else(|| String::from(DEFAULT_PLOT_TYPE)))
            }
            Format::TwoDimensional => None,
        };

        Self { format, plot_type }
    }

    /// Gets the coordinate format.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::header;
    ///
    /// let record = "@v1HoloSeq2D".parse::<header::Record>()?;
    /// assert_eq!(record.format(), header::Format::TwoDimensional);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn format(&self) -> Format {
        self.format
    }

    /// Gets the plot subtype, if the format has one.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::header;
    ///
    /// let record = "@v1HoloSeq1D line".parse::<header::Record>()?;
    /// assert_eq!(record.plot_type(), Some("line"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn plot_type(&self) -> Option<&str> {
        self.plot_type.as_deref()
    }
}

impl FromStr for Record {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();

        let tag = tokens.next().ok_or(Error::Parse(ParseError::Empty))?;
        let format = tag.parse::<Format>().map_err(Error::Parse)?;
        let plot_type = tokens.next().map(String::from);

        Ok(Self::new(format, plot_type))
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.plot_type {
            Some(plot_type) => write!(f, "{} {}", self.format.tag(), plot_type),
            None => write!(f, "{}", self.format.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_dimensional() {
        let record = "@v1HoloSeq2D".parse::<Record>().unwrap();
        assert_eq!(record.format(), Format::TwoDimensional);
        assert_eq!(record.plot_type(), None);
    }

    #[test]
    fn parse_one_dimensional_default_plot_type() {
        let record = "@v1HoloSeq1D\t".parse::<Record>().unwrap();
        assert_eq!(record.format(), Format::OneDimensional);
        assert_eq!(record.plot_type(), Some("bar"));
    }

    #[test]
    fn trailing_tokens_are_ignored_for_two_dimensional() {
        let record = "@v1HoloSeq2D scatter extra".parse::<Record>().unwrap();
        assert_eq!(record.plot_type(), None);
    }

    #[test]
    fn invalid_tag() {
        let err = "@v2HoloSeq2D".parse::<Record>().unwrap_err();

        assert!(matches!(err, Error::Parse(ParseError::InvalidTag(_))));
        assert_eq!(
            err.to_string(),
            "parse error: invalid header tag: expected one of @v1HoloSeq1D, @v1HoloSeq2D, \
             found \"@v2HoloSeq2D\""
        );
    }

    #[test]
    fn empty() {
        let err = "   ".parse::<Record>().unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::Empty)));
    }

    #[test]
    fn display() {
        let record = "@v1HoloSeq1D  line".parse::<Record>().unwrap();
        assert_eq!(record.to_string(), "@v1HoloSeq1D line");

        let record = "@v1HoloSeq2D".parse::<Record>().unwrap();
        assert_eq!(record.to_string(), "@v1HoloSeq2D");
    }
}
