//! A builder for a [`Dataset`].

use crate::dataset::Coordinates;
use crate::dataset::DEFAULT_TITLE;
use crate::dataset::Dataset;
use crate::haplotype;
use crate::haplotype::Contig;
use crate::haplotype::Table;
use crate::header;
use crate::header::Format;
use crate::record::ContigRecord;
use crate::record::DataRecord;

/// An error that occurs when a required field was never provided to the
/// [`Builder`].
#[derive(Debug)]
pub enum MissingError {
    /// No header was provided to the [`Builder`].
    Header,

    /// No contigs were provided to the [`Builder`].
    Haplotypes,
}

impl std::fmt::Display for MissingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingError::Header => write!(f, "header"),
            MissingError::Haplotypes => write!(f, "haplotypes"),
        }
    }
}

impl std::error::Error for MissingError {}

/// An error that occurs when a singular field was provided multiple times to
/// the [`Builder`].
#[derive(Debug)]
pub enum MultipleError {
    /// The header field was provided multiple times to the [`Builder`].
    Header,
}

impl std::fmt::Display for MultipleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultipleError::Header => write!(f, "header"),
        }
    }
}

impl std::error::Error for MultipleError {}

/// An error related to a [`Builder`].
#[derive(Debug)]
pub enum Error {
    /// The data rows don't have the number of coordinates the header
    /// announces.
    DimensionMismatch(Format),

    /// A contig could not be added to its haplotype.
    Haplotype(haplotype::Error),

    /// An error where a required field was never provided to the [`Builder`].
    Missing(MissingError),

    /// An error where a singular field was provided to the [`Builder`] more
    /// than once.
    Multiple(MultipleError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DimensionMismatch(format) => write!(
                f,
                "data rows do not match the {format} format announced by the header"
            ),
            Error::Haplotype(err) => write!(f, "haplotype error: {err}"),
            Error::Missing(err) => write!(f, "missing required field: {err}"),
            Error::Multiple(err) => write!(f, "singular field set multiple times: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`Dataset`].
#[derive(Debug, Default)]
pub struct Builder {
    /// The header record.
    header: Option<header::Record>,

    /// The title.
    title: Option<String>,

    /// The haplotypes.
    haplotypes: Table,

    /// The coordinates.
    coordinates: Coordinates,
}

impl Builder {
    /// Sets the header record for the [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::dataset::Builder;
    ///
    /// let builder = Builder::default().header("@v1HoloSeq2D".parse()?)?;
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn header(mut self, record: header::Record) -> Result<Self> {
        if self.header.is_some() {
            return Err(Error::Multiple(MultipleError::Header));
        }

        self.header = Some(record);
        Ok(self)
    }

    /// Sets the title. A later title replaces an earlier one.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Pushes a [contig record](crate::record::ContigRecord) into the
    /// [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::dataset::Builder;
    ///
    /// let builder = Builder::default()
    ///     .push_contig("H1 chr1 0".parse()?)?
    ///     .push_contig("H1 chr2 500".parse()?)?;
    ///
    /// assert!(builder.push_contig("H1 chr3 20".parse()?).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn push_contig(mut self, record: ContigRecord) -> Result<Self> {
        let (haplotype, name, start) = record.into_parts();

        self.haplotypes
            .push(&haplotype, Contig::new(name, start))
            .map_err(Error::Haplotype)?;

        Ok(self)
    }

    /// Pushes a [data record](crate::record::DataRecord) into the
    /// [`Builder`].
    pub fn push_data(mut self, record: DataRecord) -> Self {
        let (x, y, annotation) = record.into_parts();

        self.coordinates.x.push(x);
        if let Some(y) = y {
            self.coordinates.y.push(y);
        }
        self.coordinates.annotations.push(annotation);

        self
    }

    /// Consumes `self` to attempt to build a [`Dataset`].
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::dataset::Builder;
    /// use holoseq::header::Format;
    /// use holoseq::record::DataRecord;
    ///
    /// let dataset = Builder::default()
    ///     .header("@v1HoloSeq2D".parse()?)?
    ///     .title("contacts")
    ///     .push_contig("H1 chr1 0".parse()?)?
    ///     .push_data(DataRecord::try_from_str("1 2", Format::TwoDimensional)?)
    ///     .try_build()?;
    ///
    /// assert_eq!(dataset.title(), "contacts");
    /// assert_eq!(dataset.haplotypes().len(), 1);
    /// assert_eq!(dataset.coordinates().len(), 1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build(self) -> Result<Dataset> {
        let header = self.header.ok_or(Error::Missing(MissingError::Header))?;

        if self.haplotypes.is_empty() {
            return Err(Error::Missing(MissingError::Haplotypes));
        }

        let expected_y = match header.format() {
            Format::OneDimensional => 0,
            Format::TwoDimensional => self.coordinates.x.len(),
        };

        if self.coordinates.y.len() != expected_y {
            return Err(Error::DimensionMismatch(header.format()));
        }

        Ok(Dataset {
            header,
            title: self.title.unwrap_or_else(|| String::from(DEFAULT_TITLE)),
            haplotypes: self.haplotypes,
            coordinates: self.coordinates,
        })
    }
}
