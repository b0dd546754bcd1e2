//! A fully parsed hseq file.

use crate::Number;
use crate::haplotype::Haplotype;
use crate::haplotype::Table;
use crate::header;

mod builder;

pub use builder::Builder;
pub use builder::Error as BuilderError;

/// The title used when a file has no title directive.
pub const DEFAULT_TITLE: &str = "Plot";

////////////////////////////////////////////////////////////////////////////////////////
// Coordinates
////////////////////////////////////////////////////////////////////////////////////////

/// The coordinates of every data row, stored column-wise.
///
/// Index `i` of each column belongs to the `i`th data row. The `y` column is
/// empty for one-dimensional files.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Coordinates {
    /// The `x` coordinates.
    x: Vec<Number>,

    /// The `y` coordinates.
    y: Vec<Number>,

    /// The annotation tokens of each row.
    annotations: Vec<Vec<String>>,
}

impl Coordinates {
    /// Gets the `x` coordinates.
    pub fn x(&self) -> &[Number] {
        &self.x
    }

    /// Gets the `y` coordinates.
    pub fn y(&self) -> &[Number] {
        &self.y
    }

    /// Gets the annotation tokens of each row.
    pub fn annotations(&self) -> &[Vec<String>] {
        &self.annotations
    }

    /// Gets the number of rows.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates over the `(x, y)` pairs of a two-dimensional file. Yields
    /// nothing for one-dimensional files.
    pub fn pairs(&self) -> impl Iterator<Item = (Number, Number)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Dataset
////////////////////////////////////////////////////////////////////////////////////////

/// The contents of an hseq file.
///
/// A dataset always holds at least one haplotype; [`Builder::try_build()`]
/// refuses to build one otherwise.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dataset {
    /// The header record.
    header: header::Record,

    /// The plot title.
    title: String,

    /// The haplotypes.
    haplotypes: Table,

    /// The coordinates.
    coordinates: Coordinates,
}

impl Dataset {
    /// Gets the header record.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::header::Format;
    ///
    /// let data = b"@v1HoloSeq1D\n@H1 chr1 0\n3\n";
    /// let dataset = holoseq::Reader::new(&data[..]).read_dataset()?;
    ///
    /// assert_eq!(dataset.header().format(), Format::OneDimensional);
    /// assert_eq!(dataset.header().plot_type(), Some("bar"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn header(&self) -> &header::Record {
        &self.header
    }

    /// Gets the plot title.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"@v1HoloSeq2D\n@title squirrel cis\n@H1 chr1 0\n3 4\n";
    /// let dataset = holoseq::Reader::new(&data[..]).read_dataset()?;
    ///
    /// assert_eq!(dataset.title(), "squirrel cis");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Gets the haplotype table.
    pub fn haplotypes(&self) -> &Table {
        &self.haplotypes
    }

    /// Gets the first haplotype.
    pub fn first_haplotype(&self) -> &Haplotype {
        self.haplotypes
            .first()
            .unwrap_or_else(|| unreachable!("a dataset always has at least one haplotype"))
    }

    /// Gets the coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"@v1HoloSeq2D\n@H1 chr1 0\n3 4 cis\n5 6\n";
    /// let dataset = holoseq::Reader::new(&data[..]).read_dataset()?;
    ///
    /// let coordinates = dataset.coordinates();
    /// assert_eq!(coordinates.x(), &[3, 5]);
    /// assert_eq!(coordinates.y(), &[4, 6]);
    /// assert_eq!(coordinates.annotations()[0], vec![String::from("cis")]);
    /// assert!(coordinates.annotations()[1].is_empty());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }
}
