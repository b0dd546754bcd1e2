//! Turning plot coordinates into `contig:offset` labels.

use crate::Number;
use crate::dataset::Dataset;
use crate::haplotype::Haplotype;
use crate::header::Format;

/// The label shown before any point has been selected.
pub const NO_POINT_LABEL: &str = "Mouse click on image for location";

/// A position within a named contig.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Location<'a> {
    /// The contig name.
    contig: &'a str,

    /// The offset from the start of the contig.
    offset: Number,
}

impl<'a> Location<'a> {
    /// Creates a new location.
    pub fn new(contig: &'a str, offset: Number) -> Self {
        Self { contig, offset }
    }

    /// Gets the contig name.
    pub fn contig(&self) -> &'a str {
        self.contig
    }

    /// Gets the offset within the contig.
    pub fn offset(&self) -> Number {
        self.offset
    }
}

impl std::fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.contig, self.offset)
    }
}

/// Which haplotypes the plot axes are laid out against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Layout {
    /// Both axes use the first haplotype.
    Cis,

    /// The `x` axis uses the first haplotype and the `y` axis the second.
    Trans,
}

/// Labels points on a plot with their contig locations.
#[derive(Clone, Copy, Debug)]
pub struct Locator<'a> {
    /// The haplotype along the `x` axis.
    x: &'a Haplotype,

    /// The haplotype along the `y` axis, when the plot has one.
    y: Option<&'a Haplotype>,

    /// The layout of the axes.
    layout: Layout,
}

impl<'a> Locator<'a> {
    /// Creates a locator for a dataset.
    ///
    /// Two-dimensional datasets with more than one haplotype are laid out
    /// [`Layout::Trans`]; everything else is [`Layout::Cis`].
    /// One-dimensional datasets have no `y` axis.
    pub fn new(dataset: &'a Dataset) -> Self {
        let haplotypes = dataset.haplotypes();
        let first = dataset.first_haplotype();

        match (dataset.header().format(), haplotypes.get(1)) {
            (Format::OneDimensional, _) => Self {
                x: first,
                y: None,
                layout: Layout::Cis,
            },
            (Format::TwoDimensional, Some(second)) => Self {
                x: first,
                y: Some(second),
                layout: Layout::Trans,
            },
            (Format::TwoDimensional, None) => Self {
                x: first,
                y: Some(first),
                layout: Layout::Cis,
            },
        }
    }

    /// Gets the layout of the axes.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Gets the label for a selected point, or [`NO_POINT_LABEL`] when
    /// nothing is selected.
    ///
    /// The `y` value is ignored for one-dimensional datasets.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::locate::Locator;
    ///
    /// let data = b"@v1HoloSeq2D\n@H1 chr1 0\n@H1 chr2 100\n5 150\n";
    /// let dataset = holoseq::Reader::new(&data[..]).read_dataset()?;
    /// let locator = Locator::new(&dataset);
    ///
    /// assert_eq!(locator.label(Some((5, 150))), "X axis chr1:5 Y axis chr2:50");
    /// assert_eq!(locator.label(None), "Mouse click on image for location");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn label(&self, point: Option<(Number, Number)>) -> String {
        let Some((x, y)) = point else {
            return NO_POINT_LABEL.to_string();
        };

        match self.y {
            Some(haplotype) => format!(
                "X axis {} Y axis {}",
                describe(self.x, x),
                describe(haplotype, y)
            ),
            None => format!("X axis {}", describe(self.x, x)),
        }
    }
}

/// Describes `position` within `haplotype`, falling back to `?:<position>`
/// when it precedes every contig.
fn describe(haplotype: &Haplotype, position: Number) -> String {
    match haplotype.locate(position) {
        Some(location) => location.to_string(),
        None => format!("?:{position}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reader;

    fn dataset(data: &[u8]) -> Dataset {
        Reader::new(data).read_dataset().unwrap()
    }

    #[test]
    fn cis() {
        let dataset = dataset(b"@v1HoloSeq2D\n@H1 chr1H1 0\n@H1 chr2H1 1000\n10 1200\n");
        let locator = Locator::new(&dataset);

        assert_eq!(locator.layout(), Layout::Cis);
        assert_eq!(
            locator.label(Some((1000, 999))),
            "X axis chr2H1:0 Y axis chr1H1:999"
        );
    }

    #[test]
    fn trans() {
        let dataset = dataset(
            b"@v1HoloSeq2D\n@H1 chr1H1 0\n@H1 chr2H1 1000\n@H2 chr1H2 0\n@H2 chr2H2 800\n1 1\n",
        );
        let locator = Locator::new(&dataset);

        assert_eq!(locator.layout(), Layout::Trans);
        assert_eq!(
            locator.label(Some((900, 900))),
            "X axis chr1H1:900 Y axis chr2H2:100"
        );
    }

    #[test]
    fn one_dimensional_ignores_y() {
        let dataset = dataset(b"@v1HoloSeq1D\n@H1 chr1 0\n@H2 chr1 0\n5\n");
        let locator = Locator::new(&dataset);

        assert_eq!(locator.layout(), Layout::Cis);
        assert_eq!(locator.label(Some((5, 12345))), "X axis chr1:5");
    }

    #[test]
    fn position_before_first_contig() {
        let dataset = dataset(b"@v1HoloSeq2D\n@H1 chr1 100\n100 100\n");
        let locator = Locator::new(&dataset);

        assert_eq!(locator.label(Some((5, 100))), "X axis ?:5 Y axis chr1:0");
    }

    #[test]
    fn no_point() {
        let dataset = dataset(b"@v1HoloSeq2D\n@H1 chr1 0\n1 1\n");
        assert_eq!(Locator::new(&dataset).label(None), NO_POINT_LABEL);
    }
}
