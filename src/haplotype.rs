//! Haplotypes and the lookup from global coordinates to contig offsets.
//!
//! Each haplotype lays its contigs end to end in a single global coordinate
//! space. The start of every contig within that space is recorded in the
//! hseq file, and the starts are ordered, so finding the contig that holds a
//! global coordinate is a binary search.

use indexmap::IndexMap;
use nonempty::NonEmpty;

use crate::Number;
use crate::locate::Location;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to a [`Haplotype`].
#[derive(Debug)]
pub enum Error {
    /// A contig starts before the contig that precedes it.
    UnsortedStart {
        /// The haplotype label.
        haplotype: String,

        /// The offending contig name.
        contig: String,

        /// The start of the offending contig.
        start: Number,

        /// The start of the preceding contig.
        previous: Number,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnsortedStart {
                haplotype,
                contig,
                start,
                previous,
            } => write!(
                f,
                "contig `{contig}` in haplotype `{haplotype}` starts at {start}, before the \
                 preceding contig's start of {previous}"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Contig
////////////////////////////////////////////////////////////////////////////////////////

/// A contig placed within the global coordinate space of a haplotype.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contig {
    /// The contig name.
    name: String,

    /// The start offset in the global coordinate space.
    start: Number,
}

impl Contig {
    /// Creates a new contig.
    pub fn new(name: impl Into<String>, start: Number) -> Self {
        Self {
            name: name.into(),
            start,
        }
    }

    /// Gets the contig name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the start offset.
    pub fn start(&self) -> Number {
        self.start
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Haplotype
////////////////////////////////////////////////////////////////////////////////////////

/// A haplotype: a label and its contigs ordered by start.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Haplotype {
    /// The haplotype label.
    name: String,

    /// The contigs.
    contigs: NonEmpty<Contig>,
}

impl Haplotype {
    /// Creates a haplotype holding a single contig.
    pub fn new(name: impl Into<String>, contig: Contig) -> Self {
        Self {
            name: name.into(),
            contigs: NonEmpty::new(contig),
        }
    }

    /// Appends a contig.
    ///
    /// The contig must not start before the last contig pushed.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::haplotype::Contig;
    /// use holoseq::haplotype::Haplotype;
    ///
    /// let mut haplotype = Haplotype::new("H1", Contig::new("chr1", 0));
    /// haplotype.push(Contig::new("chr2", 1000))?;
    /// assert!(haplotype.push(Contig::new("chr3", 10)).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn push(&mut self, contig: Contig) -> Result<()> {
        let previous = self.contigs.last().start();

        if contig.start() < previous {
            return Err(Error::UnsortedStart {
                haplotype: self.name.clone(),
                contig: contig.name,
                start: contig.start,
                previous,
            });
        }

        self.contigs.push(contig);
        Ok(())
    }

    /// Gets the haplotype label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the contigs in order.
    pub fn contigs(&self) -> &NonEmpty<Contig> {
        &self.contigs
    }

    /// Gets the number of contigs.
    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    /// Always `false`; a haplotype holds at least one contig.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Locates a global coordinate within the haplotype.
    ///
    /// The containing contig is the last one whose start is less than or
    /// equal to `position`. Positions before the first contig can't be
    /// located.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::haplotype::Contig;
    /// use holoseq::haplotype::Haplotype;
    ///
    /// let mut haplotype = Haplotype::new("H1", Contig::new("chr1", 100));
    /// haplotype.push(Contig::new("chr2", 1100))?;
    ///
    /// let location = haplotype.locate(1100).unwrap();
    /// assert_eq!(location.contig(), "chr2");
    /// assert_eq!(location.offset(), 0);
    ///
    /// let location = haplotype.locate(1099).unwrap();
    /// assert_eq!(location.to_string(), "chr1:999");
    ///
    /// assert!(haplotype.locate(99).is_none());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn locate(&self, position: Number) -> Option<Location<'_>> {
        let (head, tail) = self.contigs.split_first();

        // Index into `tail` of the first contig that starts past `position`.
        let i = tail.partition_point(|contig| contig.start() <= position);

        let contig = match i {
            0 if head.start() > position => return None,
            0 => head,
            i => &tail[i - 1],
        };

        Some(Location::new(contig.name(), position - contig.start()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Table
////////////////////////////////////////////////////////////////////////////////////////

/// All haplotypes of a file, in the order their first contig appeared.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table {
    /// The haplotypes keyed by label.
    inner: IndexMap<String, Haplotype>,
}

impl Table {
    /// Adds a contig to the haplotype labelled `haplotype`, creating the
    /// haplotype if this is its first contig.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::haplotype::Contig;
    /// use holoseq::haplotype::Table;
    ///
    /// let mut table = Table::default();
    /// table.push("H1", Contig::new("chr1H1", 0))?;
    /// table.push("H2", Contig::new("chr1H2", 0))?;
    /// table.push("H1", Contig::new("chr2H1", 50))?;
    ///
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.first().unwrap().len(), 2);
    /// assert_eq!(table.get(1).unwrap().name(), "H2");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn push(&mut self, haplotype: &str, contig: Contig) -> Result<()> {
        match self.inner.get_mut(haplotype) {
            Some(existing) => existing.push(contig),
            None => {
                self.inner
                    .insert(haplotype.to_string(), Haplotype::new(haplotype, contig));
                Ok(())
            }
        }
    }

    /// Gets a haplotype by label.
    pub fn by_name(&self, name: &str) -> Option<&Haplotype> {
        self.inner.get(name)
    }

    /// Gets a haplotype by the order in which it first appeared.
    pub fn get(&self, index: usize) -> Option<&Haplotype> {
        self.inner.get_index(index).map(|(_, haplotype)| haplotype)
    }

    /// Gets the first haplotype.
    pub fn first(&self) -> Option<&Haplotype> {
        self.get(0)
    }

    /// Gets the number of haplotypes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the table holds no haplotypes.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over the haplotypes in order.
    pub fn iter(&self) -> impl Iterator<Item = &Haplotype> {
        self.inner.values()
    }
}
