//! `holoseq` is a crate for reading hseq genomic coordinate files and
//! translating plot coordinates back into genomic locations.
//!
//! An hseq file is a gzipped, line-oriented text file. Its first line names
//! the format (`@v1HoloSeq1D` or `@v1HoloSeq2D`). Lines that start with `@`
//! either set the plot title (`@title ...`) or place a contig within the
//! global coordinate space of a haplotype (`@<haplotype> <contig> <start>`).
//! Every other line holds one (1D) or two (2D) coordinates, optionally
//! followed by annotation tokens. Two-dimensional files typically hold
//! pairwise read-mapping positions, such as a Hi-C contact map.
//!
//! ## Reading hseq files
//!
//! The [`Reader`] facility reads lines from any [`std::io::BufRead`], and
//! [`reader::open()`] opens a gzipped file from disk. Most users will want
//! [`Reader::read_dataset()`], which parses the whole input into a
//! [`Dataset`](dataset::Dataset) and stops at the first malformed line.
//!
//! ## Locating coordinates
//!
//! Each [`Haplotype`](haplotype::Haplotype) can translate a global
//! coordinate into a [`Location`](locate::Location) (a contig and an offset
//! within it). A [`Locator`](locate::Locator) does this for both axes of a
//! plot, the way a click on a rendered contact map is answered.
//!
//! ```
//! use holoseq::locate::Locator;
//!
//! let data = b"@v1HoloSeq2D\n\
//!              @title contacts\n\
//!              @H1 chr1H1 0\n\
//!              @H1 chr2H1 1000\n\
//!              12 1500\n\
//!              1000 40 cis\n";
//!
//! let dataset = holoseq::Reader::new(&data[..]).read_dataset()?;
//! assert_eq!(dataset.coordinates().len(), 2);
//!
//! let locator = Locator::new(&dataset);
//! assert_eq!(
//!     locator.label(Some((1000, 1500))),
//!     "X axis chr2H1:0 Y axis chr2H1:500"
//! );
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Rendering
//!
//! Drawing is not part of this crate. A [`Panel`](panel::Panel) gathers what
//! a renderer needs and the [`Render`](panel::Render) trait is the seam a
//! plotting backend implements.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod dataset;
pub mod haplotype;
pub mod header;
pub mod line;
pub mod locate;
pub mod panel;
pub mod reader;
pub mod record;

pub use line::Line;

pub use self::reader::Reader;

/// A coordinate within the global coordinate space of a haplotype.
pub type Number = u64;
