//! An hseq file reader.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::{self};
use std::iter;
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::Line;
use crate::dataset;
use crate::dataset::Dataset;
use crate::header;
use crate::header::Format;
use crate::line;

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// An error related to a [`Reader`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// The input ended before a header line was read.
    MissingHeader,

    /// The header line is invalid.
    InvalidHeader(header::Error, String),

    /// A line error.
    Line(line::Error),

    /// A body line could not be read (with its 1-based line number).
    InvalidRead(usize, io::Error),

    /// A body line is invalid (with its 1-based line number).
    InvalidLine(usize, line::Error),

    /// A contig could not be placed (with its 1-based line number).
    InvalidContigPlacement(usize, dataset::BuilderError),

    /// The dataset could not be assembled.
    Dataset(dataset::BuilderError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::MissingHeader => write!(
                f,
                "missing header: the first line must start with one of {}",
                header::TAGS.join(", ")
            ),
            Error::InvalidHeader(err, line) => {
                write!(f, "invalid header at line 1: {err}\n\nline: {line}")
            }
            Error::Line(err) => write!(f, "line error: {err}"),
            Error::InvalidRead(line_no, err) => write!(f, "line {line_no}: i/o error: {err}"),
            Error::InvalidLine(line_no, err) => write!(f, "line {line_no}: {err}"),
            Error::InvalidContigPlacement(line_no, err) => write!(f, "line {line_no}: {err}"),
            Error::Dataset(err) => write!(f, "dataset error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// An hseq file reader.
#[derive(Clone, Debug)]
pub struct Reader<T>(T)
where
    T: BufRead;

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates an hseq file reader over decompressed text.
    ///
    /// Use [`open()`] to read a gzipped file from disk.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"@v1HoloSeq2D\n@H1 chr1 0\n1 2\n";
    /// let reader = holoseq::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a reference to the inner reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"@v1HoloSeq2D\n@H1 chr1 0\n1 2\n";
    /// let cursor = io::Cursor::new(data);
    ///
    /// let reader = holoseq::Reader::new(cursor);
    /// assert_eq!(reader.inner().position(), 0);
    /// ```
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Gets a mutable reference to the inner reader.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consumes self and returns the inner reader.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Reads a raw, textual line from the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"@v1HoloSeq2D\r\n1 2";
    /// let mut reader = holoseq::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 14);
    /// assert_eq!(buffer, "@v1HoloSeq2D");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 3);
    /// assert_eq!(buffer, "1 2");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        read_line(self.inner_mut(), buffer)
    }

    /// Attempts to read the header record. This must be the first read.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::header::Format;
    ///
    /// let data = b"@v1HoloSeq2D\n@H1 chr1 0\n1 2\n";
    /// let mut reader = holoseq::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    /// let header = reader.read_header(&mut buffer)?;
    /// assert_eq!(header.format(), Format::TwoDimensional);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_header(&mut self, buffer: &mut String) -> Result<header::Record, Error> {
        match self.read_line_raw(buffer).map_err(Error::Io)? {
            0 => Err(Error::MissingHeader),
            _ => buffer
                .parse::<header::Record>()
                .map_err(|err| Error::InvalidHeader(err, buffer.clone())),
        }
    }

    /// Attempts to read a body [`Line`] from the underlying reader.
    ///
    /// Errors from this method do not carry a line number; the reader does
    /// not count lines. [`Reader::read_dataset()`] does.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::Line;
    /// use holoseq::header::Format;
    ///
    /// let data = b"@title contacts\n@H1 chr1 0\n1 2\n";
    /// let mut reader = holoseq::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    /// let format = Format::TwoDimensional;
    /// assert!(matches!(reader.read_line(&mut buffer, format)?, Some(Line::Title(_))));
    /// assert!(matches!(reader.read_line(&mut buffer, format)?, Some(Line::Contig(_))));
    /// assert!(matches!(reader.read_line(&mut buffer, format)?, Some(Line::Data(_))));
    /// assert!(matches!(reader.read_line(&mut buffer, format)?, None));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_line(
        &mut self,
        buffer: &mut String,
        format: Format,
    ) -> Result<Option<Line>, Error> {
        let read = self.read_line_raw(buffer).map_err(Error::Io)?;

        match read {
            0 => Ok(None),
            _ => {
                let line = Line::try_from_str(buffer, format).map_err(Error::Line)?;
                Ok(Some(line))
            }
        }
    }

    /// Returns an iterator over the body `Line`s in the underlying reader.
    /// The header must already have been read.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::header::Format;
    ///
    /// let data = b"@v1HoloSeq1D\n@H1 chr1 0\n\n1\n2\n";
    /// let mut reader = holoseq::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    /// let header = reader.read_header(&mut buffer)?;
    ///
    /// let lines = reader.lines(header.format()).collect::<Vec<_>>();
    /// assert_eq!(lines.len(), 4);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn lines(&mut self, format: Format) -> impl Iterator<Item = io::Result<Line>> + '_ {
        let mut buffer = String::new();

        iter::from_fn(move || match self.read_line_raw(&mut buffer) {
            Ok(0) => None,
            Ok(_) => Some(
                Line::try_from_str(&buffer, format)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            ),
            Err(e) => Some(Err(e)),
        })
    }

    /// Reads the whole input into a [`Dataset`].
    ///
    /// Parsing stops at the first invalid line and no dataset is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"@v1HoloSeq2D\n@title cis\n@H1 chr1 0\n@H1 chr2 100\n1 2\n150 3 anno\n";
    /// let dataset = holoseq::Reader::new(&data[..]).read_dataset()?;
    ///
    /// assert_eq!(dataset.title(), "cis");
    /// assert_eq!(dataset.first_haplotype().len(), 2);
    /// assert_eq!(dataset.coordinates().len(), 2);
    ///
    /// let bad = b"@v1HoloSeq2D\n@H1 chr1 0\n1 two\n";
    /// assert!(holoseq::Reader::new(&bad[..]).read_dataset().is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_dataset(&mut self) -> Result<Dataset, Error> {
        let mut buffer = String::new();

        let header = self.read_header(&mut buffer)?;
        let format = header.format();

        let mut builder = dataset::Builder::default()
            .header(header)
            .map_err(Error::Dataset)?;
        let mut line_no = 1usize;

        loop {
            let read = self
                .read_line_raw(&mut buffer)
                .map_err(|err| Error::InvalidRead(line_no + 1, err))?;

            if read == 0 {
                break;
            }

            line_no += 1;

            let line = Line::try_from_str(&buffer, format)
                .map_err(|err| Error::InvalidLine(line_no, err))?;

            builder = match line {
                Line::Empty => builder,
                Line::Title(title) => builder.title(title),
                Line::Contig(record) => builder
                    .push_contig(record)
                    .map_err(|err| Error::InvalidContigPlacement(line_no, err))?,
                Line::Data(record) => builder.push_data(record),
            };
        }

        builder.try_build().map_err(Error::Dataset)
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

/// Opens a gzipped hseq file.
///
/// Every gzip member is decoded, so concatenated and bgzipped files are read
/// in full.
///
/// # Examples
///
/// ```no_run
/// let dataset = holoseq::reader::open("mUroPar1_cis1.hseq.gz")?.read_dataset()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn open<P>(path: P) -> io::Result<Reader<BufReader<MultiGzDecoder<File>>>>
where
    P: AsRef<Path>,
{
    File::open(path)
        .map(MultiGzDecoder::new)
        .map(BufReader::new)
        .map(Reader::new)
}

/// Reads a line from a buffered reader, removing the line terminator.
fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use flate2::Compression;
    use flate2::read::GzDecoder;
    use flate2::write::GzEncoder;

    use super::*;
    use crate::header::Format;

    const TWO_DIMENSIONAL: &str = "@v1HoloSeq2D\n\
                                   @title mUroPar1 H1 cis\n\
                                   @H1 SUPER_1H1 0\n\
                                   @H1 SUPER_2H1 1000\n\
                                   @H1 scaffold_3H1 2500\n\
                                   10 20\n\
                                   1000 2600 dup\n\
                                   \n\
                                   2999 3\n";

    fn gzip(data: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_read_line() {
        let data = b"hello\r\nworld!";
        let mut cursor = io::Cursor::new(data);

        let mut buffer = String::new();
        let len = read_line(&mut cursor, &mut buffer).unwrap();
        assert_eq!(buffer, "hello");
        assert_eq!(len, 7);

        let len = read_line(&mut cursor, &mut buffer).unwrap();
        assert_eq!(buffer, "world!");
        assert_eq!(len, 6);
    }

    #[test]
    fn test_read_gzipped_two_dimensional() {
        let compressed = gzip(TWO_DIMENSIONAL);
        let reader = BufReader::new(GzDecoder::new(&compressed[..]));
        let dataset = Reader::new(reader).read_dataset().unwrap();

        assert_eq!(dataset.header().format(), Format::TwoDimensional);
        assert_eq!(dataset.title(), "mUroPar1 H1 cis");
        assert_eq!(dataset.haplotypes().len(), 1);
        assert_eq!(dataset.first_haplotype().len(), 3);

        // Three data lines; the blank line is skipped.
        let coordinates = dataset.coordinates();
        assert_eq!(coordinates.len(), 3);
        assert_eq!(coordinates.x(), &[10, 1000, 2999]);
        assert_eq!(coordinates.y(), &[20, 2600, 3]);
        assert_eq!(coordinates.annotations()[1], vec![String::from("dup")]);
    }

    #[test]
    fn test_open_gzipped_file() {
        let path = std::env::temp_dir()
            .join(format!("holoseq-open-{}.hseq.gz", std::process::id()));
        std::fs::write(&path, gzip(TWO_DIMENSIONAL)).unwrap();

        let result = open(&path).unwrap().read_dataset();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(result.unwrap().coordinates().len(), 3);
    }

    #[test]
    fn test_open_reads_every_gzip_member() {
        let path = std::env::temp_dir()
            .join(format!("holoseq-members-{}.hseq.gz", std::process::id()));

        let mut compressed = gzip("@v1HoloSeq2D\n@H1 chr1 0\n1 1\n");
        compressed.extend(gzip("2 2\n3 3\n"));
        std::fs::write(&path, compressed).unwrap();

        let result = open(&path).unwrap().read_dataset();
        std::fs::remove_file(&path).unwrap();

        let dataset = result.unwrap();
        assert_eq!(dataset.coordinates().x(), &[1, 2, 3]);
        assert_eq!(dataset.coordinates().y(), &[1, 2, 3]);
    }

    #[test]
    fn test_unreadable_line_reports_its_number() {
        let data = b"@v1HoloSeq2D\n@H1 chr1 0\n1 1\n\xff\xfe 2\n";
        let err = Reader::new(&data[..]).read_dataset().unwrap_err();

        assert!(matches!(err, Error::InvalidRead(4, _)));
        assert!(err.to_string().starts_with("line 4: i/o error: "));
    }

    #[test]
    fn test_read_one_dimensional() {
        let data = b"@v1HoloSeq1D line\n@H1 chr1 0\n@H2 chr1 0\n5\n6 a b\n";
        let dataset = Reader::new(&data[..]).read_dataset().unwrap();

        assert_eq!(dataset.header().plot_type(), Some("line"));
        assert_eq!(dataset.haplotypes().len(), 2);
        assert_eq!(dataset.coordinates().x(), &[5, 6]);
        assert!(dataset.coordinates().y().is_empty());
        assert_eq!(dataset.coordinates().annotations()[1].len(), 2);
    }

    #[test]
    fn test_invalid_header() {
        let data = b"@v1HoloSeq3D\n@H1 chr1 0\n1 2\n";
        let err = Reader::new(&data[..]).read_dataset().unwrap_err();

        assert!(matches!(err, Error::InvalidHeader(_, _)));
        assert_eq!(
            err.to_string(),
            "invalid header at line 1: parse error: invalid header tag: expected one of \
             @v1HoloSeq1D, @v1HoloSeq2D, found \"@v1HoloSeq3D\"\n\nline: @v1HoloSeq3D"
        );
    }

    #[test]
    fn test_empty_input() {
        let err = Reader::new(&b""[..]).read_dataset().unwrap_err();
        assert!(matches!(err, Error::MissingHeader));
    }

    #[test]
    fn test_non_numeric_data_row() {
        let data = b"@v1HoloSeq2D\n@H1 chr1 0\n1 2\nchr1 2\n";
        let err = Reader::new(&data[..]).read_dataset().unwrap_err();

        assert!(matches!(err, Error::InvalidLine(4, _)));
        assert!(err.to_string().starts_with("line 4: invalid data record"));
    }

    #[test]
    fn test_too_few_coordinates() {
        let data = b"@v1HoloSeq2D\n@H1 chr1 0\n12\n";
        let err = Reader::new(&data[..]).read_dataset().unwrap_err();
        assert!(matches!(err, Error::InvalidLine(3, _)));
    }

    #[test]
    fn test_short_contig_line() {
        let data = b"@v1HoloSeq2D\n@H1 chr1\n1 2\n";
        let err = Reader::new(&data[..]).read_dataset().unwrap_err();
        assert!(matches!(err, Error::InvalidLine(2, _)));
    }

    #[test]
    fn test_unsorted_contigs() {
        let data = b"@v1HoloSeq2D\n@H1 chr1 100\n@H1 chr2 0\n1 2\n";
        let err = Reader::new(&data[..]).read_dataset().unwrap_err();

        assert!(matches!(err, Error::InvalidContigPlacement(3, _)));
        assert_eq!(
            err.to_string(),
            "line 3: haplotype error: contig `chr2` in haplotype `H1` starts at 0, before the \
             preceding contig's start of 100"
        );
    }

    #[test]
    fn test_no_contigs() {
        let data = b"@v1HoloSeq2D\n1 2\n";
        let err = Reader::new(&data[..]).read_dataset().unwrap_err();

        assert_eq!(
            err.to_string(),
            "dataset error: missing required field: haplotypes"
        );
    }

    #[test]
    fn test_last_title_wins() {
        let data = b"@v1HoloSeq2D\n@title first\n@H1 chr1 0\n@title  second \n";
        let dataset = Reader::new(&data[..]).read_dataset().unwrap();
        assert_eq!(dataset.title(), "second");
    }
}
