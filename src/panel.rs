//! Render-ready descriptions of a dataset.
//!
//! Drawing is left to whatever implements [`Render`]. A [`Panel`] carries
//! everything a renderer needs: the title, the square size in pixels, the
//! coordinates to rasterize and a [`Locator`] to answer clicks.

use crate::dataset::Coordinates;
use crate::dataset::Dataset;
use crate::header;
use crate::locate::Locator;

/// The default panel size in pixels.
pub const DEFAULT_SIZE: u32 = 1000;

/// A plot panel for one dataset.
#[derive(Clone, Copy, Debug)]
pub struct Panel<'a> {
    /// The dataset being shown.
    dataset: &'a Dataset,

    /// The width and height in pixels.
    size: u32,

    /// The click locator.
    locator: Locator<'a>,
}

impl<'a> Panel<'a> {
    /// Creates a square panel `size` pixels wide.
    ///
    /// # Examples
    ///
    /// ```
    /// use holoseq::panel::Panel;
    ///
    /// let data = b"@v1HoloSeq2D\n@title contacts\n@H1 chr1 0\n1 2\n";
    /// let dataset = holoseq::Reader::new(&data[..]).read_dataset()?;
    ///
    /// let panel = Panel::new(&dataset, 800);
    /// assert_eq!(panel.title(), "contacts");
    /// assert_eq!(panel.size(), 800);
    /// assert_eq!(panel.locator().label(Some((1, 2))), "X axis chr1:1 Y axis chr1:2");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(dataset: &'a Dataset, size: u32) -> Self {
        Self {
            dataset,
            size,
            locator: Locator::new(dataset),
        }
    }

    /// Gets the title.
    pub fn title(&self) -> &'a str {
        self.dataset.title()
    }

    /// Gets the width and height in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Gets the header of the underlying dataset.
    pub fn header(&self) -> &'a header::Record {
        self.dataset.header()
    }

    /// Gets the dataset shown in the panel.
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Gets the coordinates to draw.
    pub fn coordinates(&self) -> &'a Coordinates {
        self.dataset.coordinates()
    }

    /// Gets the click locator.
    pub fn locator(&self) -> &Locator<'a> {
        &self.locator
    }
}

/// Something that can draw panels.
pub trait Render {
    /// The error produced while drawing.
    type Error;

    /// Draws the panels side by side, in order.
    fn render(&mut self, panels: &[Panel<'_>]) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reader;

    /// Records what it was asked to draw.
    #[derive(Default)]
    struct Recorder {
        /// The titles and point counts seen.
        seen: Vec<(String, usize)>,
    }

    impl Render for Recorder {
        type Error = std::convert::Infallible;

        fn render(&mut self, panels: &[Panel<'_>]) -> Result<(), Self::Error> {
            for panel in panels {
                self.seen
                    .push((panel.title().to_string(), panel.coordinates().len()));
            }

            Ok(())
        }
    }

    #[test]
    fn renders_every_panel_in_order() {
        let first = Reader::new(&b"@v1HoloSeq2D\n@title a\n@H1 c 0\n1 1\n2 2\n"[..])
            .read_dataset()
            .unwrap();
        let second = Reader::new(&b"@v1HoloSeq1D\n@H1 c 0\n1\n"[..])
            .read_dataset()
            .unwrap();

        let panels = [Panel::new(&first, 10), Panel::new(&second, 10)];

        let mut recorder = Recorder::default();
        recorder.render(&panels).unwrap();

        assert_eq!(
            recorder.seen,
            vec![(String::from("a"), 2), (String::from("Plot"), 1)]
        );
    }
}
