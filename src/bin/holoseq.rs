//! A binary that reads hseq files, describes the plot panel for each and
//! labels points the way a click on the rendered plot would.
//!
//! ```shell
//! cargo run --release --bin=holoseq --features=binaries -- \
//!     --in-file mUroPar1_cis1.hseq.gz --size 800 --locate 1500000,2000000
//! ```

use std::io::Write;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use holoseq::Number;
use holoseq::dataset::Dataset;
use holoseq::locate::Layout;
use holoseq::panel;
use holoseq::panel::Panel;
use holoseq::panel::Render;
use holoseq::reader;
use holoseq::record::parse_number;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// The number of contigs listed when logging at the debug level.
const CONTIGS_TO_LOG: usize = 20;

////////////////////////////////////////////////////////////////////////////////////////
// Points
////////////////////////////////////////////////////////////////////////////////////////

/// A point on a plot given as `x,y`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Point {
    /// The `x` coordinate.
    x: Number,

    /// The `y` coordinate.
    y: Number,
}

impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `x,y`, found `{s}`"))?;

        let x = parse_number(x.trim())
            .map_err(|err| format!("invalid x coordinate `{x}`: {err}"))?;
        let y = parse_number(y.trim())
            .map_err(|err| format!("invalid y coordinate `{y}`: {err}"))?;

        Ok(Self { x, y })
    }
}

#[cfg(test)]
mod point_tests {
    use super::Point;

    #[test]
    fn valid() {
        assert_eq!("10,20".parse::<Point>(), Ok(Point { x: 10, y: 20 }));
        assert_eq!(" 1 , 2 ".parse::<Point>(), Ok(Point { x: 1, y: 2 }));
    }

    #[test]
    fn invalid() {
        assert!("10".parse::<Point>().is_err());
        assert!("a,1".parse::<Point>().is_err());
        assert!("1,-1".parse::<Point>().is_err());
        assert!("+5,+7".parse::<Point>().is_err());
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Rendering
////////////////////////////////////////////////////////////////////////////////////////

/// Writes a plain-text summary of each panel.
struct SummaryRenderer<W: Write> {
    /// The destination.
    out: W,
}

impl<W: Write> Render for SummaryRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, panels: &[Panel<'_>]) -> std::result::Result<(), Self::Error> {
        for panel in panels {
            let dataset = panel.dataset();
            let layout = match panel.locator().layout() {
                Layout::Cis => "cis",
                Layout::Trans => "trans",
            };

            writeln!(self.out, "{}", panel.title())?;
            writeln!(
                self.out,
                "  format: {} ({}), {}x{} px",
                panel.header().format(),
                panel.header().plot_type().unwrap_or("density"),
                panel.size(),
                panel.size()
            )?;
            writeln!(self.out, "  layout: {layout}")?;

            for haplotype in dataset.haplotypes().iter() {
                writeln!(
                    self.out,
                    "  haplotype {}: {} contigs",
                    haplotype.name(),
                    haplotype.len()
                )?;
            }

            writeln!(self.out, "  points: {}", panel.coordinates().len())?;
        }

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Main
////////////////////////////////////////////////////////////////////////////////////////

#[derive(Parser)]
#[command(version)]
struct Args {
    /// The gzipped hseq files to read.
    #[arg(short, long = "in-file", num_args = 1.., required = true)]
    in_files: Vec<PathBuf>,

    /// The display size in pixels.
    #[arg(short, long, default_value_t = panel::DEFAULT_SIZE)]
    size: u32,

    /// Points (`x,y`) to locate within every panel, as a click would.
    #[arg(short, long)]
    locate: Vec<Point>,

    #[command(flatten)]
    verbose: Verbosity,
}

/// Reads one hseq file and logs what it holds.
fn read(path: &Path) -> Result<Dataset> {
    let dataset = reader::open(path)
        .with_context(|| format!("opening `{}`", path.display()))?
        .read_dataset()
        .with_context(|| format!("reading `{}`", path.display()))?;

    let first = dataset.first_haplotype();

    info!(
        "read `{}`: {} format, {} haplotype(s), {} contig(s) in `{}`, {} point(s)",
        path.display(),
        dataset.header().format(),
        dataset.haplotypes().len(),
        first.len(),
        first.name(),
        dataset.coordinates().len()
    );

    debug!(
        "first contigs of `{}`: {:?}",
        first.name(),
        first
            .contigs()
            .iter()
            .take(CONTIGS_TO_LOG)
            .map(|contig| format!("{}@{}", contig.name(), contig.start()))
            .collect::<Vec<_>>()
    );

    Ok(dataset)
}

fn run(args: &Args) -> Result<()> {
    let mut datasets = Vec::with_capacity(args.in_files.len());

    for path in &args.in_files {
        match read(path) {
            Ok(dataset) => datasets.push(dataset),
            Err(err) => error!("{err:#}"),
        }
    }

    if datasets.is_empty() {
        bail!("no valid hseq input files were read");
    }

    let panels = datasets
        .iter()
        .map(|dataset| Panel::new(dataset, args.size))
        .collect::<Vec<_>>();

    let stdout = io::stdout();
    let mut renderer = SummaryRenderer {
        out: stdout.lock(),
    };
    renderer.render(&panels).context("writing panels")?;

    for point in &args.locate {
        for panel in &panels {
            writeln!(
                renderer.out,
                "{}\t{},{}\t{}",
                panel.title(),
                point.x,
                point.y,
                panel.locator().label(Some((point.x, point.y)))
            )
            .context("writing location")?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .with_writer(io::stderr)
            .init(),
    };

    run(&args)
}
