use clap::Parser;
use edge_ascii::config::{load_config, squared_threshold, AsciiConfig};
use edge_ascii::diagnostics::{render_intensity, render_mask, LogObserver, RunReport, TimingBreakdown};
use edge_ascii::image::io::write_json_file;
use edge_ascii::{AsciiError, AsciiParams, Asciiizer};
use log::debug;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "edge-ascii")]
#[command(about = "Trace the edges of an image as an ASCII line drawing")]
#[command(version)]
struct Cli {
    /// Edge detection threshold (raw gradient norm, squared before use).
    #[arg(short = 't', long, allow_negative_numbers = true)]
    threshold: Option<i64>,

    /// Number of edge pixels a block must exceed to get a glyph.
    #[arg(short = 'n', long)]
    particles: Option<usize>,

    /// Number of x pixels per character.
    #[arg(short = 'x', long)]
    x_win: Option<usize>,

    /// Number of y pixels per character.
    #[arg(short = 'y', long)]
    y_win: Option<usize>,

    /// Don't apply the Gaussian blur to the image.
    #[arg(long = "nb")]
    no_blur: bool,

    /// JSON file with default settings; flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a JSON report (dimensions, edge counts, timings) for all inputs.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Log how long each stage took.
    #[arg(long)]
    timings: bool,

    /// Print the grayscale plane as digits (9 = black) to stderr.
    #[arg(long)]
    dump_gray: bool,

    /// Print the thinned edge mask as 0/1 to stderr.
    #[arg(long)]
    dump_edges: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// Images to convert (PNG, GIF or JPEG).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

impl Cli {
    fn params(&self) -> Result<AsciiParams, AsciiError> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)?,
            None => AsciiConfig::default(),
        };
        if let Some(t) = self.threshold {
            cfg.threshold = t;
        }
        if let Some(n) = self.particles {
            cfg.particles = n;
        }
        if let Some(x) = self.x_win {
            cfg.x_win = x;
        }
        if let Some(y) = self.y_win {
            cfg.y_win = y;
        }
        if self.no_blur {
            cfg.blur = false;
        }
        debug!(
            "threshold={} (squared {}) particles={} window={}x{} blur={}",
            cfg.threshold,
            squared_threshold(cfg.threshold),
            cfg.particles,
            cfg.x_win,
            cfg.y_win,
            cfg.blur
        );
        cfg.to_params()
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(&cli) {
        eprint!("{}", termination_message(&err));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(cli: &Cli) -> Result<(), AsciiError> {
    let asciiizer = Asciiizer::new(cli.params()?)?;
    let mut reports = Vec::with_capacity(cli.inputs.len());

    for input in &cli.inputs {
        let mut observer = (cli.timings.then_some(LogObserver), TimingBreakdown::default());
        let art = asciiizer.run_path(input, &mut observer)?;

        if cli.dump_gray {
            eprint!("{}", render_intensity(&art.gray));
        }
        if cli.dump_edges {
            eprint!("{}", render_mask(&art.edges.edges));
        }
        println!("{}", art.text);

        reports.push(RunReport {
            input: input.clone(),
            width: art.gray.w,
            height: art.gray.h,
            columns: art.glyphs.cols,
            rows: art.glyphs.rows,
            edge_pixels: art.edges.edge_count(),
            timings: observer.1,
        });
    }

    if let Some(path) = &cli.report {
        write_json_file(path, &reports)?;
        debug!("wrote report for {} input(s) to {}", reports.len(), path.display());
    }
    Ok(())
}

/// Header line followed by the error and each of its causes, tab-indented.
fn termination_message(err: &AsciiError) -> String {
    let mut msg = String::from("edge-ascii terminated because of the following errors:\n");
    let mut current: Option<&dyn Error> = Some(err);
    while let Some(e) = current {
        msg.push('\t');
        msg.push_str(&e.to_string());
        msg.push('\n');
        current = e.source();
    }
    msg
}
