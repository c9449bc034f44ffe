//! Command line front end: estimate how many random drops cover a sidewalk.
//!
//! Prints either summary statistics or a coverage-time histogram, optionally
//! duplicated to a CSV file.
mod report;

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sidewalk_cover::prelude::*;
use tracing::debug;

use crate::report::ReportOptions;

/// Cover a sidewalk-style square grid with randomly placed drops.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Number of mesh squares on a side
    #[arg(default_value_t = 100)]
    mesh: usize,

    /// Dot side length
    #[arg(default_value_t = 1)]
    dot: usize,

    /// Number of covering passes
    #[arg(default_value_t = 100)]
    trials: usize,

    /// Bin size for histogram output; below 1 means one mesh-sized bin
    #[arg(short, long)]
    binwidth: Option<i64>,

    /// Duplicate the histogram to this file as comma separated values
    #[arg(short, long)]
    csv: Option<PathBuf>,

    /// Suppress more and more displayed info (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    quiet: u8,

    /// Show data scaled by the mesh-to-dot area ratio
    #[arg(short, long)]
    scaled: bool,

    /// Random seed; omitted means OS entropy
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let opts = ReportOptions {
        quiet: cli.quiet,
        scaled: cli.scaled,
    };

    // Open the CSV sink up front so an unwritable path fails before any
    // simulation runs.
    let mut csv = match &cli.csv {
        Some(path) => Some(
            File::create(path)
                .with_context(|| format!("opening CSV output {}", path.display()))?,
        ),
        None => None,
    };

    let binwidth = report::normalize_binwidth(cli.binwidth, cli.mesh);
    let mut config = ExperimentConfig::new(cli.mesh, cli.dot).with_trials(cli.trials);
    if let Some((width, substituted)) = binwidth {
        if substituted && opts.show_header() {
            println!("Binwidth = {width}");
        }
        config = config.with_binwidth(width);
    }

    let scale = config.scale_factor();
    let mut runner = ExperimentRunner::try_new(config)?;

    let mut rng = match cli.seed {
        Some(seed) => {
            debug!("seeding rng with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::try_from_rng(&mut rand::rngs::SysRng)
            .context("seeding rng from OS entropy")?,
    };

    if opts.show_header() {
        print!("{}", report::header(cli.mesh, cli.dot));
    }

    let mut sink = FnSink::new(|event| {
        if let TrialEvent::TrialFinished { value, .. } = event {
            if opts.show_trials() {
                println!("{value}");
            }
        }
    });

    match binwidth {
        None => {
            let stats = runner.run_statistics_with_events(&mut rng, &mut sink)?;
            print!("{}", report::statistics(&stats, &opts, scale));
        }
        Some(_) => {
            let hist = runner.run_histogram_with_events(&mut rng, &mut sink)?;
            for line in report::histogram_rows(&hist, opts.scaled) {
                println!("{line}");
            }
            if let Some(file) = csv.as_mut() {
                report::write_histogram_csv(file, &hist, opts.scaled)
                    .context("writing CSV output")?;
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
