//! eqanalysis - descriptive statistics and k-means clusters for earthquake event files.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use quakeclump::cluster::{DEFAULT_CLUSTERS, DEFAULT_ITERATIONS};
use quakeclump::events::{read_events_file, DEPTH, MAGNITUDE};
use quakeclump::report::{write_cluster_report, write_field_report};
use quakeclump::stats::field_values;
use quakeclump::Kmeans;

/// Analyze a CSV file of earthquake events.
///
/// The file is a USGS-style export: `#` lines are comments, and magnitude,
/// latitude, longitude and depth are read from columns 1, 7, 8 and 10.
#[derive(Parser)]
#[command(name = "eqanalysis")]
#[command(about = "Earthquake event file stats")]
#[command(version)]
pub struct Cli {
    /// A CSV file containing earthquake events, one per line
    pub eq_file: PathBuf,

    /// Number of clusters
    #[arg(short = 'k', long, global = true, default_value_t = DEFAULT_CLUSTERS)]
    pub clusters: usize,

    /// Number of k-means rounds
    #[arg(
        short = 'n',
        long,
        global = true,
        default_value_t = DEFAULT_ITERATIONS,
        allow_negative_numbers = true
    )]
    pub iterations: i64,

    /// Seed for the random centroid selection
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print statistics for clusters, magnitudes or depths
    Analyze {
        /// What to analyze
        #[arg(value_enum)]
        what: Target,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Target {
    Clusters,
    Magnitudes,
    Depths,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    }

    let store = read_events_file(&cli.eq_file)
        .with_context(|| format!("reading {}", cli.eq_file.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Analyze { what } => match what {
            Target::Magnitudes => {
                write_field_report(&mut out, "magnitude", "", &field_values(&store, MAGNITUDE))?
            }
            Target::Depths => {
                write_field_report(&mut out, "depth", " miles", &field_values(&store, DEPTH))?
            }
            Target::Clusters => {
                let mut model = Kmeans::new(cli.clusters).with_iterations(cli.iterations);
                if let Some(seed) = cli.seed {
                    model = model.with_seed(seed);
                }
                let fit = model.fit(&store).context("clustering events")?;
                write_cluster_report(&mut out, &fit.clusters, &store)?;
            }
        },
    }

    out.flush()?;
    Ok(())
}
