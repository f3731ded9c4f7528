//! Command line front end for Halton sequences.
//!
//! ```bash
//! # the 26 first points of the 2D sequence for bases 2 and 3
//! rs_halton grid --bases 2,3
//!
//! # a million points rendered into a 512x512 image
//! rs_halton image --count 1000000 --output halton.png
//! ```

// std
use std::path::PathBuf;
use std::process::ExitCode;
// others
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
// halton
use rs_halton::core::each::Point;
use rs_halton::core::error::Result;
use rs_halton::core::film::Film;
use rs_halton::core::halton::{Index, Remaining};
use rs_halton::core::lowdiscrepancy::{number, par_numbers};
use rs_halton::core::parallel::generate;
use rs_halton::core::sampler::Sampler;
use rs_halton::core::sequence::Sequence;
use rs_halton::samplers::halton::HaltonSampler;
use rs_halton::samplers::leaped::LeapedSampler;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate Halton sequences for quasi-random sampling.
#[derive(Parser)]
#[command(name = "rs_halton")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// use specified number of threads (0 = one per core)
    #[arg(short = 't', long = "nthreads", global = true, default_value = "0")]
    nthreads: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute numbers of a sequence directly from their index
    Number {
        /// Base of the sequence
        #[arg(short, long)]
        base: u64,

        /// Index of the (first) number
        #[arg(short, long)]
        index: Index,

        /// How many consecutive numbers to compute
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Print points of a (multi-dimensional) sequence
    Each {
        /// One base per axis (comma-separated)
        #[arg(short, long, value_delimiter = ',', default_value = "2,3")]
        bases: Vec<u64>,

        /// Number of points to print
        #[arg(short, long, default_value = "10")]
        count: usize,

        /// Points to skip before the first printed one
        #[arg(short, long, default_value = "0")]
        skip: Index,

        /// Only use every n-th index of the sequence
        #[arg(short, long)]
        leap: Option<Index>,
    },

    /// How many numbers a sequence can still produce
    Remaining {
        /// Base of the sequence
        #[arg(short, long)]
        base: u64,

        /// Numbers to skip first
        #[arg(short, long, default_value = "0")]
        skip: Index,
    },

    /// Place points on a letter grid
    Grid {
        /// Bases of the x and y axis
        #[arg(short, long, value_delimiter = ',', default_value = "2,3")]
        bases: Vec<u64>,

        /// Number of points to place
        #[arg(short, long, default_value = "26")]
        count: usize,

        /// Cells per row and column
        #[arg(short = 'n', long, default_value = "10")]
        size: u32,
    },

    /// Render points into a grayscale image
    Image {
        /// Bases of the x and y axis
        #[arg(short, long, value_delimiter = ',', default_value = "2,3")]
        bases: Vec<u64>,

        /// Number of points to render
        #[arg(short, long, default_value = "100000")]
        count: usize,

        /// Width and height of the image
        #[arg(short, long, default_value = "512")]
        resolution: u32,

        /// Points generated per block and thread
        #[arg(long, default_value = "4096")]
        block_size: usize,

        /// The path of the image to write
        #[arg(short, long, default_value = "halton.png")]
        output: PathBuf,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn format_point(p: &Point) -> String {
    p.iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

fn make_sampler(bases: &[u64], skip: Index, leap: Option<Index>) -> Result<Sampler> {
    let mut sampler: Sampler = match leap {
        Some(leap) => LeapedSampler::new(bases, leap, 1)?.into(),
        None => HaltonSampler::new(bases)?.into(),
    };
    sampler.skip_samples(skip)?;
    Ok(sampler)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Number { base, index, count } => {
            if count == 1 {
                println!("{}", number(base, index)?);
            } else {
                for n in par_numbers(base, index, count)? {
                    println!("{}", n);
                }
            }
        }
        Commands::Each {
            bases,
            count,
            skip,
            leap,
        } => {
            let sampler = make_sampler(&bases, skip, leap)?;
            for p in generate(&sampler, count, 4096, cli.nthreads, false)? {
                println!("{}", format_point(&p));
            }
        }
        Commands::Remaining { base, skip } => {
            let mut seq = Sequence::new(base)?;
            seq.jump(skip)?;
            debug!("base {} sequence is {}", base, seq.state());
            match seq.remaining() {
                Remaining::Count(count) => println!("{}", count),
                Remaining::Unknown => println!("unknown"),
            }
        }
        Commands::Grid {
            bases,
            count,
            size,
        } => {
            let mut film = Film::new(size, size)?;
            for p in make_sampler(&bases, 0, None)?.get_points(count)? {
                film.add_point(&p)?;
            }
            println!("{}", film.to_ascii());
        }
        Commands::Image {
            bases,
            count,
            resolution,
            block_size,
            output,
        } => {
            println!(
                "rs_halton version {} [Detected {} cores]",
                VERSION,
                num_cpus::get()
            );
            let sampler = make_sampler(&bases, 0, None)?;
            let points = generate(&sampler, count, block_size, cli.nthreads, !cli.quiet)?;
            let mut film = Film::new(resolution, resolution)?;
            for p in points.iter() {
                film.add_point(p)?;
            }
            film.write_image(&output)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
