use clap::{Parser, Subcommand};
use fibcache::{Strategy, DEFAULT_CAPACITY};

/// Largest `n` accepted for the exponential recursive strategy
pub const RECURSIVE_LIMIT: usize = 40;

#[derive(Parser, Debug)]
#[command(name = "fibcache", version, about = "Compute Fibonacci numbers")]
pub struct FibCli {
    #[command(subcommand)]
    pub nested: FibSubcommand,

    /// log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum FibSubcommand {
    Compute(Compute),
    Compare(Compare),
}

/// compute a single Fibonacci number
#[derive(clap::Args, Debug)]
pub struct Compute {
    /// index of the number to compute
    pub n: usize,

    /// strategy to use (memoized, iterative, recursive); recursive is exponential and limited to n <= 40
    #[arg(short, long, default_value_t = Strategy::Memoized)]
    pub strategy: Strategy,

    /// cache capacity for the memoized strategy
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,
}

/// check that the memoized and iterative strategies agree
#[derive(clap::Args, Debug)]
pub struct Compare {
    /// largest index to check
    #[arg(short, long, default_value_t = 30)]
    pub upto: usize,

    /// cache capacity for the memoized strategy
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// print one JSON object per line instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn level_filter(level: &str) -> log::LevelFilter {
    match level {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        _ => log::LevelFilter::Info,
    }
}
