use clap::Parser;
use eyre::{bail, Result};
use fibcache::Strategy;
use log::{debug, info};

use crate::args::{level_filter, Compare, Compute, FibCli, FibSubcommand, RECURSIVE_LIMIT};
mod args;
mod compare;

fn main() -> Result<()> {
    let args = FibCli::parse();
    pretty_env_logger::formatted_builder().filter_level(level_filter(&args.log_level)).init();

    match args.nested {
        FibSubcommand::Compute(Compute { n, strategy, capacity }) => {
            if strategy == Strategy::Recursive && n > RECURSIVE_LIMIT {
                bail!("the recursive strategy only accepts n <= {RECURSIVE_LIMIT}, got {n}");
            }

            debug!("computing fib({n}) with {strategy}, capacity {capacity}");
            let value = strategy.compute(n, capacity)?;
            info!("fib({n}) = {value}");
            anstream::println!("{value}");
            Ok(())
        }
        FibSubcommand::Compare(Compare { upto, capacity, json }) => compare::run(upto, capacity, json),
    }
}
