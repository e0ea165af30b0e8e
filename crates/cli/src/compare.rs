use eyre::{eyre, Result};
use fibcache::{iterative_fib, MemoCache};
use log::debug;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Row {
    pub n: usize,
    pub memoized: u128,
    pub iterative: u128,
    pub matches: bool,
}

pub fn rows(upto: usize, capacity: usize) -> Result<Vec<Row>> {
    let mut cache = MemoCache::with_capacity(capacity);
    (0..=upto)
        .map(|n| {
            let memoized = cache.get(n)?;
            let iterative = iterative_fib(n)?;
            Ok(Row { n, memoized, iterative, matches: memoized == iterative })
        })
        .collect()
}

pub fn run(upto: usize, capacity: usize, json: bool) -> Result<()> {
    let rows = rows(upto, capacity)?;
    debug!("compared {} values", rows.len());

    if json {
        for row in &rows {
            anstream::println!("{}", serde_json::to_string(row)?);
        }
    } else {
        anstream::println!("{:>4}  {:>40}  {:>40}", "n".bold(), "memoized".bold(), "iterative".bold());
        for row in &rows {
            let status = match row.matches {
                true => "ok".green().to_string(),
                false => "MISMATCH".red().bold().to_string(),
            };
            anstream::println!("{:>4}  {:>40}  {:>40}  {status}", row.n, row.memoized, row.iterative);
        }
    }

    match rows.iter().filter(|row| !row.matches).count() {
        0 => Ok(()),
        failed => Err(eyre!("{failed} of {} values differ", rows.len())),
    }
}
