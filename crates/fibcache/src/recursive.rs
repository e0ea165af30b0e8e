use crate::{Error, Fibonacci, Result, MAX_INDEX};

/// Compute `fib(n)` by plain recursion
///
/// Exponential in `n`; kept as a baseline for the other strategies.
/// Returns [`Error::Overflow`] for `n > MAX_INDEX` without recursing.
pub fn recursive_fib(n: usize) -> Result<u128> {
    match n {
        0 => Ok(0),
        1 | 2 => Ok(1),
        _ if n > MAX_INDEX => Err(Error::Overflow { n }),
        _ => recursive_fib(n - 1)?.checked_add(recursive_fib(n - 2)?).ok_or(Error::Overflow { n }),
    }
}

/// [`Fibonacci`] implementation backed by [`recursive_fib`]
#[derive(Debug, Default, Clone, Copy)]
pub struct Recursive;

impl Fibonacci for Recursive {
    fn fib(&mut self, n: usize) -> Result<u128> {
        recursive_fib(n)
    }
}
