use crate::{Error, Fibonacci, Result, MAX_INDEX};

/// Compute `fib(n)` bottom-up, keeping only the previous two values
///
/// Runs in O(n) time and O(1) space with no shared state, so it is safe to call from any thread.
/// Returns [`Error::Overflow`] for `n > MAX_INDEX`.
pub fn iterative_fib(n: usize) -> Result<u128> {
    match n {
        0 => Ok(0),
        1 | 2 => Ok(1),
        _ if n > MAX_INDEX => Err(Error::Overflow { n }),
        _ => {
            let mut prev: u128 = 1;
            let mut curr: u128 = 1;
            for _ in 3..=n {
                let sum = prev.checked_add(curr).ok_or(Error::Overflow { n })?;
                prev = curr;
                curr = sum;
            }

            Ok(curr)
        }
    }
}

/// [`Fibonacci`] implementation backed by [`iterative_fib`]
#[derive(Debug, Default, Clone, Copy)]
pub struct Iterative;

impl Fibonacci for Iterative {
    fn fib(&mut self, n: usize) -> Result<u128> {
        iterative_fib(n)
    }
}
