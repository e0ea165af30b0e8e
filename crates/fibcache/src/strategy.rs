use core::{fmt::Display, str::FromStr};

use alloc::{boxed::Box, format, string::String};

use crate::{Fibonacci, Iterative, MemoCache, Recursive, Result};

/// The algorithms available for computing Fibonacci numbers
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Recursion over a [`MemoCache`]
    #[default]
    Memoized,
    /// Bottom-up loop, see [`iterative_fib`](crate::iterative_fib)
    Iterative,
    /// Plain recursion, see [`recursive_fib`](crate::recursive_fib)
    Recursive,
}

impl Strategy {
    /// All strategies, in declaration order
    pub const ALL: [Strategy; 3] = [Self::Memoized, Self::Iterative, Self::Recursive];

    /// Create a fresh implementation of this strategy
    ///
    /// `capacity` sizes the cache of [`Strategy::Memoized`] and is ignored otherwise.
    pub fn build(self, capacity: usize) -> Box<dyn Fibonacci + Send> {
        match self {
            Self::Memoized => Box::new(MemoCache::with_capacity(capacity)),
            Self::Iterative => Box::new(Iterative),
            Self::Recursive => Box::new(Recursive),
        }
    }

    /// Compute `fib(n)` with a fresh implementation of this strategy
    pub fn compute(self, n: usize, capacity: usize) -> Result<u128> {
        self.build(capacity).fib(n)
    }

    /// The name accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Memoized => "memoized",
            Self::Iterative => "iterative",
            Self::Recursive => "recursive",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memoized" | "memo" => Ok(Self::Memoized),
            "iterative" | "iter" => Ok(Self::Iterative),
            "recursive" => Ok(Self::Recursive),
            _ => Err(format!("unknown strategy: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, DEFAULT_CAPACITY};

    #[test]
    fn parse_names() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("memo".parse::<Strategy>(), Ok(Strategy::Memoized));
        assert!("binet".parse::<Strategy>().is_err());
    }

    #[test]
    fn strategies_agree() {
        for n in 0..=20 {
            let expected = Strategy::Iterative.compute(n, DEFAULT_CAPACITY);
            for strategy in Strategy::ALL {
                assert_eq!(strategy.compute(n, DEFAULT_CAPACITY), expected, "{strategy} at {n}");
            }
        }
    }

    #[test]
    fn capacity_only_limits_memoized() {
        assert_eq!(Strategy::Memoized.compute(50, 10), Err(Error::OutOfRange { n: 50, capacity: 10 }));
        assert_eq!(Strategy::Iterative.compute(50, 10), Ok(12_586_269_025));
    }
}
