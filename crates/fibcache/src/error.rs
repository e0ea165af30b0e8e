use core::fmt::Display;

/// Errors that can occur when computing Fibonacci numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The index does not fit in the cache
    OutOfRange {
        /// The requested index
        n: usize,
        /// The number of slots in the cache
        capacity: usize,
    },

    /// The result does not fit in a `u128`
    Overflow {
        /// The index whose value overflowed
        n: usize,
    },
}

impl Error {
    /// Get the message of the error
    pub fn message(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "index out of range",
            Self::Overflow { .. } => "integer overflow",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange { n, capacity } => {
                write!(f, "index out of range: n={n}, capacity={capacity}")
            }
            Self::Overflow { n } => write!(f, "integer overflow: fib({n}) does not fit in u128"),
        }
    }
}

impl core::error::Error for Error {}

/// A wrapper around [`core::result::Result`] for fibcache operations
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_includes_context() {
        let err = Error::OutOfRange { n: 100, capacity: 100 };
        assert_eq!(err.to_string(), "index out of range: n=100, capacity=100");
        assert_eq!(err.message(), "index out of range");

        let err = Error::Overflow { n: 187 };
        assert_eq!(err.to_string(), "integer overflow: fib(187) does not fit in u128");
    }
}
