#![no_std]
#![forbid(unsafe_code)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_assignments, unused_variables))
))]
#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

//! Fibonacci numbers, computed either by memoized recursion or by a bottom-up loop.
//!
//! ```rust
//! use fibcache::{iterative_fib, MemoCache};
//!
//! let mut cache = MemoCache::new();
//! assert_eq!(cache.get(20)?, 6765);
//! assert_eq!(iterative_fib(20)?, 6765);
//! # Ok::<(), fibcache::Error>(())
//! ```
//!
//! ## Features
//! - **`std`** (default)\
//!   Enables [`memoized_fib`], backed by a thread-local cache, and the thread-safe [`SharedCache`].
//! - **`log`** (default)\
//!   Logs cache creation, hits and stores using the `log` crate.
//!
//! Values are `u128`, which holds every Fibonacci number up to `fib(186)` ([`MAX_INDEX`]).
//! Larger indices fail with [`Error::Overflow`] instead of wrapping.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod log;

mod error;
pub use error::*;

mod iterative;
pub use iterative::{iterative_fib, Iterative};

mod recursive;
pub use recursive::{recursive_fib, Recursive};

mod memo;
pub use memo::{MemoCache, DEFAULT_CAPACITY};

#[cfg(feature = "std")]
mod shared;
#[cfg(feature = "std")]
pub use shared::{memoized_fib, SharedCache};

mod strategy;
pub use strategy::Strategy;

/// The largest `n` whose Fibonacci number fits in a `u128`
pub const MAX_INDEX: usize = 186;

/// A way of computing Fibonacci numbers
///
/// Takes `&mut self` so implementations are free to keep state, like [`MemoCache`].
pub trait Fibonacci {
    /// Compute the `n`-th Fibonacci number, where `fib(0) = 0` and `fib(1) = fib(2) = 1`
    fn fib(&mut self, n: usize) -> Result<u128>;
}
