use alloc::{boxed::Box, vec};

use crate::log::{debug, trace};
use crate::{Error, Fibonacci, Result, MAX_INDEX};

/// Number of slots in a [`MemoCache`] created with [`MemoCache::new`]
pub const DEFAULT_CAPACITY: usize = 100;

/// A fixed-capacity cache of Fibonacci numbers, indexed by `n`
///
/// Every slot starts at zero and a zero slot is treated as "not computed yet".
/// This means a computed value of zero can't be told apart from an empty slot.
/// Only `fib(0)` is zero and it never touches the cache, so the ambiguity is harmless
/// for this sequence, but the sentinel is kept as-is: don't store other sequences here.
///
/// Indices at or beyond [`capacity`](Self::capacity) are rejected with [`Error::OutOfRange`].
/// Indices above [`MAX_INDEX`] within the capacity fail with [`Error::Overflow`].
#[derive(Debug, Clone)]
pub struct MemoCache {
    capacity: usize,
    // never longer than `MAX_INDEX + 1`
    slots: Box<[u128]>,
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoCache {
    /// Create a cache with [`DEFAULT_CAPACITY`] slots
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache that accepts indices below `capacity`
    ///
    /// Only indices up to [`MAX_INDEX`] get a slot, so any `capacity` is cheap to allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        let len = capacity.min(MAX_INDEX + 1);
        debug!("creating memo cache with capacity {capacity} ({len} slots)");
        Self { capacity, slots: vec![0; len].into_boxed_slice() }
    }

    /// The largest index plus one that [`get`](Self::get) accepts
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Compute `fib(n)`, reusing and filling the cache
    ///
    /// `n` of 0, 1 and 2 are answered directly without touching the cache.
    /// Any other `n` must be below [`capacity`](Self::capacity).
    pub fn get(&mut self, n: usize) -> Result<u128> {
        match n {
            0 => Ok(0),
            1 | 2 => Ok(1),
            _ => {
                if n >= self.capacity {
                    return Err(Error::OutOfRange { n, capacity: self.capacity });
                }
                let cached = *self.slots.get(n).ok_or(Error::Overflow { n })?;
                if cached != 0 {
                    trace!("cache hit: fib({n})");
                    return Ok(cached);
                }

                let value = self.get(n - 1)?.checked_add(self.get(n - 2)?).ok_or(Error::Overflow { n })?;
                trace!("cache store: fib({n})");
                self.slots[n] = value;
                Ok(value)
            }
        }
    }

    /// The cached value for `n`, if it has been computed
    ///
    /// Returns `None` for empty slots, out of range indices, and the
    /// uncached base cases `n <= 2`.
    pub fn cached(&self, n: usize) -> Option<u128> {
        self.slots.get(n).copied().filter(|v| *v != 0)
    }

    /// Reset every slot to "not computed"
    pub fn clear(&mut self) {
        debug!("clearing memo cache");
        self.slots.fill(0);
    }
}

impl Fibonacci for MemoCache {
    fn fib(&mut self, n: usize) -> Result<u128> {
        self.get(n)
    }
}
