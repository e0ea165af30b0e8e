use core::cell::RefCell;

use std::sync::{Mutex, MutexGuard, PoisonError};
use crate::{MemoCache, Result};

std::thread_local! {
    static MEMO: RefCell<MemoCache> = RefCell::new(MemoCache::new());
}

/// Compute `fib(n)` using a cache private to the calling thread
///
/// Each thread gets its own [`MemoCache`] with [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) slots,
/// created on first use. Fails with [`Error::OutOfRange`](crate::Error::OutOfRange) for `n >= 100`.
pub fn memoized_fib(n: usize) -> Result<u128> {
    MEMO.with(|memo| memo.borrow_mut().get(n))
}

/// A [`MemoCache`] that can be shared between threads
///
/// Every operation takes the inner lock for its whole duration, so concurrent
/// callers never observe a half-filled computation.
#[derive(Debug, Default)]
pub struct SharedCache {
    inner: Mutex<MemoCache>,
}

impl SharedCache {
    /// Create a shared cache with [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) slots
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared cache that accepts indices below `capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        Self { inner: Mutex::new(MemoCache::with_capacity(capacity)) }
    }

    // slots only ever hold fully computed values, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, MemoCache> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The number of slots in the cache
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Compute `fib(n)`, see [`MemoCache::get`]
    pub fn get(&self, n: usize) -> Result<u128> {
        self.lock().get(n)
    }

    /// The cached value for `n`, see [`MemoCache::cached`]
    pub fn cached(&self, n: usize) -> Option<u128> {
        self.lock().cached(n)
    }

    /// Reset every slot to "not computed"
    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{iterative_fib, Error};

    #[test]
    fn thread_local_cache() {
        assert_eq!(memoized_fib(10), Ok(55));
        assert_eq!(memoized_fib(20), Ok(6765));
        assert_eq!(memoized_fib(100), Err(Error::OutOfRange { n: 100, capacity: 100 }));
    }

    #[test]
    fn concurrent_access() {
        let cache = SharedCache::new();
        std::thread::scope(|s| {
            for t in 0..4 {
                let cache = &cache;
                s.spawn(move || {
                    for n in (0..100).rev().skip(t) {
                        assert_eq!(cache.get(n), iterative_fib(n));
                    }
                });
            }
        });

        assert_eq!(cache.cached(99), Some(218_922_995_834_555_169_026));
    }
}
