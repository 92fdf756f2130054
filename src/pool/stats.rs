/*!
 * Pool Statistics
 * Lock-free counters for rent/release outcomes
 */

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Running counters owned by a pool
#[derive(Debug, Default)]
pub(super) struct PoolCounters {
    hits: AtomicUsize,
    misses: AtomicUsize,
    oversized: AtomicUsize,
    returns: AtomicUsize,
    drops: AtomicUsize,
}

impl PoolCounters {
    #[inline]
    pub fn hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn oversized(&self) {
        self.oversized.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn returned(&self) {
        self.returns.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn dropped(&self) {
        self.drops.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self, buckets: Vec<BucketStats>) -> PoolStats {
        PoolStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            oversized: self.oversized.load(Ordering::Relaxed),
            returns: self.returns.load(Ordering::Relaxed),
            drops: self.drops.load(Ordering::Relaxed),
            buckets,
        }
    }
}

/// Per-bucket occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketStats {
    /// Exact length of every buffer in this bucket
    pub buffer_length: usize,
    /// Buffers currently held for reuse
    pub retained: usize,
}

/// Pool statistics for monitoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Rents served by a previously returned buffer
    pub hits: usize,
    /// Rents within the managed range that had to allocate
    pub misses: usize,
    /// Rents above the managed range (never pooled)
    pub oversized: usize,
    /// Buffers accepted back into a bucket
    pub returns: usize,
    /// Buffers discarded on return (bucket full, foreign or oversized)
    pub drops: usize,
    /// Occupancy by size class, smallest first
    pub buckets: Vec<BucketStats>,
}

impl PoolStats {
    /// Fraction of pooled-range rents served without allocating (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total buffers held across all buckets
    pub fn retained(&self) -> usize {
        self.buckets.iter().map(|b| b.retained).sum()
    }
}
