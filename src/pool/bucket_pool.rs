/*!
 * Bucketed Buffer Pool
 *
 * Hands out `Box<[T]>` buffers from power-of-two size classes and takes them
 * back for reuse.
 *
 * # Behavior
 *
 * - **Zero length**: served by an empty slice, which never allocates
 * - **Managed range**: the request's class is tried first, then one larger
 *   class, then a fresh buffer of the requested class is allocated
 * - **Oversized**: requests above the configured maximum get an exact-length,
 *   unpooled buffer
 *
 * Each bucket carries its own mutex, so traffic on different size classes
 * never contends.
 */

use super::bucket::{allocate, try_allocate, Bucket, BucketRent};
use super::config::PoolConfig;
use super::guard::RentedBuffer;
use super::shared::shared_pool;
use super::size_class::{capacity_of, class_of, clamp_max_length};
use super::stats::{BucketStats, PoolCounters, PoolStats};
use super::traits::ArrayPool;
use crate::core::errors::PoolResult;
use crate::core::limits::MAX_BUCKETS_TO_TRY;
use std::fmt;
use tracing::{debug, trace};

/// Size-classed pool of reusable buffers
///
/// # Example
///
/// ```
/// use bucket_pool::BucketPool;
///
/// let pool = BucketPool::<u8>::create(64, 2).unwrap();
/// let buf = pool.rent(5);
/// assert_eq!(buf.len(), 16);
/// pool.release(buf, false);
/// ```
pub struct BucketPool<T> {
    config: PoolConfig,
    buckets: Box<[Bucket<T>]>,
    counters: PoolCounters,
}

impl<T: Default> BucketPool<T> {
    /// Create a pool with the default configuration
    pub fn new() -> Self {
        Self::build(PoolConfig::default())
    }

    /// Create a pool retaining lengths up to `max_array_length`, with at most
    /// `max_arrays_per_bucket` buffers per size class
    ///
    /// `max_array_length` is clamped into `[16, 2^30]`.
    pub fn create(max_array_length: usize, max_arrays_per_bucket: usize) -> PoolResult<Self> {
        Self::with_config(
            PoolConfig::new()
                .with_max_array_length(max_array_length)
                .with_max_arrays_per_bucket(max_arrays_per_bucket),
        )
    }

    /// Create a pool from a validated configuration
    pub fn with_config(config: PoolConfig) -> PoolResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Create a pool configured from the environment, see [`PoolConfig::from_env`]
    pub fn from_env() -> Self {
        Self::build(PoolConfig::from_env())
    }

    fn build(config: PoolConfig) -> Self {
        let config = PoolConfig {
            max_array_length: clamp_max_length(config.max_array_length),
            ..config
        };
        let bucket_count = class_of(config.max_array_length) + 1;
        let buckets = (0..bucket_count)
            .map(|index| Bucket::new(index, capacity_of(index), config.max_arrays_per_bucket))
            .collect();

        debug!(
            max_array_length = config.max_array_length,
            max_arrays_per_bucket = config.max_arrays_per_bucket,
            bucket_count,
            "Created buffer pool"
        );

        Self {
            config,
            buckets,
            counters: PoolCounters::default(),
        }
    }

    /// Rent a buffer of at least `minimum_length` elements
    ///
    /// Within the managed range the buffer is rounded up to its size class and
    /// may hold data from a previous renter unless it was released with
    /// clearing. Oversized requests get exactly `minimum_length` elements.
    pub fn rent(&self, minimum_length: usize) -> Box<[T]> {
        if minimum_length == 0 {
            return Box::default();
        }

        let index = class_of(minimum_length);
        if index >= self.buckets.len() {
            self.note_oversized(minimum_length);
            return allocate(minimum_length);
        }

        match self.rent_from_buckets(index) {
            Some(buffer) => buffer,
            None => {
                self.counters.miss();
                allocate(capacity_of(index))
            }
        }
    }

    /// Like [`rent`](Self::rent), but reports allocator refusal instead of
    /// aborting when a fresh buffer has to be created
    pub fn try_rent(&self, minimum_length: usize) -> PoolResult<Box<[T]>> {
        if minimum_length == 0 {
            return Ok(Box::default());
        }

        let index = class_of(minimum_length);
        if index >= self.buckets.len() {
            self.note_oversized(minimum_length);
            return try_allocate(minimum_length);
        }

        match self.rent_from_buckets(index) {
            Some(buffer) => Ok(buffer),
            None => {
                self.counters.miss();
                try_allocate(capacity_of(index))
            }
        }
    }

    /// Rent a buffer that goes back to this pool when dropped
    pub fn rent_guarded(&self, minimum_length: usize) -> RentedBuffer<'_, T> {
        RentedBuffer::new(self, self.rent(minimum_length))
    }

    /// Return a buffer for reuse
    ///
    /// With `clear_buffer` set, every element is reset to `T::default()`
    /// before the buffer becomes visible to the next renter. Empty, oversized
    /// and foreign-length buffers are dropped silently, as are buffers
    /// arriving at a full bucket.
    pub fn release(&self, mut buffer: Box<[T]>, clear_buffer: bool) {
        let length = buffer.len();
        if length == 0 {
            return;
        }

        let index = class_of(length);
        let Some(bucket) = self.buckets.get(index) else {
            self.counters.dropped();
            trace!(length, "Dropped unmanaged buffer");
            return;
        };

        if clear_buffer {
            buffer.fill_with(T::default);
        }

        match bucket.release(buffer) {
            Ok(true) => {
                self.counters.returned();
                trace!(bucket = index, length, "Returned buffer to pool");
            }
            Ok(false) => {
                self.counters.dropped();
                trace!(bucket = index, length, "Bucket full, dropped buffer");
            }
            Err(e) => {
                self.counters.dropped();
                debug!(bucket = index, error = %e, "Dropped buffer not rented from this pool");
            }
        }
    }

    /// Try the requested class and at most one larger class
    fn rent_from_buckets(&self, index: usize) -> Option<Box<[T]>> {
        let end = (index + MAX_BUCKETS_TO_TRY).min(self.buckets.len());
        self.buckets[index..end].iter().find_map(|bucket| {
            bucket.rent().map(|rented| {
                match rented {
                    BucketRent::Reused(_) => self.counters.hit(),
                    BucketRent::Allocated(_) => self.counters.miss(),
                }
                rented.into_buffer()
            })
        })
    }

    fn note_oversized(&self, minimum_length: usize) {
        self.counters.oversized();
        debug!(
            requested = minimum_length,
            max_array_length = self.config.max_array_length,
            "Request above pooled range, allocating unpooled buffer"
        );
    }
}

impl<T: Default + Send + 'static> BucketPool<T> {
    /// Process-wide pool for element type `T`
    ///
    /// Built once on first access from [`PoolConfig::from_env`] and kept for
    /// the life of the process. Explicitly created pools never share buffers
    /// with it.
    pub fn shared() -> &'static Self {
        shared_pool::<T>()
    }
}

impl<T> BucketPool<T> {
    /// Number of size classes this pool manages
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Largest pooled length, after clamping
    #[inline]
    pub fn max_array_length(&self) -> usize {
        self.config.max_array_length
    }

    #[inline]
    pub fn max_arrays_per_bucket(&self) -> usize {
        self.config.max_arrays_per_bucket
    }

    /// Effective configuration, after clamping
    pub fn config(&self) -> PoolConfig {
        self.config
    }
}

impl<T: Default> BucketPool<T> {
    /// Snapshot of counters and per-bucket occupancy
    pub fn stats(&self) -> PoolStats {
        let buckets = self
            .buckets
            .iter()
            .map(|bucket| BucketStats {
                buffer_length: bucket.buffer_length(),
                retained: bucket.retained(),
            })
            .collect();
        self.counters.snapshot(buckets)
    }
}

impl<T: Default> Default for BucketPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BucketPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BucketPool")
            .field("max_array_length", &self.config.max_array_length)
            .field("max_arrays_per_bucket", &self.config.max_arrays_per_bucket)
            .field("bucket_count", &self.buckets.len())
            .finish()
    }
}

impl<T: Default + Send> ArrayPool<T> for BucketPool<T> {
    #[inline]
    fn rent(&self, minimum_length: usize) -> Box<[T]> {
        BucketPool::rent(self, minimum_length)
    }

    #[inline]
    fn release(&self, buffer: Box<[T]>, clear_buffer: bool) {
        BucketPool::release(self, buffer, clear_buffer)
    }
}
