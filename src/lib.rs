/*!
 * Bucket Pool Library
 * Size-classed pooling of reusable buffers for allocation-heavy hot paths
 *
 * Buffers are rented with [`BucketPool::rent`] and handed back with
 * [`BucketPool::release`]. Requests are rounded up to power-of-two size
 * classes starting at 16 elements; each class keeps a bounded LIFO free list.
 * Requests above the configured maximum are allocated directly and never
 * retained.
 */

pub mod core;
pub mod observability;
pub mod pool;

// Re-exports
pub use crate::core::errors::{PoolError, PoolResult};
pub use observability::init_tracing;
pub use pool::{
    capacity_of, class_of, ArrayPool, BucketPool, BucketStats, PoolConfig, PoolStats,
    RentedBuffer,
};
