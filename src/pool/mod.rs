/*!
 * Buffer Pool Module
 *
 * Size-classed pooling of `Box<[T]>` buffers:
 * - Size-class table mapping lengths to power-of-two capacities
 * - Bounded LIFO bucket per size class
 * - Pool front-end with search-ahead, oversized fallback and clearing
 *
 * # Performance
 *
 * - Rent/release: O(1), at most two bucket locks per rent
 * - Retention: bounded by `max_arrays_per_bucket` per size class
 */

mod bucket;
mod bucket_pool;
mod config;
mod guard;
mod shared;
mod size_class;
mod stats;
mod traits;

pub use bucket_pool::BucketPool;
pub use config::PoolConfig;
pub use guard::RentedBuffer;
pub use size_class::{capacity_of, class_of};
pub use stats::{BucketStats, PoolStats};
pub use traits::ArrayPool;
