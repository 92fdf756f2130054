/*!
 * Pool Limits and Constants
 *
 * Centralized location for size-class boundaries and default pool sizing.
 *
 * - Performance-critical constants are marked with [PERF]
 * - Values that bound memory retention are marked with [MEMORY]
 */

// =============================================================================
// SIZE CLASSES
// =============================================================================

/// Capacity of the smallest size class (16 elements)
/// Every request from 1 to 16 elements lands here
pub const MIN_CLASS_LENGTH: usize = 16;

/// log2 of [`MIN_CLASS_LENGTH`], used to turn a bit position into a class index
pub const MIN_CLASS_SHIFT: u32 = MIN_CLASS_LENGTH.trailing_zeros();

/// Capacity of the largest size class the pool can manage (2^30 elements)
/// Requests above the configured maximum take the unpooled fallback path
pub const MAX_CLASS_LENGTH: usize = 1 << 30;

/// Number of size classes between [`MIN_CLASS_LENGTH`] and [`MAX_CLASS_LENGTH`]
pub const MAX_BUCKET_COUNT: usize = (MAX_CLASS_LENGTH.trailing_zeros() - MIN_CLASS_SHIFT) as usize + 1;

// =============================================================================
// POOL DEFAULTS
// =============================================================================

/// Default largest length managed by a pool (1M elements)
/// [MEMORY] Larger requests are allocated directly and never retained
pub const DEFAULT_MAX_ARRAY_LENGTH: usize = 1024 * 1024;

/// Default number of buffers retained per size class
/// [MEMORY] Bounds worst-case retention to 50 x class capacity per bucket
pub const DEFAULT_MAX_ARRAYS_PER_BUCKET: usize = 50;

/// Number of buckets a rent visits before falling back to allocation
/// [PERF] The requested class plus one larger class; keeps rent O(1)
pub const MAX_BUCKETS_TO_TRY: usize = 2;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Overrides [`DEFAULT_MAX_ARRAY_LENGTH`] for shared pools
pub const ENV_MAX_ARRAY_LENGTH: &str = "BUCKET_POOL_MAX_ARRAY_LENGTH";

/// Overrides [`DEFAULT_MAX_ARRAYS_PER_BUCKET`] for shared pools
pub const ENV_MAX_ARRAYS_PER_BUCKET: &str = "BUCKET_POOL_MAX_ARRAYS_PER_BUCKET";

/// Enables JSON log output when set to `1` or `true`
pub const ENV_TRACE_JSON: &str = "BUCKET_POOL_TRACE_JSON";
