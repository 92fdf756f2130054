/*!
 * Pool Configuration
 *
 * Sizing knobs fixed at pool construction.
 */

use crate::core::errors::{PoolError, PoolResult};
use crate::core::limits::{
    DEFAULT_MAX_ARRAYS_PER_BUCKET, DEFAULT_MAX_ARRAY_LENGTH, ENV_MAX_ARRAYS_PER_BUCKET,
    ENV_MAX_ARRAY_LENGTH,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Configuration for a [`BucketPool`](super::BucketPool)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Largest buffer length the pool retains (default: 1M elements)
    pub max_array_length: usize,

    /// Maximum buffers retained per size class (default: 50)
    pub max_arrays_per_bucket: usize,
}

impl PoolConfig {
    /// Create default pool configuration
    pub fn new() -> Self {
        Self {
            max_array_length: DEFAULT_MAX_ARRAY_LENGTH,
            max_arrays_per_bucket: DEFAULT_MAX_ARRAYS_PER_BUCKET,
        }
    }

    pub fn with_max_array_length(mut self, max_array_length: usize) -> Self {
        self.max_array_length = max_array_length;
        self
    }

    pub fn with_max_arrays_per_bucket(mut self, max_arrays_per_bucket: usize) -> Self {
        self.max_arrays_per_bucket = max_arrays_per_bucket;
        self
    }

    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - BUCKET_POOL_MAX_ARRAY_LENGTH: largest pooled length
    /// - BUCKET_POOL_MAX_ARRAYS_PER_BUCKET: buffers retained per size class
    ///
    /// Missing or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::new();
        Self {
            max_array_length: env_usize(ENV_MAX_ARRAY_LENGTH, defaults.max_array_length),
            max_arrays_per_bucket: env_usize(
                ENV_MAX_ARRAYS_PER_BUCKET,
                defaults.max_arrays_per_bucket,
            ),
        }
    }

    /// Reject values no pool can be built from
    pub fn validate(&self) -> PoolResult<()> {
        if self.max_array_length == 0 {
            return Err(PoolError::InvalidMaxArrayLength(self.max_array_length));
        }
        if self.max_arrays_per_bucket == 0 {
            return Err(PoolError::InvalidMaxArraysPerBucket(
                self.max_arrays_per_bucket,
            ));
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(value) if value > 0 => value,
            _ => {
                warn!(key, value = %raw, default, "Ignoring invalid pool setting");
                default
            }
        },
        Err(_) => default,
    }
}
