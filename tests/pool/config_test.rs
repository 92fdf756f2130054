/*!
 * Configuration Tests
 * Validation and environment loading
 */

use bucket_pool::{BucketPool, PoolConfig, PoolError};
use pretty_assertions::assert_eq;
use serial_test::serial;

const MAX_LEN_VAR: &str = "BUCKET_POOL_MAX_ARRAY_LENGTH";
const PER_BUCKET_VAR: &str = "BUCKET_POOL_MAX_ARRAYS_PER_BUCKET";

#[test]
fn test_with_config() {
    let config = PoolConfig::new()
        .with_max_array_length(512)
        .with_max_arrays_per_bucket(3);
    let pool = BucketPool::<u8>::with_config(config).unwrap();

    assert_eq!(pool.config(), config);
    assert_eq!(pool.bucket_count(), 6);
    assert_eq!(pool.max_arrays_per_bucket(), 3);
}

#[test]
fn test_invalid_config_rejected() {
    let config = PoolConfig::new().with_max_arrays_per_bucket(0);
    let err = BucketPool::<u8>::with_config(config).unwrap_err();
    assert_eq!(err, PoolError::InvalidMaxArraysPerBucket(0));
}

#[test]
fn test_default_pool() {
    let pool = BucketPool::<u8>::default();
    assert_eq!(pool.max_array_length(), 1024 * 1024);
    assert_eq!(pool.max_arrays_per_bucket(), 50);
    assert_eq!(pool.bucket_count(), 17);
}

#[test]
#[serial]
fn test_from_env() {
    std::env::set_var(MAX_LEN_VAR, "2048");
    std::env::set_var(PER_BUCKET_VAR, "7");

    let config = PoolConfig::from_env();
    assert_eq!(config.max_array_length, 2048);
    assert_eq!(config.max_arrays_per_bucket, 7);

    let pool = BucketPool::<u8>::from_env();
    assert_eq!(pool.bucket_count(), 8);

    std::env::remove_var(MAX_LEN_VAR);
    std::env::remove_var(PER_BUCKET_VAR);
}

#[test]
#[serial]
fn test_from_env_ignores_invalid_values() {
    std::env::set_var(MAX_LEN_VAR, "lots");
    std::env::set_var(PER_BUCKET_VAR, "0");

    let config = PoolConfig::from_env();
    assert_eq!(config, PoolConfig::default());

    std::env::remove_var(MAX_LEN_VAR);
    std::env::remove_var(PER_BUCKET_VAR);
}
