/*!
 * Shared Pools
 * Process-wide pool per element type, built lazily on first access
 */

use super::bucket_pool::BucketPool;
use ahash::RandomState;
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::OnceLock;
use tracing::debug;

type SharedEntry = &'static (dyn Any + Send + Sync);

/// Registry of leaked pools keyed by element type
static SHARED_POOLS: OnceLock<DashMap<TypeId, SharedEntry, RandomState>> = OnceLock::new();

/// Get the shared pool for element type `T`
///
/// The first caller for a given `T` builds the pool while holding the
/// registry shard lock, so concurrent first access still yields one pool.
pub(super) fn shared_pool<T: Default + Send + 'static>() -> &'static BucketPool<T> {
    let registry = SHARED_POOLS.get_or_init(|| DashMap::with_hasher(RandomState::new()));
    let id = TypeId::of::<T>();

    let entry: SharedEntry = match registry.get(&id) {
        Some(entry) => *entry,
        None => *registry.entry(id).or_insert_with(|| {
            debug!(element_type = std::any::type_name::<T>(), "Initializing shared pool");
            let pool: SharedEntry = Box::leak(Box::new(BucketPool::<T>::from_env()));
            pool
        }),
    };

    match entry.downcast_ref::<BucketPool<T>>() {
        Some(pool) => pool,
        None => unreachable!("shared pool registry is keyed by element TypeId"),
    }
}
