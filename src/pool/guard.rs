/*!
 * Rented Buffer Guard
 * RAII wrapper that hands its buffer back to the pool on drop
 */

use super::bucket_pool::BucketPool;
use std::ops::{Deref, DerefMut};

/// Buffer that auto-returns to its pool on drop
///
/// # Example
///
/// ```
/// use bucket_pool::BucketPool;
///
/// let pool = BucketPool::<u8>::create(1024, 4).unwrap();
/// {
///     let mut buf = pool.rent_guarded(100).clear_on_drop(true);
///     buf[0] = 42;
/// }
/// assert_eq!(pool.stats().returns, 1);
/// ```
pub struct RentedBuffer<'a, T: Default> {
    pool: &'a BucketPool<T>,
    inner: Option<Box<[T]>>,
    clear_on_drop: bool,
}

impl<'a, T: Default> RentedBuffer<'a, T> {
    pub(super) fn new(pool: &'a BucketPool<T>, buffer: Box<[T]>) -> Self {
        Self {
            pool,
            inner: Some(buffer),
            clear_on_drop: false,
        }
    }

    /// Reset contents to `T::default()` when the buffer goes back
    #[inline]
    pub fn clear_on_drop(mut self, clear: bool) -> Self {
        self.clear_on_drop = clear;
        self
    }

    /// Take ownership of the buffer, detaching it from the pool
    ///
    /// The caller becomes responsible for releasing it, or letting it drop.
    #[inline]
    pub fn into_inner(mut self) -> Box<[T]> {
        self.inner.take().unwrap_or_default()
    }
}

impl<T: Default> Deref for RentedBuffer<'_, T> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.inner.as_deref().unwrap_or_default()
    }
}

impl<T: Default> DerefMut for RentedBuffer<'_, T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner.as_deref_mut().unwrap_or_default()
    }
}

impl<T: Default> Drop for RentedBuffer<'_, T> {
    fn drop(&mut self) {
        if let Some(buffer) = self.inner.take() {
            self.pool.release(buffer, self.clear_on_drop);
        }
    }
}
