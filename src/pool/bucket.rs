/*!
 * Bucket
 * Bounded LIFO free list for a single size class
 */

use crate::core::errors::{PoolError, PoolResult};
use parking_lot::Mutex;
use tracing::trace;

/// Outcome of a successful bucket rent
#[derive(Debug)]
pub(super) enum BucketRent<T> {
    /// A previously returned buffer was handed out again
    Reused(Box<[T]>),
    /// The slot had never been populated, so a fresh buffer was allocated
    Allocated(Box<[T]>),
}

impl<T> BucketRent<T> {
    #[inline]
    pub fn into_buffer(self) -> Box<[T]> {
        match self {
            BucketRent::Reused(buffer) | BucketRent::Allocated(buffer) => buffer,
        }
    }
}

/// Slot array plus cursor
///
/// Slots `[cursor..]` may hold buffers; slots below the cursor are rented out.
struct Slots<T> {
    buffers: Box<[Option<Box<[T]>>]>,
    cursor: usize,
}

/// Free list of buffers that all have exactly `buffer_length` elements
pub(super) struct Bucket<T> {
    index: usize,
    buffer_length: usize,
    slots: Mutex<Slots<T>>,
}

impl<T: Default> Bucket<T> {
    /// Create a bucket with `capacity` empty slots
    pub fn new(index: usize, buffer_length: usize, capacity: usize) -> Self {
        let buffers = std::iter::repeat_with(|| None).take(capacity).collect();
        Self {
            index,
            buffer_length,
            slots: Mutex::new(Slots { buffers, cursor: 0 }),
        }
    }

    /// Take the most recently returned buffer
    ///
    /// Returns `None` once every slot is rented out. A slot that was never
    /// populated yields a freshly allocated buffer of `buffer_length`.
    pub fn rent(&self) -> Option<BucketRent<T>> {
        let taken = {
            let mut slots = self.slots.lock();
            if slots.cursor >= slots.buffers.len() {
                return None;
            }
            let cursor = slots.cursor;
            slots.cursor += 1;
            slots.buffers[cursor].take()
        };

        // Allocate outside the lock
        match taken {
            Some(buffer) => {
                trace!(bucket = self.index, length = self.buffer_length, "Reused pooled buffer");
                Some(BucketRent::Reused(buffer))
            }
            None => {
                trace!(bucket = self.index, length = self.buffer_length, "Allocated buffer for empty slot");
                Some(BucketRent::Allocated(allocate(self.buffer_length)))
            }
        }
    }

    /// Store a buffer for reuse
    ///
    /// Returns `Ok(false)` when every slot is already occupied and the buffer
    /// was dropped instead.
    pub fn release(&self, buffer: Box<[T]>) -> PoolResult<bool> {
        if buffer.len() != self.buffer_length {
            return Err(PoolError::LengthMismatch {
                expected: self.buffer_length,
                actual: buffer.len(),
            });
        }

        let mut slots = self.slots.lock();
        if slots.cursor == 0 {
            return Ok(false);
        }
        slots.cursor -= 1;
        let cursor = slots.cursor;
        slots.buffers[cursor] = Some(buffer);
        Ok(true)
    }

    /// Number of materialized buffers currently sitting in the bucket
    pub fn retained(&self) -> usize {
        self.slots.lock().buffers.iter().filter(|slot| slot.is_some()).count()
    }

    #[inline]
    pub fn buffer_length(&self) -> usize {
        self.buffer_length
    }
}

/// Allocate a default-initialized buffer of exactly `length` elements
pub(super) fn allocate<T: Default>(length: usize) -> Box<[T]> {
    std::iter::repeat_with(T::default).take(length).collect()
}

/// Fallible variant of [`allocate`] that reports allocator refusal
pub(super) fn try_allocate<T: Default>(length: usize) -> PoolResult<Box<[T]>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(length)
        .map_err(|_| PoolError::AllocationFailed { requested: length })?;
    buffer.resize_with(length, T::default);
    Ok(buffer.into_boxed_slice())
}
