/*!
 * Size-Class Table
 * Power-of-two bucketing of requested lengths
 */

use crate::core::limits::{MAX_CLASS_LENGTH, MIN_CLASS_LENGTH, MIN_CLASS_SHIFT};

/// Map a requested minimum length to its size class index.
///
/// Computes `floor(log2(max(len - 1, 15))) - 3`, so lengths 1..=16 share
/// class 0 and each following class doubles the capacity. The capacity of
/// the returned class is always `>= minimum_length`.
///
/// Total over `usize`: a request of 0 lands in class 0 and lengths above
/// [`MAX_CLASS_LENGTH`] yield indices the pool treats as unmanaged.
#[inline]
pub const fn class_of(minimum_length: usize) -> usize {
    let value = minimum_length.saturating_sub(1) | (MIN_CLASS_LENGTH - 1);
    (usize::BITS - value.leading_zeros() - MIN_CLASS_SHIFT) as usize
}

/// Exact buffer length served by size class `index`
#[inline]
pub const fn capacity_of(index: usize) -> usize {
    MIN_CLASS_LENGTH << index
}

/// Clamp a configured maximum length into the range the table covers
#[inline]
pub const fn clamp_max_length(max_array_length: usize) -> usize {
    if max_array_length < MIN_CLASS_LENGTH {
        MIN_CLASS_LENGTH
    } else if max_array_length > MAX_CLASS_LENGTH {
        MAX_CLASS_LENGTH
    } else {
        max_array_length
    }
}
