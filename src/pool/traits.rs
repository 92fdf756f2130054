/*!
 * Pool Traits
 * Buffer pool abstraction for collaborators
 */

/// Buffer rental interface
///
/// Callers must treat the rented length as "at least the request" and hand
/// every rented buffer back exactly once.
pub trait ArrayPool<T>: Send + Sync {
    /// Rent a buffer of at least `minimum_length` elements
    fn rent(&self, minimum_length: usize) -> Box<[T]>;

    /// Return a buffer, optionally resetting its contents first
    fn release(&self, buffer: Box<[T]>, clear_buffer: bool);
}
