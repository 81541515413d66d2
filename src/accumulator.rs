use log::trace;

use crate::error::IntervalTreeError;

/// Number of slots added each time the buffer is full.
pub const GROWTH_STEP: usize = 10;

/// A result buffer reused across queries.
///
/// Capacity only grows, in steps of [`GROWTH_STEP`]; `reset` drops the logical contents but
/// keeps the allocation for the next query. Growth that would take the capacity past `limit`
/// is refused like a failed allocation.
#[derive(Debug)]
pub struct Accumulator<T> {
    buf: Vec<T>,
    /// Largest capacity the buffer may grow to
    limit: usize,
}

impl<T> Accumulator<T> {
    pub fn new() -> Self {
        Accumulator {
            buf: Vec::new(),
            limit: usize::MAX,
        }
    }

    /// Cap further growth at `limit` slots. Capacity already allocated is kept.
    #[inline]
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    /// Forget the previous results.
    #[inline]
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Append one match, growing the buffer when it is full.
    ///
    /// # Errors
    ///
    /// Returns `OutOfMemory` if the buffer needs to grow and the allocation fails or the new
    /// capacity would exceed the limit.
    pub fn push(&mut self, item: T) -> Result<(), IntervalTreeError> {
        if self.buf.len() == self.buf.capacity() {
            if self.limit.saturating_sub(self.buf.capacity()) < GROWTH_STEP {
                return Err(IntervalTreeError::OutOfMemory);
            }
            self.buf
                .try_reserve_exact(GROWTH_STEP)
                .map_err(|_| IntervalTreeError::OutOfMemory)?;
            trace!("result buffer grown to {} slots", self.buf.capacity());
        }
        self.buf.push(item);
        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }
}

impl<T> Default for Accumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}
