use thiserror::Error;

/// Errors reported by `IntervalTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IntervalTreeError {
    /// The node arena or the result buffer could not grow.
    #[error("out of memory")]
    OutOfMemory,
    /// The interval ends before it starts.
    #[error("invalid interval: start {start} is greater than end {end}")]
    InvalidInterval {
        /// Start of the rejected interval
        start: u32,
        /// End of the rejected interval
        end: u32,
    },
}
