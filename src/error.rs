use crate::Peripheral;

/// Harness errors
///
/// All of these are configuration or wiring errors detected at the boundary,
/// before a kernel runs. Kernels themselves are infallible.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A size exceeds the fixed buffer capacity
    #[error("size {size} exceeds capacity {capacity}")]
    Capacity {
        /// Requested size
        size: usize,
        /// Fixed capacity
        capacity: usize,
    },
    /// A configured size is zero
    #[error("size must be positive")]
    Empty,
    /// Transform length is not a power of two
    #[error("length {0} is not a power of two")]
    NotPowerOfTwo(usize),
    /// Benchmark mode outside the known set
    #[error("invalid benchmark mode {0}")]
    InvalidMode(u8),
    /// Peripheral benchmark not available on this target
    #[error("{0:?} benchmark unavailable")]
    Unsupported(Peripheral),
    /// The output sink failed
    #[error("output sink")]
    Sink(#[from] core::fmt::Error),
}
