//! Error types for Halton sequence generation.

use thiserror::Error;

// halton
use crate::core::halton::Index;

/// Result type for Halton operations.
pub type Result<T> = std::result::Result<T, HaltonError>;

/// Everything a caller can get back instead of a value.
///
/// None of these leave a generator in a modified state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HaltonError {
    /// A base below two.
    #[error("Invalid base {0}: a base must be at least 2")]
    InvalidBase(u64),

    /// An axis composer needs at least one base.
    #[error("Invalid argument: at least one base is required")]
    NoBases,

    /// Any other rejected argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The index counter sits at its maximum.
    #[error("Sequence exhausted: the index reached its maximum")]
    Exhausted,

    /// A jump that would carry the index past its maximum.
    #[error("Index overflow: cannot advance index {index} by {n}")]
    Overflow { index: Index, n: Index },

    /// A worker thread of the parallel generator died.
    #[error("Worker thread panicked")]
    WorkerPanicked,

    /// Writing an image failed.
    #[error("Image error: {0}")]
    Image(String),
}

impl From<image::ImageError> for HaltonError {
    fn from(err: image::ImageError) -> Self {
        HaltonError::Image(err.to_string())
    }
}
