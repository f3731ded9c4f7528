//! The **Sampler** implementations.
//!
//! - HaltonSampler
//! - LeapedSampler
//!
//! ## Halton Sampler
//!
//! Generates the points of a Halton sequence incrementally, one axis
//! per base. The points are guaranteed to not clump too closely
//! together and are well distributed over all dimensions at once.
//!
//! ## Leaped Sampler
//!
//! Takes only every n-th point of a Halton sequence, evaluating each
//! one directly from its index. Useful to decorrelate several
//! sequences that share bases.

pub mod halton;
pub mod leaped;
