//! The generation engine and the pieces around it.

pub mod each;
pub mod error;
pub mod film;
pub mod halton;
pub mod lowdiscrepancy;
pub mod parallel;
pub mod sampler;
pub mod sequence;
