//! The **Sampler** enum defines the interface shared by the point
//! generators and dispatches to the implementations.

// halton
use crate::core::each::Point;
use crate::core::error::Result;
use crate::core::halton::Index;
use crate::samplers::halton::HaltonSampler;
use crate::samplers::leaped::LeapedSampler;

#[derive(Debug, Clone)]
pub enum Sampler {
    Halton(HaltonSampler),
    Leaped(LeapedSampler),
}

impl Sampler {
    pub fn dimension(&self) -> usize {
        match self {
            Sampler::Halton(sampler) => sampler.dimension(),
            Sampler::Leaped(sampler) => sampler.dimension(),
        }
    }
    pub fn get_point(&mut self) -> Result<Point> {
        match self {
            Sampler::Halton(sampler) => sampler.get_point(),
            Sampler::Leaped(sampler) => sampler.get_point(),
        }
    }
    /// Move past `n` points without generating them.
    pub fn skip_samples(&mut self, n: Index) -> Result<()> {
        match self {
            Sampler::Halton(sampler) => sampler.skip_samples(n),
            Sampler::Leaped(sampler) => sampler.skip_samples(n),
        }
    }
    /// Number of points handed out (or skipped) so far.
    pub fn get_current_sample_number(&self) -> Index {
        match self {
            Sampler::Halton(sampler) => sampler.get_current_sample_number(),
            Sampler::Leaped(sampler) => sampler.get_current_sample_number(),
        }
    }
    /// Collect the next `n` points.
    pub fn get_points(&mut self, n: usize) -> Result<Vec<Point>> {
        (0..n).map(|_| self.get_point()).collect()
    }
}

impl From<HaltonSampler> for Sampler {
    fn from(sampler: HaltonSampler) -> Self {
        Sampler::Halton(sampler)
    }
}

impl From<LeapedSampler> for Sampler {
    fn from(sampler: LeapedSampler) -> Self {
        Sampler::Leaped(sampler)
    }
}
