// halton
use crate::core::each::{Each, Point};
use crate::core::error::{HaltonError, Result};
use crate::core::halton::Index;
use crate::core::lowdiscrepancy::prime;

/// Incremental Halton points, one axis per base.
#[derive(Debug, Clone)]
pub struct HaltonSampler {
    pub each: Each,
}

impl HaltonSampler {
    pub fn new(bases: &[u64]) -> Result<HaltonSampler> {
        Ok(HaltonSampler {
            each: Each::new(bases)?,
        })
    }
    /// Use the first `dimension` primes as bases.
    pub fn with_dimension(dimension: usize) -> Result<HaltonSampler> {
        if dimension == 0 {
            return Err(HaltonError::NoBases);
        }
        let bases: Vec<u64> = (0..dimension).map(prime).collect::<Result<Vec<u64>>>()?;
        HaltonSampler::new(&bases)
    }
    pub fn dimension(&self) -> usize {
        self.each.dimension()
    }
    pub fn get_point(&mut self) -> Result<Point> {
        self.each.try_next()
    }
    pub fn skip_samples(&mut self, n: Index) -> Result<()> {
        self.each.jump(n)
    }
    pub fn get_current_sample_number(&self) -> Index {
        self.each.index()
    }
}
