// halton
use crate::core::each::Point;
use crate::core::error::{HaltonError, Result};
use crate::core::halton::{check_base, Index};
use crate::core::lowdiscrepancy::number;

/// A 'leaped' Halton sequence: only every `leap`-th index is used,
/// starting at `offset`. Each point is evaluated directly, so leaping
/// costs nothing extra.
///
/// Leaps that share a factor with one of the bases repeat values
/// badly, a prime leap larger than every base (e.g. 409) is a safe
/// choice.
#[derive(Debug, Clone)]
pub struct LeapedSampler {
    pub bases: Vec<u64>,
    pub leap: Index,
    pub offset: Index,
    samples_taken: Index,
}

impl LeapedSampler {
    pub fn new(bases: &[u64], leap: Index, offset: Index) -> Result<LeapedSampler> {
        if bases.is_empty() {
            return Err(HaltonError::NoBases);
        }
        if leap == 0 {
            return Err(HaltonError::InvalidArgument(
                "leap must be at least 1".to_string(),
            ));
        }
        let bases: Vec<u64> = bases
            .iter()
            .map(|base| check_base(*base))
            .collect::<Result<Vec<u64>>>()?;
        Ok(LeapedSampler {
            bases,
            leap,
            offset,
            samples_taken: 0,
        })
    }
    pub fn dimension(&self) -> usize {
        self.bases.len()
    }
    /// The sequence index the next point is taken from.
    fn next_index(&self) -> Result<Index> {
        self.samples_taken
            .checked_mul(self.leap)
            .and_then(|i| i.checked_add(self.offset))
            .ok_or(HaltonError::Exhausted)
    }
    pub fn get_point(&mut self) -> Result<Point> {
        let index: Index = self.next_index()?;
        let point = self
            .bases
            .iter()
            .map(|base| number(*base, index))
            .collect::<Result<Point>>()?;
        self.samples_taken += 1;
        Ok(point)
    }
    pub fn skip_samples(&mut self, n: Index) -> Result<()> {
        self.samples_taken = self
            .samples_taken
            .checked_add(n)
            .ok_or(HaltonError::Overflow {
                index: self.samples_taken,
                n,
            })?;
        Ok(())
    }
    pub fn get_current_sample_number(&self) -> Index {
        self.samples_taken
    }
}
