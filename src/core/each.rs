//! Multi-dimensional Halton points: one [`Sequence`] per axis,
//! advanced in lockstep.
//!
//! ```
//! use rs_halton::core::each::each_pair;
//!
//! let points: Vec<(f64, f64)> = each_pair(2, 3).unwrap().take(2).collect();
//! assert_eq!(points[0].0, 0.5);
//! assert_eq!(points[1].0, 0.25);
//! ```

// others
use smallvec::SmallVec;
// halton
use crate::core::error::{HaltonError, Result};
use crate::core::halton::{checked_target, Float, Index, Remaining};
use crate::core::sequence::Sequence;

/// One value per axis, in the order the bases were given.
pub type Point = SmallVec<[Float; 4]>;

/// The axis composer. The k-th point holds the k-th value of every
/// axis.
#[derive(Debug, Clone)]
pub struct Each {
    axes: SmallVec<[Sequence; 4]>,
}

impl Each {
    pub fn new(bases: &[u64]) -> Result<Each> {
        if bases.is_empty() {
            return Err(HaltonError::NoBases);
        }
        let axes = bases
            .iter()
            .map(|base| Sequence::new(*base))
            .collect::<Result<SmallVec<[Sequence; 4]>>>()?;
        Ok(Each { axes })
    }
    pub fn dimension(&self) -> usize {
        self.axes.len()
    }
    pub fn bases(&self) -> Vec<u64> {
        self.axes.iter().map(|axis| axis.base()).collect()
    }
    /// Index shared by all axes.
    pub fn index(&self) -> Index {
        self.axes[0].index()
    }
    pub fn remaining(&self) -> Remaining {
        self.axes[0].remaining()
    }
    /// Advance every axis by one step. When one axis is exhausted all
    /// are, and nothing moves.
    pub fn try_next(&mut self) -> Result<Point> {
        if self.axes[0].is_exhausted() {
            return Err(HaltonError::Exhausted);
        }
        self.axes.iter_mut().map(|axis| axis.try_next()).collect()
    }
    /// Jump all axes forward by `n` points.
    pub fn jump(&mut self, n: Index) -> Result<()> {
        // all axes share the index, so validating the first one is enough
        checked_target(self.index(), n)?;
        for axis in self.axes.iter_mut() {
            axis.jump(n)?;
        }
        Ok(())
    }
}

impl Iterator for Each {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.try_next().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.axes[0].size_hint()
    }
}

/// Points of a Halton sequence with one axis per entry in `bases`.
pub fn each(bases: &[u64]) -> Result<Each> {
    Each::new(bases)
}

pub fn each_one(base: u64) -> Result<impl Iterator<Item = Float>> {
    Ok(Each::new(&[base])?.map(|p| p[0]))
}

pub fn each_pair(base_x: u64, base_y: u64) -> Result<impl Iterator<Item = (Float, Float)>> {
    Ok(Each::new(&[base_x, base_y])?.map(|p| (p[0], p[1])))
}

pub fn each_triple(
    base_x: u64,
    base_y: u64,
    base_z: u64,
) -> Result<impl Iterator<Item = (Float, Float, Float)>> {
    Ok(Each::new(&[base_x, base_y, base_z])?.map(|p| (p[0], p[1], p[2])))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::lowdiscrepancy::number;

    fn within_eps(a: Float, b: Float) -> bool {
        a.abs().min(b.abs()) * 0.001 >= (a - b).abs()
    }

    fn within_eps_ary(a: &[Float], b: &[Float]) -> bool {
        a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| within_eps(*a, *b))
    }

    #[test]
    fn each_base_2() {
        let values: Vec<Float> = each_one(2).unwrap().take(9).collect();
        assert_eq!(
            values,
            vec![0.5, 0.25, 0.75, 0.125, 0.625, 0.375, 0.875, 0.0625, 0.5625]
        );
    }

    #[test]
    fn each_2d() {
        let mut points = each(&[2, 3]).unwrap();
        let first = points.next().unwrap();
        assert!(within_eps_ary(&first, &[0.5, 0.3333333333333333]));
        let ninth = points.nth(7).unwrap();
        assert!(within_eps_ary(&ninth, &[0.5625, 0.0370370370370370]));
        for (i, (x, y)) in each_pair(2, 3).unwrap().take(9).enumerate() {
            let i = i as Index + 1;
            assert_eq!(x, number(2, i).unwrap());
            assert_eq!(y, number(3, i).unwrap());
        }
    }

    #[test]
    fn each_3d() {
        let expected: [[Float; 3]; 9] = [
            [0.5, 0.3333333333333333, 0.2],
            [0.25, 0.6666666666666666, 0.4],
            [0.75, 0.1111111111111111, 0.6],
            [0.125, 0.4444444444444444, 0.8],
            [0.625, 0.7777777777777777, 0.04],
            [0.375, 0.2222222222222222, 0.24],
            [0.875, 0.5555555555555555, 0.44000000000000006],
            [0.0625, 0.8888888888888888, 0.64],
            [0.5625, 0.0370370370370370, 0.8400000000000001],
        ];
        for ((x, y, z), e) in each_triple(2, 3, 5).unwrap().zip(expected.iter()) {
            assert!(within_eps_ary(&[x, y, z], e));
        }
    }

    #[test]
    fn each_4d() {
        let expected: [[Float; 4]; 9] = [
            [0.5, 0.3333333333333333, 0.2, 0.14285714285714285],
            [0.25, 0.6666666666666666, 0.4, 0.2857142857142857],
            [0.75, 0.1111111111111111, 0.6, 0.42857142857142855],
            [0.125, 0.4444444444444444, 0.8, 0.5714285714285714],
            [0.625, 0.7777777777777777, 0.04, 0.7142857142857143],
            [0.375, 0.2222222222222222, 0.24, 0.8571428571428571],
            [0.875, 0.5555555555555555, 0.44000000000000006, 0.02040816326530612],
            [0.0625, 0.8888888888888888, 0.64, 0.16326530612244897],
            [0.5625, 0.0370370370370370, 0.8400000000000001, 0.30612244897959184],
        ];
        let points: Vec<Point> = each(&[2, 3, 5, 7]).unwrap().take(9).collect();
        assert_eq!(points.len(), 9);
        for (p, e) in points.iter().zip(expected.iter()) {
            assert!(within_eps_ary(p, e));
        }
    }

    #[test]
    fn axes_stay_in_lockstep() {
        let mut points = each(&[2, 3, 5, 7, 11, 13]).unwrap();
        assert_eq!(points.dimension(), 6);
        assert_eq!(points.bases(), vec![2, 3, 5, 7, 11, 13]);
        for _ in 0..500 {
            points.try_next().unwrap();
        }
        points.jump(1000).unwrap();
        assert!(points.axes.iter().all(|axis| axis.index() == 1500));
        assert_eq!(points.index(), 1500);
    }

    #[test]
    fn fresh_composers_restart() {
        let a: Vec<Point> = each(&[2, 3]).unwrap().take(5).collect();
        let b: Vec<Point> = each(&[2, 3]).unwrap().take(5).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn push_style_iteration() {
        let mut sum: Float = 0.0;
        each(&[2]).unwrap().take(3).for_each(|p| sum += p[0]);
        assert_eq!(sum, 1.5);
    }

    #[test]
    fn invalid_bases() {
        assert_eq!(each(&[]).unwrap_err(), HaltonError::NoBases);
        assert_eq!(each(&[2, 1]).unwrap_err(), HaltonError::InvalidBase(1));
        assert!(each_pair(0, 3).is_err());
    }

    #[test]
    fn exhaustion_of_the_composer() {
        let mut points = each(&[2, 3]).unwrap();
        points.jump(Index::MAX - 1).unwrap();
        assert_eq!(points.remaining(), Remaining::Count(1));
        assert!(points.try_next().is_ok());
        assert_eq!(points.try_next(), Err(HaltonError::Exhausted));
        assert_eq!(points.next(), None);
        assert_eq!(points.jump(1), Err(HaltonError::Exhausted));
    }
}
