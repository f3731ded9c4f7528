//! The incremental Halton generator.
//!
//! Adapted from "Fast, portable, and reliable algorithm for the
//! calculation of Halton numbers" by Miroslav Kolář and Seamus F.
//! O'Shea. The index is kept as a base-*b* odometer of digits next to
//! the weights `b^-(i+1)` those digits carry in the output. Every level
//! also stores the partial sum of all levels above it, so moving to the
//! following index only recomputes the levels below the highest digit
//! that changed. Nothing is ever subtracted.

// others
use smallvec::SmallVec;
use strum_macros::{Display, EnumIter};
use tracing::debug;
// halton
use crate::core::error::{HaltonError, Result};
use crate::core::halton::{
    check_base, checked_target, Float, Index, Remaining, MAX_INDEX, ONE_MINUS_EPSILON,
    SKIP_STEP_LIMIT,
};
use crate::core::lowdiscrepancy::{for_each_digit, Ladder};

#[derive(EnumIter, Display, Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    /// Nothing produced yet.
    Fresh,
    Active,
    /// The index reached `MAX_INDEX`.
    Exhausted,
}

/// A stateful Halton sequence for one base.
///
/// The k-th value produced equals `number(base, k)` bit for bit; index 0
/// is never emitted.
#[derive(Debug, Clone)]
pub struct Sequence {
    base: u64,
    index: Index,
    digits: Ladder<u64>,
    weights: Ladder<Float>,
    /// `sums[i]` holds the contribution of all levels above `i`
    sums: Ladder<Float>,
}

impl Sequence {
    pub fn new(base: u64) -> Result<Sequence> {
        let base = check_base(base)?;
        Ok(Sequence {
            base,
            index: 0,
            digits: SmallVec::new(),
            weights: SmallVec::new(),
            sums: SmallVec::new(),
        })
    }
    pub fn base(&self) -> u64 {
        self.base
    }
    /// Index of the most recently produced value (0 while fresh).
    pub fn index(&self) -> Index {
        self.index
    }
    pub fn state(&self) -> State {
        match self.index {
            0 => State::Fresh,
            MAX_INDEX => State::Exhausted,
            _ => State::Active,
        }
    }
    pub fn is_exhausted(&self) -> bool {
        self.index == MAX_INDEX
    }
    /// Number of further values this sequence can produce.
    pub fn remaining(&self) -> Remaining {
        Remaining::after(self.index)
    }
    /// Get the next number in the sequence, or `Exhausted` once the
    /// index counter is at its maximum.
    pub fn try_next(&mut self) -> Result<Float> {
        if self.is_exhausted() {
            return Err(HaltonError::Exhausted);
        }
        self.advance();
        if self.is_exhausted() {
            debug!("base {} sequence entered state {}", self.base, self.state());
        }
        Ok(self.value())
    }
    /// Skip `n` values without producing them, so that the following
    /// `try_next()` returns `number(base, index + n + 1)`.
    ///
    /// Short jumps step through the odometer, long jumps rebuild it
    /// from the target index. A jump past `MAX_INDEX` fails with
    /// `Overflow` and changes nothing.
    pub fn jump(&mut self, n: Index) -> Result<()> {
        let target: Index = checked_target(self.index, n)?;
        if n < SKIP_STEP_LIMIT {
            for _ in 0..n {
                self.advance();
            }
        } else {
            self.rebuild(target);
        }
        if n > 0 && self.is_exhausted() {
            debug!("base {} sequence entered state {}", self.base, self.state());
        }
        Ok(())
    }
    /// Value of the current index.
    fn value(&self) -> Float {
        match self.digits.first() {
            Some(digit) => {
                let value: Float = self.sums[0] + *digit as Float * self.weights[0];
                value.min(ONE_MINUS_EPSILON)
            }
            None => 0.0 as Float,
        }
    }
    /// Recompute the partial sums of all levels below `level` from the
    /// one stored at `level`.
    fn resum(&mut self, level: usize) {
        for i in (0..level).rev() {
            self.sums[i] = self.sums[i + 1] + self.digits[i + 1] as Float * self.weights[i + 1];
        }
    }
    /// Increment the index by one and carry through the ladder. The
    /// caller has checked that the index is below `MAX_INDEX`.
    fn advance(&mut self) {
        self.index += 1;
        let mut level: usize = 0;
        while level < self.digits.len() && self.digits[level] + 1 == self.base {
            self.digits[level] = 0;
            level += 1;
        }
        if level == self.digits.len() {
            // carry past the most significant digit
            let weight: Float = match self.weights.last() {
                Some(w) => *w / self.base as Float,
                None => 1.0 as Float / self.base as Float,
            };
            self.digits.push(1);
            self.weights.push(weight);
            self.sums.push(0.0 as Float);
        } else {
            self.digits[level] += 1;
        }
        self.resum(level);
    }
    /// Replace the ladder with the digits of `target`.
    fn rebuild(&mut self, target: Index) {
        debug!(
            "rebuilding base {} ladder: index {} -> {}",
            self.base, self.index, target
        );
        let mut digits: Ladder<u64> = SmallVec::new();
        let mut weights: Ladder<Float> = SmallVec::new();
        for_each_digit(self.base, target, |digit, weight| {
            digits.push(digit);
            weights.push(weight);
        });
        let top: usize = digits.len().saturating_sub(1);
        self.sums = SmallVec::from_elem(0.0 as Float, digits.len());
        self.digits = digits;
        self.weights = weights;
        self.index = target;
        self.resum(top);
    }
}

impl Iterator for Sequence {
    type Item = Float;

    fn next(&mut self) -> Option<Float> {
        self.try_next().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Remaining::Count(count) => (count, Some(count)),
            Remaining::Unknown => (usize::MAX, None),
        }
    }
    fn nth(&mut self, n: usize) -> Option<Float> {
        self.jump(n as Index).ok()?;
        self.next()
    }
}
