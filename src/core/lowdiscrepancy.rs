//! Direct evaluation of Halton numbers by radical inversion.

// others
use lazy_static::lazy_static;
use num::Integer;
use rayon::prelude::*;
use smallvec::SmallVec;
// halton
use crate::core::error::{HaltonError, Result};
use crate::core::halton::{check_base, checked_target, Float, Index, INDEX_BITS, ONE_MINUS_EPSILON};

/// Enough inline room for every base-2 digit of an `Index`.
pub(crate) type Ladder<T> = SmallVec<[T; INDEX_BITS as usize]>;

pub const PRIME_TABLE_SIZE: usize = 1000;

lazy_static! {
    /// The first `PRIME_TABLE_SIZE` primes, used as per-dimension bases.
    static ref PRIMES: Vec<u64> = first_primes(PRIME_TABLE_SIZE);
}

fn first_primes(n: usize) -> Vec<u64> {
    let mut primes: Vec<u64> = Vec::with_capacity(n);
    let mut candidate: u64 = 2;
    while primes.len() < n {
        if primes
            .iter()
            .take_while(|p| *p * *p <= candidate)
            .all(|p| candidate % p != 0)
        {
            primes.push(candidate);
        }
        candidate += 1;
    }
    primes
}

/// The `index`-th prime (0 -> 2, 1 -> 3, 2 -> 5, ...).
pub fn prime(index: usize) -> Result<u64> {
    PRIMES.get(index).copied().ok_or_else(|| {
        HaltonError::InvalidArgument(format!(
            "prime index {} outside of table with {} entries",
            index, PRIME_TABLE_SIZE
        ))
    })
}

/// Walks the base-`base` digits of `a`, least significant first,
/// together with the weight `base^-(i+1)` each digit carries after
/// reversal.
///
/// The incremental sequence rebuilds its ladder through this as well.
pub(crate) fn for_each_digit<F>(base: u64, a: Index, mut f: F)
where
    F: FnMut(u64, Float),
{
    let mut factor: Float = 1.0 as Float / base as Float;
    let mut a: Index = a;
    while a != 0 {
        let (next, digit) = a.div_rem(&base);
        f(digit, factor);
        factor /= base as Float;
        a = next;
    }
}

/// Radical inverse for an already validated base.
///
/// The terms are added from the most significant digit of `a` down,
/// smallest weight first, in the same order the incremental sequence
/// accumulates its partial sums. Both give bit-identical results.
pub(crate) fn radical_inverse_specialized(base: u64, a: Index) -> Float {
    let mut terms: Ladder<Float> = SmallVec::new();
    for_each_digit(base, a, |digit, weight| terms.push(digit as Float * weight));
    terms
        .iter()
        .rev()
        .fold(0.0 as Float, |sum, term| sum + term)
        .min(ONE_MINUS_EPSILON)
}

/// Returns the number at `index` of the Halton sequence for `base`.
///
/// The digits of `index` written in `base` are mirrored around the
/// radix point, so `number(2, 3)` is `0.11` in binary, 0.75. Index 0
/// maps to 0.0, every other index to a value strictly between 0 and 1.
pub fn number(base: u64, index: Index) -> Result<Float> {
    let base = check_base(base)?;
    Ok(radical_inverse_specialized(base, index))
}

/// Map a dimension to its prime base and compute the radical inverse
/// there. Base two reverses the bits directly.
pub fn radical_inverse(base_index: usize, a: Index) -> Result<Float> {
    match base_index {
        0 => {
            // 0x1p-64
            Ok((a.reverse_bits() as Float * (2.0 as Float).powi(-64)).min(ONE_MINUS_EPSILON))
        }
        _ => Ok(radical_inverse_specialized(prime(base_index)?, a)),
    }
}

/// Evaluates `count` consecutive indices starting at `start` in
/// parallel. Element `i` equals `number(base, start + i)`.
pub fn par_numbers(base: u64, start: Index, count: usize) -> Result<Vec<Float>> {
    let base = check_base(base)?;
    if count == 0 {
        return Ok(Vec::new());
    }
    checked_target(start, (count - 1) as Index)?;
    Ok((0..count)
        .into_par_iter()
        .map(|i| radical_inverse_specialized(base, start + i as Index))
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::halton::MAX_INDEX;

    fn within_eps(a: Float, b: Float) -> bool {
        a.abs().min(b.abs()) * 0.001 >= (a - b).abs()
    }

    #[test]
    fn number_base_2() {
        let expected: [Float; 10] = [
            0.0, 0.5, 0.25, 0.75, 0.125, 0.625, 0.375, 0.875, 0.0625, 0.5625,
        ];
        for (i, e) in expected.iter().enumerate() {
            assert_eq!(number(2, i as Index).unwrap(), *e);
        }
    }

    #[test]
    fn number_base_3() {
        let expected: [Float; 10] = [
            0.0,
            0.3333333333333333,
            0.6666666666666666,
            0.1111111111111111,
            0.4444444444444444,
            0.7777777777777777,
            0.2222222222222222,
            0.5555555555555555,
            0.8888888888888888,
            0.0370370370370370,
        ];
        for (i, e) in expected.iter().enumerate() {
            assert!(within_eps(number(3, i as Index).unwrap(), *e));
        }
    }

    #[test]
    fn number_rejects_small_bases() {
        assert_eq!(number(0, 5), Err(HaltonError::InvalidBase(0)));
        assert_eq!(number(1, 5), Err(HaltonError::InvalidBase(1)));
    }

    #[test]
    fn number_stays_in_open_interval() {
        for base in [2_u64, 3, 5, 7, 10, 255, 1 << 32, u64::MAX].iter() {
            assert_eq!(number(*base, 0).unwrap(), 0.0);
            for index in [1, 2, 3, 1000, 1 << 40, MAX_INDEX - 1, MAX_INDEX].iter() {
                let n = number(*base, *index).unwrap();
                assert!(n > 0.0 && n < 1.0, "number({}, {}) = {}", base, index, n);
            }
        }
    }

    #[test]
    fn small_values_keep_their_precision() {
        for base in [2_u64, 3, 7, 10].iter() {
            let mut power: Index = 1;
            let mut k: i32 = 0;
            while let Some(p) = power.checked_mul(*base) {
                power = p;
                k += 1;
                let expected = (*base as Float).powi(-(k + 1));
                assert!(within_eps(number(*base, power).unwrap(), expected));
                let below = 1.0 as Float - (*base as Float).powi(-k);
                assert!(within_eps(number(*base, power - 1).unwrap(), below));
            }
        }
    }

    #[test]
    fn primes_table() {
        assert_eq!(prime(0), Ok(2));
        assert_eq!(prime(1), Ok(3));
        assert_eq!(prime(4), Ok(11));
        assert_eq!(prime(PRIME_TABLE_SIZE - 1), Ok(7919));
        assert!(prime(PRIME_TABLE_SIZE).is_err());
    }

    #[test]
    fn radical_inverse_matches_number() {
        for a in 0..200 {
            assert_eq!(radical_inverse(0, a).unwrap(), number(2, a).unwrap());
            assert_eq!(radical_inverse(1, a).unwrap(), number(3, a).unwrap());
            assert_eq!(radical_inverse(6, a).unwrap(), number(17, a).unwrap());
        }
    }

    #[test]
    fn par_numbers_matches_number() {
        let values = par_numbers(5, 100, 1000).unwrap();
        assert_eq!(values.len(), 1000);
        for (i, v) in values.iter().enumerate() {
            assert_eq!(*v, number(5, 100 + i as Index).unwrap());
        }
        assert!(par_numbers(5, 0, 0).unwrap().is_empty());
        assert_eq!(par_numbers(1, 0, 3), Err(HaltonError::InvalidBase(1)));
        assert_eq!(par_numbers(2, MAX_INDEX, 1).unwrap().len(), 1);
        assert!(par_numbers(2, MAX_INDEX, 2).is_err());
    }
}
