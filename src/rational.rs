//! Sum of N fractions, printed as integer part plus reduced remainder.

use crate::error::InvalidInput;
use crate::fraction::{Fraction, MixedFraction};
use crate::read_words::Words;

/// Running exact sum. Reduced after every pair to keep the terms small.
#[derive(Clone, Debug)]
pub struct RationalAccumulator {
    sum: Fraction,
    count: usize,
}

impl RationalAccumulator {
    pub fn new() -> Self {
        RationalAccumulator {
            sum: Fraction::zero(),
            count: 0,
        }
    }

    /// Adds `s / m`.
    pub fn add(&mut self, s: i64, m: i64) -> Result<(), InvalidInput> {
        let index = self.count;
        if m == 0 {
            return Err(InvalidInput::ZeroDenominator { index });
        }

        let term = Fraction::new(s, m).ok_or(InvalidInput::Overflow { index })?;
        self.sum = self
            .sum
            .checked_add(&term)
            .ok_or(InvalidInput::Overflow { index })?;
        self.count += 1;
        trace!("#{}: {}/{} => {}/{}", index, s, m, self.sum.num(), self.sum.den());
        Ok(())
    }

    pub fn sum(&self) -> Fraction {
        self.sum
    }

    pub fn finish(&self) -> MixedFraction {
        self.sum.split()
    }
}

impl Default for RationalAccumulator {
    fn default() -> Self {
        RationalAccumulator::new()
    }
}

/// Reads `N` and `N` pairs `S M`, and returns the answer line.
pub fn solve(words: &mut Words) -> Result<String, InvalidInput> {
    let n = words.next_value::<usize>("N")?;
    debug!("rational: N = {}", n);

    let mut acc = RationalAccumulator::new();
    for i in 0..n {
        let s = words.next_value::<i64>(&format!("S[{}]", i))?;
        let m = words.next_value::<i64>(&format!("M[{}]", i))?;
        acc.add(s, m)?;
    }
    debug!("rational: sum = {}/{}", acc.sum().num(), acc.sum().den());

    Ok(format!("{}\n", acc.finish()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> Result<String, InvalidInput> {
        solve(&mut Words::new(input))
    }

    #[test]
    fn test_samples() {
        assert_eq!(Ok("3 1 2\n".to_owned()), run("1\n7 2\n"));
        assert_eq!(Ok("1 0 0\n".to_owned()), run("2\n1 2\n1 2\n"));
        assert_eq!(Ok("0 0 0\n".to_owned()), run("0\n"));
    }

    #[test]
    fn test_mixed_signs() {
        // 1/3 - 5/6 + 2 = 3/2
        assert_eq!(Ok("1 1 2\n".to_owned()), run("3\n1 3\n-5 6\n2 1\n"));
        // -7/4
        assert_eq!(Ok("-1 3 4\n".to_owned()), run("2\n-1 1\n-3 4\n"));
    }

    #[test]
    fn test_order_independent() {
        let pairs = [(1, 6), (5, 4), (-2, 9), (7, 10)];
        let mut forward = RationalAccumulator::new();
        for &(s, m) in pairs.iter() {
            forward.add(s, m).unwrap();
        }
        let mut backward = RationalAccumulator::new();
        for &(s, m) in pairs.iter().rev() {
            backward.add(s, m).unwrap();
        }
        assert_eq!(forward.sum(), backward.sum());
    }

    #[test]
    fn test_many_terms_stay_reduced() {
        let mut acc = RationalAccumulator::new();
        for _ in 0..100_000 {
            acc.add(1, 1_000_000_007).unwrap();
        }
        assert_eq!(Fraction::new(100_000, 1_000_000_007), Some(acc.sum()));
    }

    #[test]
    fn test_large_shared_denominator() {
        assert_eq!(
            Ok("0 1 549755813888\n".to_owned()),
            run("2\n1 1099511627776\n1 1099511627776\n")
        );
    }

    #[test]
    fn test_min_numerator_reduces() {
        assert_eq!(
            Ok("-4611686018427387904 0 0\n".to_owned()),
            run("1\n-9223372036854775808 2\n")
        );
        assert_eq!(
            Err(InvalidInput::Overflow { index: 0 }),
            run("1\n-9223372036854775808 1\n")
        );
    }

    #[test]
    fn test_invalid() {
        assert_eq!(Err(InvalidInput::ZeroDenominator { index: 1 }), run("2\n1 2\n3 0\n"));
        assert_eq!(
            Err(InvalidInput::MissingToken {
                what: "M[0]".to_owned()
            }),
            run("1\n5")
        );
        assert!(run("").is_err());
        assert_eq!(
            Err(InvalidInput::Overflow { index: 1 }),
            run("2\n9223372036854775807 1\n1 1\n")
        );
    }
}
