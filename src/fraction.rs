//! Exact 64-bit fractions.

use std::convert::TryFrom;
use std::fmt;

/// Greatest common divisor, always non-negative. `gcd(a, 0) = |a|`.
pub fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a.abs()
    } else {
        gcd(b, a % b)
    }
}

fn gcd_wide(a: i128, b: i128) -> i128 {
    if b == 0 {
        a.abs()
    } else {
        gcd_wide(b, a % b)
    }
}

/// `num / den` in lowest terms with a positive denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    pub fn zero() -> Self {
        Fraction { num: 0, den: 1 }
    }

    /// Returns `None` for a zero denominator, or when the reduced fraction
    /// doesn't fit in 64 bits.
    pub fn new(num: i64, den: i64) -> Option<Self> {
        Fraction::from_wide(i128::from(num), i128::from(den))
    }

    pub fn num(&self) -> i64 {
        self.num
    }

    pub fn den(&self) -> i64 {
        self.den
    }

    /// Reduces in 128 bits, then narrows. `i64::MIN` is refused as a numerator
    /// since its magnitude doesn't fit.
    fn from_wide(num: i128, den: i128) -> Option<Self> {
        if den == 0 {
            return None;
        }

        let g = gcd_wide(num, den);
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }

        let num = i64::try_from(num).ok()?;
        let den = i64::try_from(den).ok()?;
        if num == i64::min_value() {
            return None;
        }
        Some(Fraction { num, den })
    }

    /// `a/b + c/d = (a*d + c*b) / (b*d)`, reduced. `None` if the reduced sum
    /// doesn't fit in 64 bits.
    pub fn checked_add(&self, other: &Fraction) -> Option<Fraction> {
        let (a, b) = (i128::from(self.num), i128::from(self.den));
        let (c, d) = (i128::from(other.num), i128::from(other.den));
        let num = a.checked_mul(d)?.checked_add(c.checked_mul(b)?)?;
        let den = b.checked_mul(d)?;
        Fraction::from_wide(num, den)
    }

    /// Splits into an integer part truncated toward zero
    /// and a non-negative fractional remainder.
    pub fn split(&self) -> MixedFraction {
        let integer_part = self.num / self.den;
        let rem = (self.num % self.den).abs();
        if rem == 0 {
            return MixedFraction {
                integer_part,
                frac_num: 0,
                frac_den: 0,
            };
        }

        let g = gcd(rem, self.den);
        MixedFraction {
            integer_part,
            frac_num: rem / g,
            frac_den: self.den / g,
        }
    }
}

/// Integer part plus proper fraction.
/// A zero fractional part is written with denominator 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MixedFraction {
    pub integer_part: i64,
    pub frac_num: i64,
    pub frac_den: i64,
}

impl fmt::Display for MixedFraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.integer_part, self.frac_num, self.frac_den)
    }
}
