//! Exact rational scale factors
//!
//! A scale is a zero-sized type carrying a numerator/denominator pair as
//! associated constants. Scales are always reduced to lowest terms with a
//! positive denominator, so two scales describing the same ratio expose the same
//! constants even when their types differ.
//!
//! Composition happens at the type level: [`ScaleMul`] and [`ScaleDiv`] combine
//! two scales into a third one whose constants are computed by the compiler.
//! Intermediates are evaluated in `i128`; a zero denominator or a result that
//! does not fit in `i64` fails the build.
//!
//! # Usage
//! ```
//! use units_core::ratio::{Kilo, Ratio, Scale, ScaleDiv, ScaleMul};
//!
//! type Meter = Ratio<10000, 254>;
//! assert_eq!((Meter::NUM, Meter::DEN), (5000, 127));
//!
//! type Kilometer = ScaleMul<Kilo, Meter>;
//! assert_eq!(Kilometer::NUM, 5_000_000);
//!
//! type PerMeter = ScaleDiv<Kilometer, Meter>;
//! assert_eq!((PerMeter::NUM, PerMeter::DEN), (1000, 1));
//! ```

use std::marker::PhantomData;

/// Compile-time rational scale factor, relative to a kind's base unit.
///
/// Implementors must expose `NUM`/`DEN` in lowest terms with `DEN > 0`. The
/// provided [`Ratio`], [`ScaleMul`] and [`ScaleDiv`] types uphold this.
pub trait Scale: 'static {
    /// Reduced numerator
    const NUM: i64;
    /// Reduced denominator, always positive
    const DEN: i64;
}

/// Literal ratio `N / D`, reduced on use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ratio<const N: i64, const D: i64 = 1>;

impl<const N: i64, const D: i64> Scale for Ratio<N, D> {
    const NUM: i64 = expect_fits(try_reduce(N as i128, D as i128)).0;
    const DEN: i64 = expect_fits(try_reduce(N as i128, D as i128)).1;
}

/// Product of two scales (`A * B`), reduced.
pub struct ScaleMul<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Scale, B: Scale> Scale for ScaleMul<A, B> {
    const NUM: i64 = multiply((A::NUM, A::DEN), (B::NUM, B::DEN)).0;
    const DEN: i64 = multiply((A::NUM, A::DEN), (B::NUM, B::DEN)).1;
}

/// Quotient of two scales (`A / B`), reduced.
pub struct ScaleDiv<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Scale, B: Scale> Scale for ScaleDiv<A, B> {
    const NUM: i64 = divide((A::NUM, A::DEN), (B::NUM, B::DEN)).0;
    const DEN: i64 = divide((A::NUM, A::DEN), (B::NUM, B::DEN)).1;
}

// SI prefixes
pub type Micro = Ratio<1, 1_000_000>;
pub type Milli = Ratio<1, 1000>;
pub type Centi = Ratio<1, 100>;
pub type Kilo = Ratio<1000>;
pub type Mega = Ratio<1_000_000>;

/// Greatest common divisor of two non-negative values.
#[inline]
const fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Reduce `num / den` to lowest terms with a positive denominator.
///
/// Returns `None` when `den` is zero or the reduced terms don't fit in `i64`.
pub const fn try_reduce(num: i128, den: i128) -> Option<(i64, i64)> {
    if den == 0 {
        return None;
    }
    let g = gcd(num.abs(), den.abs());
    let (mut n, mut d) = (num / g, den / g);
    if d < 0 {
        n = -n;
        d = -d;
    }
    if n > i64::MAX as i128 || n < i64::MIN as i128 || d > i64::MAX as i128 {
        return None;
    }
    Some((n as i64, d as i64))
}

/// Multiply two reduced ratios, cross-reducing before the product.
pub const fn checked_multiply(a: (i64, i64), b: (i64, i64)) -> Option<(i64, i64)> {
    let (an, ad, bn, bd) = (a.0 as i128, a.1 as i128, b.0 as i128, b.1 as i128);
    if ad == 0 || bd == 0 {
        return None;
    }
    let g1 = gcd(an.abs(), bd.abs());
    let g2 = gcd(bn.abs(), ad.abs());
    try_reduce((an / g1) * (bn / g2), (ad / g2) * (bd / g1))
}

/// Divide two reduced ratios. `None` when the divisor is zero.
pub const fn checked_divide(a: (i64, i64), b: (i64, i64)) -> Option<(i64, i64)> {
    if b.0 == 0 {
        return None;
    }
    checked_multiply(a, (b.1, b.0))
}

#[track_caller]
const fn expect_fits(r: Option<(i64, i64)>) -> (i64, i64) {
    match r {
        Some(r) => r,
        None => panic!("scale factor has a zero denominator or overflows i64"),
    }
}

const fn multiply(a: (i64, i64), b: (i64, i64)) -> (i64, i64) {
    expect_fits(checked_multiply(a, b))
}

const fn divide(a: (i64, i64), b: (i64, i64)) -> (i64, i64) {
    match checked_divide(a, b) {
        Some(r) => r,
        None => panic!("scale division by zero or overflow"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_is_reduced() {
        assert_eq!((Ratio::<10000, 254>::NUM, Ratio::<10000, 254>::DEN), (5000, 127));
        assert_eq!((Ratio::<12>::NUM, Ratio::<12>::DEN), (12, 1));
        assert_eq!((Ratio::<6, 4>::NUM, Ratio::<6, 4>::DEN), (3, 2));
    }

    #[test]
    fn test_negative_denominator_moves_sign() {
        assert_eq!(try_reduce(3, -6), Some((-1, 2)));
        assert_eq!(try_reduce(-3, -6), Some((1, 2)));
    }

    #[test]
    fn test_zero_denominator_rejected() {
        assert_eq!(try_reduce(1, 0), None);
        assert_eq!(checked_divide((1, 1), (0, 1)), None);
    }

    #[test]
    fn test_product_and_quotient() {
        type Foot = ScaleMul<Ratio<12>, Ratio<1>>;
        type Yard = ScaleMul<Ratio<3>, Foot>;
        assert_eq!((Yard::NUM, Yard::DEN), (36, 1));

        type Meter = Ratio<10000, 254>;
        type Millimeter = ScaleMul<Milli, Meter>;
        assert_eq!((Millimeter::NUM, Millimeter::DEN), (5, 127));

        type MillimeterOverInch = ScaleDiv<Millimeter, Ratio<1>>;
        assert_eq!(MillimeterOverInch::NUM, 5);
        assert_eq!(MillimeterOverInch::DEN, 127);

        type YardPerFoot = ScaleDiv<Yard, Foot>;
        assert_eq!((YardPerFoot::NUM, YardPerFoot::DEN), (3, 1));
    }

    #[test]
    fn test_cross_reduction_avoids_overflow() {
        // Naive product would be 10^24 before reduction
        let big = (1_000_000_000_000, 1);
        let small = (1, 1_000_000_000_000);
        assert_eq!(checked_multiply(big, small), Some((1, 1)));
    }

    #[test]
    fn test_overflow_reported() {
        let big = (i64::MAX, 1);
        assert_eq!(checked_multiply(big, (2, 1)), None);
    }

    #[test]
    fn test_prefixes() {
        assert_eq!((Micro::NUM, Micro::DEN), (1, 1_000_000));
        assert_eq!((Milli::NUM, Milli::DEN), (1, 1000));
        assert_eq!((Centi::NUM, Centi::DEN), (1, 100));
        assert_eq!((Kilo::NUM, Kilo::DEN), (1000, 1));
        assert_eq!((Mega::NUM, Mega::DEN), (1_000_000, 1));
    }
}
