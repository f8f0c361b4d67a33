//! Numeric representations a quantity may store
//!
//! Two traits describe how representations relate:
//! - [`Promote`] names the widened type two representations combine into,
//!   following the usual arithmetic conversions (`i32` with `f32` is `f32`,
//!   `i32` with `i64` is `i64`, anything with `f64` is `f64`).
//! - [`ConvertRep`] is implemented only for the permitted directions. Floating
//!   point never converts into an integral representation; that direction has no
//!   impl and fails to build.
//!
//! The remaining integral-to-integral restriction depends on the scales involved
//! and is checked in [`crate::compat`].

use num_traits::{AsPrimitive, NumAssign};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Numeric type usable as the amount of a quantity.
pub trait Rep:
    NumAssign + Copy + PartialOrd + Default + Debug + Display + FromStr + Send + Sync + 'static
{
    /// `true` for `f32`/`f64`
    const IS_FLOAT: bool;

    /// Bring a scale constant into this representation.
    fn from_scale(value: i64) -> Self;

    /// `self * rhs`, wrapping on overflow for integral representations.
    ///
    /// A negative amount widened into an unsigned common type is already
    /// wrapped; scaling it keeps the result congruent modulo `2^bits`.
    fn mul_wrapping(self, rhs: Self) -> Self;
}

macro_rules! impl_rep {
    (integral: $($t:ty),* $(,)?) => {
        $(
            impl Rep for $t {
                const IS_FLOAT: bool = false;

                #[inline(always)]
                fn from_scale(value: i64) -> Self {
                    value.as_()
                }

                #[inline(always)]
                fn mul_wrapping(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
            }
        )*
    };
    (float: $($t:ty),* $(,)?) => {
        $(
            impl Rep for $t {
                const IS_FLOAT: bool = true;

                #[inline(always)]
                fn from_scale(value: i64) -> Self {
                    value.as_()
                }

                #[inline(always)]
                fn mul_wrapping(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )*
    };
}

impl_rep!(integral: i32, i64, u32, u64);
impl_rep!(float: f32, f64);

/// Common type of two representations.
pub trait Promote<Rhs: Rep>: Rep {
    type Output: Rep;
}

/// Shorthand for the common representation of `A` and `B`.
pub type CommonRep<A, B> = <A as Promote<B>>::Output;

macro_rules! promote {
    (same: $($t:ty),* $(,)?) => {
        $(
            impl Promote<$t> for $t {
                type Output = $t;
            }
        )*
    };
    ($($a:ty, $b:ty => $out:ty);* $(;)?) => {
        $(
            impl Promote<$b> for $a {
                type Output = $out;
            }
            impl Promote<$a> for $b {
                type Output = $out;
            }
        )*
    };
}

promote!(same: i32, i64, u32, u64, f32, f64);
promote! {
    i32, i64 => i64;
    i32, u32 => u32;
    i32, u64 => u64;
    i64, u32 => i64;
    i64, u64 => u64;
    u32, u64 => u64;
    i32, f32 => f32;
    i64, f32 => f32;
    u32, f32 => f32;
    u64, f32 => f32;
    i32, f64 => f64;
    i64, f64 => f64;
    u32, f64 => f64;
    u64, f64 => f64;
    f32, f64 => f64;
}

/// Permitted conversion from `Self` into representation `To`.
///
/// The arithmetic of a cast runs in [`ConvertRep::Common`], the promoted type of
/// both ends, and is narrowed into `To` at the end.
#[diagnostic::on_unimplemented(
    message = "cannot convert a `{Self}` amount into a `{To}` quantity",
    label = "floating-point amounts never convert into integral representations",
    note = "convert the target to a floating-point representation, or round the amount explicitly first"
)]
pub trait ConvertRep<To: Rep>: Rep {
    type Common: Rep;

    /// Both ends are integral, so the scale ratio must be exact.
    const REQUIRES_EXACT_SCALE: bool = !Self::IS_FLOAT && !To::IS_FLOAT;

    /// Widen into the common representation.
    fn widen(self) -> Self::Common;

    /// Narrow a common-representation value into `To`.
    fn narrow(value: Self::Common) -> To;

    /// Direct conversion with no scale involved.
    fn convert(self) -> To;
}

macro_rules! convert_rep {
    ($($from:ty => [$($to:ty),*]);* $(;)?) => {
        $($(
            impl ConvertRep<$to> for $from {
                type Common = CommonRep<$from, $to>;

                #[inline(always)]
                fn widen(self) -> Self::Common {
                    self.as_()
                }

                #[inline(always)]
                fn narrow(value: Self::Common) -> $to {
                    value.as_()
                }

                #[inline(always)]
                fn convert(self) -> $to {
                    self.as_()
                }
            }
        )*)*
    };
}

convert_rep! {
    i32 => [i32, i64, u32, u64, f32, f64];
    i64 => [i32, i64, u32, u64, f32, f64];
    u32 => [i32, i64, u32, u64, f32, f64];
    u64 => [i32, i64, u32, u64, f32, f64];
    f32 => [f32, f64];
    f64 => [f32, f64];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common_of<A: Promote<B>, B: Rep>() -> &'static str {
        std::any::type_name::<CommonRep<A, B>>()
    }

    #[test]
    fn test_promotion_follows_arithmetic_conversions() {
        assert_eq!(common_of::<i32, f32>(), "f32");
        assert_eq!(common_of::<f32, i64>(), "f32");
        assert_eq!(common_of::<i32, i64>(), "i64");
        assert_eq!(common_of::<u32, i32>(), "u32");
        assert_eq!(common_of::<f32, f64>(), "f64");
        assert_eq!(common_of::<u64, u64>(), "u64");
    }

    #[test]
    fn test_exact_scale_required_only_between_integrals() {
        assert!(<i32 as ConvertRep<i64>>::REQUIRES_EXACT_SCALE);
        assert!(<u64 as ConvertRep<i32>>::REQUIRES_EXACT_SCALE);
        assert!(!<i32 as ConvertRep<f32>>::REQUIRES_EXACT_SCALE);
        assert!(!<f64 as ConvertRep<f32>>::REQUIRES_EXACT_SCALE);
    }

    #[test]
    fn test_widen_and_narrow() {
        let wide: f64 = <i32 as ConvertRep<f64>>::widen(7);
        assert_eq!(wide, 7.0);
        let narrow: f32 = <f64 as ConvertRep<f32>>::narrow(2.5);
        assert_eq!(narrow, 2.5);
        assert_eq!(<i64 as ConvertRep<i32>>::convert(42), 42_i32);
    }

    #[test]
    fn test_from_scale() {
        assert_eq!(f32::from_scale(12), 12.0);
        assert_eq!(u64::from_scale(5000), 5000);
    }

    #[test]
    fn test_mul_wrapping() {
        assert_eq!(u32::MAX.mul_wrapping(2), u32::MAX - 1);
        assert_eq!((-2_i32 as u32).mul_wrapping(12), -24_i32 as u32);
        assert_eq!(i64::MAX.mul_wrapping(2), -2);
        assert_eq!(1.5_f32.mul_wrapping(4.0), 6.0);
    }
}
