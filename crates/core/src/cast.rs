//! Conversion engine
//!
//! [`quantity_cast`] converts a quantity into another quantity type of the same
//! kind. The ratio `source scale / target scale` is computed at compile time and
//! selects one of four arithmetic paths:
//!
//! | ratio       | arithmetic (in the common representation) |
//! |-------------|-------------------------------------------|
//! | `1/1`       | none, representation conversion only      |
//! | `1/den`     | `amount / den`                            |
//! | `num/1`     | `amount * num`                            |
//! | `num/den`   | `amount * num / den`                      |
//!
//! All four agree for rational ratios; they differ only in how much rounding
//! and overflow an integral representation is exposed to. The branch is on
//! constants and folds away after monomorphization.

use crate::compat::{ExactScale, Kind};
use crate::ratio::{Scale, ScaleDiv};
use crate::rep::{ConvertRep, Rep};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Implemented by every quantity type; the target of [`quantity_cast`].
///
/// Sealed: only [`Quantity`](crate::Quantity) implements it.
pub trait QuantityType: sealed::Sealed + Copy {
    type Rep: Rep;
    type Scale: Scale;
    type Kind: Kind;

    /// Build from an amount already expressed in this type's scale.
    fn from_amount(amount: Self::Rep) -> Self;

    /// Stored amount
    fn amount(self) -> Self::Rep;
}

/// Convert `from` into the quantity type `To`.
///
/// Fails to build when the kinds differ, when a floating-point amount would
/// narrow into an integral representation, or when an integral conversion has
/// an inexact scale ratio.
///
/// ```
/// use units_core::{quantity_cast, Inches, Millimeters};
///
/// let mm = Millimeters::<f32>::new(200.0);
/// let inches: Inches<f32> = quantity_cast(mm);
/// assert!((inches.amount() - 7.874_015_8).abs() < 1e-5);
/// ```
///
/// Kinds never mix:
///
/// ```compile_fail
/// use units_core::{quantity_cast, Grams, Inches};
///
/// let _: Inches<f32> = quantity_cast(Grams::<f32>::new(1.0));
/// ```
///
/// Floating point never narrows into an integral representation:
///
/// ```compile_fail
/// use units_core::{quantity_cast, Inches};
///
/// let _: Inches<i32> = quantity_cast(Inches::<f64>::new(1.0));
/// ```
///
/// Integral conversions must be exact (feet to inches is, inches to feet isn't):
///
/// ```
/// use units_core::{quantity_cast, Feet, Inches};
///
/// let inches: Inches<i32> = quantity_cast(Feet::<i32>::new(2));
/// assert_eq!(inches.amount(), 24);
/// ```
///
/// ```compile_fail
/// use units_core::{quantity_cast, Feet, Inches};
///
/// let _: Feet<i32> = quantity_cast(Inches::<i32>::new(24));
/// ```
///
/// Only quantities are conversion targets:
///
/// ```compile_fail
/// use units_core::{Distance, Inch, QuantityType};
///
/// #[derive(Clone, Copy)]
/// struct Length(f64);
///
/// impl QuantityType for Length {
///     type Rep = f64;
///     type Scale = Inch;
///     type Kind = Distance;
///     fn from_amount(amount: f64) -> Self { Length(amount) }
///     fn amount(self) -> f64 { self.0 }
/// }
/// ```
#[inline]
pub fn quantity_cast<To, Src>(from: Src) -> To
where
    Src: QuantityType,
    To: QuantityType<Kind = Src::Kind>,
    Src::Rep: ConvertRep<To::Rep>,
{
    #[allow(clippy::let_unit_value)]
    let () = ExactScale::<Src::Rep, To::Rep, Src::Scale, To::Scale>::CHECK;
    let ratio = (
        <ScaleDiv<Src::Scale, To::Scale> as Scale>::NUM,
        <ScaleDiv<Src::Scale, To::Scale> as Scale>::DEN,
    );
    To::from_amount(rescale::<Src::Rep, To::Rep>(from.amount(), ratio))
}

/// Multiply `amount` by the reduced ratio `num / den`.
#[inline(always)]
pub(crate) fn rescale<F, T>(amount: F, (num, den): (i64, i64)) -> T
where
    F: ConvertRep<T>,
    T: Rep,
{
    let scaled = match (num == 1, den == 1) {
        (true, true) => return amount.convert(),
        (true, false) => amount.widen() / F::Common::from_scale(den),
        (false, true) => amount.widen().mul_wrapping(F::Common::from_scale(num)),
        // Multiply first so integral representations keep their precision
        (false, false) => {
            amount.widen().mul_wrapping(F::Common::from_scale(num)) / F::Common::from_scale(den)
        }
    };
    F::narrow(scaled)
}
