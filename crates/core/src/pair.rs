//! Derived pairs of quantities
//!
//! A [`QuantityPair`] is the product or quotient of two quantities, usually of
//! different kinds (weight per distance, weight times distance). The operator is
//! part of the type, so pairs built with different operators or from different
//! constituents never mix.
//!
//! # Usage
//! ```
//! use units_core::{Divide, Inches, QuantityPair, Stones};
//!
//! let si1 = Stones::<f32>::new(20) / Inches::<f32>::new(2);
//! let si2 = Stones::<f32>::new(10) / Inches::<f32>::new(2);
//! assert_eq!((si1 + si2).amount(), 15.0);
//!
//! type StonesPerInch = QuantityPair<Stones<f32>, Inches<f32>, Divide>;
//! assert_eq!(si1 - si2, StonesPerInch::new(5));
//! ```
//!
//! Pairs built with different operators are different types:
//!
//! ```compile_fail
//! use units_core::{Inches, Stones};
//!
//! let per = Stones::<f32>::new(20) / Inches::<f32>::new(2);
//! let times = Stones::<f32>::new(20) * Inches::<f32>::new(2);
//! let _ = per + times;
//! ```
//!
//! So are pairs built from different constituents, whether the kinds or only
//! the scales differ:
//!
//! ```compile_fail
//! use units_core::{Inches, Stones};
//!
//! let weight_per_length = Stones::<f32>::new(20) / Inches::<f32>::new(2);
//! let length_per_weight = Inches::<f32>::new(2) / Stones::<f32>::new(20);
//! let _ = weight_per_length + length_per_weight;
//! ```
//!
//! ```compile_fail
//! use units_core::{Grams, Inches, Stones};
//!
//! let stones = Stones::<f32>::new(20) / Inches::<f32>::new(2);
//! let grams = Grams::<f32>::new(20) / Inches::<f32>::new(2);
//! let _ = stones + grams;
//! ```

use crate::cast::{quantity_cast, QuantityType};
use crate::compat::{CrossKind, Kind};
use crate::quantity::{Quantity, QuantityDivision};
use crate::ratio::Scale;
use crate::rep::{CommonRep, ConvertRep, Promote, Rep};
use crate::units::Unit;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Binary operator combining the two constituents of a pair.
pub trait PairOperator: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Symbol placed between the constituent units when displayed
    const SYMBOL: &'static str;

    fn apply<R: Rep>(self, lhs: R, rhs: R) -> R;
}

/// `lhs * rhs`, the default pair operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Multiply;

impl PairOperator for Multiply {
    const SYMBOL: &'static str = "·";

    #[inline(always)]
    fn apply<R: Rep>(self, lhs: R, rhs: R) -> R {
        lhs.mul_wrapping(rhs)
    }
}

/// `lhs / rhs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Divide;

impl PairOperator for Divide {
    const SYMBOL: &'static str = "/";

    #[inline(always)]
    fn apply<R: Rep>(self, lhs: R, rhs: R) -> R {
        lhs / rhs
    }
}

/// Combination of quantity types `A` and `B` through operator `O`.
///
/// Both constituents share one representation; the amount is
/// `O::apply(a, b)` with `a` and `b` expressed in `A`'s and `B`'s scales.
#[derive(Serialize, Deserialize)]
#[serde(
    transparent,
    bound(
        serialize = "A::Rep: Serialize",
        deserialize = "A::Rep: Deserialize<'de>, O: Default"
    )
)]
pub struct QuantityPair<A: QuantityType, B: QuantityType, O = Multiply> {
    amount: A::Rep,
    #[serde(skip)]
    op: O,
    #[serde(skip)]
    constituents: PhantomData<fn() -> (A, B)>,
}

impl<A, B, O> QuantityPair<A, B, O>
where
    A: QuantityType,
    B: QuantityType<Rep = A::Rep>,
    O: PairOperator,
{
    /// Create a pair from a raw amount, already in `A`·`B` (or `A`/`B`) units.
    #[inline]
    #[must_use]
    pub fn new<V: ConvertRep<A::Rep>>(value: V) -> Self {
        Self::from_amount(value.convert(), O::default())
    }

    /// Combine two quantities with an explicit operator.
    ///
    /// Each operand may use any scale and representation of its constituent's
    /// kind; it is cast into the constituent type before the operator applies.
    #[inline]
    #[must_use]
    pub fn with_operator<QA, QB>(lhs: QA, rhs: QB, op: O) -> Self
    where
        QA: QuantityType<Kind = A::Kind>,
        QB: QuantityType<Kind = B::Kind>,
        QA::Rep: ConvertRep<A::Rep>,
        QB::Rep: ConvertRep<B::Rep>,
    {
        let lhs: A = quantity_cast(lhs);
        let rhs: B = quantity_cast(rhs);
        Self::from_amount(op.apply(lhs.amount(), rhs.amount()), op)
    }

    #[inline(always)]
    fn from_amount(amount: A::Rep, op: O) -> Self {
        Self {
            amount,
            op,
            constituents: PhantomData,
        }
    }

    /// Get the combined amount
    #[inline]
    #[must_use]
    pub fn amount(self) -> A::Rep {
        self.amount
    }

    /// Operator this pair was derived with
    #[inline]
    #[must_use]
    pub fn operator(self) -> O {
        self.op
    }
}

impl<A, B> QuantityPair<A, B, Multiply>
where
    A: QuantityType,
    B: QuantityType<Rep = A::Rep>,
{
    /// Combine two quantities with the default operator (multiplication).
    ///
    /// ```
    /// use units_core::{Grams, Meters, Pounds, QuantityPair, Yards};
    ///
    /// let pm = QuantityPair::<Pounds<f32>, Meters<f32>>::from_quantities(
    ///     Grams::<f32>::new(5),
    ///     Yards::<f32>::new(3),
    /// );
    /// assert!((pm.amount() - 0.030_238_628).abs() < 1e-6);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_quantities<QA, QB>(lhs: QA, rhs: QB) -> Self
    where
        QA: QuantityType<Kind = A::Kind>,
        QB: QuantityType<Kind = B::Kind>,
        QA::Rep: ConvertRep<A::Rep>,
        QB::Rep: ConvertRep<B::Rep>,
    {
        Self::with_operator(lhs, rhs, Multiply)
    }
}

impl<A: QuantityType, B: QuantityType, O: Copy> Clone for QuantityPair<A, B, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: QuantityType, B: QuantityType, O: Copy> Copy for QuantityPair<A, B, O> {}

impl<A: QuantityType, B: QuantityType, O: Default> Default for QuantityPair<A, B, O> {
    fn default() -> Self {
        Self {
            amount: A::Rep::default(),
            op: O::default(),
            constituents: PhantomData,
        }
    }
}

impl<A, B, O> fmt::Debug for QuantityPair<A, B, O>
where
    A: QuantityType,
    B: QuantityType,
    O: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuantityPair")
            .field("amount", &self.amount)
            .field("op", &self.op)
            .field(
                "lhs",
                &format_args!(
                    "{} {}/{}",
                    <A::Kind as Kind>::NAME,
                    <A::Scale as Scale>::NUM,
                    <A::Scale as Scale>::DEN
                ),
            )
            .field(
                "rhs",
                &format_args!(
                    "{} {}/{}",
                    <B::Kind as Kind>::NAME,
                    <B::Scale as Scale>::NUM,
                    <B::Scale as Scale>::DEN
                ),
            )
            .finish()
    }
}

// Comparisons look at the amount only; the operator is already fixed by the type
impl<A: QuantityType, B: QuantityType, O> PartialEq for QuantityPair<A, B, O> {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl<A: QuantityType, B: QuantityType, O> PartialOrd for QuantityPair<A, B, O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.amount.partial_cmp(&other.amount)
    }
}

impl<A, B, O> Add for QuantityPair<A, B, O>
where
    A: QuantityType,
    B: QuantityType<Rep = A::Rep>,
    O: PairOperator,
{
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<A, B, O> Neg for QuantityPair<A, B, O>
where
    A: QuantityType,
    A::Rep: Neg<Output = A::Rep>,
    B: QuantityType<Rep = A::Rep>,
    O: PairOperator,
{
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_amount(-self.amount, self.op)
    }
}

impl<A, B, O> Sub for QuantityPair<A, B, O>
where
    A: QuantityType,
    B: QuantityType<Rep = A::Rep>,
    O: PairOperator,
{
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<A, B, O> AddAssign for QuantityPair<A, B, O>
where
    A: QuantityType,
    B: QuantityType<Rep = A::Rep>,
    O: PairOperator,
{
    fn add_assign(&mut self, rhs: Self) {
        self.amount += rhs.amount;
    }
}

impl<A, B, O> SubAssign for QuantityPair<A, B, O>
where
    A: QuantityType,
    B: QuantityType<Rep = A::Rep>,
    O: PairOperator,
{
    fn sub_assign(&mut self, rhs: Self) {
        self.amount -= rhs.amount;
    }
}

// Pair / Pair of the same type is a bare ratio
impl<A, B, O> Div for QuantityPair<A, B, O>
where
    A: QuantityType,
    B: QuantityType<Rep = A::Rep>,
    O: PairOperator,
{
    type Output = A::Rep;
    fn div(self, rhs: Self) -> A::Rep {
        self.amount / rhs.amount
    }
}

macro_rules! pair_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<A, B, O> Add<$t> for QuantityPair<A, B, O>
            where
                A: QuantityType<Rep = $t>,
                B: QuantityType<Rep = $t>,
                O: PairOperator,
            {
                type Output = Self;
                fn add(mut self, rhs: $t) -> Self {
                    self += rhs;
                    self
                }
            }

            impl<A, B, O> Sub<$t> for QuantityPair<A, B, O>
            where
                A: QuantityType<Rep = $t>,
                B: QuantityType<Rep = $t>,
                O: PairOperator,
            {
                type Output = Self;
                fn sub(mut self, rhs: $t) -> Self {
                    self -= rhs;
                    self
                }
            }

            impl<A, B, O> Mul<$t> for QuantityPair<A, B, O>
            where
                A: QuantityType<Rep = $t>,
                B: QuantityType<Rep = $t>,
                O: PairOperator,
            {
                type Output = Self;
                fn mul(mut self, rhs: $t) -> Self {
                    self *= rhs;
                    self
                }
            }

            impl<A, B, O> Div<$t> for QuantityPair<A, B, O>
            where
                A: QuantityType<Rep = $t>,
                B: QuantityType<Rep = $t>,
                O: PairOperator,
            {
                type Output = Self;
                fn div(mut self, rhs: $t) -> Self {
                    self /= rhs;
                    self
                }
            }

            impl<A, B, O> Mul<QuantityPair<A, B, O>> for $t
            where
                A: QuantityType<Rep = $t>,
                B: QuantityType<Rep = $t>,
                O: PairOperator,
            {
                type Output = QuantityPair<A, B, O>;
                fn mul(self, rhs: QuantityPair<A, B, O>) -> QuantityPair<A, B, O> {
                    rhs * self
                }
            }

            impl<A, B, O> AddAssign<$t> for QuantityPair<A, B, O>
            where
                A: QuantityType<Rep = $t>,
                B: QuantityType<Rep = $t>,
                O: PairOperator,
            {
                fn add_assign(&mut self, rhs: $t) {
                    self.amount += rhs;
                }
            }

            impl<A, B, O> SubAssign<$t> for QuantityPair<A, B, O>
            where
                A: QuantityType<Rep = $t>,
                B: QuantityType<Rep = $t>,
                O: PairOperator,
            {
                fn sub_assign(&mut self, rhs: $t) {
                    self.amount -= rhs;
                }
            }

            impl<A, B, O> MulAssign<$t> for QuantityPair<A, B, O>
            where
                A: QuantityType<Rep = $t>,
                B: QuantityType<Rep = $t>,
                O: PairOperator,
            {
                fn mul_assign(&mut self, rhs: $t) {
                    self.amount *= rhs;
                }
            }

            impl<A, B, O> DivAssign<$t> for QuantityPair<A, B, O>
            where
                A: QuantityType<Rep = $t>,
                B: QuantityType<Rep = $t>,
                O: PairOperator,
            {
                fn div_assign(&mut self, rhs: $t) {
                    self.amount /= rhs;
                }
            }
        )*
    };
}

pair_scalar_ops!(i32, i64, u32, u64, f32, f64);

// Quantity * Quantity = multiply pair, in the common representation
impl<R1, S1, K1, R2, S2, K2> Mul<Quantity<R2, S2, K2>> for Quantity<R1, S1, K1>
where
    R1: Promote<R2> + ConvertRep<CommonRep<R1, R2>>,
    R2: ConvertRep<CommonRep<R1, R2>>,
    S1: Scale,
    S2: Scale,
    K1: Kind,
    K2: Kind,
{
    type Output = QuantityPair<
        Quantity<CommonRep<R1, R2>, S1, K1>,
        Quantity<CommonRep<R1, R2>, S2, K2>,
        Multiply,
    >;

    fn mul(self, rhs: Quantity<R2, S2, K2>) -> Self::Output {
        QuantityPair::with_operator(self, rhs, Multiply)
    }
}

// Quantity / Quantity of different kinds = divide pair
impl<R1, S1, K1, R2, S2, K2> QuantityDivision<Quantity<R1, S1, K1>, Quantity<R2, S2, K2>>
    for CrossKind
where
    R1: Promote<R2> + ConvertRep<CommonRep<R1, R2>>,
    R2: ConvertRep<CommonRep<R1, R2>>,
    S1: Scale,
    S2: Scale,
    K1: Kind,
    K2: Kind,
{
    type Output = QuantityPair<
        Quantity<CommonRep<R1, R2>, S1, K1>,
        Quantity<CommonRep<R1, R2>, S2, K2>,
        Divide,
    >;

    fn divide(lhs: Quantity<R1, S1, K1>, rhs: Quantity<R2, S2, K2>) -> Self::Output {
        QuantityPair::with_operator(lhs, rhs, Divide)
    }
}

impl<A, B, O> fmt::Display for QuantityPair<A, B, O>
where
    A: QuantityType,
    B: QuantityType,
    A::Scale: Unit,
    B::Scale: Unit,
    O: PairOperator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lhs, op, rhs) = (
            <A::Scale as Unit>::SYMBOL,
            O::SYMBOL,
            <B::Scale as Unit>::SYMBOL,
        );
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {lhs}{op}{rhs}", precision, self.amount),
            None => write!(f, "{} {lhs}{op}{rhs}", self.amount),
        }
    }
}
