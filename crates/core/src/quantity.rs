//! Generic quantity type
//!
//! A [`Quantity`] stores one amount, tagged at the type level with its
//! representation `R`, its [`Scale`] `S` and its [`Kind`] `K`. Its semantic value
//! is `amount * S` in the base unit of `K`.
//!
//! # Design Philosophy
//! - Zero-sized markers carry the scale and kind, so a quantity has the size and
//!   layout of its representation
//! - Comparisons and `+`/`-` require identical types; convert explicitly first
//! - `+=`/`-=` accept any scale of the same kind and convert the right-hand side
//!   into the left-hand scale
//! - Dividing two quantities of one kind gives a bare ratio; multiplying or
//!   dividing different kinds gives a [`QuantityPair`](crate::QuantityPair)
//! - Serde support, transparent over the amount
//!
//! # Usage
//! ```
//! use units_core::{Feet, Inches};
//!
//! let mut length = Inches::<f32>::new(5.25);
//! length += Feet::<f32>::new(1.0);
//! assert_eq!(length, Inches::new(17.25));
//! assert_eq!(length / Inches::<f32>::new(4.0), 4.3125);
//! ```

use crate::cast::{quantity_cast, sealed, QuantityType};
use crate::compat::{Kind, KindRelation, SameKind};
use crate::error::UnitError;
use crate::ratio::Scale;
use crate::rep::{ConvertRep, Rep};
use crate::units::Unit;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Amount of kind `K`, expressed in units of scale `S`, stored as `R`.
#[derive(Serialize, Deserialize)]
#[serde(
    transparent,
    bound(serialize = "R: Serialize", deserialize = "R: Deserialize<'de>")
)]
#[repr(transparent)]
pub struct Quantity<R, S, K> {
    amount: R,
    #[serde(skip)]
    unit: PhantomData<fn() -> (S, K)>,
}

impl<R: Rep, S: Scale, K: Kind> Quantity<R, S, K> {
    /// Create a quantity from a raw value.
    ///
    /// Any representation converts into a floating-point quantity; a
    /// floating-point value never converts into an integral one.
    ///
    /// ```compile_fail
    /// use units_core::Inches;
    ///
    /// let _ = Inches::<i32>::new(5.25);
    /// ```
    #[inline]
    #[must_use]
    pub fn new<V: ConvertRep<R>>(value: V) -> Self {
        Self::from_amount(value.convert())
    }

    /// Create from an amount already in this representation.
    #[inline]
    #[must_use]
    pub const fn from_amount(amount: R) -> Self {
        Self {
            amount,
            unit: PhantomData,
        }
    }

    /// Converting constructor from another scale or representation of the same kind.
    #[inline]
    #[must_use]
    pub fn from_quantity<R2, S2>(other: Quantity<R2, S2, K>) -> Self
    where
        R2: ConvertRep<R>,
        S2: Scale,
    {
        quantity_cast(other)
    }

    /// Get the stored amount
    #[inline]
    #[must_use]
    pub fn amount(self) -> R {
        self.amount
    }

    /// Convert into another quantity type of the same kind.
    ///
    /// Method form of [`quantity_cast`].
    #[inline]
    #[must_use]
    pub fn cast<To>(self) -> To
    where
        To: QuantityType<Kind = K>,
        R: ConvertRep<To::Rep>,
    {
        quantity_cast(self)
    }
}

impl<R, S, K> sealed::Sealed for Quantity<R, S, K> {}

impl<R: Rep, S: Scale, K: Kind> QuantityType for Quantity<R, S, K> {
    type Rep = R;
    type Scale = S;
    type Kind = K;

    #[inline(always)]
    fn from_amount(amount: R) -> Self {
        Quantity::from_amount(amount)
    }

    #[inline(always)]
    fn amount(self) -> R {
        self.amount
    }
}

impl<R: Copy, S, K> Clone for Quantity<R, S, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Copy, S, K> Copy for Quantity<R, S, K> {}

impl<R: Default, S, K> Default for Quantity<R, S, K> {
    fn default() -> Self {
        Self {
            amount: R::default(),
            unit: PhantomData,
        }
    }
}

impl<R: fmt::Debug, S: Scale, K: Kind> fmt::Debug for Quantity<R, S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("amount", &self.amount)
            .field("scale", &format_args!("{}/{}", S::NUM, S::DEN))
            .field("kind", &K::NAME)
            .finish()
    }
}

impl<R: PartialEq, S, K> PartialEq for Quantity<R, S, K> {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl<R: Eq, S, K> Eq for Quantity<R, S, K> {}

impl<R: PartialOrd, S, K> PartialOrd for Quantity<R, S, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.amount.partial_cmp(&other.amount)
    }
}

impl<R: Ord, S, K> Ord for Quantity<R, S, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount.cmp(&other.amount)
    }
}

impl<R: Hash, S, K> Hash for Quantity<R, S, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
    }
}

impl<R, S, K> Neg for Quantity<R, S, K>
where
    R: Rep + Neg<Output = R>,
    S: Scale,
    K: Kind,
{
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_amount(-self.amount)
    }
}

impl<R: Rep, S: Scale, K: Kind> Add for Quantity<R, S, K> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_amount(self.amount + rhs.amount)
    }
}

impl<R: Rep, S: Scale, K: Kind> Sub for Quantity<R, S, K> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_amount(self.amount - rhs.amount)
    }
}

// Same-kind accumulation: rhs is converted into the left-hand scale first
impl<R, S, K, R2, S2> AddAssign<Quantity<R2, S2, K>> for Quantity<R, S, K>
where
    R: Rep,
    S: Scale,
    K: Kind,
    R2: ConvertRep<R>,
    S2: Scale,
{
    fn add_assign(&mut self, rhs: Quantity<R2, S2, K>) {
        self.amount += quantity_cast::<Self, _>(rhs).amount;
    }
}

impl<R, S, K, R2, S2> SubAssign<Quantity<R2, S2, K>> for Quantity<R, S, K>
where
    R: Rep,
    S: Scale,
    K: Kind,
    R2: ConvertRep<R>,
    S2: Scale,
{
    fn sub_assign(&mut self, rhs: Quantity<R2, S2, K>) {
        self.amount -= quantity_cast::<Self, _>(rhs).amount;
    }
}

/// What dividing `Lhs` by `Rhs` produces, keyed by the relation of their kinds.
///
/// [`SameKind`] yields a bare ratio; [`CrossKind`](crate::compat::CrossKind)
/// yields a divide [`QuantityPair`](crate::QuantityPair).
pub trait QuantityDivision<Lhs, Rhs> {
    type Output;
    fn divide(lhs: Lhs, rhs: Rhs) -> Self::Output;
}

impl<R, S1, S2, K> QuantityDivision<Quantity<R, S1, K>, Quantity<R, S2, K>> for SameKind
where
    R: ConvertRep<R>,
    S1: Scale,
    S2: Scale,
    K: Kind,
{
    type Output = R;

    /// Ratio of two same-kind quantities, with the divisor in the dividend's scale.
    fn divide(lhs: Quantity<R, S1, K>, rhs: Quantity<R, S2, K>) -> R {
        lhs.amount / quantity_cast::<Quantity<R, S1, K>, _>(rhs).amount
    }
}

impl<R1, S1, K1, R2, S2, K2> Div<Quantity<R2, S2, K2>> for Quantity<R1, S1, K1>
where
    R1: Rep,
    R2: Rep,
    S1: Scale,
    S2: Scale,
    K1: KindRelation<K2>,
    K2: Kind,
    <K1 as KindRelation<K2>>::Relation: QuantityDivision<Self, Quantity<R2, S2, K2>>,
{
    type Output =
        <<K1 as KindRelation<K2>>::Relation as QuantityDivision<Self, Quantity<R2, S2, K2>>>::Output;

    fn div(self, rhs: Quantity<R2, S2, K2>) -> Self::Output {
        <<K1 as KindRelation<K2>>::Relation as QuantityDivision<Self, Quantity<R2, S2, K2>>>::divide(
            self, rhs,
        )
    }
}

// Scalar operations act on the amount directly
macro_rules! scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<S: Scale, K: Kind> Add<$t> for Quantity<$t, S, K> {
                type Output = Self;
                fn add(mut self, rhs: $t) -> Self {
                    self += rhs;
                    self
                }
            }

            impl<S: Scale, K: Kind> Sub<$t> for Quantity<$t, S, K> {
                type Output = Self;
                fn sub(mut self, rhs: $t) -> Self {
                    self -= rhs;
                    self
                }
            }

            impl<S: Scale, K: Kind> Mul<$t> for Quantity<$t, S, K> {
                type Output = Self;
                fn mul(mut self, rhs: $t) -> Self {
                    self *= rhs;
                    self
                }
            }

            impl<S: Scale, K: Kind> Div<$t> for Quantity<$t, S, K> {
                type Output = Self;
                fn div(mut self, rhs: $t) -> Self {
                    self /= rhs;
                    self
                }
            }

            // Cross-type operation: scalar * quantity = quantity
            impl<S: Scale, K: Kind> Mul<Quantity<$t, S, K>> for $t {
                type Output = Quantity<$t, S, K>;
                fn mul(self, rhs: Quantity<$t, S, K>) -> Quantity<$t, S, K> {
                    rhs * self
                }
            }

            impl<S: Scale, K: Kind> AddAssign<$t> for Quantity<$t, S, K> {
                fn add_assign(&mut self, rhs: $t) {
                    self.amount += rhs;
                }
            }

            impl<S: Scale, K: Kind> SubAssign<$t> for Quantity<$t, S, K> {
                fn sub_assign(&mut self, rhs: $t) {
                    self.amount -= rhs;
                }
            }

            impl<S: Scale, K: Kind> MulAssign<$t> for Quantity<$t, S, K> {
                fn mul_assign(&mut self, rhs: $t) {
                    self.amount *= rhs;
                }
            }

            impl<S: Scale, K: Kind> DivAssign<$t> for Quantity<$t, S, K> {
                fn div_assign(&mut self, rhs: $t) {
                    self.amount /= rhs;
                }
            }
        )*
    };
}

scalar_ops!(i32, i64, u32, u64, f32, f64);

impl<R, S, K> fmt::Display for Quantity<R, S, K>
where
    R: Rep,
    S: Unit<Kind = K>,
    K: Kind,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.amount, S::SYMBOL),
            None => write!(f, "{} {}", self.amount, S::SYMBOL),
        }
    }
}

/// Parses `"<amount> <unit>"`, where the unit is this quantity's symbol or name.
///
/// ```
/// use units_core::Feet;
///
/// let feet: Feet<f64> = "2.5 ft".parse().unwrap();
/// assert_eq!(feet, Feet::new(2.5));
/// assert!("2.5 yd".parse::<Feet<f64>>().is_err());
/// ```
impl<R, S, K> FromStr for Quantity<R, S, K>
where
    R: Rep,
    S: Unit<Kind = K>,
    K: Kind,
{
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, UnitError> {
        let (amount, unit) = s
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| UnitError::MissingUnit(s.to_string()))?;
        let unit = unit.trim();
        if unit != S::SYMBOL && !unit.eq_ignore_ascii_case(S::NAME) {
            return Err(UnitError::UnitMismatch {
                expected: S::SYMBOL,
                found: unit.to_string(),
            });
        }
        let amount = amount
            .parse::<R>()
            .map_err(|_| UnitError::InvalidAmount(amount.to_string()))?;
        Ok(Self::from_amount(amount))
    }
}
