//! Kind compatibility rules
//!
//! Every rule here is enforced while building, never at runtime:
//! - Quantities convert only between identical [`Kind`] markers. A cross-kind
//!   cast has no satisfying trait bound.
//! - Floating point never narrows into an integral representation (see
//!   [`crate::rep::ConvertRep`]).
//! - Integral to integral conversion requires the reduced ratio
//!   `source scale / target scale` to have denominator 1. This depends on
//!   constants, so it is a `const` assertion evaluated when the conversion is
//!   instantiated.
//!
//! [`KindRelation`] decides what dividing two quantities means: a bare ratio
//! for the same kind, a derived pair for different kinds. Every kind relates to
//! itself through a blanket impl; distinct kinds are related with
//! [`cross_kinds!`](crate::cross_kinds).

use crate::ratio::{Scale, ScaleDiv};
use crate::rep::{ConvertRep, Rep};
use std::marker::PhantomData;

/// Nominal marker for a physical quantity family (distance, weight, ...).
pub trait Kind: 'static {
    /// Human readable family name
    const NAME: &'static str;
}

/// Both operands share one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SameKind;

/// The operands belong to two different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CrossKind;

/// Relation between `Self` and `Rhs`, resolved to [`SameKind`] or [`CrossKind`].
#[diagnostic::on_unimplemented(
    message = "no relation declared between kinds `{Self}` and `{Rhs}`",
    note = "declare distinct kinds with `units_core::cross_kinds!({Self}, {Rhs})`"
)]
pub trait KindRelation<Rhs: Kind>: Kind {
    type Relation;
}

impl<K: Kind> KindRelation<K> for K {
    type Relation = SameKind;
}

/// Declare a set of mutually distinct kinds.
///
/// Expands to a [`KindRelation`] impl with [`CrossKind`] for every ordered pair
/// of different kinds in the list.
///
/// ```
/// use units_core::compat::{Kind, KindRelation};
///
/// struct Time;
/// impl Kind for Time { const NAME: &'static str = "time"; }
/// struct Charge;
/// impl Kind for Charge { const NAME: &'static str = "charge"; }
///
/// units_core::cross_kinds!(Time, Charge);
///
/// fn relation<A: KindRelation<B>, B: Kind>() -> &'static str {
///     std::any::type_name::<A::Relation>()
/// }
/// assert!(relation::<Time, Charge>().ends_with("CrossKind"));
/// assert!(relation::<Time, Time>().ends_with("SameKind"));
/// ```
#[macro_export]
macro_rules! cross_kinds {
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $(
            impl $crate::compat::KindRelation<$tail> for $head {
                type Relation = $crate::compat::CrossKind;
            }
            impl $crate::compat::KindRelation<$head> for $tail {
                type Relation = $crate::compat::CrossKind;
            }
        )*
        $crate::cross_kinds!($($tail),*);
    };
    () => {};
}

/// Build-time check of the integral exactness rule for one conversion.
pub(crate) struct ExactScale<Src, Dst, SSrc, SDst>(PhantomData<fn() -> (Src, Dst, SSrc, SDst)>);

impl<Src, Dst, SSrc, SDst> ExactScale<Src, Dst, SSrc, SDst>
where
    Src: ConvertRep<Dst>,
    Dst: Rep,
    SSrc: Scale,
    SDst: Scale,
{
    /// Evaluating this constant fails the build for an inexact integral conversion.
    pub(crate) const CHECK: () = assert!(
        !<Src as ConvertRep<Dst>>::REQUIRES_EXACT_SCALE
            || <ScaleDiv<SSrc, SDst> as Scale>::DEN == 1,
        "integral quantity conversion requires an exact scale ratio; use a floating-point representation"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Distance, Weight};

    fn relation<A: KindRelation<B>, B: Kind>() -> &'static str {
        std::any::type_name::<A::Relation>()
    }

    #[test]
    fn test_same_kind_relation() {
        assert!(relation::<Distance, Distance>().ends_with("SameKind"));
        assert!(relation::<Weight, Weight>().ends_with("SameKind"));
    }

    #[test]
    fn test_cross_kind_relation_both_directions() {
        assert!(relation::<Distance, Weight>().ends_with("CrossKind"));
        assert!(relation::<Weight, Distance>().ends_with("CrossKind"));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Distance::NAME, "distance");
        assert_eq!(Weight::NAME, "weight");
    }
}
