//! Unit family tables
//!
//! Each family is a [`Kind`] plus a table of named scales, all expressed as
//! exact ratios of one base unit:
//! - [`Distance`]: base unit inch
//! - [`Weight`]: base unit ounce
//!
//! Tables are declared with [`unit_table!`](crate::unit_table), which generates
//! for every row a scale type implementing [`Unit`] and a generic alias such as
//! `Feet<R>`.

pub mod distance;
pub mod weight;

pub use distance::*;
pub use weight::*;

use crate::compat::Kind;
use crate::ratio::Scale;

/// A named scale belonging to one kind.
pub trait Unit: Scale {
    type Kind: Kind;
    /// Singular name, e.g. `"foot"`
    const NAME: &'static str;
    /// Short symbol, e.g. `"ft"`
    const SYMBOL: &'static str;
}

/// Distance family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Distance;

impl Kind for Distance {
    const NAME: &'static str = "distance";
}

/// Weight family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Weight;

impl Kind for Weight {
    const NAME: &'static str = "weight";
}

crate::cross_kinds!(Distance, Weight);

/// Declare a table of named scales for one kind.
///
/// Each row is `Scale, Alias = ratio, "name", "symbol";` where `ratio` is any
/// [`Scale`] type, typically built from earlier rows with
/// [`ScaleMul`](crate::ratio::ScaleMul).
///
/// ```
/// use units_core::compat::Kind;
/// use units_core::ratio::{Ratio, ScaleMul};
///
/// pub struct Duration;
/// impl Kind for Duration { const NAME: &'static str = "duration"; }
///
/// units_core::unit_table! {
///     kind: Duration;
///     Second, Seconds = Ratio<1>, "second", "s";
///     Minute, Minutes = ScaleMul<Ratio<60>, Second>, "minute", "min";
/// }
///
/// let seconds: Seconds<f64> = Minutes::<f64>::new(1.5).cast();
/// assert_eq!(seconds.amount(), 90.0);
/// ```
#[macro_export]
macro_rules! unit_table {
    (
        kind: $kind:ty;
        $(
            $(#[$meta:meta])*
            $scale:ident, $alias:ident = $ratio:ty, $name:literal, $symbol:literal;
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $scale;

            impl $crate::ratio::Scale for $scale {
                const NUM: i64 = <$ratio as $crate::ratio::Scale>::NUM;
                const DEN: i64 = <$ratio as $crate::ratio::Scale>::DEN;
            }

            impl $crate::units::Unit for $scale {
                type Kind = $kind;
                const NAME: &'static str = $name;
                const SYMBOL: &'static str = $symbol;
            }

            #[doc = concat!("Quantity measured in `", $symbol, "`")]
            pub type $alias<R> = $crate::quantity::Quantity<R, $scale, $kind>;
        )+
    };
}
