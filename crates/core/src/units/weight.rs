//! Weight table, base unit ounce

use super::Weight;
use crate::ratio::{Kilo, Mega, Micro, Ratio, ScaleMul};

crate::unit_table! {
    kind: Weight;
    /// Base unit of weight (avoirdupois ounce)
    Ounce, Ounces = Ratio<1>, "ounce", "oz";
    Pound, Pounds = ScaleMul<Ratio<16>, Ounce>, "pound", "lb";
    Stone, Stones = ScaleMul<Ratio<14>, Pound>, "stone", "st";
    ShortTon, ShortTons = ScaleMul<Ratio<2000>, Pound>, "short ton", "tn";
    LongTon, LongTons = ScaleMul<Ratio<2240>, Pound>, "long ton", "LT";

    /// 1 oz = 28.3495 g
    Gram, Grams = Ratio<10000, 283495>, "gram", "g";
    Microgram, Micrograms = ScaleMul<Micro, Gram>, "microgram", "µg";
    Kilogram, Kilograms = ScaleMul<Kilo, Gram>, "kilogram", "kg";
    MetricTon, MetricTons = ScaleMul<Mega, Gram>, "metric ton", "t";
}
