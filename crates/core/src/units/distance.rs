//! Distance table, base unit inch

use super::Distance;
use crate::ratio::{Centi, Kilo, Micro, Milli, Ratio, ScaleMul};

crate::unit_table! {
    kind: Distance;
    /// Base unit of distance
    Inch, Inches = Ratio<1>, "inch", "in";
    Foot, Feet = ScaleMul<Ratio<12>, Inch>, "foot", "ft";
    Yard, Yards = ScaleMul<Ratio<3>, Foot>, "yard", "yd";
    Mile, Miles = ScaleMul<Ratio<1760>, Yard>, "mile", "mi";
    NauticalMile, NauticalMiles = Ratio<729134, 10>, "nautical mile", "nmi";

    /// 1 in = 2.54 cm exactly
    Meter, Meters = Ratio<10000, 254>, "meter", "m";
    Micrometer, Micrometers = ScaleMul<Micro, Meter>, "micrometer", "µm";
    Millimeter, Millimeters = ScaleMul<Milli, Meter>, "millimeter", "mm";
    Centimeter, Centimeters = ScaleMul<Centi, Meter>, "centimeter", "cm";
    Kilometer, Kilometers = ScaleMul<Kilo, Meter>, "kilometer", "km";
}
