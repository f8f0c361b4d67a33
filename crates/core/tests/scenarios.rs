//! End-to-end conversion and arithmetic scenarios across both unit families
use approx::assert_relative_eq;
use units_core::{
    quantity_cast, Divide, Feet, Grams, Inches, Kilometers, Meters, Miles, Millimeters,
    MetricTons, Multiply, NauticalMiles, Pounds, QuantityPair, ShortTons, Stones, Yards,
};

#[test]
fn test_millimeters_to_inches() {
    let mm = Millimeters::<f32>::new(200);
    let inches: Inches<f32> = quantity_cast(mm);
    assert_relative_eq!(inches.amount(), 7.874_015_8, max_relative = 1e-6);
}

#[test]
fn test_inch_arithmetic() {
    let i1 = Inches::<f32>::new(5.25);
    let i2 = Inches::<f32>::new(4);

    assert_eq!((i1 + i2).amount(), 9.25);
    assert_eq!((i1 - i2).amount(), 1.25);
    assert_eq!(i1 / i2, 1.3125);
}

#[test]
fn test_grams_to_pounds() {
    let pounds: Pounds<f64> = Grams::<f64>::new(200).cast();
    assert_relative_eq!(pounds.amount(), 0.440_925, max_relative = 1e-5);
}

#[test]
fn test_distance_table_reference_values() {
    let km: Kilometers<f64> = NauticalMiles::<f64>::new(1).cast();
    assert_relative_eq!(km.amount(), 1.852, max_relative = 1e-6);

    let mm: Millimeters<f64> = Inches::<f64>::new(5).cast();
    assert_relative_eq!(mm.amount(), 127.0, max_relative = 1e-12);

    let km: Kilometers<f64> = Miles::<f64>::new(1).cast();
    assert_relative_eq!(km.amount(), 1.609_344, max_relative = 1e-12);

    let m: Meters<f64> = Yards::<f64>::new(3).cast();
    assert_relative_eq!(m.amount(), 2.7432, max_relative = 1e-12);

    let inches: Inches<f64> = Meters::<f64>::new(1).cast();
    assert_relative_eq!(inches.amount(), 39.370_079, max_relative = 1e-6);
}

#[test]
fn test_weight_table_reference_values() {
    let tonnes: MetricTons<f64> = ShortTons::<f64>::new(1).cast();
    assert_relative_eq!(tonnes.amount(), 0.907_184, max_relative = 1e-9);
}

#[test]
fn test_pairs_from_operators() {
    let gy = Grams::<f32>::new(5) * Yards::<f32>::new(3);
    assert_relative_eq!(gy.amount(), 15.0);
    assert_eq!(gy.operator(), Multiply);

    let si1 = Stones::<f32>::new(20) / Inches::<f32>::new(2);
    let si2 = Stones::<f32>::new(10) / Inches::<f32>::new(2);
    assert_relative_eq!(si2.amount(), 5.0);
    assert_eq!(si2.operator(), Divide);
    assert_relative_eq!((si1 + si2).amount(), 15.0);
}

#[test]
fn test_pair_converts_constituents() {
    let pm = QuantityPair::<Pounds<f32>, Meters<f32>>::from_quantities(
        Grams::<f32>::new(5),
        Yards::<f32>::new(3),
    );
    assert_relative_eq!(pm.amount(), 0.030_238_6, max_relative = 1e-5);
}

#[test]
fn test_integral_accumulation_stays_exact() {
    let mut total = Inches::<i64>::new(0);
    total += Miles::<i32>::new(1);
    total += Yards::<u32>::new(2);
    total += Feet::<i64>::new(1);
    assert_eq!(total.amount(), 63_360 + 72 + 12);
}

#[test]
fn test_text_round_trip() {
    let feet = Feet::<f64>::new(6.5);
    let parsed: Feet<f64> = feet.to_string().parse().unwrap();
    assert_eq!(parsed, feet);

    let stones: Stones<i32> = "11 stone".parse().unwrap();
    assert_eq!(stones.amount(), 11);
}
