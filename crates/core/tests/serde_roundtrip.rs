//! Serde support: quantities and pairs are transparent over their amount
use units_core::{
    Divide, Feet, Inches, Multiply, Pounds, QuantityPair, Stones, UnitCatalog, UnitDef,
};

#[test]
fn test_quantity_serializes_as_amount() {
    let feet = Feet::<f64>::new(2.5);
    assert_eq!(serde_json::to_string(&feet).unwrap(), "2.5");

    let back: Feet<f64> = serde_json::from_str("2.5").unwrap();
    assert_eq!(back, feet);

    let inches: Inches<i32> = serde_json::from_str("-12").unwrap();
    assert_eq!(inches.amount(), -12);
}

#[test]
fn test_pair_serializes_as_amount() {
    let si = Stones::<f64>::new(10) / Inches::<f64>::new(4);
    assert_eq!(serde_json::to_string(&si).unwrap(), "2.5");

    let back: QuantityPair<Stones<f64>, Inches<f64>, Divide> =
        serde_json::from_str("2.5").unwrap();
    assert_eq!(back, si);
    assert_eq!(back.operator(), Divide);
}

#[test]
fn test_operator_tags_serialize() {
    assert_eq!(serde_json::to_string(&Multiply).unwrap(), "null");
    let op: Divide = serde_json::from_str("null").unwrap();
    assert_eq!(op, Divide);
}

#[test]
fn test_struct_with_quantities() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Parcel {
        length: Inches<f64>,
        weight: Pounds<f64>,
    }

    let parcel = Parcel {
        length: Inches::new(14.5),
        weight: Pounds::new(3),
    };
    let json = serde_json::to_string(&parcel).unwrap();
    assert_eq!(json, r#"{"length":14.5,"weight":3.0}"#);
    assert_eq!(serde_json::from_str::<Parcel>(&json).unwrap(), parcel);
}

#[test]
fn test_unit_def_defaults_denominator() {
    let def: UnitDef =
        serde_json::from_str(r#"{"name":"furlong","symbol":"fur","kind":"distance","num":7920}"#)
            .unwrap();
    assert_eq!(def.scale(), (7920, 1));
}

#[test]
fn test_catalog_round_trip() {
    let catalog = UnitCatalog::standard();
    let json = serde_json::to_string(&catalog).unwrap();
    let back: UnitCatalog = serde_json::from_str(&json).unwrap();

    assert_eq!(back.len(), catalog.len());
    assert!(back.iter().eq(catalog.iter()));
    assert_eq!(back.convert(1.0, "yd", "in").unwrap(), 36.0);
}

#[test]
fn test_catalog_rejects_invalid_config() {
    let duplicate = r#"[
        {"name":"inch","symbol":"in","kind":"distance","num":1},
        {"name":"Inch","symbol":"\"","kind":"distance","num":1}
    ]"#;
    assert!(serde_json::from_str::<UnitCatalog>(duplicate).is_err());

    let zero = r#"[{"name":"void","symbol":"v","kind":"distance","num":1,"den":0}]"#;
    assert!(serde_json::from_str::<UnitCatalog>(zero).is_err());
}
