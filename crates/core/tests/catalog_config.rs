//! Runtime catalog configured from caller-supplied definitions
use approx::assert_relative_eq;
use units_core::units::{Foot, Kilogram, Stone};
use units_core::{Kilograms, Stones, UnitCatalog, UnitDef, UnitError};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn custom_catalog() -> UnitCatalog {
    UnitCatalog::from_defs([
        UnitDef::of::<Foot>(),
        UnitDef::new("chain", "ch", "distance", 792, 1).unwrap(),
        UnitDef::new("hand", "hh", "distance", 4, 1).unwrap(),
        UnitDef::new("second", "s", "duration", 1, 1).unwrap(),
        UnitDef::new("minute", "min", "duration", 60, 1).unwrap(),
    ])
    .unwrap()
}

#[test]
fn test_custom_kinds_convert() {
    let catalog = custom_catalog();
    assert_relative_eq!(catalog.convert(1.0, "ch", "ft").unwrap(), 66.0);
    assert_relative_eq!(catalog.convert(3.0, "hand", "foot").unwrap(), 1.0);
    assert_relative_eq!(catalog.convert(90.0, "s", "min").unwrap(), 1.5);
}

#[test]
fn test_custom_kinds_stay_separate() {
    let catalog = custom_catalog();
    assert!(matches!(
        catalog.convert(1.0, "min", "ft"),
        Err(UnitError::KindMismatch { .. })
    ));
    let durations: Vec<&str> = catalog.units_of("duration").map(|d| d.name.as_str()).collect();
    assert_eq!(durations, ["second", "minute"]);
}

#[test]
fn test_from_defs_reports_first_error() {
    let result = UnitCatalog::from_defs([
        UnitDef::new("hand", "hh", "distance", 4, 1).unwrap(),
        UnitDef::new("hands", "hh", "distance", 4, 1).unwrap(),
    ]);
    assert_eq!(result.err(), Some(UnitError::DuplicateUnit("hh".to_string())));
}

#[test]
fn test_typed_and_runtime_agree() {
    let catalog = UnitCatalog::standard();
    let stone = UnitDef::of::<Stone>();
    let kilogram = UnitDef::of::<Kilogram>();

    let typed: Kilograms<f64> = Stones::<f64>::new(12).cast();
    let runtime = catalog.convert(12.0, &stone.symbol, &kilogram.symbol).unwrap();
    assert_relative_eq!(runtime, typed.amount());
    assert_relative_eq!(runtime, 76.203_5, max_relative = 1e-5);
}
