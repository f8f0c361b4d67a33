//! Units Core Library
//!
//! Compile-time dimensional analysis for physical quantities. A quantity's
//! representation, scale and kind live in its type, so mixing distances with
//! weights, narrowing floats into integers, or losing precision in an integral
//! conversion are all rejected while building, at no runtime cost.
//!
//! ## Building blocks
//!
//! - [`Quantity`]: an amount tagged with representation, scale and kind
//! - [`quantity_cast`]: exact conversion between quantity types of one kind
//! - [`QuantityPair`]: product or quotient of two quantities
//! - [`units`]: distance and weight tables (`Inches<R>`, `Pounds<R>`, ...)
//! - [`UnitCatalog`]: runtime lookup and conversion by unit name
//!
//! ```
//! use units_core::{Feet, Inches, Meters};
//!
//! let board = Feet::<f64>::new(8);
//! let metric: Meters<f64> = board.cast();
//! assert!((metric.amount() - 2.4384).abs() < 1e-9);
//!
//! let mut total = Inches::<i32>::new(10);
//! total += Feet::<i32>::new(1);
//! assert_eq!(total.amount(), 22);
//! ```

pub mod cast;
pub mod catalog;
pub mod compat;
pub mod error;
pub mod pair;
pub mod quantity;
pub mod ratio;
pub mod rep;
pub mod units;

pub use cast::{quantity_cast, QuantityType};
pub use catalog::{UnitCatalog, UnitDef};
pub use compat::Kind;
pub use error::UnitError;
pub use pair::{Divide, Multiply, PairOperator, QuantityPair};
pub use quantity::Quantity;
pub use units::*;
