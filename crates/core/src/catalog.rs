//! Runtime unit catalog
//!
//! The typed core resolves every unit while building. [`UnitCatalog`] is the
//! runtime counterpart for units only known as text (configuration files, user
//! input): it maps names and symbols to exact scale ratios and converts plain
//! `f64` amounts between units of the same kind.
//!
//! The standard catalog is generated from the same tables as the typed units,
//! so both surfaces always agree on every ratio.
//!
//! # Usage
//! ```
//! use units_core::UnitCatalog;
//!
//! let catalog = UnitCatalog::standard();
//! let inches = catalog.convert(2.0, "ft", "inch").unwrap();
//! assert_eq!(inches, 24.0);
//! assert!(catalog.convert(1.0, "ft", "lb").is_err());
//! ```

use crate::cast::rescale;
use crate::compat::Kind;
use crate::error::UnitError;
use crate::ratio::{checked_divide, try_reduce};
use crate::units::{self, Unit};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Runtime description of one unit: its kind and its exact ratio to the
/// kind's base unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitDef {
    pub name: String,
    pub symbol: String,
    pub kind: String,
    pub num: i64,
    #[serde(default = "default_den")]
    pub den: i64,
}

fn default_den() -> i64 {
    1
}

impl UnitDef {
    /// Describe a unit with scale `num / den`, reduced to lowest terms.
    ///
    /// # Errors
    /// [`UnitError::InvalidScale`] unless both terms are positive.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        kind: impl Into<String>,
        num: i64,
        den: i64,
    ) -> Result<Self, UnitError> {
        let name = name.into();
        let reduced = if num > 0 && den > 0 {
            try_reduce(i128::from(num), i128::from(den))
        } else {
            None
        };
        let Some((num, den)) = reduced else {
            return Err(UnitError::InvalidScale { name, num, den });
        };
        Ok(Self {
            name,
            symbol: symbol.into(),
            kind: kind.into(),
            num,
            den,
        })
    }

    /// Describe a typed unit.
    #[must_use]
    pub fn of<U: Unit>() -> Self {
        Self {
            name: U::NAME.to_string(),
            symbol: U::SYMBOL.to_string(),
            kind: <U::Kind as Kind>::NAME.to_string(),
            num: U::NUM,
            den: U::DEN,
        }
    }

    /// Scale as a reduced `(num, den)` pair
    #[inline]
    #[must_use]
    pub fn scale(&self) -> (i64, i64) {
        (self.num, self.den)
    }
}

/// Set of units addressable by name or symbol.
///
/// Symbols match exactly (`"mm"`, `"LT"`); names match ignoring ASCII case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<UnitDef>", into = "Vec<UnitDef>")]
pub struct UnitCatalog {
    units: Vec<UnitDef>,
    by_symbol: FxHashMap<String, usize>,
    by_name: FxHashMap<String, usize>,
}

impl UnitCatalog {
    /// Empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding every unit of the built-in distance and weight tables.
    #[must_use]
    pub fn standard() -> Self {
        let defs = [
            UnitDef::of::<units::Inch>(),
            UnitDef::of::<units::Foot>(),
            UnitDef::of::<units::Yard>(),
            UnitDef::of::<units::Mile>(),
            UnitDef::of::<units::NauticalMile>(),
            UnitDef::of::<units::Meter>(),
            UnitDef::of::<units::Micrometer>(),
            UnitDef::of::<units::Millimeter>(),
            UnitDef::of::<units::Centimeter>(),
            UnitDef::of::<units::Kilometer>(),
            UnitDef::of::<units::Ounce>(),
            UnitDef::of::<units::Pound>(),
            UnitDef::of::<units::Stone>(),
            UnitDef::of::<units::ShortTon>(),
            UnitDef::of::<units::LongTon>(),
            UnitDef::of::<units::Gram>(),
            UnitDef::of::<units::Microgram>(),
            UnitDef::of::<units::Kilogram>(),
            UnitDef::of::<units::MetricTon>(),
        ];

        let mut catalog = Self::new();
        for def in defs {
            // Table rows have distinct names and symbols and positive scales
            if let Err(e) = catalog.insert(def) {
                warn!("Skipping built-in unit: {e}");
            }
        }
        catalog
    }

    /// Build a catalog from definitions, e.g. loaded from a configuration file.
    ///
    /// # Errors
    /// The first [`UnitError::DuplicateUnit`] or [`UnitError::InvalidScale`]
    /// among `defs`.
    pub fn from_defs(defs: impl IntoIterator<Item = UnitDef>) -> Result<Self, UnitError> {
        let mut catalog = Self::new();
        for def in defs {
            catalog.insert(def)?;
        }
        debug!("Built unit catalog with {} units", catalog.len());
        Ok(catalog)
    }

    /// Register a unit.
    ///
    /// # Errors
    /// [`UnitError::InvalidScale`] for a non-positive scale, and
    /// [`UnitError::DuplicateUnit`] when the name or symbol would match a
    /// registered unit's name or symbol in [`lookup`](Self::lookup).
    pub fn insert(&mut self, def: UnitDef) -> Result<(), UnitError> {
        let def = UnitDef::new(def.name, def.symbol, def.kind, def.num, def.den)
            .inspect_err(|e| warn!("Rejected unit definition: {e}"))?;

        // Every lookup string resolves to at most one unit
        let name_key = def.name.to_ascii_lowercase();
        if self.by_symbol.contains_key(&def.symbol)
            || self.by_name.contains_key(&def.symbol.to_ascii_lowercase())
        {
            warn!("Duplicate unit symbol: {}", def.symbol);
            return Err(UnitError::DuplicateUnit(def.symbol));
        }
        if self.by_name.contains_key(&name_key)
            || self
                .by_symbol
                .keys()
                .any(|symbol| symbol.eq_ignore_ascii_case(&def.name))
        {
            warn!("Duplicate unit name: {}", def.name);
            return Err(UnitError::DuplicateUnit(def.name));
        }

        let index = self.units.len();
        self.by_symbol.insert(def.symbol.clone(), index);
        self.by_name.insert(name_key, index);
        self.units.push(def);
        Ok(())
    }

    /// Find a unit by symbol, then by name.
    ///
    /// # Errors
    /// [`UnitError::UnknownUnit`] when neither matches.
    pub fn lookup(&self, unit: &str) -> Result<&UnitDef, UnitError> {
        self.by_symbol
            .get(unit)
            .or_else(|| self.by_name.get(&unit.to_ascii_lowercase()))
            .map(|&index| &self.units[index])
            .ok_or_else(|| {
                debug!("Unit lookup failed: {unit}");
                UnitError::UnknownUnit(unit.to_string())
            })
    }

    /// Units of one kind, in registration order
    pub fn units_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a UnitDef> + 'a {
        self.units.iter().filter(move |def| def.kind == kind)
    }

    /// Convert `amount` from one unit to another of the same kind.
    ///
    /// Uses the same arithmetic as the typed conversion, with an exact ratio
    /// computed from the two scales.
    ///
    /// # Errors
    /// [`UnitError::UnknownUnit`], [`UnitError::KindMismatch`], or
    /// [`UnitError::ScaleOverflow`] when the ratio doesn't fit in `i64`.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, UnitError> {
        let source = self.lookup(from)?;
        let target = self.lookup(to)?;

        if source.kind != target.kind {
            return Err(UnitError::KindMismatch {
                from: source.symbol.clone(),
                to: target.symbol.clone(),
                from_kind: source.kind.clone(),
                to_kind: target.kind.clone(),
            });
        }

        let ratio = checked_divide(source.scale(), target.scale()).ok_or_else(|| {
            UnitError::ScaleOverflow {
                from: source.symbol.clone(),
                to: target.symbol.clone(),
            }
        })?;

        debug!(
            "Converting {} {} to {} (ratio {}/{})",
            amount, source.symbol, target.symbol, ratio.0, ratio.1
        );
        Ok(rescale::<f64, f64>(amount, ratio))
    }

    /// Number of registered units
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All units, in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, UnitDef> {
        self.units.iter()
    }
}

impl TryFrom<Vec<UnitDef>> for UnitCatalog {
    type Error = UnitError;

    fn try_from(defs: Vec<UnitDef>) -> Result<Self, UnitError> {
        Self::from_defs(defs)
    }
}

impl From<UnitCatalog> for Vec<UnitDef> {
    fn from(catalog: UnitCatalog) -> Self {
        catalog.units
    }
}

impl<'a> IntoIterator for &'a UnitCatalog {
    type Item = &'a UnitDef;
    type IntoIter = std::slice::Iter<'a, UnitDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
