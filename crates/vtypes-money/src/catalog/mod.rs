//! # Locale Catalog Adapter
//!
//! The boundary between this crate and whatever knows about locales. A
//! [`LocaleCatalog`] enumerates [`LocaleRecord`]s and, for each one,
//! attempts to derive the [`Region`] it belongs to. Neutral cultures
//! (`en`, `fr`), the invariant culture, and cultures with custom numeric
//! ids have no region; derivation fails for them and the index skips them.
//!
//! The crate ships a [`BuiltinCatalog`] with common cultures. Hosts that
//! carry their own locale data implement the trait, or fill an
//! [`InMemoryCatalog`].

mod builtin;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vtypes_core::Keyed;

use crate::number_format::NumberFormat;

pub use builtin::BuiltinCatalog;

/// One locale as enumerated by a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleRecord {
    /// Culture identifier such as `en-US`. Empty for the invariant culture.
    pub name: String,
    /// Numeric locale id (LCID).
    pub lcid: u32,
    /// Display name in the locale's own language.
    pub native_name: String,
    pub number_format: NumberFormat,
}

impl LocaleRecord {
    pub fn new(
        name: impl Into<String>,
        lcid: u32,
        native_name: impl Into<String>,
        number_format: NumberFormat,
    ) -> Self {
        Self {
            name: name.into(),
            lcid,
            native_name: native_name.into(),
            number_format,
        }
    }

    /// Whether the name has a region subtag (`en-US`, not `en`).
    pub fn is_region_specific(&self) -> bool {
        is_region_specific_name(&self.name)
    }
}

impl Keyed for LocaleRecord {
    fn key(&self) -> &str {
        &self.name
    }
}

/// True when `-` occurs somewhere after the first character.
pub(crate) fn is_region_specific_name(name: &str) -> bool {
    name.find('-').is_some_and(|i| i > 0)
}

/// The geopolitical region a locale belongs to, with its currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Two-letter region code, e.g. `US`.
    pub code: String,
    pub english_name: String,
    /// Three-letter ISO 4217 currency code, e.g. `USD`.
    pub iso_currency_code: String,
    pub currency_english_name: String,
}

impl Region {
    pub fn new(
        code: impl Into<String>,
        english_name: impl Into<String>,
        iso_currency_code: impl Into<String>,
        currency_english_name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            english_name: english_name.into(),
            iso_currency_code: iso_currency_code.into(),
            currency_english_name: currency_english_name.into(),
        }
    }
}

/// A source of locale data.
pub trait LocaleCatalog {
    /// Every known locale, in enumeration order. The order is significant:
    /// it becomes the candidate order within each currency group.
    fn locales(&self) -> Vec<LocaleRecord>;

    /// The region of `locale`, or `None` when it has none.
    fn derive_region(&self, locale: &LocaleRecord) -> Option<Region>;
}

/// A catalog held entirely in memory. Regions are keyed by numeric locale
/// id, so records sharing an id share a region.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    locales: Vec<LocaleRecord>,
    regions: HashMap<u32, Region>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a locale, optionally registering a region for its id.
    pub fn with_locale(mut self, locale: LocaleRecord, region: Option<Region>) -> Self {
        self.push(locale, region);
        self
    }

    pub fn push(&mut self, locale: LocaleRecord, region: Option<Region>) {
        if let Some(region) = region {
            self.regions.insert(locale.lcid, region);
        }
        self.locales.push(locale);
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl LocaleCatalog for InMemoryCatalog {
    fn locales(&self) -> Vec<LocaleRecord> {
        self.locales.clone()
    }

    fn derive_region(&self, locale: &LocaleRecord) -> Option<Region> {
        self.regions.get(&locale.lcid).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_specific_names() {
        assert!(is_region_specific_name("en-US"));
        assert!(is_region_specific_name("en-150"));
        assert!(!is_region_specific_name("en"));
        assert!(!is_region_specific_name("-US"));
        assert!(!is_region_specific_name(""));
    }

    #[test]
    fn test_in_memory_regions_follow_lcid() {
        let catalog = InMemoryCatalog::new()
            .with_locale(
                LocaleRecord::new("xx-AA", 0x1001, "xx", NumberFormat::invariant()),
                Some(Region::new("AA", "Aland", "AAA", "Aland Mark")),
            )
            .with_locale(
                LocaleRecord::new("xx", 0x1002, "xx", NumberFormat::invariant()),
                None,
            );
        let locales = catalog.locales();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.derive_region(&locales[0]).map(|r| r.iso_currency_code),
            Some("AAA".to_string())
        );
        assert_eq!(catalog.derive_region(&locales[1]), None);
    }
}
