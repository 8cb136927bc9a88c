//! # Region-Culture Index
//!
//! Three keyed views over a locale catalog, built in one pass:
//!
//! 1. culture name → [`LocaleRecord`]
//! 2. culture name → [`RegionCulture`]
//! 3. ISO currency code → [`CurrencyGroup`] (every region culture using
//!    that currency, in catalog order)
//!
//! ## Invariants
//!
//! - Only locales with a derivable region are registered, in all three
//!   views. Every enumerated culture, region or not, stays reachable
//!   through [`RegionCultureIndex::culture()`] for formatting lookups.
//! - Every region culture in view 2 appears in exactly one group in view 3,
//!   the one keyed by its own currency code.
//! - Order inside a group is catalog enumeration order.
//!
//! The process-wide index over [`BuiltinCatalog`] is built lazily, once,
//! on first use of [`RegionCultureIndex::global()`]. Hosts and tests can
//! build private indexes from any [`LocaleCatalog`].

use std::sync::{Arc, OnceLock};

use vtypes_core::{Keyed, KeyedCollection, KeyedCollectionError};

use crate::catalog::{BuiltinCatalog, LocaleCatalog, LocaleRecord, Region};
use crate::region::RegionCulture;

/// All region cultures sharing one ISO currency code.
#[derive(Debug, Clone)]
pub struct CurrencyGroup {
    iso_currency_code: String,
    members: KeyedCollection<Arc<RegionCulture>>,
}

impl CurrencyGroup {
    /// An empty group for `iso_currency_code`.
    pub fn new(iso_currency_code: impl Into<String>) -> Self {
        Self {
            iso_currency_code: iso_currency_code.into(),
            members: KeyedCollection::new(),
        }
    }

    /// Append a member.
    ///
    /// # Errors
    ///
    /// [`KeyedCollectionError::Rejected`] when the member's currency code
    /// differs from the group's; [`KeyedCollectionError::DuplicateKey`]
    /// when a member with the same culture name is already present.
    pub fn insert(&mut self, member: Arc<RegionCulture>) -> Result<(), KeyedCollectionError> {
        if member.iso_currency_code() != self.iso_currency_code {
            return Err(KeyedCollectionError::Rejected {
                key: member.culture_name().to_string(),
                reason: format!(
                    "currency {} does not belong in group {}",
                    member.iso_currency_code(),
                    self.iso_currency_code
                ),
            });
        }
        self.members.insert(member)
    }

    /// The ISO code every member shares.
    pub fn iso_currency_code(&self) -> &str {
        &self.iso_currency_code
    }

    /// Member by culture name.
    pub fn get(&self, culture_name: &str) -> Option<&Arc<RegionCulture>> {
        self.members.get(culture_name)
    }

    /// Whether `region_culture` is this group's own instance of that
    /// culture, not merely one with the same name.
    pub fn contains(&self, region_culture: &Arc<RegionCulture>) -> bool {
        self.members
            .get(region_culture.culture_name())
            .is_some_and(|m| RegionCulture::same_binding(m, region_culture))
    }

    /// First member in catalog order.
    pub fn first(&self) -> Option<&Arc<RegionCulture>> {
        self.members.first()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<RegionCulture>> {
        self.members.iter()
    }

    /// Member culture names in catalog order.
    pub fn culture_names(&self) -> impl Iterator<Item = &str> {
        self.members.keys()
    }
}

impl Keyed for CurrencyGroup {
    fn key(&self) -> &str {
        &self.iso_currency_code
    }
}

impl<'a> IntoIterator for &'a CurrencyGroup {
    type Item = &'a Arc<RegionCulture>;
    type IntoIter = std::slice::Iter<'a, Arc<RegionCulture>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The three views over a catalog. Read-only once built.
#[derive(Debug, Default)]
pub struct RegionCultureIndex {
    cultures: KeyedCollection<Arc<LocaleRecord>>,
    locales: KeyedCollection<Arc<LocaleRecord>>,
    region_cultures: KeyedCollection<Arc<RegionCulture>>,
    currency_groups: KeyedCollection<CurrencyGroup>,
}

static GLOBAL_INDEX: OnceLock<RegionCultureIndex> = OnceLock::new();

impl RegionCultureIndex {
    /// Enumerate `catalog` once and index every locale with a region.
    ///
    /// Locales without a region are skipped. A repeated culture name keeps
    /// the first occurrence.
    pub fn build(catalog: &dyn LocaleCatalog) -> Self {
        let mut index = Self::default();
        let mut skipped = 0usize;
        for locale in catalog.locales() {
            let locale = Arc::new(locale);
            if let Err(err) = index.cultures.insert(Arc::clone(&locale)) {
                tracing::warn!(error = %err, "duplicate catalog entry ignored");
                continue;
            }
            let Some(region) = catalog.derive_region(&locale) else {
                tracing::trace!(culture = %locale.name, lcid = locale.lcid, "locale has no region; skipped");
                skipped += 1;
                continue;
            };
            if let Err(err) = index.register(locale, region) {
                tracing::warn!(error = %err, "duplicate catalog entry ignored");
            }
        }
        tracing::debug!(
            locales = index.locales.len(),
            currencies = index.currency_groups.len(),
            skipped,
            "region culture index built"
        );
        index
    }

    /// The index over the built-in catalog, built on first use.
    pub fn global() -> &'static Self {
        GLOBAL_INDEX.get_or_init(|| Self::build(&BuiltinCatalog))
    }

    fn register(&mut self, locale: Arc<LocaleRecord>, region: Region) -> Result<(), KeyedCollectionError> {
        if self.locales.contains_key(&locale.name)
            || self.region_cultures.contains_key(&locale.name)
        {
            return Err(KeyedCollectionError::DuplicateKey(locale.name.clone()));
        }
        let region_culture = Arc::new(RegionCulture::new(Arc::clone(&locale), region));
        let code = region_culture.iso_currency_code().to_string();

        if !self.currency_groups.contains_key(&code) {
            self.currency_groups.insert(CurrencyGroup::new(code.as_str()))?;
        }
        if let Some(group) = self.currency_groups.get_mut(&code) {
            group.insert(Arc::clone(&region_culture))?;
        }
        self.region_cultures.insert(region_culture)?;
        self.locales.insert(locale)
    }

    /// Any culture the catalog enumerated, including neutral and
    /// region-less ones. Not part of the three views.
    pub fn culture(&self, culture_name: &str) -> Option<&Arc<LocaleRecord>> {
        self.cultures.get(culture_name)
    }

    /// View 1: a locale by culture name.
    pub fn locale(&self, culture_name: &str) -> Option<&Arc<LocaleRecord>> {
        self.locales.get(culture_name)
    }

    /// View 2: a region culture by culture name.
    pub fn region_culture(&self, culture_name: &str) -> Option<&Arc<RegionCulture>> {
        self.region_cultures.get(culture_name)
    }

    /// View 3: the group for an ISO currency code.
    pub fn currency_group(&self, iso_currency_code: &str) -> Option<&CurrencyGroup> {
        self.currency_groups.get(iso_currency_code)
    }

    /// View 1 in catalog order.
    pub fn locales(&self) -> &KeyedCollection<Arc<LocaleRecord>> {
        &self.locales
    }

    /// View 2 in catalog order.
    pub fn all_region_cultures(&self) -> &KeyedCollection<Arc<RegionCulture>> {
        &self.region_cultures
    }

    /// View 3, groups in order of first appearance.
    pub fn currency_groups(&self) -> &KeyedCollection<CurrencyGroup> {
        &self.currency_groups
    }
}
