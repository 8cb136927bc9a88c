//! # Region Cultures
//!
//! A [`RegionCulture`] pairs a locale with the region derived from it. It
//! is the binding a `Money` value carries: the region supplies the ISO
//! currency code, the locale supplies the formatting conventions.
//!
//! Region cultures are built once by the index and shared through `Arc`.
//! Two region cultures are the same binding only if they are the same
//! allocation; see [`RegionCulture::same_binding`].

use std::sync::Arc;

use vtypes_core::Keyed;

use crate::catalog::{LocaleRecord, Region};
use crate::number_format::NumberFormat;

/// An immutable locale + region pair.
#[derive(Debug)]
pub struct RegionCulture {
    locale: Arc<LocaleRecord>,
    region: Region,
}

impl RegionCulture {
    pub fn new(locale: Arc<LocaleRecord>, region: Region) -> Self {
        Self { locale, region }
    }

    /// Culture identifier, e.g. `fr-CA`.
    pub fn culture_name(&self) -> &str {
        &self.locale.name
    }

    pub fn locale(&self) -> &LocaleRecord {
        &self.locale
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn iso_currency_code(&self) -> &str {
        &self.region.iso_currency_code
    }

    pub fn number_format(&self) -> &NumberFormat {
        &self.locale.number_format
    }

    pub fn is_region_specific(&self) -> bool {
        self.locale.is_region_specific()
    }

    /// Whether `a` and `b` are the same shared instance.
    pub fn same_binding(a: &Arc<Self>, b: &Arc<Self>) -> bool {
        Arc::ptr_eq(a, b)
    }
}

impl Keyed for RegionCulture {
    fn key(&self) -> &str {
        self.culture_name()
    }
}

impl std::fmt::Display for RegionCulture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.culture_name(),
            self.region.code,
            self.iso_currency_code()
        )
    }
}
