//! # Format Providers
//!
//! A [`FormatProvider`] yields the [`NumberFormat`] used to write an
//! amount. Number formats, locale records and region cultures are all
//! providers of their own conventions.
//!
//! [`RegionFormatProvider`] layers a region culture over a base provider:
//! separators, group sizes and layouts come from the base, while the
//! currency symbol and decimal-digit counts come from the region culture.
//! This is how `1234.5 JPY` formats as `¥1,235` under `en-US` conventions
//! and as `1.235 ¥` under `de-DE` conventions. The layering is resolved
//! when formatting, not when the provider is built, so the ambient culture
//! in effect at that moment decides the base.

use std::borrow::Cow;
use std::sync::Arc;

use vtypes_core::ambient;

use crate::catalog::LocaleRecord;
use crate::index::RegionCultureIndex;
use crate::money::FALLBACK_CURRENCY_CODE;
use crate::number_format::NumberFormat;
use crate::region::RegionCulture;

/// Source of number formatting conventions.
pub trait FormatProvider {
    fn number_format(&self) -> Cow<'_, NumberFormat>;
}

impl FormatProvider for NumberFormat {
    fn number_format(&self) -> Cow<'_, NumberFormat> {
        Cow::Borrowed(self)
    }
}

impl FormatProvider for LocaleRecord {
    fn number_format(&self) -> Cow<'_, NumberFormat> {
        Cow::Borrowed(&self.number_format)
    }
}

impl FormatProvider for RegionCulture {
    fn number_format(&self) -> Cow<'_, NumberFormat> {
        Cow::Borrowed(RegionCulture::number_format(self))
    }
}

impl<T: FormatProvider + ?Sized> FormatProvider for Arc<T> {
    fn number_format(&self) -> Cow<'_, NumberFormat> {
        (**self).number_format()
    }
}

/// Conventions of the calling thread's ambient culture.
///
/// Looks the culture up among every culture of the global catalog,
/// neutral ones included, and falls back to the invariant conventions when
/// it is not there.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmbientFormatProvider;

impl FormatProvider for AmbientFormatProvider {
    fn number_format(&self) -> Cow<'_, NumberFormat> {
        let culture = ambient::current_culture();
        match RegionCultureIndex::global().culture(&culture) {
            Some(locale) => Cow::Owned(locale.number_format.clone()),
            None => Cow::Owned(NumberFormat::invariant()),
        }
    }
}

/// A base provider with the currency symbol and decimal digits of a region
/// culture laid over it.
///
/// Without a base, the ambient culture is the base. Without a region
/// culture, the symbol becomes the fallback ISO code and the digit counts
/// are left as the base has them.
#[derive(Clone, Copy)]
pub struct RegionFormatProvider<'a> {
    region_culture: Option<&'a RegionCulture>,
    base: Option<&'a dyn FormatProvider>,
}

impl<'a> RegionFormatProvider<'a> {
    pub fn new(region_culture: Option<&'a RegionCulture>, base: Option<&'a dyn FormatProvider>) -> Self {
        Self {
            region_culture,
            base,
        }
    }
}

impl FormatProvider for RegionFormatProvider<'_> {
    fn number_format(&self) -> Cow<'_, NumberFormat> {
        let mut format = match self.base {
            Some(base) => base.number_format().into_owned(),
            None => AmbientFormatProvider.number_format().into_owned(),
        };
        match self.region_culture {
            Some(region_culture) => {
                let own = RegionCulture::number_format(region_culture);
                format.currency_symbol.clone_from(&own.currency_symbol);
                format.currency_decimal_digits = own.currency_decimal_digits;
                format.number_decimal_digits = own.number_decimal_digits;
            }
            None => format.currency_symbol = FALLBACK_CURRENCY_CODE.to_string(),
        }
        Cow::Owned(format)
    }
}

impl std::fmt::Debug for RegionFormatProvider<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionFormatProvider")
            .field("region_culture", &self.region_culture.map(RegionCulture::culture_name))
            .field("has_base", &self.base.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_culture(name: &str) -> &'static Arc<RegionCulture> {
        RegionCultureIndex::global().region_culture(name).unwrap()
    }

    #[test]
    fn test_overrides_symbol_and_digits_only() {
        let jp = region_culture("ja-JP");
        let de = region_culture("de-DE");
        let base: &dyn FormatProvider = &**de;
        let layered = RegionFormatProvider::new(Some(&**jp), Some(base));
        let nf = layered.number_format();
        assert_eq!(nf.currency_symbol, "\u{a5}");
        assert_eq!(nf.currency_decimal_digits, 0);
        assert_eq!(nf.number_decimal_digits, 0);
        assert_eq!(nf.currency_decimal_separator, ",");
        assert_eq!(nf.currency_group_separator, ".");
        assert_eq!(nf.currency_positive_pattern, 3);
    }

    #[test]
    fn test_unbound_uses_fallback_code_as_symbol() {
        let base = NumberFormat::invariant();
        let layered = RegionFormatProvider::new(None, Some(&base));
        let nf = layered.number_format();
        assert_eq!(nf.currency_symbol, "USD");
        assert_eq!(nf.currency_decimal_digits, 2);
    }

    #[test]
    fn test_ambient_provider_uses_neutral_culture_data() {
        let _guard = ambient::scoped_culture("de");
        let nf = AmbientFormatProvider.number_format();
        assert_eq!(nf.currency_decimal_separator, ",");
        assert_eq!(nf.currency_group_separator, ".");
        assert_ne!(nf.into_owned(), NumberFormat::invariant());
    }

    #[test]
    fn test_ambient_provider_tracks_scoped_culture() {
        let _guard = ambient::scoped_culture("fr-FR");
        assert_eq!(AmbientFormatProvider.number_format().currency_decimal_separator, ",");
        let _inner = ambient::scoped_culture("xx-unknown");
        assert_eq!(
            AmbientFormatProvider.number_format().into_owned(),
            NumberFormat::invariant()
        );
    }
}
