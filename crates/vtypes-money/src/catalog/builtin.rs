//! Built-in locale data.
//!
//! A fixed set of cultures with their numeric ids, native names and
//! currency conventions, plus the regions of the region-specific ones.
//! Neutral cultures, the invariant culture and `en-150` (a custom id) are
//! listed but have no region.

use super::{LocaleCatalog, LocaleRecord, Region};
use crate::number_format::NumberFormat;

const NBSP: &str = "\u{a0}";

struct Culture {
    name: &'static str,
    lcid: u32,
    native_name: &'static str,
    symbol: &'static str,
    digits: u32,
    decimal: &'static str,
    group: &'static str,
    positive: u8,
    negative: u8,
    group_sizes: &'static [u8],
}

const fn culture(
    name: &'static str,
    lcid: u32,
    native_name: &'static str,
    symbol: &'static str,
    digits: u32,
    separators: (&'static str, &'static str),
    patterns: (u8, u8),
) -> Culture {
    Culture {
        name,
        lcid,
        native_name,
        symbol,
        digits,
        decimal: separators.0,
        group: separators.1,
        positive: patterns.0,
        negative: patterns.1,
        group_sizes: &[3],
    }
}

/// Indian digit grouping, `12,34,567`.
const fn lakh(c: Culture) -> Culture {
    Culture {
        group_sizes: &[3, 2],
        ..c
    }
}

const DOT_COMMA: (&str, &str) = (".", ",");
const COMMA_DOT: (&str, &str) = (",", ".");
const COMMA_SPACE: (&str, &str) = (",", NBSP);
const DOT_APOSTROPHE: (&str, &str) = (".", "'");

/// Enumeration order. Alphabetical by culture name.
const CULTURES: &[Culture] = &[
    culture("", 0x007F, "Invariant Language (Invariant Country)", "\u{a4}", 2, DOT_COMMA, (0, 0)),
    culture("ar-SA", 0x0401, "\u{627}\u{644}\u{639}\u{631}\u{628}\u{64a}\u{629} (\u{627}\u{644}\u{645}\u{645}\u{644}\u{643}\u{629} \u{627}\u{644}\u{639}\u{631}\u{628}\u{64a}\u{629} \u{627}\u{644}\u{633}\u{639}\u{648}\u{62f}\u{64a}\u{629})", "\u{631}.\u{633}.\u{200f}", 2, DOT_COMMA, (2, 3)),
    culture("ca-ES", 0x0403, "catal\u{e0} (Espanya)", "\u{20ac}", 2, COMMA_DOT, (3, 8)),
    culture("cs-CZ", 0x0405, "\u{10d}e\u{161}tina (\u{10c}esko)", "K\u{10d}", 2, COMMA_SPACE, (3, 8)),
    culture("da-DK", 0x0406, "dansk (Danmark)", "kr.", 2, COMMA_DOT, (2, 12)),
    culture("de", 0x0007, "Deutsch", "\u{20ac}", 2, COMMA_DOT, (3, 8)),
    culture("de-AT", 0x0C07, "Deutsch (\u{d6}sterreich)", "\u{20ac}", 2, COMMA_DOT, (2, 9)),
    culture("de-CH", 0x0807, "Deutsch (Schweiz)", "CHF", 2, DOT_APOSTROPHE, (2, 2)),
    culture("de-DE", 0x0407, "Deutsch (Deutschland)", "\u{20ac}", 2, COMMA_DOT, (3, 8)),
    culture("de-LU", 0x1007, "Deutsch (Luxemburg)", "\u{20ac}", 2, COMMA_DOT, (3, 8)),
    culture("el-GR", 0x0408, "\u{395}\u{3bb}\u{3bb}\u{3b7}\u{3bd}\u{3b9}\u{3ba}\u{3ac} (\u{395}\u{3bb}\u{3bb}\u{3ac}\u{3b4}\u{3b1})", "\u{20ac}", 2, COMMA_DOT, (3, 8)),
    culture("en", 0x0009, "English", "$", 2, DOT_COMMA, (0, 0)),
    culture("en-150", 0x1000, "English (Europe)", "\u{20ac}", 2, COMMA_DOT, (3, 8)),
    culture("en-AU", 0x0C09, "English (Australia)", "$", 2, DOT_COMMA, (0, 1)),
    culture("en-CA", 0x1009, "English (Canada)", "$", 2, DOT_COMMA, (0, 1)),
    culture("en-GB", 0x0809, "English (United Kingdom)", "\u{a3}", 2, DOT_COMMA, (0, 1)),
    culture("en-IE", 0x1809, "English (Ireland)", "\u{20ac}", 2, DOT_COMMA, (0, 1)),
    lakh(culture("en-IN", 0x4009, "English (India)", "\u{20b9}", 2, DOT_COMMA, (2, 12))),
    culture("en-NZ", 0x1409, "English (New Zealand)", "$", 2, DOT_COMMA, (0, 1)),
    culture("en-SG", 0x4809, "English (Singapore)", "$", 2, DOT_COMMA, (0, 1)),
    culture("en-US", 0x0409, "English (United States)", "$", 2, DOT_COMMA, (0, 0)),
    culture("en-ZA", 0x1C09, "English (South Africa)", "R", 2, COMMA_SPACE, (2, 9)),
    culture("es", 0x000A, "espa\u{f1}ol", "\u{20ac}", 2, COMMA_DOT, (3, 8)),
    culture("es-AR", 0x2C0A, "espa\u{f1}ol (Argentina)", "$", 2, COMMA_DOT, (2, 12)),
    culture("es-CL", 0x340A, "espa\u{f1}ol (Chile)", "$", 0, COMMA_DOT, (0, 1)),
    culture("es-CO", 0x240A, "espa\u{f1}ol (Colombia)", "$", 2, COMMA_DOT, (2, 12)),
    culture("es-EC", 0x300A, "espa\u{f1}ol (Ecuador)", "$", 2, COMMA_DOT, (2, 12)),
    culture("es-ES", 0x0C0A, "espa\u{f1}ol (Espa\u{f1}a)", "\u{20ac}", 2, COMMA_DOT, (3, 8)),
    culture("es-MX", 0x080A, "espa\u{f1}ol (M\u{e9}xico)", "$", 2, DOT_COMMA, (0, 1)),
    culture("es-SV", 0x440A, "espa\u{f1}ol (El Salvador)", "$", 2, DOT_COMMA, (0, 1)),
    culture("es-US", 0x540A, "espa\u{f1}ol (Estados Unidos)", "$", 2, DOT_COMMA, (0, 1)),
    culture("et-EE", 0x0425, "eesti (Eesti)", "\u{20ac}", 2, COMMA_SPACE, (3, 8)),
    culture("fi-FI", 0x040B, "suomi (Suomi)", "\u{20ac}", 2, COMMA_SPACE, (3, 8)),
    culture("fr", 0x000C, "fran\u{e7}ais", "\u{20ac}", 2, COMMA_SPACE, (3, 8)),
    culture("fr-BE", 0x080C, "fran\u{e7}ais (Belgique)", "\u{20ac}", 2, COMMA_DOT, (3, 8)),
    culture("fr-CA", 0x0C0C, "fran\u{e7}ais (Canada)", "$", 2, COMMA_SPACE, (3, 15)),
    culture("fr-CH", 0x100C, "fran\u{e7}ais (Suisse)", "CHF", 2, DOT_APOSTROPHE, (2, 2)),
    culture("fr-FR", 0x040C, "fran\u{e7}ais (France)", "\u{20ac}", 2, COMMA_SPACE, (3, 8)),
    culture("fr-LU", 0x140C, "fran\u{e7}ais (Luxembourg)", "\u{20ac}", 2, COMMA_DOT, (3, 8)),
    culture("ga-IE", 0x083C, "Gaeilge (\u{c9}ire)", "\u{20ac}", 2, DOT_COMMA, (0, 1)),
    culture("he-IL", 0x040D, "\u{5e2}\u{5d1}\u{5e8}\u{5d9}\u{5ea} (\u{5d9}\u{5e9}\u{5e8}\u{5d0}\u{5dc})", "\u{20aa}", 2, DOT_COMMA, (2, 2)),
    lakh(culture("hi-IN", 0x0439, "\u{939}\u{93f}\u{902}\u{926}\u{940} (\u{92d}\u{93e}\u{930}\u{924})", "\u{20b9}", 2, DOT_COMMA, (2, 12))),
    culture("hu-HU", 0x040E, "magyar (Magyarorsz\u{e1}g)", "Ft", 2, COMMA_SPACE, (3, 8)),
    culture("it-CH", 0x0810, "italiano (Svizzera)", "CHF", 2, DOT_APOSTROPHE, (2, 2)),
    culture("it-IT", 0x0410, "italiano (Italia)", "\u{20ac}", 2, COMMA_DOT, (3, 8)),
    culture("ja", 0x0011, "\u{65e5}\u{672c}\u{8a9e}", "\u{a5}", 0, DOT_COMMA, (0, 1)),
    culture("ja-JP", 0x0411, "\u{65e5}\u{672c}\u{8a9e} (\u{65e5}\u{672c})", "\u{a5}", 0, DOT_COMMA, (0, 1)),
    culture("ko-KR", 0x0412, "\u{d55c}\u{ad6d}\u{c5b4}(\u{b300}\u{d55c}\u{bbfc}\u{ad6d})", "\u{20a9}", 0, DOT_COMMA, (0, 1)),
    culture("lt-LT", 0x0427, "lietuvi\u{173} (Lietuva)", "\u{20ac}", 2, COMMA_SPACE, (3, 8)),
    culture("lv-LV", 0x0426, "latvie\u{161}u (Latvija)", "\u{20ac}", 2, COMMA_SPACE, (3, 8)),
    culture("mt-MT", 0x043A, "Malti (Malta)", "\u{20ac}", 2, DOT_COMMA, (0, 1)),
    culture("nb-NO", 0x0414, "norsk bokm\u{e5}l (Norge)", "kr", 2, COMMA_SPACE, (2, 12)),
    culture("nl-BE", 0x0813, "Nederlands (Belgi\u{eb})", "\u{20ac}", 2, COMMA_DOT, (2, 12)),
    culture("nl-NL", 0x0413, "Nederlands (Nederland)", "\u{20ac}", 2, COMMA_DOT, (2, 12)),
    culture("pl-PL", 0x0415, "polski (Polska)", "z\u{142}", 2, COMMA_SPACE, (3, 8)),
    culture("pt-BR", 0x0416, "portugu\u{ea}s (Brasil)", "R$", 2, COMMA_DOT, (2, 9)),
    culture("pt-PT", 0x0816, "portugu\u{ea}s (Portugal)", "\u{20ac}", 2, COMMA_SPACE, (3, 8)),
    culture("ru-RU", 0x0419, "\u{440}\u{443}\u{441}\u{441}\u{43a}\u{438}\u{439} (\u{420}\u{43e}\u{441}\u{441}\u{438}\u{44f})", "\u{20bd}", 2, COMMA_SPACE, (3, 8)),
    culture("sk-SK", 0x041B, "sloven\u{10d}ina (Slovensko)", "\u{20ac}", 2, COMMA_SPACE, (3, 8)),
    culture("sl-SI", 0x0424, "sloven\u{161}\u{10d}ina (Slovenija)", "\u{20ac}", 2, COMMA_DOT, (3, 8)),
    culture("sv-SE", 0x041D, "svenska (Sverige)", "kr", 2, COMMA_SPACE, (3, 8)),
    culture("th-TH", 0x041E, "\u{e44}\u{e17}\u{e22} (\u{e44}\u{e17}\u{e22})", "\u{e3f}", 2, DOT_COMMA, (0, 1)),
    culture("tr-TR", 0x041F, "T\u{fc}rk\u{e7}e (T\u{fc}rkiye)", "\u{20ba}", 2, COMMA_DOT, (0, 1)),
    culture("zh-CN", 0x0804, "\u{4e2d}\u{6587}(\u{4e2d}\u{56fd})", "\u{a5}", 2, DOT_COMMA, (0, 2)),
    culture("zh-HK", 0x0C04, "\u{4e2d}\u{6587}(\u{9999}\u{6e2f})", "HK$", 2, DOT_COMMA, (0, 1)),
    culture("zh-TW", 0x0404, "\u{4e2d}\u{6587}(\u{53f0}\u{7063})", "NT$", 2, DOT_COMMA, (0, 1)),
];

/// `(lcid, region code, English name, ISO currency, currency English name)`
const REGIONS: &[(u32, &str, &str, &str, &str)] = &[
    (0x0401, "SA", "Saudi Arabia", "SAR", "Saudi Riyal"),
    (0x0403, "ES", "Spain", "EUR", "Euro"),
    (0x0405, "CZ", "Czechia", "CZK", "Czech Koruna"),
    (0x0406, "DK", "Denmark", "DKK", "Danish Krone"),
    (0x0C07, "AT", "Austria", "EUR", "Euro"),
    (0x0807, "CH", "Switzerland", "CHF", "Swiss Franc"),
    (0x0407, "DE", "Germany", "EUR", "Euro"),
    (0x1007, "LU", "Luxembourg", "EUR", "Euro"),
    (0x0408, "GR", "Greece", "EUR", "Euro"),
    (0x0C09, "AU", "Australia", "AUD", "Australian Dollar"),
    (0x1009, "CA", "Canada", "CAD", "Canadian Dollar"),
    (0x0809, "GB", "United Kingdom", "GBP", "British Pound"),
    (0x1809, "IE", "Ireland", "EUR", "Euro"),
    (0x4009, "IN", "India", "INR", "Indian Rupee"),
    (0x1409, "NZ", "New Zealand", "NZD", "New Zealand Dollar"),
    (0x4809, "SG", "Singapore", "SGD", "Singapore Dollar"),
    (0x0409, "US", "United States", "USD", "US Dollar"),
    (0x1C09, "ZA", "South Africa", "ZAR", "South African Rand"),
    (0x2C0A, "AR", "Argentina", "ARS", "Argentine Peso"),
    (0x340A, "CL", "Chile", "CLP", "Chilean Peso"),
    (0x240A, "CO", "Colombia", "COP", "Colombian Peso"),
    (0x300A, "EC", "Ecuador", "USD", "US Dollar"),
    (0x0C0A, "ES", "Spain", "EUR", "Euro"),
    (0x080A, "MX", "Mexico", "MXN", "Mexican Peso"),
    (0x440A, "SV", "El Salvador", "USD", "US Dollar"),
    (0x540A, "US", "United States", "USD", "US Dollar"),
    (0x0425, "EE", "Estonia", "EUR", "Euro"),
    (0x040B, "FI", "Finland", "EUR", "Euro"),
    (0x080C, "BE", "Belgium", "EUR", "Euro"),
    (0x0C0C, "CA", "Canada", "CAD", "Canadian Dollar"),
    (0x100C, "CH", "Switzerland", "CHF", "Swiss Franc"),
    (0x040C, "FR", "France", "EUR", "Euro"),
    (0x140C, "LU", "Luxembourg", "EUR", "Euro"),
    (0x083C, "IE", "Ireland", "EUR", "Euro"),
    (0x040D, "IL", "Israel", "ILS", "Israeli New Shekel"),
    (0x0439, "IN", "India", "INR", "Indian Rupee"),
    (0x040E, "HU", "Hungary", "HUF", "Hungarian Forint"),
    (0x0810, "CH", "Switzerland", "CHF", "Swiss Franc"),
    (0x0410, "IT", "Italy", "EUR", "Euro"),
    (0x0411, "JP", "Japan", "JPY", "Japanese Yen"),
    (0x0412, "KR", "Korea", "KRW", "South Korean Won"),
    (0x0427, "LT", "Lithuania", "EUR", "Euro"),
    (0x0426, "LV", "Latvia", "EUR", "Euro"),
    (0x043A, "MT", "Malta", "EUR", "Euro"),
    (0x0414, "NO", "Norway", "NOK", "Norwegian Krone"),
    (0x0813, "BE", "Belgium", "EUR", "Euro"),
    (0x0413, "NL", "Netherlands", "EUR", "Euro"),
    (0x0415, "PL", "Poland", "PLN", "Polish Zloty"),
    (0x0416, "BR", "Brazil", "BRL", "Brazilian Real"),
    (0x0816, "PT", "Portugal", "EUR", "Euro"),
    (0x0419, "RU", "Russia", "RUB", "Russian Ruble"),
    (0x041B, "SK", "Slovakia", "EUR", "Euro"),
    (0x0424, "SI", "Slovenia", "EUR", "Euro"),
    (0x041D, "SE", "Sweden", "SEK", "Swedish Krona"),
    (0x041E, "TH", "Thailand", "THB", "Thai Baht"),
    (0x041F, "TR", "T\u{fc}rkiye", "TRY", "Turkish Lira"),
    (0x0804, "CN", "China", "CNY", "Chinese Yuan"),
    (0x0C04, "HK", "Hong Kong SAR", "HKD", "Hong Kong Dollar"),
    (0x0404, "TW", "Taiwan", "TWD", "New Taiwan Dollar"),
];

/// The locale data compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl LocaleCatalog for BuiltinCatalog {
    fn locales(&self) -> Vec<LocaleRecord> {
        CULTURES
            .iter()
            .map(|c| {
                let number_format = NumberFormat::currency(
                    c.symbol, c.digits, c.decimal, c.group, c.positive, c.negative,
                )
                .with_group_sizes(c.group_sizes);
                LocaleRecord::new(c.name, c.lcid, c.native_name, number_format)
            })
            .collect()
    }

    fn derive_region(&self, locale: &LocaleRecord) -> Option<Region> {
        REGIONS
            .iter()
            .find(|(lcid, ..)| *lcid == locale.lcid)
            .map(|&(_, code, name, iso, currency)| Region::new(code, name, iso, currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cultures_sorted_and_unique() {
        let names: Vec<&str> = CULTURES.iter().map(|c| c.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        let lcids: HashSet<u32> = CULTURES.iter().map(|c| c.lcid).collect();
        assert_eq!(lcids.len(), CULTURES.len());
    }

    #[test]
    fn test_every_region_belongs_to_a_culture() {
        for (lcid, code, ..) in REGIONS {
            let culture = CULTURES.iter().find(|c| c.lcid == *lcid);
            let culture = culture.unwrap_or_else(|| panic!("no culture for region {code}"));
            assert!(culture.name.ends_with(code), "{} vs {code}", culture.name);
        }
    }

    #[test]
    fn test_neutral_cultures_have_no_region() {
        let catalog = BuiltinCatalog;
        for locale in catalog.locales() {
            let region = catalog.derive_region(&locale);
            assert_eq!(
                region.is_some(),
                locale.is_region_specific() && locale.name != "en-150",
                "{:?}",
                locale.name
            );
        }
    }

    #[test]
    fn test_indian_cultures_use_lakh_grouping() {
        let en_in = BuiltinCatalog
            .locales()
            .into_iter()
            .find(|l| l.name == "en-IN")
            .unwrap();
        assert_eq!(en_in.number_format.currency_group_sizes, vec![3, 2]);
    }
}
