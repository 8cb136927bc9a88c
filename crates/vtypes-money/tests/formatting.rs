//! # Money Formatting Across Cultures
//!
//! Every test pins the ambient culture with a thread-scoped override so the
//! process environment cannot leak into the expected text.

use std::str::FromStr;

use rust_decimal::Decimal;
use vtypes_core::ambient;
use vtypes_money::{
    FormatProvider, LocaleRecord, Money, MoneyError, NumberFormat, RegionCultureIndex,
};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn money(amount: &str, culture: &str) -> Money {
    Money::from_culture(dec(amount), culture).unwrap()
}

fn locale(name: &str) -> &'static dyn FormatProvider {
    let record: &'static LocaleRecord = RegionCultureIndex::global().locale(name).unwrap();
    record
}

#[test]
fn general_is_currency_text() {
    let _culture = ambient::scoped_culture("en-US");
    let m = money("1234.5", "en-US");
    assert_eq!(m.format("").unwrap(), "$1,234.50");
    assert_eq!(m.format("G").unwrap(), "$1,234.50");
    assert_eq!(m.format("c").unwrap(), "$1,234.50");
    assert_eq!(m.to_string(), "$1,234.50");
    assert_eq!(money("-1234.5", "en-US").format("C").unwrap(), "($1,234.50)");
}

#[test]
fn precision_suffix_overrides_region_digits() {
    let _culture = ambient::scoped_culture("en-US");
    let m = money("1234.5", "en-US");
    assert_eq!(m.format("C0").unwrap(), "$1,235");
    assert_eq!(m.format("G3").unwrap(), "$1,234.500");
    assert_eq!(m.format("I1").unwrap(), "1,234.5 USD");
}

#[test]
fn iso_format_appends_code() {
    let _culture = ambient::scoped_culture("en-US");
    assert_eq!(money("1234.5", "en-US").format("I").unwrap(), "1,234.50 USD");
    assert_eq!(money("-1234.5", "en-US").format("i").unwrap(), "-1,234.50 USD");
    assert_eq!(money("1234.5", "ja-JP").format("I").unwrap(), "1,235 JPY");
}

#[test]
fn foreign_currency_uses_ambient_layout_with_own_symbol() {
    let _culture = ambient::scoped_culture("en-US");
    let euros = money("1234.5", "de-DE");
    assert_eq!(euros.format("C").unwrap(), "\u{20ac}1,234.50");
    assert_eq!(euros.format("CO").unwrap(), "1.234,50 \u{20ac}");
    assert_eq!(money("-1234.5", "de-DE").format("CO").unwrap(), "-1.234,50 \u{20ac}");
    assert_eq!(money("1234.5", "ja-JP").format("C").unwrap(), "\u{a5}1,235");
}

#[test]
fn caller_provider_supplies_layout_unless_original() {
    let _culture = ambient::scoped_culture("en-US");
    let dollars = money("1234.5", "en-US");
    let fr = locale("fr-FR");
    assert_eq!(
        dollars.format_with("C", Some(fr)).unwrap(),
        "1\u{a0}234,50 $"
    );
    assert_eq!(dollars.format_with("CO", Some(fr)).unwrap(), "$1,234.50");
    assert_eq!(dollars.format_with("I", Some(fr)).unwrap(), "1\u{a0}234,50 USD");
}

#[test]
fn lakh_grouping() {
    let _culture = ambient::scoped_culture("en-IN");
    assert_eq!(
        money("1234567", "en-IN").format("C").unwrap(),
        "\u{20b9} 12,34,567.00"
    );
}

#[test]
fn unbound_value_uses_fallback_code_as_symbol() {
    let _culture = ambient::scoped_culture(ambient::INVARIANT_CULTURE);
    let m = Money::unbound(dec("1234.5"));
    assert_eq!(m.to_string(), "USD1,234.50");
    assert_eq!(m.format("I").unwrap(), "1,234.50 USD");
    assert_eq!(m.format("GO").unwrap(), "USD1,234.50");
}

#[test]
fn explicit_number_format_provider() {
    let _culture = ambient::scoped_culture("en-US");
    let plain = NumberFormat::currency("X", 4, "_", "~", 1, 5);
    let m = money("1234.5", "en-GB");
    assert_eq!(m.format_with("C", Some(&plain)).unwrap(), "1~234_50\u{a3}");
    assert_eq!(money("-1", "en-GB").format_with("C", Some(&plain)).unwrap(), "-1_00\u{a3}");
}

#[test]
fn malformed_formats_are_rejected() {
    let m = money("1", "en-US");
    for bad in ["N", "C-1", "CC", "G100"] {
        assert_eq!(
            m.format(bad).unwrap_err(),
            MoneyError::InvalidFormatString(bad.to_string())
        );
    }
}
