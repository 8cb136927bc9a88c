//! # Host-Supplied Catalogs
//!
//! A host with its own locale data builds a private index and option set;
//! nothing here touches process-wide state.

use std::str::FromStr;

use rust_decimal::Decimal;
use vtypes_money::{
    InMemoryCatalog, LocaleCatalog, LocaleRecord, MoneyError, MoneyOptions, MoneySelectionRequest,
    NumberFormat, Region, RegionCultureIndex,
};

fn catalog() -> InMemoryCatalog {
    let crown = || Some(Region::new("NK", "Northkingdom", "NKC", "Northern Crown"));
    InMemoryCatalog::new()
        .with_locale(
            LocaleRecord::new("nk", 0x2001, "nordisk", NumberFormat::currency("kr", 2, ",", ".", 3, 8)),
            None,
        )
        .with_locale(
            LocaleRecord::new(
                "nk-NK",
                0x2002,
                "nordisk (Nordrike)",
                NumberFormat::currency("kr", 2, ",", ".", 3, 8),
            ),
            crown(),
        )
        .with_locale(
            LocaleRecord::new(
                "en-NK",
                0x2003,
                "English (Northkingdom)",
                NumberFormat::currency("NK$", 3, ".", ",", 0, 1),
            ),
            crown(),
        )
}

/// A catalog backed by a closure over locale ids, as a host adapter would be.
struct PrefixCatalog;

impl LocaleCatalog for PrefixCatalog {
    fn locales(&self) -> Vec<LocaleRecord> {
        ["zz-AA", "zz-BB", "zz"]
            .iter()
            .enumerate()
            .map(|(i, name)| LocaleRecord::new(*name, i as u32 + 1, *name, NumberFormat::invariant()))
            .collect()
    }

    fn derive_region(&self, locale: &LocaleRecord) -> Option<Region> {
        let (_, code) = locale.name.split_once('-')?;
        Some(Region::new(code, code, format!("{code}D"), "dollar"))
    }
}

#[test]
fn private_index_resolves_and_formats() {
    let index = RegionCultureIndex::build(&catalog());
    let options = MoneyOptions::new();
    let amount = Decimal::from_str("1234.5").unwrap();

    let money = index.money_for_currency(amount, "NKC", "", &options).unwrap();
    assert_eq!(money.region_culture().unwrap().culture_name(), "nk-NK");
    assert_eq!(money.iso_currency_code(), "NKC");
    assert_eq!(money.format("CO").unwrap(), "1.234,50 kr");

    let english = index.money_for_currency(amount, "NKC", "en-NK", &options).unwrap();
    assert_eq!(english.format("CO").unwrap(), "NK$1,234.500");
    let layout = index.locale("nk-NK").unwrap();
    assert_eq!(english.format_with("C", Some(&**layout)).unwrap(), "1.234,500 NK$");
}

#[test]
fn private_options_override_private_index() {
    let index = RegionCultureIndex::build(&catalog());
    let options = MoneyOptions::new();
    options.subscribe(|req: &mut MoneySelectionRequest<'_>| {
        let last = req.candidates().iter().last().cloned();
        if let Some(last) = last {
            req.select(last)?;
        }
        Ok(())
    });
    let money = index
        .money_for_currency(Decimal::ONE, "NKC", "nk-NK", &options)
        .unwrap();
    assert_eq!(money.region_culture().unwrap().culture_name(), "en-NK");
}

#[test]
fn culture_lookup_in_private_index() {
    let index = RegionCultureIndex::build(&catalog());
    assert!(index.money_for_culture(Decimal::ONE, "en-NK").is_ok());
    assert_eq!(
        index.money_for_culture(Decimal::ONE, "nk").unwrap_err(),
        MoneyError::UnknownCulture("nk".to_string())
    );
    assert_eq!(
        index.ambient_region_culture("nk").unwrap_err(),
        MoneyError::AmbientLocaleUnresolvable("nk".to_string())
    );
}

#[test]
fn trait_catalog_skips_regionless_entries() {
    let index = RegionCultureIndex::build(&PrefixCatalog);
    assert_eq!(index.currency_groups().len(), 2);
    assert_eq!(index.currency_group("AAD").unwrap().len(), 1);
    assert!(index.locale("zz").is_none());
}
