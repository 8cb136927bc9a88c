//! # Regions Subcommand
//!
//! List the currency groups of the built-in region index.
//!
//! ```bash
//! vtypes regions
//! vtypes regions --currency EUR
//! vtypes regions --json
//! ```

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use vtypes_money::{CurrencyGroup, RegionCultureIndex};

/// Arguments for the regions subcommand.
#[derive(Args, Debug)]
pub struct RegionsArgs {
    /// Only this ISO currency code.
    #[arg(long)]
    pub currency: Option<String>,

    /// Print as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct GroupView {
    pub currency: String,
    pub cultures: Vec<CultureView>,
}

#[derive(Debug, Serialize)]
pub struct CultureView {
    pub name: String,
    pub native_name: String,
    pub region: String,
    pub region_name: String,
    pub currency_symbol: String,
}

/// Execute the regions subcommand.
pub fn run_regions(args: &RegionsArgs) -> Result<u8> {
    let groups = collect_groups(RegionCultureIndex::global(), args.currency.as_deref())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(0);
    }
    for group in &groups {
        println!("{} ({} cultures)", group.currency, group.cultures.len());
        for culture in &group.cultures {
            println!(
                "  {:<8} {:<3} {:<4} {}",
                culture.name, culture.region, culture.currency_symbol, culture.native_name
            );
        }
    }
    println!();
    println!("Total: {} currencies", groups.len());
    Ok(0)
}

/// Views of every group, or of the one named by `currency`.
pub fn collect_groups(index: &RegionCultureIndex, currency: Option<&str>) -> Result<Vec<GroupView>> {
    match currency {
        Some(code) => {
            let code = code.trim().to_ascii_uppercase();
            let group = index
                .currency_group(&code)
                .with_context(|| format!("no region uses currency {code}"))?;
            Ok(vec![view(group)])
        }
        None => Ok(index.currency_groups().iter().map(view).collect()),
    }
}

fn view(group: &CurrencyGroup) -> GroupView {
    GroupView {
        currency: group.iso_currency_code().to_string(),
        cultures: group
            .iter()
            .map(|rc| CultureView {
                name: rc.culture_name().to_string(),
                native_name: rc.locale().native_name.clone(),
                region: rc.region().code.clone(),
                region_name: rc.region().english_name.clone(),
                currency_symbol: rc.number_format().currency_symbol.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_currency() {
        let groups = collect_groups(RegionCultureIndex::global(), Some("chf")).unwrap();
        assert_eq!(groups.len(), 1);
        let names: Vec<&str> = groups[0].cultures.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["de-CH", "fr-CH", "it-CH"]);
    }

    #[test]
    fn test_all_groups_cover_every_region_culture() {
        let index = RegionCultureIndex::global();
        let groups = collect_groups(index, None).unwrap();
        let total: usize = groups.iter().map(|g| g.cultures.len()).sum();
        assert_eq!(total, index.all_region_cultures().len());
    }

    #[test]
    fn test_unknown_currency() {
        assert!(collect_groups(RegionCultureIndex::global(), Some("XYZ")).is_err());
    }

    #[test]
    fn test_json_shape() {
        let groups = collect_groups(RegionCultureIndex::global(), Some("JPY")).unwrap();
        let json = serde_json::to_value(&groups).unwrap();
        assert_eq!(json[0]["currency"], "JPY");
        assert_eq!(json[0]["cultures"][0]["name"], "ja-JP");
        assert_eq!(json[0]["cultures"][0]["region"], "JP");
    }
}
