//! # Money Subcommand
//!
//! Bind an amount to a currency or culture and format it.
//!
//! ```bash
//! vtypes money 1234.5 --currency EUR --format CO
//! vtypes money 1234.5 --currency USD --prefer-culture es-EC --format I
//! vtypes money -- -42 --region-culture ja-JP --provider-culture de-DE
//! vtypes --culture fr-CA money 99.95
//! ```
//!
//! Without `--currency` or `--region-culture` the amount is bound to the
//! ambient culture (global `--culture`, settings file, or environment).

use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args;
use rust_decimal::Decimal;

use vtypes_money::{
    FormatProvider, ListenerId, Money, MoneyOptions, MoneySelectionRequest, RegionCultureIndex,
};

/// Arguments for the money subcommand.
#[derive(Args, Debug)]
pub struct MoneyArgs {
    /// Decimal amount, e.g. `1234.56`.
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// ISO 4217 currency code; the region culture is selected from it.
    #[arg(long, conflicts_with = "region_culture")]
    pub currency: Option<String>,

    /// Bind to this region culture directly (e.g. `fr-CH`).
    #[arg(long)]
    pub region_culture: Option<String>,

    /// Money format string (`G`, `C2`, `IO`, ...).
    #[arg(long, short, default_value = "G")]
    pub format: String,

    /// Culture whose layout is used as the base conventions.
    #[arg(long)]
    pub provider_culture: Option<String>,

    /// When the currency is shared, select this culture if it is a candidate.
    #[arg(long, requires = "currency")]
    pub prefer_culture: Option<String>,
}

/// Execute the money subcommand.
pub fn run_money(args: &MoneyArgs) -> Result<u8> {
    println!("{}", render_money(args, MoneyOptions::global())?);
    Ok(0)
}

/// Build and format the money value described by `args`.
pub fn render_money(args: &MoneyArgs, options: &MoneyOptions) -> Result<String> {
    let money = build_money(args, options)?;
    if let Some(rc) = money.region_culture() {
        tracing::info!(culture = rc.culture_name(), currency = rc.iso_currency_code(), "money bound");
    }

    let index = RegionCultureIndex::global();
    let provider: Option<&dyn FormatProvider> = match &args.provider_culture {
        Some(name) => {
            let locale = index
                .locale(name)
                .with_context(|| format!("no culture named {name:?} in the region index"))?;
            Some(&**locale)
        }
        None => None,
    };
    money
        .format_with(&args.format, provider)
        .with_context(|| format!("cannot format with {:?}", args.format))
}

fn build_money(args: &MoneyArgs, options: &MoneyOptions) -> Result<Money> {
    let amount = Decimal::from_str(args.amount.trim())
        .with_context(|| format!("{:?} is not a decimal amount", args.amount))?;

    if let Some(code) = &args.currency {
        let preference = args
            .prefer_culture
            .as_ref()
            .map(|culture| prefer(options, culture.clone()));
        let result = RegionCultureIndex::global().money_for_currency(
            amount,
            code,
            &vtypes_core::ambient::current_culture(),
            options,
        );
        if let Some(id) = preference {
            options.unsubscribe(id);
        }
        return result.with_context(|| format!("cannot bind {amount} to currency {code}"));
    }
    if let Some(culture) = &args.region_culture {
        return Money::from_culture(amount, culture)
            .with_context(|| format!("cannot bind {amount} to culture {culture}"));
    }
    Money::from_ambient(amount).context("cannot bind the amount to the ambient culture")
}

/// Subscribe a listener that picks `culture` whenever it is a candidate.
fn prefer(options: &MoneyOptions, culture: String) -> ListenerId {
    options.subscribe(move |req: &mut MoneySelectionRequest<'_>| {
        if req.candidates().get(&culture).is_some() {
            req.select_culture(&culture)?;
        } else {
            tracing::warn!(culture = %culture, currency = req.currency_code(), "preferred culture is not a candidate");
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtypes_core::ambient;

    fn args(amount: &str) -> MoneyArgs {
        MoneyArgs {
            amount: amount.to_string(),
            currency: None,
            region_culture: None,
            format: "G".to_string(),
            provider_culture: None,
            prefer_culture: None,
        }
    }

    #[test]
    fn test_currency_with_preference() {
        let _culture = ambient::scoped_culture("en-US");
        let options = MoneyOptions::new();
        let text = render_money(
            &MoneyArgs {
                currency: Some("USD".to_string()),
                prefer_culture: Some("es-EC".to_string()),
                format: "CO".to_string(),
                ..args("1234.5")
            },
            &options,
        )
        .unwrap();
        assert_eq!(text, "$ 1.234,50");
        assert_eq!(options.listener_count(), 0);
    }

    #[test]
    fn test_provider_culture_layout() {
        let _culture = ambient::scoped_culture("en-US");
        let text = render_money(
            &MoneyArgs {
                region_culture: Some("ja-JP".to_string()),
                provider_culture: Some("de-DE".to_string()),
                ..args("-42")
            },
            &MoneyOptions::new(),
        )
        .unwrap();
        assert_eq!(text, "-42 \u{a5}");
    }

    #[test]
    fn test_ambient_binding() {
        let _culture = ambient::scoped_culture("en-GB");
        let text = render_money(&args("7"), &MoneyOptions::new()).unwrap();
        assert_eq!(text, "\u{a3}7.00");
    }

    #[test]
    fn test_errors_carry_context() {
        let options = MoneyOptions::new();
        let err = render_money(&args("twelve"), &options).unwrap_err();
        assert!(err.to_string().contains("not a decimal"));
        let err = render_money(
            &MoneyArgs {
                currency: Some("XYZ".to_string()),
                ..args("1")
            },
            &options,
        )
        .unwrap_err();
        assert!(err.to_string().contains("XYZ"));
    }
}
