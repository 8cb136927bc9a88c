//! # Money
//!
//! An immutable decimal amount bound to a [`RegionCulture`]. The binding
//! fixes the currency (through the region's ISO code) and the preferred
//! formatting conventions (through the locale).
//!
//! ## Invariants
//!
//! - Values in different currencies never add, subtract, divide into a
//!   ratio, or order against each other. Those operations fail with a
//!   typed error.
//! - Zero is currency-agnostic for equality only: `0 USD == 0 EUR`.
//! - An unbound value (no region culture) reports [`FALLBACK_CURRENCY_CODE`].
//! - Arithmetic keeps the left operand's binding.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul, Neg};
use std::sync::Arc;

use rust_decimal::Decimal;
use vtypes_core::{ambient, MoneyError};

use crate::format::{MoneyFormat, MoneyStyle};
use crate::index::RegionCultureIndex;
use crate::provider::{FormatProvider, RegionFormatProvider};
use crate::region::RegionCulture;
use crate::selection::MoneyOptions;

/// Currency reported by a value with no region culture.
pub const FALLBACK_CURRENCY_CODE: &str = "USD";

/// A decimal amount in the currency of a region culture.
#[derive(Debug, Clone, Default)]
pub struct Money {
    amount: Decimal,
    region_culture: Option<Arc<RegionCulture>>,
}

impl Money {
    /// Bind `amount` to `region_culture`.
    pub fn new(amount: Decimal, region_culture: Arc<RegionCulture>) -> Self {
        Self {
            amount,
            region_culture: Some(region_culture),
        }
    }

    /// An amount with no region culture.
    pub fn unbound(amount: Decimal) -> Self {
        Self {
            amount,
            region_culture: None,
        }
    }

    /// Bind `amount` to the region culture selected for an ISO currency
    /// code from the global index, using the ambient culture and the
    /// global selection listeners.
    pub fn from_currency_code(amount: Decimal, iso_currency_code: &str) -> Result<Self, MoneyError> {
        let index = RegionCultureIndex::global();
        index.money_for_currency(
            amount,
            iso_currency_code,
            &ambient::current_culture(),
            MoneyOptions::global(),
        )
    }

    /// Bind `amount` to the ambient culture's region culture.
    ///
    /// # Errors
    ///
    /// [`MoneyError::AmbientLocaleUnresolvable`] if the ambient culture is
    /// neutral, invariant or unknown.
    pub fn from_ambient(amount: Decimal) -> Result<Self, MoneyError> {
        let culture = ambient::current_culture();
        let region_culture = RegionCultureIndex::global().ambient_region_culture(&culture)?;
        Ok(Self::new(amount, region_culture))
    }

    /// Bind `amount` to a named region culture in the global index.
    pub fn from_culture(amount: Decimal, culture_name: &str) -> Result<Self, MoneyError> {
        RegionCultureIndex::global().money_for_culture(amount, culture_name)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn region_culture(&self) -> Option<&Arc<RegionCulture>> {
        self.region_culture.as_ref()
    }

    /// ISO code of the bound region, or [`FALLBACK_CURRENCY_CODE`].
    pub fn iso_currency_code(&self) -> &str {
        self.region_culture
            .as_deref()
            .map_or(FALLBACK_CURRENCY_CODE, RegionCulture::iso_currency_code)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn same_currency(&self, other: &Money) -> bool {
        self.iso_currency_code() == other.iso_currency_code()
    }

    /// The same binding with a different amount.
    pub fn with_amount(&self, amount: Decimal) -> Self {
        Self {
            amount,
            region_culture: self.region_culture.clone(),
        }
    }

    fn require_same_currency(&self, operation: &'static str, other: &Money) -> Result<(), MoneyError> {
        if self.same_currency(other) {
            return Ok(());
        }
        Err(MoneyError::CurrencyMismatch {
            operation,
            left: self.iso_currency_code().to_string(),
            right: other.iso_currency_code().to_string(),
        })
    }

    pub fn try_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.require_same_currency("add", other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::ArithmeticOverflow("addition"))?;
        Ok(self.with_amount(amount))
    }

    pub fn try_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.require_same_currency("subtract", other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::ArithmeticOverflow("subtraction"))?;
        Ok(self.with_amount(amount))
    }

    /// Scale by a dimensionless factor. Accepts anything convertible to
    /// `Decimal`, including `f64`; NaN and infinities are rejected.
    pub fn try_mul<F>(&self, factor: F) -> Result<Money, MoneyError>
    where
        F: TryInto<Decimal> + Copy + std::fmt::Display,
    {
        let factor = to_decimal(factor)?;
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(MoneyError::ArithmeticOverflow("multiplication"))?;
        Ok(self.with_amount(amount))
    }

    pub fn try_div<F>(&self, divisor: F) -> Result<Money, MoneyError>
    where
        F: TryInto<Decimal> + Copy + std::fmt::Display,
    {
        let divisor = to_decimal(divisor)?;
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let amount = self
            .amount
            .checked_div(divisor)
            .ok_or(MoneyError::ArithmeticOverflow("division"))?;
        Ok(self.with_amount(amount))
    }

    /// `self / other` as a plain number. Both sides must share a currency.
    pub fn try_ratio(&self, other: &Money) -> Result<Decimal, MoneyError> {
        self.require_same_currency("divide", other)?;
        if other.amount.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_div(other.amount)
            .ok_or(MoneyError::ArithmeticOverflow("division"))
    }

    /// Order two values of the same currency by amount.
    ///
    /// # Errors
    ///
    /// [`MoneyError::IncomparableCurrencies`] when the codes differ, even
    /// if both amounts are zero.
    pub fn try_cmp(&self, other: &Money) -> Result<Ordering, MoneyError> {
        if !self.same_currency(other) {
            return Err(MoneyError::IncomparableCurrencies {
                left: self.iso_currency_code().to_string(),
                right: other.iso_currency_code().to_string(),
            });
        }
        Ok(self.amount.cmp(&other.amount))
    }

    /// Format with the ambient culture as the base conventions.
    pub fn format(&self, format: &str) -> Result<String, MoneyError> {
        self.format_with(format, None)
    }

    /// Format with `provider` as the base conventions.
    ///
    /// # Errors
    ///
    /// [`MoneyError::InvalidFormatString`] for strings outside the money
    /// format grammar.
    pub fn format_with(
        &self,
        format: &str,
        provider: Option<&dyn FormatProvider>,
    ) -> Result<String, MoneyError> {
        let format = MoneyFormat::parse(format)?;
        Ok(self.render(format, provider))
    }

    /// Write the amount in an already parsed format.
    pub fn render(&self, format: MoneyFormat, provider: Option<&dyn FormatProvider>) -> String {
        let region_culture = self.region_culture.as_deref();
        let number_format = match (format.original, region_culture) {
            (true, Some(rc)) => rc.number_format().clone(),
            _ => RegionFormatProvider::new(region_culture, provider)
                .number_format()
                .into_owned(),
        };
        match format.style {
            MoneyStyle::General | MoneyStyle::Currency => {
                number_format.format_currency(self.amount, format.precision)
            }
            MoneyStyle::Iso => format!(
                "{} {}",
                number_format.format_number(self.amount, format.precision),
                self.iso_currency_code()
            ),
        }
    }
}

fn to_decimal<F>(value: F) -> Result<Decimal, MoneyError>
where
    F: TryInto<Decimal> + Copy + std::fmt::Display,
{
    value
        .try_into()
        .map_err(|_| MoneyError::InvalidFactor(value.to_string()))
}

impl RegionCultureIndex {
    /// Bind `amount` to the region culture selected for an ISO currency
    /// code in this index.
    pub fn money_for_currency(
        &self,
        amount: Decimal,
        iso_currency_code: &str,
        ambient_culture: &str,
        options: &MoneyOptions,
    ) -> Result<Money, MoneyError> {
        let region_culture =
            self.select_region_culture_with(iso_currency_code, ambient_culture, options)?;
        Ok(Money::new(amount, region_culture))
    }

    /// Bind `amount` to a named region culture in this index.
    pub fn money_for_culture(&self, amount: Decimal, culture_name: &str) -> Result<Money, MoneyError> {
        let region_culture = self
            .region_culture(culture_name)
            .ok_or_else(|| MoneyError::UnknownCulture(culture_name.to_string()))?;
        Ok(Money::new(amount, Arc::clone(region_culture)))
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount && (self.amount.is_zero() || self.same_currency(other))
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.amount.is_zero() && other.amount.is_zero() {
            return Some(Ordering::Equal);
        }
        self.try_cmp(other).ok()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(MoneyFormat::GENERAL, None))
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.amount
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::from_ambient(amount)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money {
            amount: -self.amount,
            region_culture: self.region_culture,
        }
    }
}

/// Checked scaling; `m * factor` is `m.try_mul(factor)`.
impl Mul<Decimal> for Money {
    type Output = Result<Money, MoneyError>;

    fn mul(self, factor: Decimal) -> Self::Output {
        self.try_mul(factor)
    }
}

impl Mul<Decimal> for &Money {
    type Output = Result<Money, MoneyError>;

    fn mul(self, factor: Decimal) -> Self::Output {
        self.try_mul(factor)
    }
}

/// Checked division; `m / divisor` is `m.try_div(divisor)`.
impl Div<Decimal> for Money {
    type Output = Result<Money, MoneyError>;

    fn div(self, divisor: Decimal) -> Self::Output {
        self.try_div(divisor)
    }
}

impl Div<Decimal> for &Money {
    type Output = Result<Money, MoneyError>;

    fn div(self, divisor: Decimal) -> Self::Output {
        self.try_div(divisor)
    }
}
