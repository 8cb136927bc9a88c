//! # Number Formatting Conventions
//!
//! A [`NumberFormat`] is the per-culture description of how amounts are
//! written: which currency symbol, how many decimals, which separators, and
//! where the symbol and sign go.
//!
//! ## Layout Patterns
//!
//! Symbol and sign placement use the conventional numbered layouts, where
//! `$` stands for the currency symbol, `n` for the digits and `-` for the
//! negative sign:
//!
//! | Table | Count | Examples |
//! |-------|-------|----------|
//! | currency positive | 4 | `$n`, `n $` |
//! | currency negative | 17 | `($n)`, `-n $`, `$ -n` |
//! | number negative | 5 | `(n)`, `-n`, `n-` |
//!
//! An out-of-range pattern index falls back to entry 0 of its table for
//! currency patterns and to `-n` for numbers.
//!
//! ## Rounding and Grouping
//!
//! Amounts are rounded half away from zero to the requested number of
//! decimals. A value that rounds to zero is written without a sign. Digit
//! group sizes are applied right to left; the last size repeats, and a
//! size of `0` leaves the remaining digits ungrouped.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Currency symbol of the invariant culture.
pub const INVARIANT_CURRENCY_SYMBOL: &str = "\u{a4}";

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

const CURRENCY_POSITIVE_PATTERNS: [&str; 4] = ["$n", "n$", "$ n", "n $"];

const CURRENCY_NEGATIVE_PATTERNS: [&str; 17] = [
    "($n)", "-$n", "$-n", "$n-", "(n$)", "-n$", "n-$", "n$-", "-n $", "-$ n", "n $-", "$ n-",
    "$ -n", "n- $", "($ n)", "(n $)", "$- n",
];

const NUMBER_NEGATIVE_PATTERNS: [&str; 5] = ["(n)", "-n", "- n", "n-", "n -"];

/// Culture-specific rules for writing currency amounts and plain numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub currency_symbol: String,
    pub currency_decimal_digits: u32,
    pub currency_decimal_separator: String,
    pub currency_group_separator: String,
    pub currency_group_sizes: Vec<u8>,
    /// Index into the 4 positive currency layouts.
    pub currency_positive_pattern: u8,
    /// Index into the 17 negative currency layouts.
    pub currency_negative_pattern: u8,
    pub number_decimal_digits: u32,
    pub number_decimal_separator: String,
    pub number_group_separator: String,
    pub number_group_sizes: Vec<u8>,
    /// Index into the 5 negative number layouts.
    pub number_negative_pattern: u8,
    pub negative_sign: String,
}

impl NumberFormat {
    /// Conventions of the invariant culture: `¤1,234.56`, `(¤1,234.56)`.
    pub fn invariant() -> Self {
        Self {
            currency_symbol: INVARIANT_CURRENCY_SYMBOL.to_string(),
            currency_decimal_digits: 2,
            currency_decimal_separator: ".".to_string(),
            currency_group_separator: ",".to_string(),
            currency_group_sizes: vec![3],
            currency_positive_pattern: 0,
            currency_negative_pattern: 0,
            number_decimal_digits: 2,
            number_decimal_separator: ".".to_string(),
            number_group_separator: ",".to_string(),
            number_group_sizes: vec![3],
            number_negative_pattern: 1,
            negative_sign: "-".to_string(),
        }
    }

    /// Conventions sharing one decimal and group separator between
    /// currency and numbers, grouped in threes.
    pub fn currency(
        symbol: &str,
        decimal_digits: u32,
        decimal_separator: &str,
        group_separator: &str,
        positive_pattern: u8,
        negative_pattern: u8,
    ) -> Self {
        Self {
            currency_symbol: symbol.to_string(),
            currency_decimal_digits: decimal_digits,
            currency_decimal_separator: decimal_separator.to_string(),
            currency_group_separator: group_separator.to_string(),
            currency_positive_pattern: positive_pattern,
            currency_negative_pattern: negative_pattern,
            number_decimal_digits: decimal_digits,
            number_decimal_separator: decimal_separator.to_string(),
            number_group_separator: group_separator.to_string(),
            ..Self::invariant()
        }
    }

    /// Replace the digit group sizes for both currency and numbers.
    pub fn with_group_sizes(mut self, sizes: &[u8]) -> Self {
        self.currency_group_sizes = sizes.to_vec();
        self.number_group_sizes = sizes.to_vec();
        self
    }

    /// Write `amount` as currency. `precision` overrides
    /// [`NumberFormat::currency_decimal_digits`].
    pub fn format_currency(&self, amount: Decimal, precision: Option<u32>) -> String {
        let decimals = precision.unwrap_or(self.currency_decimal_digits);
        let (negative, digits) = render_digits(
            amount,
            decimals,
            &self.currency_decimal_separator,
            &self.currency_group_separator,
            &self.currency_group_sizes,
        );
        let pattern = if negative {
            pattern_at(&CURRENCY_NEGATIVE_PATTERNS, self.currency_negative_pattern, 0)
        } else {
            pattern_at(&CURRENCY_POSITIVE_PATTERNS, self.currency_positive_pattern, 0)
        };
        expand(pattern, &digits, &self.currency_symbol, &self.negative_sign)
    }

    /// Write `amount` as a grouped number. `precision` overrides
    /// [`NumberFormat::number_decimal_digits`].
    pub fn format_number(&self, amount: Decimal, precision: Option<u32>) -> String {
        let decimals = precision.unwrap_or(self.number_decimal_digits);
        let (negative, digits) = render_digits(
            amount,
            decimals,
            &self.number_decimal_separator,
            &self.number_group_separator,
            &self.number_group_sizes,
        );
        if !negative {
            return digits;
        }
        let pattern = pattern_at(&NUMBER_NEGATIVE_PATTERNS, self.number_negative_pattern, 1);
        expand(pattern, &digits, "", &self.negative_sign)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::invariant()
    }
}

fn pattern_at<'a>(table: &[&'a str], index: u8, fallback: usize) -> &'a str {
    table
        .get(usize::from(index))
        .or_else(|| table.get(fallback))
        .copied()
        .unwrap_or("n")
}

fn expand(pattern: &str, digits: &str, symbol: &str, negative_sign: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + digits.len() + symbol.len());
    for c in pattern.chars() {
        match c {
            'n' => out.push_str(digits),
            '$' => out.push_str(symbol),
            '-' => out.push_str(negative_sign),
            other => out.push(other),
        }
    }
    out
}

/// Round, group and join the digits of `amount`. Returns whether the
/// rounded value is negative (and nonzero) along with the unsigned text.
fn render_digits(
    amount: Decimal,
    decimals: u32,
    decimal_separator: &str,
    group_separator: &str,
    group_sizes: &[u8],
) -> (bool, String) {
    let rounded = amount.round_dp_with_strategy(
        decimals.min(MAX_DECIMAL_SCALE),
        RoundingStrategy::MidpointAwayFromZero,
    );
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = rounded.abs().to_string();
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut out = group_digits(integer, group_sizes, group_separator);
    if decimals > 0 {
        out.push_str(decimal_separator);
        out.push_str(fraction);
        for _ in fraction.len()..decimals as usize {
            out.push('0');
        }
    }
    (negative, out)
}

fn group_digits(digits: &str, sizes: &[u8], separator: &str) -> String {
    let Some(&first) = sizes.first() else {
        return digits.to_string();
    };
    let mut groups = Vec::new();
    let mut end = digits.len();
    let mut size = usize::from(first);
    let mut next = 1;
    while end > 0 {
        if size == 0 || size >= end {
            groups.push(&digits[..end]);
            break;
        }
        groups.push(&digits[end - size..end]);
        end -= size;
        if let Some(&s) = sizes.get(next) {
            size = usize::from(s);
            next += 1;
        }
    }
    groups.reverse();
    groups.join(separator)
}
