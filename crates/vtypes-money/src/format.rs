//! # Money Format Strings
//!
//! `^[GCI](O?)([0-9]*)$`, letters in either case:
//!
//! - `G`, `C`: currency text, e.g. `$1,234.56`.
//! - `I`: number and ISO code, e.g. `1,234.56 USD`.
//! - `O`: use the bound region culture's own conventions and ignore the
//!   caller's provider.
//! - digits: number of decimals, overriding the region's default (0..=99).
//!
//! A blank string means `G`.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use vtypes_core::MoneyError;

const MONEY_FORMAT_PATTERN: &str = r"(?i)^([GCI])(O?)([0-9]*)$";

/// Largest explicit precision accepted in a format string.
pub const MAX_PRECISION: u32 = 99;

fn pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(MONEY_FORMAT_PATTERN).ok())
        .as_ref()
}

/// What kind of text a money format produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoneyStyle {
    /// Same output as [`MoneyStyle::Currency`].
    General,
    Currency,
    Iso,
}

/// A parsed money format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoneyFormat {
    pub style: MoneyStyle,
    /// Ignore any caller-supplied provider.
    pub original: bool,
    /// Decimal digits; `None` keeps the region's default.
    pub precision: Option<u32>,
}

impl MoneyFormat {
    pub const GENERAL: Self = Self::new(MoneyStyle::General, false);
    pub const CURRENCY: Self = Self::new(MoneyStyle::Currency, false);
    pub const ISO: Self = Self::new(MoneyStyle::Iso, false);
    pub const GENERAL_ORIGINAL: Self = Self::new(MoneyStyle::General, true);
    pub const CURRENCY_ORIGINAL: Self = Self::new(MoneyStyle::Currency, true);
    pub const ISO_ORIGINAL: Self = Self::new(MoneyStyle::Iso, true);

    pub const fn new(style: MoneyStyle, original: bool) -> Self {
        Self {
            style,
            original,
            precision: None,
        }
    }

    pub const fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Parse a format string.
    ///
    /// # Errors
    ///
    /// [`MoneyError::InvalidFormatString`] if the string does not match the
    /// grammar or the precision exceeds [`MAX_PRECISION`].
    pub fn parse(format: &str) -> Result<Self, MoneyError> {
        if format.trim().is_empty() {
            return Ok(Self::GENERAL);
        }
        let invalid = || MoneyError::InvalidFormatString(format.to_string());
        let captures = pattern()
            .and_then(|re| re.captures(format))
            .ok_or_else(invalid)?;

        let style = match captures.get(1).map(|m| m.as_str().to_ascii_uppercase()) {
            Some(letter) if letter == "C" => MoneyStyle::Currency,
            Some(letter) if letter == "I" => MoneyStyle::Iso,
            Some(_) => MoneyStyle::General,
            None => return Err(invalid()),
        };
        let original = captures.get(2).is_some_and(|m| !m.as_str().is_empty());
        let precision = match captures.get(3).map(|m| m.as_str()) {
            None | Some("") => None,
            Some(digits) => {
                let value: u32 = digits.parse().map_err(|_| invalid())?;
                if value > MAX_PRECISION {
                    return Err(invalid());
                }
                Some(value)
            }
        };
        Ok(Self {
            style,
            original,
            precision,
        })
    }
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::GENERAL
    }
}

impl FromStr for MoneyFormat {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for MoneyFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self.style {
            MoneyStyle::General => 'G',
            MoneyStyle::Currency => 'C',
            MoneyStyle::Iso => 'I',
        };
        write!(f, "{letter}")?;
        if self.original {
            write!(f, "O")?;
        }
        if let Some(precision) = self.precision {
            write!(f, "{precision}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_general() {
        assert_eq!(MoneyFormat::parse("").unwrap(), MoneyFormat::GENERAL);
        assert_eq!(MoneyFormat::parse(" \t").unwrap(), MoneyFormat::default());
    }

    #[test]
    fn test_parse_components() {
        let f = MoneyFormat::parse("io3").unwrap();
        assert_eq!(f, MoneyFormat::ISO_ORIGINAL.with_precision(3));
        assert_eq!(MoneyFormat::parse("C").unwrap(), MoneyFormat::CURRENCY);
        assert_eq!(MoneyFormat::parse("g0").unwrap().precision, Some(0));
        assert_eq!(MoneyFormat::parse("CO").unwrap(), MoneyFormat::CURRENCY_ORIGINAL);
        assert_eq!(MoneyFormat::parse("C099").unwrap().precision, Some(99));
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["X", "N2", "GOO", "G-1", " G", "G2 ", "C100", "I\u{663}", "C99999999999"] {
            assert_eq!(
                MoneyFormat::parse(bad),
                Err(MoneyError::InvalidFormatString(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for f in ["G", "CO", "I4", "GO12"] {
            assert_eq!(MoneyFormat::parse(f).unwrap().to_string(), f);
        }
    }
}
