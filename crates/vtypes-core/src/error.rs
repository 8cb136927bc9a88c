//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the vtypes workspace. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every failure is local and synchronous. Nothing here is retryable;
//!   callers either handle the error or avoid the triggering condition
//!   (for example by checking currency codes before combining values).
//! - Currency errors carry both ISO codes so the message is actionable.
//! - Format errors carry the offending format string verbatim.

use thiserror::Error;

/// Top-level error type for the vtypes workspace.
#[derive(Error, Debug)]
pub enum VtypesError {
    /// Money construction, arithmetic or formatting failed.
    #[error("money error: {0}")]
    Money(#[from] MoneyError),

    /// Row version construction, parsing or formatting failed.
    #[error("row version error: {0}")]
    RowVersion(#[from] RowVersionError),

    /// A keyed collection rejected an insertion.
    #[error("collection error: {0}")]
    Collection(#[from] KeyedCollectionError),

    /// Settings could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors produced by the `Money` value type and the region selection
/// algorithm that backs its constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// No locale in the index uses the requested ISO currency code.
    #[error("the currency code {0:?} is not a recognized ISO currency code")]
    UnknownCurrencyCode(String),

    /// No region culture is registered under the given culture name.
    #[error("no region culture named {0:?}")]
    UnknownCulture(String),

    /// A selection listener chose a region culture outside the candidate group.
    #[error("region culture {culture:?} is not one of the candidates for currency {currency_code}")]
    InvalidSelection {
        /// Culture name of the rejected selection.
        culture: String,
        /// Currency code of the candidate group.
        currency_code: String,
    },

    /// After all listeners ran, no region culture was selected.
    #[error("no region culture selected for currency {0}; subscribe a selection listener to provide one")]
    NoSelectionAvailable(String),

    /// The ambient culture has no region, so it cannot imply a currency.
    #[error("the ambient culture {0:?} has no region data; specify a culture or an ISO currency code")]
    AmbientLocaleUnresolvable(String),

    /// Addition, subtraction or ratio attempted across currencies.
    #[error("cannot {operation} money values in different currencies ({left} and {right})")]
    CurrencyMismatch {
        /// The arithmetic operation that was attempted.
        operation: &'static str,
        /// Currency code of the left operand.
        left: String,
        /// Currency code of the right operand.
        right: String,
    },

    /// Ordering attempted across currencies.
    #[error("cannot compare money values in different currencies ({left} and {right})")]
    IncomparableCurrencies {
        /// Currency code of the left operand.
        left: String,
        /// Currency code of the right operand.
        right: String,
    },

    /// The format string does not match `^[GCI](O?)(\d*)$`.
    #[error("the money format string {0:?} is invalid")]
    InvalidFormatString(String),

    /// The decimal result does not fit the amount type.
    #[error("arithmetic overflow while computing {0}")]
    ArithmeticOverflow(&'static str),

    /// Division of a money value by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A scaling factor could not be represented as a decimal (NaN, infinity).
    #[error("the factor {0} cannot be represented as a decimal")]
    InvalidFactor(String),
}

/// Errors produced by the `RowVersion` value type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowVersionError {
    /// The byte buffer is not exactly eight bytes long.
    #[error("row version values must be {expected} bytes long, got {actual}")]
    InvalidLength {
        /// Required length (always 8).
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// The format selector is not one of `G g S s O o M m H h`.
    #[error("invalid row version format string {0:?}")]
    InvalidFormatString(String),

    /// Textual input is not a recognized hexadecimal representation.
    #[error("invalid row version text {0:?}")]
    InvalidHex(String),

    /// The tick count cannot be rendered as a calendar date.
    #[error("tick count {0} is outside the representable date range")]
    TimestampOutOfRange(i64),
}

/// Error raised when a keyed collection rejects an item.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyedCollectionError {
    /// An item with the same key is already present.
    #[error("an item with key {0:?} is already present")]
    DuplicateKey(String),

    /// The item does not satisfy the collection's admission rule.
    #[error("item {key:?} rejected: {reason}")]
    Rejected {
        /// Key of the rejected item.
        key: String,
        /// Why the collection refused it.
        reason: String,
    },
}

/// Error loading [`crate::config::Settings`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid YAML for the settings schema.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_yaml::Error),
}
