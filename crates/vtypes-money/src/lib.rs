//! # vtypes-money — Locale-Aware Money
//!
//! A [`Money`] value is a decimal amount bound to a [`RegionCulture`]: a
//! locale paired with the region (and so the ISO currency) it belongs to.
//!
//! ## Data Flow
//!
//! ```text
//! LocaleCatalog ──build──▶ RegionCultureIndex ──select──▶ RegionCulture
//!                                                  ▲             │
//!                                    MoneyOptions listeners      ▼
//!                                                              Money ──format──▶ String
//!                                                                ▲
//!                                          FormatProvider ───────┘
//! ```
//!
//! - [`catalog`]: the locale source boundary and the built-in data.
//! - [`index`]: culture and currency views, built once per catalog.
//! - [`selection`]: picks one region culture for a shared currency code,
//!   with host-supplied overrides.
//! - [`provider`] and [`number_format`]: culture conventions for text.
//! - [`format`]: the `G`/`C`/`I` format string grammar.
//!
//! ## Crate Policy
//!
//! - Errors are [`MoneyError`] from `vtypes-core`.
//! - No `unsafe`, no panics outside tests.

pub mod catalog;
pub mod format;
pub mod index;
pub mod money;
pub mod number_format;
pub mod provider;
pub mod region;
pub mod selection;

pub use catalog::{BuiltinCatalog, InMemoryCatalog, LocaleCatalog, LocaleRecord, Region};
pub use format::{MoneyFormat, MoneyStyle};
pub use index::{CurrencyGroup, RegionCultureIndex};
pub use money::{Money, FALLBACK_CURRENCY_CODE};
pub use number_format::NumberFormat;
pub use provider::{AmbientFormatProvider, FormatProvider, RegionFormatProvider};
pub use region::RegionCulture;
pub use selection::{ListenerId, MoneyOptions, MoneySelectionRequest, SelectionListener};
pub use vtypes_core::MoneyError;
