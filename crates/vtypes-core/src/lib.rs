#![deny(missing_docs)]

//! # vtypes-core — Shared Foundations
//!
//! The leaf crate of the vtypes workspace. It holds everything the two
//! value-type crates (`vtypes-money`, `vtypes-rowversion`) share:
//!
//! - **Structured errors.** One `thiserror` enum per value type plus the
//!   umbrella [`VtypesError`].
//! - **Keyed collections.** Insertion-ordered sequences indexed by a key
//!   derived from each item, used for every index over locale data.
//! - **Ambient culture.** Thread-scoped, process-wide and environment
//!   sources for the caller's current culture.
//! - **Settings.** YAML/environment configuration for hosts.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vtypes-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod ambient;
pub mod config;
pub mod error;
pub mod keyed;

// Re-export primary types for ergonomic imports.
pub use config::Settings;
pub use error::{ConfigError, KeyedCollectionError, MoneyError, RowVersionError, VtypesError};
pub use keyed::{Keyed, KeyedCollection};
