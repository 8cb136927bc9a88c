//! # RowVersion — 8-Byte Optimistic-Concurrency Token
//!
//! A `RowVersion` is an immutable 8-byte buffer. The bytes are the
//! little-endian encoding of a 64-bit value and can be viewed three ways:
//!
//! - **raw bytes** in storage order, exactly as supplied;
//! - **unsigned 64-bit integer** (`to_u64`);
//! - **tick timestamp** (`as_timestamp`), the same 64 bits read as a signed
//!   tick count.
//!
//! ## Invariants
//!
//! - The buffer is always exactly 8 bytes; the type is a `[u8; 8]`.
//! - [`RowVersion::ZERO`] (also `Default`) has all bytes zero.
//! - Equality compares bytes; ordering compares the unsigned value. The two
//!   agree because the little-endian encoding is a bijection, but ordering
//!   is *not* byte-lexicographic.

use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use vtypes_core::RowVersionError;

use crate::format::{Encoding, LetterCase, RowVersionFormat};
use crate::ticks::TickTimestamp;

/// Length of a row version buffer in bytes.
pub const ROW_VERSION_SIZE: usize = 8;

/// An opaque 8-byte row version stamp.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RowVersion([u8; ROW_VERSION_SIZE]);

impl RowVersion {
    /// The all-zero row version.
    pub const ZERO: Self = Self([0; ROW_VERSION_SIZE]);

    /// Wrap bytes already in storage (little-endian) order.
    pub const fn from_le_bytes(bytes: [u8; ROW_VERSION_SIZE]) -> Self {
        Self(bytes)
    }

    /// Build from a byte slice in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`RowVersionError::InvalidLength`] unless the slice is
    /// exactly 8 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RowVersionError> {
        let buffer: [u8; ROW_VERSION_SIZE] =
            bytes.try_into().map_err(|_| RowVersionError::InvalidLength {
                expected: ROW_VERSION_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(buffer))
    }

    /// Like [`RowVersion::from_slice()`], with absent input meaning
    /// [`RowVersion::ZERO`]. Mirrors a nullable `rowversion` column.
    pub fn from_optional_bytes(bytes: Option<&[u8]>) -> Result<Self, RowVersionError> {
        bytes.map_or(Ok(Self::ZERO), Self::from_slice)
    }

    /// Encode an unsigned value (e.g. an Oracle `ORA_ROWSCN`).
    pub const fn from_u64(value: u64) -> Self {
        Self(value.to_le_bytes())
    }

    /// Encode a raw tick count, bit-reinterpreted as unsigned.
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks.to_le_bytes())
    }

    /// Encode a tick timestamp.
    pub const fn from_timestamp(timestamp: TickTimestamp) -> Self {
        Self::from_ticks(timestamp.ticks())
    }

    /// The bytes in storage order.
    pub const fn as_bytes(&self) -> &[u8; ROW_VERSION_SIZE] {
        &self.0
    }

    /// The unsigned 64-bit view.
    pub const fn to_u64(&self) -> u64 {
        u64::from_le_bytes(self.0)
    }

    /// The tick-timestamp view of the same 64 bits.
    pub const fn as_timestamp(&self) -> TickTimestamp {
        TickTimestamp::from_ticks(i64::from_le_bytes(self.0))
    }

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0; ROW_VERSION_SIZE]
    }

    /// Render with a format string (see [`crate::format`]).
    ///
    /// # Errors
    ///
    /// - [`RowVersionError::InvalidFormatString`] for an unknown selector.
    /// - [`RowVersionError::TimestampOutOfRange`] if `M`/`m` is requested
    ///   for a tick count with no calendar representation.
    pub fn format(&self, format: &str) -> Result<String, RowVersionError> {
        self.format_with(RowVersionFormat::parse(format)?)
    }

    /// Render with an already-parsed format.
    pub fn format_with(&self, format: RowVersionFormat) -> Result<String, RowVersionError> {
        match format.encoding {
            Encoding::General | Encoding::MsSql => Ok(self.to_sql_literal(format.case)),
            Encoding::Oracle => Ok(self.to_u64().to_string()),
            Encoding::MySql => self.as_timestamp().to_sql_datetime(),
            Encoding::HexViewer => Ok(self.to_hex_viewer(format.case)),
        }
    }

    /// `0x` followed by the bytes most-significant first.
    fn to_sql_literal(&self, case: LetterCase) -> String {
        let mut out = String::with_capacity(2 + ROW_VERSION_SIZE * 2);
        out.push_str("0x");
        for b in self.0.iter().rev() {
            push_hex_byte(&mut out, *b, case);
        }
        out
    }

    /// Storage-order bytes separated by single spaces.
    fn to_hex_viewer(&self, case: LetterCase) -> String {
        let mut out = String::with_capacity(ROW_VERSION_SIZE * 3 - 1);
        for (i, b) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            push_hex_byte(&mut out, *b, case);
        }
        out
    }
}

fn push_hex_byte(out: &mut String, byte: u8, case: LetterCase) {
    // Writing to a String cannot fail.
    let _ = match case {
        LetterCase::Lower => write!(out, "{byte:02x}"),
        LetterCase::Upper => write!(out, "{byte:02X}"),
    };
}

fn parse_hex_byte(text: &str, original: &str) -> Result<u8, RowVersionError> {
    if text.len() != 2 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(RowVersionError::InvalidHex(original.to_string()));
    }
    u8::from_str_radix(text, 16).map_err(|_| RowVersionError::InvalidHex(original.to_string()))
}

impl Ord for RowVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_u64().cmp(&other.to_u64())
    }
}

impl PartialOrd for RowVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for RowVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RowVersion({})", self.to_sql_literal(LetterCase::Lower))
    }
}

/// Default format: lowercase General.
impl fmt::Display for RowVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql_literal(LetterCase::Lower))
    }
}

/// 16 hex digits, most-significant byte first; `{:#x}` adds the `0x` prefix.
impl fmt::LowerHex for RowVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literal = self.to_sql_literal(LetterCase::Lower);
        f.write_str(if f.alternate() { &literal } else { &literal[2..] })
    }
}

impl fmt::UpperHex for RowVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literal = self.to_sql_literal(LetterCase::Upper);
        f.write_str(if f.alternate() { &literal } else { &literal[2..] })
    }
}

impl FromStr for RowVersion {
    type Err = RowVersionError;

    /// Parse the General/MsSql literal (`0x` + 16 hex digits, either case)
    /// or the HexViewer form (8 space-separated hex bytes).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut bytes = [0u8; ROW_VERSION_SIZE];

        if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            if digits.len() != ROW_VERSION_SIZE * 2 || !digits.is_ascii() {
                return Err(RowVersionError::InvalidHex(s.to_string()));
            }
            for (i, slot) in bytes.iter_mut().rev().enumerate() {
                *slot = parse_hex_byte(&digits[i * 2..i * 2 + 2], s)?;
            }
            return Ok(Self(bytes));
        }

        let groups: Vec<&str> = text.split(' ').collect();
        if groups.len() != ROW_VERSION_SIZE {
            return Err(RowVersionError::InvalidHex(s.to_string()));
        }
        for (slot, group) in bytes.iter_mut().zip(groups) {
            *slot = parse_hex_byte(group, s)?;
        }
        Ok(Self(bytes))
    }
}

impl From<u64> for RowVersion {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<[u8; ROW_VERSION_SIZE]> for RowVersion {
    fn from(bytes: [u8; ROW_VERSION_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<TickTimestamp> for RowVersion {
    fn from(timestamp: TickTimestamp) -> Self {
        Self::from_timestamp(timestamp)
    }
}

impl TryFrom<&[u8]> for RowVersion {
    type Error = RowVersionError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl From<RowVersion> for u64 {
    fn from(rv: RowVersion) -> Self {
        rv.to_u64()
    }
}

impl From<RowVersion> for [u8; ROW_VERSION_SIZE] {
    fn from(rv: RowVersion) -> Self {
        rv.0
    }
}

impl From<RowVersion> for TickTimestamp {
    fn from(rv: RowVersion) -> Self {
        rv.as_timestamp()
    }
}

/// Serialized as the lowercase General literal, e.g. `"0x000000000000000a"`.
impl Serialize for RowVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_sql_literal(LetterCase::Lower))
    }
}

impl<'de> Deserialize<'de> for RowVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_is_all_zero_bytes() {
        assert_eq!(RowVersion::ZERO.as_bytes(), &[0u8; 8]);
        assert_eq!(RowVersion::default(), RowVersion::ZERO);
        assert!(RowVersion::ZERO.is_zero());
        assert_eq!(RowVersion::ZERO.to_u64(), 0);
    }

    #[test]
    fn test_absent_bytes_yield_zero() {
        assert_eq!(RowVersion::from_optional_bytes(None).unwrap(), RowVersion::ZERO);
    }

    #[test]
    fn test_wrong_length_rejected() {
        for len in [0usize, 1, 7, 9, 16] {
            let bytes = vec![1u8; len];
            assert_eq!(
                RowVersion::from_slice(&bytes),
                Err(RowVersionError::InvalidLength { expected: 8, actual: len })
            );
            assert!(RowVersion::from_optional_bytes(Some(&bytes)).is_err());
        }
    }

    #[test]
    fn test_ten_in_every_encoding() {
        let rv = RowVersion::from_u64(0x0A);
        assert_eq!(rv.format("G").unwrap(), "0x000000000000000A");
        assert_eq!(rv.format("g").unwrap(), "0x000000000000000a");
        assert_eq!(rv.format("s").unwrap(), "0x000000000000000a");
        assert_eq!(rv.format("H").unwrap(), "0A 00 00 00 00 00 00 00");
        assert_eq!(rv.format("h").unwrap(), "0a 00 00 00 00 00 00 00");
        assert_eq!(rv.format("O").unwrap(), "10");
        assert_eq!(rv.format("o").unwrap(), "10");
        assert_eq!(rv.format("M").unwrap(), "0001-01-01 00:00:00");
    }

    #[test]
    fn test_blank_format_is_lowercase_general() {
        let rv = RowVersion::from_u64(0xAB);
        assert_eq!(rv.format("").unwrap(), "0x00000000000000ab");
        assert_eq!(rv.format(" ").unwrap(), "0x00000000000000ab");
        assert_eq!(rv.to_string(), "0x00000000000000ab");
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = RowVersion::ZERO.format("X").unwrap_err();
        assert_eq!(err, RowVersionError::InvalidFormatString("X".into()));
    }

    #[test]
    fn test_hex_traits() {
        let rv = RowVersion::from_u64(0x0102_0304_0506_A7B8);
        assert_eq!(format!("{rv:x}"), "010203040506a7b8");
        assert_eq!(format!("{rv:#X}"), "0x010203040506A7B8");
    }

    #[test]
    fn test_ordering_differs_from_byte_order() {
        // Byte-wise, [0x01, 0, ...] > [0x00, 0x01, ...]; numerically 1 < 256.
        let one = RowVersion::from_u64(1);
        let two_fifty_six = RowVersion::from_u64(256);
        assert!(one.as_bytes() > two_fifty_six.as_bytes());
        assert!(one < two_fifty_six);
    }

    #[test]
    fn test_parse_general_and_hex_viewer() {
        let rv = RowVersion::from_u64(5_465_949_798_111_989);
        assert_eq!(rv.format("G").unwrap().parse::<RowVersion>().unwrap(), rv);
        assert_eq!(rv.format("h").unwrap().parse::<RowVersion>().unwrap(), rv);
        assert!("0x123".parse::<RowVersion>().is_err());
        assert!("zz 00 00 00 00 00 00 00".parse::<RowVersion>().is_err());
        assert!("0x00000000000000zz".parse::<RowVersion>().is_err());
        assert!("".parse::<RowVersion>().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let rv = RowVersion::from_u64(10);
        let json = serde_json::to_string(&rv).unwrap();
        assert_eq!(json, "\"0x000000000000000a\"");
        let parsed: RowVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rv);
        assert!(serde_json::from_str::<RowVersion>("\"nope\"").is_err());
    }

    proptest! {
        /// Bytes survive construction unchanged.
        #[test]
        fn bytes_preserved(bytes in any::<[u8; 8]>()) {
            let rv = RowVersion::from_slice(&bytes).unwrap();
            prop_assert_eq!(rv.as_bytes(), &bytes);
        }

        /// The unsigned view inverts the unsigned constructor.
        #[test]
        fn u64_view_roundtrip(v in any::<u64>()) {
            prop_assert_eq!(RowVersion::from_u64(v).to_u64(), v);
        }

        /// Tick construction is a bit-cast, and the timestamp view inverts it.
        #[test]
        fn ticks_view_roundtrip(t in any::<i64>()) {
            let rv = RowVersion::from_ticks(t);
            prop_assert_eq!(rv.to_u64(), t as u64);
            prop_assert_eq!(rv.as_timestamp().ticks(), t);
        }

        /// Ordering agrees with the unsigned value.
        #[test]
        fn ordering_matches_u64(a in any::<u64>(), b in any::<u64>()) {
            prop_assert_eq!(RowVersion::from_u64(a).cmp(&RowVersion::from_u64(b)), a.cmp(&b));
        }

        /// General output is always `0x` plus 16 hex digits, and parses back.
        #[test]
        fn general_literal_shape(v in any::<u64>()) {
            let rv = RowVersion::from_u64(v);
            let text = rv.format("g").unwrap();
            prop_assert_eq!(text.len(), 18);
            prop_assert_eq!(&text, &format!("{v:#018x}"));
            prop_assert_eq!(text.parse::<RowVersion>().unwrap(), rv);
        }
    }
}
