//! # Known Row Version Vectors
//!
//! Fixed values whose byte, unsigned and tick views are known up front.
//! Every construction path must agree on all three views.

use vtypes_rowversion::{RowVersion, RowVersionError, TickTimestamp};

struct Vector {
    value: u64,
    bytes: [u8; 8],
}

const VECTORS: [Vector; 4] = [
    Vector {
        value: 0,
        bytes: [0, 0, 0, 0, 0, 0, 0, 0],
    },
    Vector {
        value: 11,
        bytes: [0x0b, 0, 0, 0, 0, 0, 0, 0],
    },
    Vector {
        value: 560_654_894,
        bytes: [0x2e, 0xea, 0x6a, 0x21, 0, 0, 0, 0],
    },
    Vector {
        value: 5_465_949_798_111_989,
        bytes: [0xf5, 0x9a, 0x13, 0x9c, 0x40, 0x6b, 0x13, 0],
    },
];

#[test]
fn bytes_constructor_agrees_with_all_views() {
    for v in &VECTORS {
        let rv = RowVersion::from_slice(&v.bytes).unwrap();
        assert_eq!(rv.to_u64(), v.value);
        assert_eq!(rv.as_timestamp(), TickTimestamp::from_ticks(v.value as i64));
        assert_eq!(rv.as_bytes(), &v.bytes);
    }
}

#[test]
fn u64_constructor_agrees_with_all_views() {
    for v in &VECTORS {
        let rv = RowVersion::from(v.value);
        assert_eq!(rv.as_bytes(), &v.bytes);
        assert_eq!(rv.as_timestamp().ticks(), v.value as i64);
    }
}

#[test]
fn timestamp_constructor_agrees_with_all_views() {
    for v in &VECTORS {
        let rv = RowVersion::from(TickTimestamp::from_ticks(v.value as i64));
        assert_eq!(rv.as_bytes(), &v.bytes);
        assert_eq!(u64::from(rv), v.value);
    }
}

#[test]
fn general_and_hex_viewer_reverse_each_other() {
    let rv = RowVersion::from_slice(&VECTORS[3].bytes).unwrap();
    assert_eq!(rv.format("S").unwrap(), "0x00136B409C139AF5");
    assert_eq!(rv.format("h").unwrap(), "f5 9a 13 9c 40 6b 13 00");
    assert_eq!(rv.format("o").unwrap(), "5465949798111989");
}

#[test]
fn mysql_encoding_renders_tick_date() {
    // 2018-01-01T00:00:00 is tick 636503616000000000.
    let rv = RowVersion::from_ticks(636_503_616_000_000_000);
    assert_eq!(rv.format("m").unwrap(), "2018-01-01 00:00:00");
    assert_eq!(rv.format("M").unwrap(), "2018-01-01 00:00:00");
}

#[test]
fn negative_ticks_are_bit_cast() {
    let rv = RowVersion::from_ticks(-1);
    assert_eq!(rv.to_u64(), u64::MAX);
    assert_eq!(rv.as_bytes(), &[0xff; 8]);
    assert_eq!(rv.as_timestamp().ticks(), -1);
    assert!(rv > RowVersion::from_u64(i64::MAX as u64));
}

#[test]
fn slice_conversion_reports_length() {
    let short: &[u8] = &[1, 2, 3];
    assert_eq!(
        RowVersion::try_from(short),
        Err(RowVersionError::InvalidLength {
            expected: 8,
            actual: 3
        })
    );
}

#[test]
fn sorting_uses_numeric_order() {
    let mut versions: Vec<RowVersion> = [256u64, 1, 65_536, 0]
        .into_iter()
        .map(RowVersion::from)
        .collect();
    versions.sort();
    let values: Vec<u64> = versions.into_iter().map(u64::from).collect();
    assert_eq!(values, vec![0, 1, 256, 65_536]);
}
