//! Geometry validation and address decomposition tests.
//!
//! Geometry is `size = sets * ways * line`, with `sets` and `line` powers of two.

use rstest::rstest;
use snoopsim_core::common::{ConfigError, Geometry, LineAddr};

// ══════════════════════════════════════════════════════════
// 1. Validation
// ══════════════════════════════════════════════════════════

#[test]
fn valid_geometry_derives_sets() {
    let g = Geometry::new(1024, 1, 32).unwrap();
    assert_eq!(g.sets(), 32);
    assert_eq!(g.ways(), 1);
    assert_eq!(g.line_bytes(), 32);
    assert_eq!(g.size_bytes(), 1024);
    assert_eq!(g.num_lines(), 32);
}

/// Associativity does not need to be a power of two.
#[test]
fn three_way_cache_is_accepted() {
    let g = Geometry::new(3 * 4 * 64, 3, 64).unwrap();
    assert_eq!(g.sets(), 4);
    assert_eq!(g.ways(), 3);
}

/// Fully associative: one set.
#[test]
fn fully_associative_has_one_set() {
    let g = Geometry::new(512, 8, 64).unwrap();
    assert_eq!(g.sets(), 1);
    assert_eq!(g.decompose(0xFFFF_FFC0).index, 0);
    assert_eq!(g.tag_of(0xFFFF_FFC0), 0xFFFF_FFC0 >> 6);
}

#[rstest]
#[case(1024, 1, 0)]
#[case(1024, 1, 24)]
#[case(1024, 2, 48)]
fn rejects_bad_line_size(#[case] size: usize, #[case] ways: usize, #[case] line: usize) {
    assert!(matches!(
        Geometry::new(size, ways, line),
        Err(ConfigError::LineSizeNotPowerOfTwo(l)) if l == line
    ));
}

#[test]
fn rejects_zero_ways() {
    assert!(matches!(
        Geometry::new(1024, 0, 32),
        Err(ConfigError::ZeroAssociativity)
    ));
}

/// 3 sets of 2 ways x 32 bytes.
#[test]
fn rejects_non_power_of_two_sets() {
    assert!(matches!(
        Geometry::new(3 * 2 * 32, 2, 32),
        Err(ConfigError::SetsNotPowerOfTwo(3))
    ));
}

#[test]
fn rejects_zero_size() {
    assert!(matches!(
        Geometry::new(0, 2, 32),
        Err(ConfigError::SetsNotPowerOfTwo(0))
    ));
}

/// 1000 is not a multiple of 2 * 32.
#[test]
fn rejects_size_mismatch() {
    assert!(matches!(
        Geometry::new(1000, 2, 32),
        Err(ConfigError::GeometryMismatch {
            size: 1000,
            ways: 2,
            line: 32
        })
    ));
}

// ══════════════════════════════════════════════════════════
// 2. Decomposition
// ══════════════════════════════════════════════════════════

/// 8 KiB, 4 ways, 64-byte lines: 32 sets, 6 offset bits, 5 index bits.
#[rstest]
#[case(0x0000, 0, 0, 0)]
#[case(0x003F, 0, 0, 0x3F)]
#[case(0x0040, 0, 1, 0)]
#[case(0x07C0, 0, 31, 0)]
#[case(0x0800, 1, 0, 0)]
#[case(0x1234_5678, 0x1234_5678 >> 11, (0x1234_5678 >> 6) & 31, 0x38)]
fn decompose_splits_fields(
    #[case] addr: u64,
    #[case] tag: u64,
    #[case] index: usize,
    #[case] offset: u64,
) {
    let g = Geometry::new(8 * 1024, 4, 64).unwrap();
    assert_eq!(g.decompose(addr), LineAddr { tag, index, offset });
    assert_eq!(g.index_of(addr), index);
    assert_eq!(g.tag_of(addr), tag);
}

/// Recombining tag and index gives back the line address.
#[test]
fn decompose_is_lossless_modulo_offset() {
    let g = Geometry::new(32 * 1024, 8, 64).unwrap();
    for addr in [0u64, 0x40, 0xDEAD_BEEF, u64::MAX, 0x8000_0000_0000_0000] {
        let parts = g.decompose(addr);
        let rebuilt = ((parts.tag * g.sets() as u64 + parts.index as u64) << 6) | parts.offset;
        assert_eq!(rebuilt, addr);
    }
}
