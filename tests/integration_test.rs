//! Integration tests for ip-range-summary
//!
//! These tests verify the complete workflow from string range input to CIDR
//! blocks and back.

use ip_range_summary::{
    cidr_to_address_list, cidr_to_range, ip_to_number, number_to_ip, range_to_cidr_blocks,
    RangeError,
};
use itertools::Itertools;

/// Re-expand every block and check the union is contiguous, non-overlapping,
/// and exactly `[expected_start, expected_end]`.
fn assert_exact_coverage(blocks: &[String], expected_start: &str, expected_end: &str) {
    assert!(!blocks.is_empty(), "Expected at least one block");

    let ranges: Vec<(u32, u32)> = blocks
        .iter()
        .map(|b| {
            let (start, end) = cidr_to_range(b).expect("Emitted block failed to expand");
            (
                ip_to_number(&start).unwrap(),
                ip_to_number(&end).unwrap(),
            )
        })
        .collect();

    assert_eq!(number_to_ip(ranges.first().unwrap().0), expected_start);
    assert_eq!(number_to_ip(ranges.last().unwrap().1), expected_end);

    for ((_, prev_end), (next_start, _)) in ranges.iter().tuple_windows() {
        assert_eq!(
            prev_end + 1,
            *next_start,
            "Blocks must be adjacent with no gap or overlap"
        );
    }
}

#[test]
fn test_octet_aligned_range_is_one_block() {
    let blocks = range_to_cidr_blocks("192.168.0.0", "192.168.0.255").unwrap();
    assert_eq!(blocks, vec!["192.168.0.0/24"]);
    assert_exact_coverage(&blocks, "192.168.0.0", "192.168.0.255");
}

#[test]
fn test_single_address_range() {
    let blocks = range_to_cidr_blocks("172.16.5.9", "172.16.5.9").unwrap();
    assert_eq!(blocks, vec!["172.16.5.9/32"]);
}

#[test]
fn test_widened_range_covers_adjacent_boundaries() {
    // .1 and .254 edges are widened, so the output covers .0-.255
    let blocks = range_to_cidr_blocks("192.168.0.1", "192.168.0.254").unwrap();
    assert_eq!(blocks, vec!["192.168.0.0/24"]);
    assert_exact_coverage(&blocks, "192.168.0.0", "192.168.0.255");
}

#[test]
fn test_widened_multi_octet_range() {
    let blocks = range_to_cidr_blocks("192.168.4.1", "192.168.7.254").unwrap();
    assert_eq!(blocks, vec!["192.168.4.0/22"]);
    assert_exact_coverage(&blocks, "192.168.4.0", "192.168.7.255");
}

#[test]
fn test_multi_block_range_tiles_exactly() {
    let blocks = range_to_cidr_blocks("10.0.1.0", "10.0.6.255").unwrap();
    assert_eq!(
        blocks,
        vec![
            "10.0.1.0/24",
            "10.0.2.0/24",
            "10.0.3.0/24",
            "10.0.4.0/24",
            "10.0.5.0/24",
            "10.0.6.0/24"
        ]
    );
    assert_exact_coverage(&blocks, "10.0.1.0", "10.0.6.255");
}

#[test]
fn test_unaligned_range_tiles_with_single_addresses() {
    let blocks = range_to_cidr_blocks("10.0.0.3", "10.0.0.8").unwrap();
    assert_eq!(blocks.len(), 6);
    assert!(blocks.iter().all(|b| b.ends_with("/32")));
    assert_exact_coverage(&blocks, "10.0.0.3", "10.0.0.8");
}

#[test]
fn test_full_address_space() {
    let blocks = range_to_cidr_blocks("0.0.0.0", "255.255.255.255").unwrap();
    assert_eq!(blocks, vec!["0.0.0.0/0"]);
    assert_exact_coverage(&blocks, "0.0.0.0", "255.255.255.255");
}

#[test]
fn test_blocks_expand_and_enumerate_consistently() {
    let blocks = range_to_cidr_blocks("10.0.0.0", "10.0.0.7").unwrap();
    assert_eq!(blocks, vec!["10.0.0.0/29"]);

    let (start, end) = cidr_to_range(&blocks[0]).unwrap();
    assert_eq!((start.as_str(), end.as_str()), ("10.0.0.0", "10.0.0.7"));

    let addresses = cidr_to_address_list(&blocks[0]).unwrap();
    assert_eq!(addresses.len(), 8);
    assert_eq!(addresses.first().unwrap(), "10.0.0.0");
    assert_eq!(addresses.last().unwrap(), "10.0.0.7");
}

#[test]
fn test_pair_block_address_list() {
    assert_eq!(
        cidr_to_address_list("192.168.0.0/31").unwrap(),
        vec!["192.168.0.0", "192.168.0.1"]
    );
}

#[test]
fn test_error_kinds_are_distinct() {
    assert!(matches!(
        range_to_cidr_blocks("999.1.1.1", "10.0.0.0").unwrap_err(),
        RangeError::InvalidAddress(_)
    ));
    assert!(matches!(
        range_to_cidr_blocks("10.0.0.2", "10.0.0.1").unwrap_err(),
        RangeError::RangeOrder { .. }
    ));
    assert!(matches!(
        cidr_to_range("1.1.1.1/33").unwrap_err(),
        RangeError::InvalidPrefixLength(33)
    ));
    assert!(matches!(
        cidr_to_range("1.1.1.1").unwrap_err(),
        RangeError::InvalidCidr(_)
    ));
    assert!(matches!(
        cidr_to_address_list("10.0.0.0/x").unwrap_err(),
        RangeError::InvalidCidr(_)
    ));
}

#[test]
fn test_codec_round_trip_sampling() {
    for s in ["0.0.0.0", "10.0.0.1", "172.16.254.1", "255.255.255.255"] {
        assert_eq!(number_to_ip(ip_to_number(s).unwrap()), s);
    }
    for v in [0u32, 1, 0x0A000001, 0xC0A80001, u32::MAX - 1, u32::MAX] {
        assert_eq!(ip_to_number(&number_to_ip(v)).unwrap(), v);
    }
}
