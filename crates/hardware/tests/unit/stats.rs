//! # Statistics Tests
//!
//! Tests for the derived miss rate, the fixed-width text report and its
//! JSON form.

use pretty_assertions::assert_eq;
use snoopsim_core::stats::{CacheStats, Report};

fn sample() -> CacheStats {
    CacheStats {
        reads: 6,
        read_misses: 2,
        writes: 2,
        write_misses: 1,
        write_backs: 1,
        memory_transactions: 2,
        cache_to_cache_transfers: 1,
        current_cycle: 8,
    }
}

#[test]
fn test_miss_rate_zero_without_accesses() {
    let report = CacheStats::default().report();
    assert!(report.miss_rate.abs() < f64::EPSILON);
    assert!(!report.miss_rate.is_nan());
}

#[test]
fn test_miss_rate_is_combined() {
    let report = sample().report();
    assert!((report.miss_rate - 0.375).abs() < f64::EPSILON);
}

#[test]
fn test_report_copies_counters() {
    let report = sample().report();
    assert_eq!(report.reads, 6);
    assert_eq!(report.read_misses, 2);
    assert_eq!(report.writes, 2);
    assert_eq!(report.write_misses, 1);
    assert_eq!(report.write_backs, 1);
    assert_eq!(report.memory_transactions, 2);
    assert_eq!(report.cache_to_cache_transfers, 1);
}

#[test]
fn test_report_text() {
    let expected = "\
01. number of reads:                              6
02. number of read misses:                        2
03. number of writes:                             2
04. number of write misses:                       1
05. total miss rate:                              0.375000
06. number of writebacks:                         1
07. number of memory transactions:                2
08. number of cache to cache transfers:           1
";
    assert_eq!(sample().report().to_string(), expected);
}

#[test]
fn test_report_text_labels_are_fixed_width() {
    let text = CacheStats::default().report().to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    for line in &lines {
        assert_eq!(&line[50..], if line.starts_with("05.") { "0.000000" } else { "0" });
    }
}

#[test]
fn test_report_json() {
    let json = serde_json::to_value(sample().report()).unwrap();
    assert_eq!(json["reads"], 6);
    assert_eq!(json["cache_to_cache_transfers"], 1);
    assert_eq!(json["miss_rate"], 0.375);
    assert!(json.get("current_cycle").is_none());
}

#[test]
fn test_report_is_snapshot() {
    let mut stats = sample();
    let before: Report = stats.report();
    stats.reads += 1;
    assert_eq!(before.reads, 6);
    assert_eq!(stats.report().reads, 7);
}
