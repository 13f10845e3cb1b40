//! Snapshot restore against state written by earlier deployments

use bloom_engine::{BloomFilter, FilterError, FilterSnapshot};

/// Written by the previous service for a (10, 0.1, case-insensitive) filter
/// after adding "Alpha", "beta", "beta".
const LEGACY_SNAPSHOT: &str = r#"{"bitArray":[0,0,0,1,1,1,1,0,0,0,0,0,0,0,1,0,0,0,0,0,0,0,0,1,1,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],"expectedItems":10,"falsePositiveRate":0.1,"caseInsensitive":true,"itemCount":3}"#;

#[test]
fn test_restore_legacy_snapshot() {
    let mut filter = BloomFilter::new(10, 0.1, false).unwrap();
    assert_eq!(filter.size_bits(), 48);
    assert_eq!(filter.hash_count(), 4);

    let snapshot = FilterSnapshot::from_json(LEGACY_SNAPSHOT).unwrap();
    filter.restore(snapshot).unwrap();

    assert!(filter.is_case_insensitive());
    assert_eq!(filter.items_inserted(), 3);
    assert!(filter.might_contain("ALPHA"));
    assert!(filter.might_contain("Beta"));
    assert!(!filter.might_contain("gamma"));
    assert!(!filter.might_contain("delta"));

    let fpr = filter.estimated_false_positive_rate();
    assert!((fpr - 0.002_394_056_197_564_561_4).abs() < 1e-12);
}

#[test]
fn test_new_snapshot_reserializes_with_hash_count() {
    let mut filter = BloomFilter::new(10, 0.1, false).unwrap();
    filter
        .restore(FilterSnapshot::from_json(LEGACY_SNAPSHOT).unwrap())
        .unwrap();

    let json = filter.serialize().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["hashFunctions"], serde_json::json!(4));
    assert_eq!(value["itemCount"], serde_json::json!(3));
    assert_eq!(value["bitArray"].as_array().map(Vec::len), Some(48));
}

#[test]
fn test_restore_into_smaller_filter_resizes() {
    // Built with m = 3350; the snapshot has 48 bits.
    let mut filter = BloomFilter::new(1000, 0.2, false).unwrap();
    let k = filter.hash_count();
    filter
        .restore(FilterSnapshot::from_json(LEGACY_SNAPSHOT).unwrap())
        .unwrap();

    assert_eq!(filter.size_bits(), 48);
    assert_eq!(filter.hash_count(), k);
    assert_eq!(filter.expected_items(), 10);
}

#[test]
fn test_malformed_snapshots_rejected() {
    let cases = [
        r#"{"bitArray":[0,1]}"#,
        r#"{"bitArray":[0,3],"expectedItems":1,"falsePositiveRate":0.1,"caseInsensitive":false,"itemCount":0}"#,
        r#"{"bitArray":[],"expectedItems":1,"falsePositiveRate":0.1,"caseInsensitive":false,"itemCount":0}"#,
        r#"{"bitArray":[0,1],"expectedItems":0,"falsePositiveRate":0.1,"caseInsensitive":false,"itemCount":0}"#,
        r#"{"bitArray":[0,1],"expectedItems":1,"falsePositiveRate":1.0,"caseInsensitive":false,"itemCount":0}"#,
        r#"not json"#,
    ];

    for json in cases {
        assert!(
            matches!(FilterSnapshot::from_json(json), Err(FilterError::InvalidInput(_))),
            "{} should be rejected",
            json
        );
    }
}
