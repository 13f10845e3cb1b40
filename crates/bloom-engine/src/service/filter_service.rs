//! Filter Service
//!
//! One `BloomFilter` shared by every caller, behind a single mutex. Each
//! operation is O(k), so reads take the same lock as writes.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::domain::{BloomFilter, FilterConfig, FilterSnapshot};
use crate::error::FilterError;
use crate::events::FilterStats;
use crate::metrics::{Metrics, MetricsRecorder};
use crate::ports::{CheckOutcome, MembershipFilterApi};

/// Filter Service implementation
///
/// Implements the `MembershipFilterApi` port over one locked filter.
pub struct FilterService<M: MetricsRecorder = Metrics> {
    filter: Mutex<BloomFilter>,
    metrics: Arc<M>,
}

impl FilterService<Metrics> {
    /// Create a service with a fresh metrics collector
    pub fn new(config: &FilterConfig) -> Result<Self, FilterError> {
        Self::with_metrics(config, Arc::new(Metrics::new()))
    }
}

impl<M: MetricsRecorder> FilterService<M> {
    /// Create a service reporting into the given recorder
    ///
    /// # Errors
    /// `InvalidArgument` if the configuration is out of range.
    pub fn with_metrics(config: &FilterConfig, metrics: Arc<M>) -> Result<Self, FilterError> {
        config.validate()?;
        let filter = BloomFilter::new(
            config.expected_items,
            config.target_fpr,
            config.case_insensitive,
        )?;

        info!(
            expected_items = config.expected_items,
            target_fpr = config.target_fpr,
            bit_array_size = filter.size_bits(),
            hash_functions = filter.hash_count(),
            case_insensitive = config.case_insensitive,
            "Bloom filter initialized"
        );

        Ok(Self {
            filter: Mutex::new(filter),
            metrics,
        })
    }

    /// Metrics recorder this service reports into
    pub fn metrics(&self) -> &Arc<M> {
        &self.metrics
    }
}

impl<M: MetricsRecorder> MembershipFilterApi for FilterService<M> {
    fn add_item(&self, item: &str) -> FilterStats {
        let start = Instant::now();
        let stats = {
            let mut filter = self.filter.lock();
            filter.add(item);
            FilterStats::from_filter(&filter)
        };
        self.metrics.record_insert(start.elapsed());

        debug!(item_count = stats.item_count, "Item added");
        stats
    }

    fn check_item(&self, item: &str) -> CheckOutcome {
        let start = Instant::now();
        let outcome = {
            let filter = self.filter.lock();
            let stats = FilterStats::from_filter(&filter);
            CheckOutcome {
                exists: filter.might_contain(item),
                false_positive_rate: stats.false_positive_rate,
                stats,
            }
        };
        self.metrics.record_lookup(start.elapsed(), outcome.exists);

        debug!(exists = outcome.exists, "Item checked");
        outcome
    }

    fn clear(&self) -> FilterStats {
        let stats = {
            let mut filter = self.filter.lock();
            filter.clear();
            FilterStats::from_filter(&filter)
        };
        self.metrics.record_clear();

        info!("Bloom filter cleared");
        stats
    }

    fn stats(&self) -> FilterStats {
        FilterStats::from_filter(&self.filter.lock())
    }

    fn snapshot(&self) -> FilterSnapshot {
        self.filter.lock().serialize()
    }

    fn restore(&self, snapshot: FilterSnapshot) -> Result<FilterStats, FilterError> {
        let stats = {
            let mut filter = self.filter.lock();
            if let Err(e) = filter.restore(snapshot) {
                warn!(error = %e, "Snapshot rejected");
                return Err(e);
            }
            FilterStats::from_filter(&filter)
        };
        self.metrics.record_restore();

        info!(
            bit_array_size = stats.bit_array_size,
            item_count = stats.item_count,
            "Bloom filter restored from snapshot"
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_config() -> FilterConfig {
        FilterConfig::new(1000, 0.01, false).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = FilterConfig {
            expected_items: 0,
            ..Default::default()
        };
        assert!(matches!(
            FilterService::new(&config),
            Err(FilterError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_new_rejects_oversized_capacity() {
        let config = FilterConfig {
            expected_items: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(
            FilterService::new(&config),
            Err(FilterError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_add_returns_post_insertion_stats() {
        let service = FilterService::new(&scenario_config()).unwrap();

        let stats = service.add_item("alpha");

        assert_eq!(stats.item_count, 1);
        assert_eq!(stats.bit_array_size, 9586);
        assert_eq!(stats.hash_functions, 7);
        assert_eq!(stats.expected_items, 1000);
        assert!(stats.false_positive_rate > 0.0);
        assert_eq!(service.metrics().snapshot().items_inserted, 1);
    }

    #[test]
    fn test_check_reports_membership_and_rate() {
        let service = FilterService::new(&scenario_config()).unwrap();
        service.add_item("alpha");

        let hit = service.check_item("alpha");
        let miss = service.check_item("beta");

        assert!(hit.exists);
        assert!(!miss.exists);
        assert_eq!(hit.false_positive_rate, hit.stats.false_positive_rate);
        assert_eq!(hit.stats.item_count, 1);

        let metrics = service.metrics().snapshot();
        assert_eq!(metrics.lookups_performed, 2);
        assert_eq!(metrics.lookups_positive, 1);
    }

    #[test]
    fn test_clear_resets_stats() {
        let service = FilterService::new(&scenario_config()).unwrap();
        service.add_item("alpha");
        service.add_item("alpha");

        let stats = service.clear();

        assert_eq!(stats.item_count, 0);
        assert_eq!(stats.false_positive_rate, 0.0);
        assert!(!service.check_item("alpha").exists);
    }

    #[test]
    fn test_snapshot_restore_between_services() {
        let source = FilterService::new(&scenario_config()).unwrap();
        for item in ["a", "b", "c"] {
            source.add_item(item);
        }

        let target = FilterService::new(&scenario_config()).unwrap();
        let stats = target.restore(source.snapshot()).unwrap();

        assert_eq!(stats, source.stats());
        for item in ["a", "b", "c", "d"] {
            assert_eq!(
                target.check_item(item).exists,
                source.check_item(item).exists
            );
        }
    }

    #[test]
    fn test_failed_restore_keeps_state() {
        let service = FilterService::new(&scenario_config()).unwrap();
        service.add_item("alpha");
        let before = service.stats();

        let mut snapshot = service.snapshot();
        snapshot.bit_array[0] = 9;

        assert!(service.restore(snapshot).is_err());
        assert_eq!(service.stats(), before);
        assert_eq!(service.metrics().snapshot().restores, 0);
    }
}
