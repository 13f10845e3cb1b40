//! Inbound Ports (Driving Ports)
//!
//! The API an external request layer uses to drive the process-wide filter.

use crate::domain::FilterSnapshot;
use crate::error::FilterError;
use crate::events::FilterStats;

/// Result of a membership check
#[derive(Clone, Debug, PartialEq)]
pub struct CheckOutcome {
    /// Whether the item might be present
    pub exists: bool,
    /// Estimated false positive rate at the time of the check
    pub false_positive_rate: f64,
    /// Statistics captured together with the check
    pub stats: FilterStats,
}

/// Primary filter API (Driving Port)
///
/// Every method observes or mutates one shared filter atomically: the
/// returned statistics belong to the same state the operation saw.
pub trait MembershipFilterApi: Send + Sync {
    /// Insert an item and return the post-insertion statistics
    fn add_item(&self, item: &str) -> FilterStats;

    /// Test an item for possible membership
    fn check_item(&self, item: &str) -> CheckOutcome;

    /// Reset the filter and return the fresh statistics
    fn clear(&self) -> FilterStats;

    /// Current statistics
    fn stats(&self) -> FilterStats;

    /// Full state of the filter
    fn snapshot(&self) -> FilterSnapshot;

    /// Replace the filter state from a snapshot
    fn restore(&self, snapshot: FilterSnapshot) -> Result<FilterStats, FilterError>;
}
