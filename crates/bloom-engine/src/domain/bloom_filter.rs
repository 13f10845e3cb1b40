//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - FPR estimate = (1 - e^(-kn/m))^k, recomputed from live state
//! - No false negatives: after `add(x)`, `might_contain(x)` returns true
//! - `bits.len() == m`, `m >= 1`, `k >= 1`

use bitvec::prelude::*;

use super::hash_functions::compute_hash_positions;
use super::parameters::{calculate_fpr, calculate_optimal_parameters};
use super::snapshot::FilterSnapshot;
use crate::error::FilterError;

/// Bloom filter over text items
///
/// Insert-only. Not internally synchronized: callers sharing one instance
/// across threads must serialize access (see `FilterService`).
#[derive(Clone, Debug)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Number of hash rounds (k)
    k: usize,
    /// Size in bits (m)
    m: usize,
    /// Number of `add` calls since creation or the last clear (n)
    n: usize,
    /// Capacity hint the filter was sized for
    expected_items: usize,
    /// Target false positive rate at `expected_items` insertions
    target_fpr: f64,
    /// Lower-case items before hashing
    case_insensitive: bool,
}

impl BloomFilter {
    /// Create a filter sized for `expected_items` at `target_fpr`
    ///
    /// # Errors
    /// `InvalidArgument` if `expected_items == 0` or `target_fpr` is outside (0, 1).
    pub fn new(
        expected_items: usize,
        target_fpr: f64,
        case_insensitive: bool,
    ) -> Result<Self, FilterError> {
        let params = calculate_optimal_parameters(expected_items, target_fpr)?;

        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; params.size_bits],
            k: params.hash_count,
            m: params.size_bits,
            n: 0,
            expected_items,
            target_fpr,
            case_insensitive,
        })
    }

    /// Bit positions probed for `item`, one per hash round
    pub fn hash_positions(&self, item: &str) -> Vec<usize> {
        compute_hash_positions(item, self.k, self.m, self.case_insensitive)
    }

    /// Insert an item
    ///
    /// The counter is incremented even when every bit was already set.
    pub fn add(&mut self, item: &str) {
        let positions = self.hash_positions(item);
        for pos in positions {
            self.bits.set(pos, true);
        }
        self.n += 1;
    }

    /// Test if an item might be in the filter
    ///
    /// Returns:
    /// - `true` if the item might be in the set (could be false positive)
    /// - `false` if the item is definitely NOT in the set
    pub fn might_contain(&self, item: &str) -> bool {
        self.hash_positions(item)
            .into_iter()
            .all(|pos| self.bits[pos])
    }

    /// Reset all bits and the insertion counter; parameters are kept
    pub fn clear(&mut self) {
        self.bits.fill(false);
        self.n = 0;
    }

    /// Current false positive estimate
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn estimated_false_positive_rate(&self) -> f64 {
        calculate_fpr(self.m, self.n, self.k)
    }

    /// Capture the full state
    pub fn serialize(&self) -> FilterSnapshot {
        FilterSnapshot {
            bit_array: self.bits.iter().map(|bit| u8::from(*bit)).collect(),
            expected_items: self.expected_items,
            false_positive_rate: self.target_fpr,
            case_insensitive: self.case_insensitive,
            item_count: self.n,
            hash_functions: Some(self.k),
        }
    }

    /// Replace the whole state from a snapshot
    ///
    /// `m` is taken from the snapshot's bit length, not recomputed from the
    /// capacity hint. `k` is never read from the snapshot: if the snapshot
    /// records a hash count it must equal this filter's, otherwise the
    /// snapshot is rejected. Legacy snapshots without one are accepted and
    /// keep this filter's `k`.
    ///
    /// Nothing is modified when an error is returned.
    pub fn restore(&mut self, snapshot: FilterSnapshot) -> Result<(), FilterError> {
        snapshot.validate()?;

        if let Some(k) = snapshot.hash_functions {
            if k != self.k {
                return Err(FilterError::InvalidInput(format!(
                    "snapshot uses {} hash functions, filter uses {}",
                    k, self.k
                )));
            }
        }

        self.bits = snapshot.bit_array.iter().map(|&bit| bit == 1).collect();
        self.m = self.bits.len();
        self.n = snapshot.item_count;
        self.expected_items = snapshot.expected_items;
        self.target_fpr = snapshot.false_positive_rate;
        self.case_insensitive = snapshot.case_insensitive;

        Ok(())
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Get the filter size in bits
    pub fn size_bits(&self) -> usize {
        self.m
    }

    /// Get the number of hash rounds
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Get the number of `add` calls
    pub fn items_inserted(&self) -> usize {
        self.n
    }

    pub fn expected_items(&self) -> usize {
        self.expected_items
    }

    pub fn target_fpr(&self) -> f64 {
        self.target_fpr
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }
}
