//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = ceil(-n*ln(fpr) / (ln(2)^2))  -- optimal bits
//! - k = ceil((m/n) * ln(2))           -- optimal hash functions
//!
//! Both are rounded up. Snapshots written by other instances assume exactly
//! this rounding, so it must not be changed to `round()`.

use std::f64::consts::LN_2;

use bitvec::prelude::*;

use crate::error::FilterError;

/// Largest bit array the filter storage can address
pub const MAX_SIZE_BITS: usize = BitSlice::<u8, Lsb0>::MAX_BITS;

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Number of bits in the filter (m)
    pub size_bits: usize,
    /// Number of hash rounds (k)
    pub hash_count: usize,
    /// Expected false positive rate at `expected_items` insertions
    pub expected_fpr: f64,
}

/// Reject parameters outside the domain of the sizing formulas
pub fn validate_parameters(expected_items: usize, target_fpr: f64) -> Result<(), FilterError> {
    if expected_items == 0 {
        return Err(FilterError::InvalidArgument(
            "Expected items must be > 0".to_string(),
        ));
    }

    // Written so that NaN also fails
    if !(target_fpr > 0.0 && target_fpr < 1.0) {
        return Err(FilterError::InvalidArgument(format!(
            "False positive rate must be between 0 and 1, got {target_fpr}"
        )));
    }

    let bits = raw_bits(expected_items, target_fpr);
    if !bits.is_finite() || bits >= MAX_SIZE_BITS as f64 {
        return Err(FilterError::InvalidArgument(format!(
            "{expected_items} items at rate {target_fpr} need {bits} bits, limit is {MAX_SIZE_BITS}"
        )));
    }

    Ok(())
}

/// Calculate optimal Bloom filter parameters for given constraints
///
/// # Arguments
/// * `expected_items` - Expected number of insertions (n)
/// * `target_fpr` - Target false positive rate, in (0, 1)
///
/// # Errors
/// `InvalidArgument` if `expected_items == 0`, `target_fpr` is outside (0, 1),
/// or the resulting bit array exceeds [`MAX_SIZE_BITS`].
pub fn calculate_optimal_parameters(
    expected_items: usize,
    target_fpr: f64,
) -> Result<BloomFilterParams, FilterError> {
    validate_parameters(expected_items, target_fpr)?;

    let n = expected_items as f64;
    let size_bits = minimum_bits(expected_items, target_fpr).max(1);
    let hash_count = (((size_bits as f64) / n) * LN_2).ceil() as usize;
    let hash_count = hash_count.max(1);

    Ok(BloomFilterParams {
        size_bits,
        hash_count,
        expected_fpr: calculate_fpr(size_bits, expected_items, hash_count),
    })
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}

/// Calculate minimum m for given n and target FPR
///
/// Saturates at `usize::MAX`; callers go through `validate_parameters` first.
pub fn minimum_bits(n: usize, target_fpr: f64) -> usize {
    raw_bits(n, target_fpr) as usize
}

fn raw_bits(n: usize, target_fpr: f64) -> f64 {
    let ln2_squared = LN_2 * LN_2;
    (-((n as f64) * target_fpr.ln()) / ln2_squared).ceil()
}
