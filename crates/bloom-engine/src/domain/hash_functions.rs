//! Hash functions for the Bloom filter
//!
//! A 32-bit FNV-1a-style mix, run once per round with the round index as
//! seed. Positions must stay bit-for-bit identical to filters persisted by
//! other instances, so the arithmetic below keeps these quirks:
//!
//! - the running value is a signed 32-bit integer between characters
//! - each shift wraps to 32 bits, but the sum of the shifted terms is exact,
//!   so the value after the last character may exceed the 32-bit range
//! - the input is consumed as UTF-16 code units
//! - the position is `|h rem m|` with a truncating remainder

use std::borrow::Cow;

/// 32-bit FNV offset basis
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// Seeded hash of a text item
pub fn seeded_hash(item: &str, seed: u32) -> i64 {
    let mut hash = i64::from((FNV_OFFSET_BASIS ^ seed) as i32);

    for unit in item.encode_utf16() {
        // Truncating back to i32 re-wraps the unbounded sum of the previous step.
        let x = (hash as i32) ^ i32::from(unit);
        hash = mix(x);
    }

    hash
}

/// `x + (x<<1) + (x<<4) + (x<<7) + (x<<8) + (x<<24)` with 32-bit shifts
#[inline]
fn mix(x: i32) -> i64 {
    [0u32, 1, 4, 7, 8, 24]
        .iter()
        .map(|&shift| i64::from(x.wrapping_shl(shift)))
        .sum()
}

/// Reduce a hash into `[0, m)`
#[inline]
pub fn reduce(hash: i64, m: usize) -> usize {
    // `m` is at most the bit count of an in-memory filter, far below i64::MAX.
    (hash % m as i64).unsigned_abs() as usize
}

/// Lower-case the item when the filter is case-insensitive
pub fn fold_case(item: &str, case_insensitive: bool) -> Cow<'_, str> {
    if case_insensitive {
        Cow::Owned(item.to_lowercase())
    } else {
        Cow::Borrowed(item)
    }
}

/// Compute k bit positions for an item
///
/// Round `i` hashes the (possibly folded) item with seed `i`. The result is a
/// pure function of the item, `k`, `m` and the case-folding flag.
pub fn compute_hash_positions(item: &str, k: usize, m: usize, case_insensitive: bool) -> Vec<usize> {
    let folded = fold_case(item, case_insensitive);
    (0..k)
        .map(|round| reduce(seeded_hash(&folded, round as u32), m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: usize = 9586;
    const K: usize = 7;

    #[test]
    fn test_known_positions() {
        // Positions written by the legacy service for m=9586, k=7
        let cases: [(&str, [usize; 7]); 5] = [
            ("alpha", [9179, 2246, 555, 1568, 3913, 2854, 9365]),
            ("beta", [3477, 2432, 2919, 2468, 2723, 9272, 6683]),
            ("", [913, 914, 911, 912, 917, 918, 915]),
            ("héllo wörld", [206, 1107, 3786, 7209, 5848, 7297, 2760]),
            ("😀", [5636, 5211, 6472, 8119, 2254, 2751, 8096]),
        ];

        for (item, expected) in cases {
            assert_eq!(
                compute_hash_positions(item, K, M, false),
                expected.to_vec(),
                "positions for {:?}",
                item
            );
        }
    }

    #[test]
    fn test_empty_item_uses_offset_basis() {
        // No characters: the hash is the signed offset basis XOR seed.
        assert_eq!(seeded_hash("", 0), -2_128_831_035);
        assert_eq!(seeded_hash("", 1), -2_128_831_036);
    }

    #[test]
    fn test_hash_deterministic() {
        let first = compute_hash_positions("wallet_0x1234", K, M, false);
        let second = compute_hash_positions("wallet_0x1234", K, M, false);
        assert_eq!(first, second, "Same input must produce same positions");
    }

    #[test]
    fn test_different_seed_different_output() {
        assert_ne!(seeded_hash("test_item", 0), seeded_hash("test_item", 1));
    }

    #[test]
    fn test_case_folding_positions() {
        let folded = compute_hash_positions("Alpha", K, M, true);
        assert_eq!(folded, compute_hash_positions("alpha", K, M, false));
        assert_eq!(folded, compute_hash_positions("ALPHA", K, M, true));

        // Without folding the upper-case form hashes differently
        assert_eq!(
            compute_hash_positions("Alpha", K, M, false),
            vec![6269, 7554, 5497, 3812, 5563, 7316, 5269]
        );
    }

    #[test]
    fn test_positions_within_bounds() {
        let m = 1000;
        for i in 0..500 {
            let item = format!("element_{}", i);
            for pos in compute_hash_positions(&item, 9, m, false) {
                assert!(pos < m, "Position {} should be < m={}", pos, m);
            }
        }
    }

    #[test]
    fn test_hash_uniformity() {
        let m = 1000;
        let k = 7;
        let mut counts = vec![0usize; 10];

        for i in 0..1000 {
            let item = format!("element_{}", i);
            for pos in compute_hash_positions(&item, k, m, false) {
                counts[pos / 100] += 1;
            }
        }

        // Each bucket should hold roughly 1000*7/10 = 700 entries
        let expected = 700;
        for (i, count) in counts.iter().enumerate() {
            assert!(
                *count >= expected / 2 && *count <= expected * 3 / 2,
                "Bucket {} has {} entries, expected ~{}",
                i,
                count,
                expected
            );
        }
    }
}
