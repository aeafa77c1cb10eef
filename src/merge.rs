//! Reassembly of sorted bands.

use crate::dispatch::SortedBands;

/// Concatenates bands in ascending key order.
///
/// Band keys are ordered with element magnitude, so no comparisons across
/// bands are needed.
pub fn merge(sorted_bands: SortedBands) -> Vec<u64> {
    let total_len = sorted_bands.values().map(Vec::len).sum();
    let mut bands: Vec<_> = sorted_bands.into_iter().collect();
    bands.sort_unstable_by_key(|&(key, _)| key);

    let mut merged = Vec::with_capacity(total_len);
    for (_, band) in bands {
        merged.extend_from_slice(&band);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_empty() {
        assert!(merge(SortedBands::default()).is_empty());
    }

    #[test]
    fn test_merge_orders_by_key() {
        let mut bands = SortedBands::default();
        bands.insert(2, vec![16, 40, 63]);
        bands.insert(0, vec![0, 1, 3]);
        bands.insert(1, vec![4, 7, 15]);
        assert_eq!(merge(bands), vec![0, 1, 3, 4, 7, 15, 16, 40, 63]);
    }

    #[test]
    fn test_merge_skips_missing_keys() {
        let mut bands = SortedBands::default();
        bands.insert(10, vec![1 << 20]);
        bands.insert(0, vec![2]);
        assert_eq!(merge(bands), vec![2, 1 << 20]);
    }
}
