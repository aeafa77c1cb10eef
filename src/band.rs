//! Magnitude banding.
//!
//! Elements are grouped by the position of their highest set bit, two bit
//! positions per band. Every element of a lower band is strictly smaller than
//! every element of a higher band, so sorted bands can be concatenated in key
//! order without comparing across bands.

use std::collections::HashMap;

use foldhash::fast::RandomState as FoldRandomState;

/// Number of highest-set-bit positions covered by one band.
pub const BAND_WIDTH_BITS: u32 = 2;

/// Identifies a band; ordered consistently with element magnitude.
pub type BandKey = u32;

/// Unsorted bands, each in input order.
pub type BandMap = HashMap<BandKey, Vec<u64>, FoldRandomState>;

/// Zero-based index of the most significant set bit. Zero maps to zero.
#[inline(always)]
pub fn highest_set_bit(x: u64) -> u32 {
    if x == 0 { 0 } else { x.ilog2() }
}

#[inline(always)]
pub fn band_key(x: u64) -> BandKey {
    highest_set_bit(x) / BAND_WIDTH_BITS
}

/// Splits `elements` into bands in a single pass.
pub fn classify(elements: &[u64]) -> BandMap {
    let mut bands = BandMap::with_hasher(FoldRandomState::default());
    for &x in elements {
        bands.entry(band_key(x)).or_default().push(x);
    }
    bands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_set_bit() {
        assert_eq!(highest_set_bit(0), 0);
        assert_eq!(highest_set_bit(1), 0);
        assert_eq!(highest_set_bit(12), 3);
        assert_eq!(highest_set_bit(u64::MAX), 63);
    }

    #[test]
    fn test_band_key_boundaries() {
        assert_eq!(band_key(0), 0);
        assert_eq!(band_key(3), 0);
        assert_eq!(band_key(4), 1);
        assert_eq!(band_key(15), 1);
        assert_eq!(band_key(16), 2);
        assert_eq!(band_key(u64::MAX), 31);
    }

    #[test]
    fn test_band_key_orders_with_magnitude() {
        for (lo, hi) in [(3u64, 4u64), (15, 16), (63, 64), (0, 4), ((1 << 32) - 1, 1 << 32)] {
            assert!(band_key(lo) < band_key(hi), "{lo} vs {hi}");
        }
        // Within a band, the key says nothing about order.
        assert_eq!(band_key(4), band_key(15));
    }

    #[test]
    fn test_classify_empty() {
        assert!(classify(&[]).is_empty());
    }

    #[test]
    fn test_classify_preserves_insertion_order() {
        let bands = classify(&[15, 3, 10, 4, 12, 1, 7, 0]);
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[&0], vec![3, 1, 0]);
        assert_eq!(bands[&1], vec![15, 10, 4, 12, 7]);
    }

    #[test]
    fn test_classify_is_exhaustive() {
        let mut rng = fastrand::Rng::with_seed(7);
        let data: Vec<u64> = (0..2000).map(|_| rng.u64(..)).collect();
        let bands = classify(&data);
        assert_eq!(bands.values().map(Vec::len).sum::<usize>(), data.len());
        for (&key, band) in &bands {
            assert!(band.iter().all(|&x| band_key(x) == key));
        }
    }
}
