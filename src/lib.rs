//! Vortex sort: a banded, size-adaptive, parallel sort for non-negative integers.
//!
//! The input is split into magnitude bands by the position of each element's
//! highest set bit ([`band`]). Each band is sorted with insertion, partition or
//! heap sort depending on its length ([`band_sort`]). Large inputs sort bands
//! concurrently on a rayon pool ([`dispatch`]) before the bands are
//! concatenated in key order ([`merge`]). Inputs of at most
//! [`INLINE_SORT_MAX`] elements skip banding and threads entirely.

pub mod band;
pub mod band_sort;
pub mod dispatch;
pub mod error;
pub mod merge;

pub use band::{BAND_WIDTH_BITS, BandKey, BandMap, band_key, classify, highest_set_bit};
pub use band_sort::{Algorithm, INSERTION_SORT_MAX, PARTITION_SORT_MAX, select_algorithm, sort_band};
pub use dispatch::{Dispatcher, INLINE_SORT_MAX, SortedBands, should_parallelize};
pub use error::{Result, SortError};
pub use merge::merge;

/// Reusable sorter. Holds the worker pool used for large inputs.
#[derive(Default)]
pub struct VortexSorter {
    dispatcher: Dispatcher,
}

impl VortexSorter {
    /// Sorter that runs band tasks on rayon's global pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorter with a dedicated pool of `threads` workers (0 means one per CPU).
    pub fn with_threads(threads: usize) -> Result<Self> {
        Ok(Self { dispatcher: Dispatcher::with_threads(threads)? })
    }

    pub fn num_threads(&self) -> usize {
        self.dispatcher.num_threads()
    }

    /// Returns `elements` sorted ascending.
    pub fn sort(&self, elements: &[u64]) -> Result<Vec<u64>> {
        if !should_parallelize(elements.len()) {
            return Ok(sort_band(elements.to_vec()));
        }
        let bands = classify(elements);
        let sorted_bands = self.dispatcher.dispatch(bands, elements.len())?;
        Ok(merge(sorted_bands))
    }

    /// Sorts signed input, rejecting it if any element is negative.
    ///
    /// Validation happens before any sorting work starts.
    pub fn sort_signed(&self, elements: &[i64]) -> Result<Vec<u64>> {
        let unsigned = elements
            .iter()
            .enumerate()
            .map(|(index, &value)| u64::try_from(value).map_err(|_| SortError::InvalidInput { index, value }))
            .collect::<Result<Vec<u64>>>()?;
        self.sort(&unsigned)
    }
}

/// Sorts `elements` on rayon's global pool.
pub fn sort(elements: &[u64]) -> Result<Vec<u64>> {
    VortexSorter::new().sort(elements)
}

/// Sorts signed input on rayon's global pool; negative elements are rejected.
pub fn sort_signed(elements: &[i64]) -> Result<Vec<u64>> {
    VortexSorter::new().sort_signed(elements)
}
