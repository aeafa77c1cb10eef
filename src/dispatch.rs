//! Fork-join dispatch of band sorts.
//!
//! Each band is moved into its own rayon task, which returns `(key, sorted)`.
//! The result map is assembled by the caller once every task has joined, so
//! no task ever touches shared mutable state.

use std::any::Any;
use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};

use foldhash::fast::RandomState as FoldRandomState;
use rayon::prelude::*;

use crate::band::{BandKey, BandMap};
use crate::band_sort::sort_band;
use crate::error::{Result, SortError};

/// Inputs up to this length are sorted inline, without banding or threads.
pub const INLINE_SORT_MAX: usize = 1000;

/// Sorted bands keyed by their originating band key.
pub type SortedBands = HashMap<BandKey, Vec<u64>, FoldRandomState>;

/// Decided on the length of the original input, not on any single band.
pub fn should_parallelize(total_len: usize) -> bool {
    total_len > INLINE_SORT_MAX
}

pub struct Dispatcher {
    /// Dedicated pool; `None` runs tasks on rayon's global pool.
    pool: Option<rayon::ThreadPool>,
}

impl Dispatcher {
    /// Dispatcher backed by rayon's global pool.
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Dispatcher with its own pool of `threads` workers (0 means one per CPU).
    pub fn with_threads(threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("vortex-sort-{i}"))
            .build()?;
        Ok(Self { pool: Some(pool) })
    }

    pub fn num_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    pub fn dispatch(&self, bands: BandMap, total_len: usize) -> Result<SortedBands> {
        self.dispatch_with(bands, total_len, sort_band)
    }

    /// Like [`Dispatcher::dispatch`], with the per-band sort supplied by the caller.
    pub fn dispatch_with<F>(&self, bands: BandMap, total_len: usize, sorter: F) -> Result<SortedBands>
    where
        F: Fn(Vec<u64>) -> Vec<u64> + Send + Sync,
    {
        if !should_parallelize(total_len) {
            log::debug!("sorting {} bands inline ({} elements)", bands.len(), total_len);
            return bands.into_iter().map(|(key, band)| run_band_task(key, band, &sorter)).collect();
        }

        log::debug!(
            "sorting {} bands on {} threads ({} elements)",
            bands.len(),
            self.num_threads(),
            total_len
        );
        // Collecting into a `Result` stops handing out new tasks after the
        // first failure; tasks already running are still joined before return.
        let fan_out = || {
            bands
                .into_par_iter()
                .map(|(key, band)| run_band_task(key, band, &sorter))
                .collect::<Result<SortedBands>>()
        };
        match &self.pool {
            Some(pool) => pool.install(fan_out),
            None => fan_out(),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn run_band_task<F>(key: BandKey, band: Vec<u64>, sorter: &F) -> Result<(BandKey, Vec<u64>)>
where
    F: Fn(Vec<u64>) -> Vec<u64>,
{
    match catch_unwind(AssertUnwindSafe(|| sorter(band))) {
        Ok(sorted) => Ok((key, sorted)),
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            log::warn!("band {key} sort task failed: {reason}");
            Err(SortError::TaskFailure { key, reason })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "task panicked".to_string()
    }
}
