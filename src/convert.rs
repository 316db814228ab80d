//! Scatter of index sets into dense masks.
//!
//! Every index set is converted independently, so the batch can be spread over a
//! rayon pool. The parallel path collects in batch order and is observably identical
//! to the sequential one.

use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::bitmap::{Mask, MaskBatch};
use crate::error::Result;
use crate::validate::validate_batch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parallelism {
    Sequential,
    Parallel,
    /// Parallel once the batch output reaches `parallel_threshold` cells.
    Auto,
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub parallelism: Parallelism,
    pub parallel_threshold: usize,
    pub threads: Option<usize>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self { parallelism: Parallelism::Auto, parallel_threshold: 1 << 16, threads: None }
    }
}

impl ConvertConfig {
    pub fn new() -> Self { Self::default() }
    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self { self.parallelism = parallelism; self }
    pub fn with_parallel_threshold(mut self, cells: usize) -> Self { self.parallel_threshold = cells; self }
    pub fn with_threads(mut self, threads: usize) -> Self { self.threads = Some(threads); self }
}

#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self { Self { config } }

    /// Converts `batch` into one mask of `length` positions per index set.
    ///
    /// The whole batch is validated before any mask is allocated, and a failed
    /// allocation discards every mask built so far, so a failure never leaves
    /// partial output behind.
    pub fn convert<S>(&self, batch: &[S], length: u64) -> Result<MaskBatch>
    where
        S: AsRef<[u64]> + Sync,
    {
        let len = validate_batch(batch, length)?;
        self.convert_validated(batch, len)
    }

    /// Scatters a batch whose sets were already range-checked against `len`
    /// and whose total size passed `check_batch_size`.
    pub(crate) fn convert_validated<S>(&self, batch: &[S], len: usize) -> Result<MaskBatch>
    where
        S: AsRef<[u64]> + Sync,
    {
        let parallel = self.use_parallel(batch.len(), len);
        debug!("converting {} index sets to masks of length {} (parallel: {})", batch.len(), len, parallel);

        if !parallel {
            return batch.iter().enumerate().map(|(i, s)| scatter_one(i, s.as_ref(), len)).collect();
        }
        let run = || -> Result<MaskBatch> {
            batch.par_iter().enumerate().map(|(i, s)| scatter_one(i, s.as_ref(), len)).collect()
        };
        match self.config.threads {
            Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => pool.install(run),
                Err(err) => {
                    warn!("failed to build a {}-thread pool, using the global pool: {}", threads, err);
                    run()
                }
            },
            None => run(),
        }
    }

    fn use_parallel(&self, sets: usize, len: usize) -> bool {
        match self.config.parallelism {
            Parallelism::Sequential => false,
            Parallelism::Parallel => sets > 1,
            Parallelism::Auto => sets > 1 && sets.saturating_mul(len) >= self.config.parallel_threshold,
        }
    }
}

fn scatter_one(set: usize, indices: &[u64], len: usize) -> Result<Mask> {
    trace!("index set {}: {} indices", set, indices.len());
    let mut mask = Mask::new(len)?;
    mask.scatter(indices);
    Ok(mask)
}

/// Converts with the default configuration.
pub fn convert<S>(batch: &[S], length: u64) -> Result<MaskBatch>
where
    S: AsRef<[u64]> + Sync,
{
    Converter::default().convert(batch, length)
}
