use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use wordfreq_logging::{wf_debug, wf_info, wf_warn};

use crate::{aggregate, partition, FrequencyTable};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CountError {
    #[error("worker count must be at least 1")]
    NoWorkers,
    #[error("failed to start worker pool: {0}")]
    Pool(String),
    #[error("worker for chunk {chunk} failed: {message}")]
    WorkerPanicked { chunk: usize, message: String },
}

/// Frequency table of a single chunk.
pub fn count_chunk<S: AsRef<str>>(chunk: &[S]) -> FrequencyTable {
    FrequencyTable::from_tokens(chunk)
}

/// Partitioned parallel word count using [`count_chunk`] for every chunk.
pub fn count_words<S>(tokens: &[S], workers: usize) -> Result<FrequencyTable, CountError>
where
    S: AsRef<str> + Sync,
{
    count_with(tokens, workers, count_chunk)
}

/// Splits `tokens` into `workers` chunks, counts each one on its own pool
/// thread and merges the results once every worker has returned.
///
/// A panicking worker fails the whole run; no partial table is returned.
pub fn count_with<S, F>(
    tokens: &[S],
    workers: usize,
    counter: F,
) -> Result<FrequencyTable, CountError>
where
    S: Sync,
    F: Fn(&[S]) -> FrequencyTable + Sync,
{
    if workers == 0 {
        return Err(CountError::NoWorkers);
    }

    let ranges = partition(tokens.len(), workers);
    wf_debug!("Partitioned {} tokens into {:?}", tokens.len(), ranges);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("wordfreq-worker-{i}"))
        .build()
        .map_err(|err| CountError::Pool(err.to_string()))?;

    // One result slot per chunk; collecting is the join barrier.
    let partials: Vec<FrequencyTable> = pool.install(|| {
        ranges
            .into_par_iter()
            .enumerate()
            .map(|(chunk, range)| {
                panic::catch_unwind(AssertUnwindSafe(|| counter(&tokens[range]))).map_err(
                    |payload| {
                        let message = panic_message(payload.as_ref());
                        wf_warn!("Worker for chunk {} panicked: {}", chunk, message);
                        CountError::WorkerPanicked { chunk, message }
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()
    })?;

    let table = aggregate(partials);
    wf_info!(
        "Counted {} tokens ({} distinct) with {} workers",
        table.total(),
        table.len(),
        workers
    );
    Ok(table)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
