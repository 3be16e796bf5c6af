use std::ops::Range;

/// Splits `[0, len)` into `workers` contiguous ranges.
///
/// The first `workers - 1` ranges hold `len / workers` tokens each and the
/// last one takes the remainder, so with `len < workers` every range but the
/// last is empty. `workers` must be at least one.
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    debug_assert!(workers >= 1, "partition needs at least one worker");
    let chunk_size = len / workers;
    (0..workers)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i + 1 < workers {
                (i + 1) * chunk_size
            } else {
                len
            };
            start..end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::partition;

    #[test]
    fn last_chunk_absorbs_remainder() {
        assert_eq!(partition(10, 4), vec![0..2, 2..4, 4..6, 6..10]);
    }

    #[test]
    fn short_input_leaves_early_chunks_empty() {
        assert_eq!(partition(3, 5), vec![0..0, 0..0, 0..0, 0..0, 0..3]);
    }

    #[test]
    fn single_worker_takes_everything() {
        assert_eq!(partition(7, 1), vec![0..7]);
        assert_eq!(partition(0, 1), vec![0..0]);
    }
}
