// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Randomly shuffles the dataset rows and splits them into
// two sets:
//   - Training set: the bulk of the rows
//   - Test set:     a held-out fraction for later evaluation
//
// Simple random sampling without replacement: every row lands
// in exactly one subset, membership decided by one seeded
// shuffle. No stratification is applied, so the label balance
// of each subset is whatever the shuffle produced.
//
// Why a seeded RNG instead of thread_rng?
//   Reruns must produce identical splits. StdRng seeded from
//   a u64 gives the same permutation for the same seed on
//   every platform, so seed + ratio + input fully determine
//   the partition.
//
// Test-set size is ceil(rows * ratio): a 10-row input at 0.2
// yields exactly 2 test rows and 8 training rows.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom
// which is the standard unbiased shuffle algorithm.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::domain::dataset::Dataset;
use crate::domain::error::IngestError;

/// Shuffle the dataset rows with a seeded RNG and split into
/// (train, test).
///
/// # Arguments
/// * `dataset`    - The preprocessed table (consumed)
/// * `test_ratio` - Fraction of rows held out, e.g. 0.2 = 20%
/// * `seed`       - Seed for the deterministic shuffle
///
/// # Errors
/// InvalidRatio unless `0 < test_ratio < 1`.
pub fn split_train_test(
    dataset:    Dataset,
    test_ratio: f64,
    seed:       u64,
) -> Result<(Dataset, Dataset), IngestError> {
    // open interval check; the negated form also rejects NaN
    if !(test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(IngestError::InvalidRatio { ratio: test_ratio });
    }

    let Dataset { columns, mut rows } = dataset;

    // Fisher-Yates shuffle — every permutation is equally likely,
    // and the seed makes it reproducible run to run
    let mut rng = StdRng::seed_from_u64(seed);
    rows.shuffle(&mut rng);

    // ceil so a small held-out fraction still gets at least
    // one row once the input is non-empty
    let total    = rows.len();
    let test_len = ((total as f64) * test_ratio).ceil() as usize;

    // Clamp to valid range to avoid panics on tiny datasets
    let test_len = test_len.min(total);

    // split_off(n) removes elements [n..] from the Vec and returns them
    // After this: rows = training head, test_rows = held-out tail
    let test_rows = rows.split_off(total - test_len);

    tracing::debug!(
        "Dataset split: {} training rows, {} test rows",
        rows.len(),
        test_rows.len(),
    );

    Ok((
        Dataset::new(columns.clone(), rows),
        Dataset::new(columns, test_rows),
    ))
}
