// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Defines the flags of an ingestion run. Running with no flags
// reproduces the canonical run exactly: fetch the spam dataset,
// then split it with seed 42 and write under ./data/raw/.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for malformed values
//   - type conversion (string → f64, u64)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;

use crate::application::ingest_use_case::{
    IngestConfig, DEFAULT_OUTPUT_ROOT, DEFAULT_SEED, DEFAULT_SOURCE, DEFAULT_TEST_RATIO,
};

/// All arguments for an ingestion run.
/// Each field becomes a --flag on the command line, and every
/// default is the documented constant from the application layer.
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// CSV resource to ingest: a local file path or an HTTP(S) URL
    #[arg(long, default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Directory the split artifacts are written under
    /// (both files land in <output-root>/raw/)
    #[arg(long, default_value = DEFAULT_OUTPUT_ROOT)]
    pub output_root: String,

    /// Fraction of rows held out for the test set,
    /// strictly between 0 and 1
    #[arg(long, default_value_t = DEFAULT_TEST_RATIO)]
    pub test_ratio: f64,

    /// Seed for the deterministic row shuffle
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Convert CLI IngestArgs into the application-layer IngestConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<IngestArgs> for IngestConfig {
    fn from(a: IngestArgs) -> Self {
        IngestConfig {
            source:      a.source,
            output_root: a.output_root,
            test_ratio:  a.test_ratio,
            seed:        a.seed,
        }
    }
}
