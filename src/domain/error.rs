// ============================================================
// Layer 3 — Ingestion Error Taxonomy
// ============================================================
// Every way the pipeline can fail, as one typed enum.
//
// Why a typed enum instead of anyhow everywhere?
//   - Callers can match on the failure class
//     (a missing column is a schema problem, not an I/O problem)
//   - Tests can assert the exact failure kind
//   - thiserror derives Display and Error for us, and the
//     #[source] attribute preserves the underlying cause chain
//
// The taxonomy is deliberately small:
//   Parse         - the bytes are not valid delimited text
//   MissingColumn - the schema does not match expectations
//   InvalidRatio  - the split fraction is outside (0, 1)
//   Http          - the remote source could not be fetched
//   Io            - a filesystem operation failed
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use std::path::PathBuf;

use thiserror::Error;

/// All failure modes of the ingestion pipeline.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The source content could not be tokenised as CSV.
    #[error("malformed CSV in '{locator}': {source}")]
    Parse {
        locator: String,
        #[source]
        source: csv::Error,
    },

    /// A column the preprocessor expects is absent from the dataset.
    #[error("column '{name}' not found in the dataset")]
    MissingColumn { name: String },

    /// The requested test fraction cannot produce two subsets.
    #[error("test ratio must be strictly between 0 and 1, got {ratio}")]
    InvalidRatio { ratio: f64 },

    /// The remote source could not be fetched.
    #[error("request to '{url}' failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A filesystem operation failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
