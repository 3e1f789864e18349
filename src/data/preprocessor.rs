// ============================================================
// Layer 4 — Column Preprocessor
// ============================================================
// Normalises the raw dataset schema before splitting.
//
// The upstream CSV carries five columns:
//   v1          → the ham/spam label
//   v2          → the message text
//   Unnamed: 2  → artefact of a trailing-comma export
//   Unnamed: 3  → artefact, almost entirely empty
//   Unnamed: 4  → artefact, almost entirely empty
//
// Steps (applied in order, mutating the dataset in place):
//   1. Drop the three unnamed artefact columns
//   2. Rename v1 → Target and v2 → Text
//
// A missing column is a hard failure: if the schema does not
// match, continuing would write splits with the wrong shape
// and poison everything downstream.
//
// Reference: Rust Book §8 (Collections)

use crate::domain::dataset::Dataset;
use crate::domain::error::IngestError;

/// Columns removed from the raw dataset, in drop order.
const DROPPED_COLUMNS: [&str; 3] = ["Unnamed: 2", "Unnamed: 3", "Unnamed: 4"];

/// Renames applied after the drops: (current name, new name).
const RENAMED_COLUMNS: [(&str, &str); 2] = [("v1", "Target"), ("v2", "Text")];

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Apply the schema fixes to a freshly loaded dataset.
    /// Surviving columns keep their relative order.
    pub fn apply(&self, dataset: &mut Dataset) -> Result<(), IngestError> {
        for name in DROPPED_COLUMNS {
            dataset.drop_column(name).map_err(log_preprocess_error)?;
        }
        for (from, to) in RENAMED_COLUMNS {
            dataset.rename_column(from, to).map_err(log_preprocess_error)?;
        }

        tracing::debug!("Data preprocessing completed");
        Ok(())
    }
}

/// Implement Default so Preprocessor can be created with Preprocessor::default()
impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Log a preprocessing failure in its class before passing it on.
fn log_preprocess_error(err: IngestError) -> IngestError {
    match &err {
        IngestError::MissingColumn { name } => {
            tracing::error!("Missing column in the dataframe: {}", name)
        }
        other => tracing::error!("Unexpected error during preprocessing: {}", other),
    }
    err
}
