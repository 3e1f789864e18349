// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - CsvSource implements DatasetSource
//   - A future ParquetSource could also implement DatasetSource
//   - The application layer only sees DatasetSource
//     and works with both without any changes
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::dataset::Dataset;
use crate::domain::error::IngestError;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can produce a dataset from somewhere.
///
/// Implementations:
///   - CsvSource → local CSV files and HTTP(S) URLs
pub trait DatasetSource {
    /// Load the full dataset from this source.
    /// Returns the parsed table or the first error hit on the way.
    fn load(&self) -> Result<Dataset, IngestError>;
}
