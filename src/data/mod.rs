// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw CSV resource
// all the way to the split files on disk.
//
// The pipeline flows in this order:
//
//   CSV resource (path or URL)
//       │
//       ▼
//   CsvSource         → fetches/opens the bytes, parses records
//       │
//       ▼
//   Preprocessor      → drops artefact columns, renames v1/v2
//       │
//       ▼
//   split_train_test  → seeded shuffle into two disjoint subsets
//       │
//       ▼
//   SplitWriter       → train.csv and test.csv under <root>/raw/
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: csv crate documentation
//            Rust Book §13 (Iterators and Closures)

/// Loads a CSV resource from disk or over HTTP
pub mod loader;

/// Normalises the raw column schema
pub mod preprocessor;

/// Shuffles and splits rows into train/test sets
pub mod splitter;

/// Serialises both subsets under the output root
pub mod writer;
