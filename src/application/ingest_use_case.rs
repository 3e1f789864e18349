// ============================================================
// Layer 2 — IngestUseCase
// ============================================================
// Orchestrates the full ingestion pipeline in order:
//
//   Step 1: Load the CSV source         (Layer 4 - data)
//   Step 2: Fix the column schema       (Layer 4 - data)
//   Step 3: Split into train/test       (Layer 4 - data)
//   Step 4: Write both splits to disk   (Layer 4 - data)
//
// Each step either hands a value to the next or stops the run
// with the first error, which the CLI layer reports.
//
// Reference: Rust Book §13 (Iterators and Closures)

use serde::{Deserialize, Serialize};

use crate::data::{
    loader::CsvSource,
    preprocessor::Preprocessor,
    splitter::split_train_test,
    writer::SplitWriter,
};
use crate::domain::error::IngestError;
use crate::domain::traits::DatasetSource;

// ─── Ingestion Configuration ─────────────────────────────────────────────────
// The four knobs of a run, with the defaults the tool ships with.
// Callers build an IngestConfig (usually from CLI flags) and the
// use case never reads anything else.

/// Source fetched when no flag overrides it: the spam SMS
/// dataset used by the downstream classifier.
pub const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/zahir2003/Datasets/refs/heads/main/spam%202.csv";

/// Split artifacts land under this root, in a raw/ subdirectory.
pub const DEFAULT_OUTPUT_ROOT: &str = "./data";

/// Fraction of rows held out for the test set.
pub const DEFAULT_TEST_RATIO: f64 = 0.2;

/// Seed for the deterministic row shuffle.
pub const DEFAULT_SEED: u64 = 42;

/// All parameters for one ingestion run.
/// Serialisable so a caller can record or replay a run's
/// parameters exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    pub source:      String,
    pub output_root: String,
    pub test_ratio:  f64,
    pub seed:        u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            source:      DEFAULT_SOURCE.to_string(),
            output_root: DEFAULT_OUTPUT_ROOT.to_string(),
            test_ratio:  DEFAULT_TEST_RATIO,
            seed:        DEFAULT_SEED,
        }
    }
}

// ─── IngestUseCase ────────────────────────────────────────────────────────────
// Owns the config and runs the full pipeline.
pub struct IngestUseCase {
    config: IngestConfig,
}

impl IngestUseCase {
    /// Create a new IngestUseCase with the given configuration
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Execute the full ingestion pipeline end to end
    pub fn execute(&self) -> Result<(), IngestError> {
        let cfg = &self.config;

        // ── Step 1: Load the CSV source ──────────────────────────────────────
        // CsvSource decides path vs URL and parses the records
        tracing::info!("Loading dataset from '{}'", cfg.source);
        let source      = CsvSource::new(&cfg.source);
        let mut dataset = source.load()?;

        // ── Step 2: Fix the column schema ────────────────────────────────────
        // Drops the unnamed artefact columns, renames v1/v2
        let preprocessor = Preprocessor::new();
        preprocessor.apply(&mut dataset)?;

        // ── Step 3: Seeded train/test split ──────────────────────────────────
        // Same seed and ratio reproduce the same partition
        let (train, test) = split_train_test(dataset, cfg.test_ratio, cfg.seed)?;
        tracing::info!(
            "Split: {} train rows, {} test rows",
            train.row_count(),
            test.row_count(),
        );

        // ── Step 4: Write both splits ────────────────────────────────────────
        // train.csv and test.csv under <output_root>/raw/
        let writer = SplitWriter::new(&cfg.output_root);
        writer.write(&train, &test)?;

        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const RAW_HEADER: &str = "v1,v2,Unnamed: 2,Unnamed: 3,Unnamed: 4";

    fn fixture_csv(rows: usize) -> String {
        let mut csv = String::from(RAW_HEADER);
        csv.push('\n');
        for i in 0..rows {
            csv.push_str(&format!("ham,message {},,,\n", i));
        }
        csv
    }

    fn config_for(dir: &tempfile::TempDir, rows: usize) -> IngestConfig {
        let source = dir.path().join("input.csv");
        fs::write(&source, fixture_csv(rows)).unwrap();
        IngestConfig {
            source:      source.to_string_lossy().into_owned(),
            output_root: dir.path().join("out").to_string_lossy().into_owned(),
            test_ratio:  0.2,
            seed:        42,
        }
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let dir    = tempfile::tempdir().unwrap();
        let config = config_for(&dir, 10);
        IngestUseCase::new(config).execute().unwrap();

        let raw   = dir.path().join("out/raw");
        let train = fs::read_to_string(raw.join("train.csv")).unwrap();
        let test  = fs::read_to_string(raw.join("test.csv")).unwrap();

        assert!(train.starts_with("Target,Text\n"));
        assert!(test.starts_with("Target,Text\n"));
        // header + 8 rows and header + 2 rows
        assert_eq!(train.lines().count(), 9);
        assert_eq!(test.lines().count(), 3);
    }

    #[test]
    fn test_missing_expected_column_stops_the_run() {
        let dir    = tempfile::tempdir().unwrap();
        let source = dir.path().join("input.csv");
        fs::write(&source, "v1,Unnamed: 2,Unnamed: 3,Unnamed: 4\nham,,,\n").unwrap();

        let config = IngestConfig {
            source:      source.to_string_lossy().into_owned(),
            output_root: dir.path().join("out").to_string_lossy().into_owned(),
            ..IngestConfig::default()
        };

        let err = IngestUseCase::new(config).execute().unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { name } if name == "v2"));
        // nothing was written before the failure
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_rerunning_overwrites_previous_splits() {
        let dir    = tempfile::tempdir().unwrap();
        let config = config_for(&dir, 10);
        IngestUseCase::new(config.clone()).execute().unwrap();
        IngestUseCase::new(config).execute().unwrap();

        let train = fs::read_to_string(dir.path().join("out/raw/train.csv")).unwrap();
        assert_eq!(train.lines().count(), 9);
    }

    #[test]
    fn test_default_config_matches_documented_constants() {
        let config = IngestConfig::default();
        assert_eq!(config.source, DEFAULT_SOURCE);
        assert_eq!(config.output_root, "./data");
        assert_eq!(config.test_ratio, 0.2);
        assert_eq!(config.seed, 42);
    }
}
