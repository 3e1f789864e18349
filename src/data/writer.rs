// ============================================================
// Layer 4 — Split Writer
// ============================================================
// Serialises the train and test subsets as CSV files under a
// fixed layout:
//
//   <output_root>/
//       raw/
//           train.csv
//           test.csv
//
// The directory tree is created on demand and both files are
// truncated on every run, so reruns overwrite rather than
// append. There is no cleanup on failure: if test.csv fails
// after train.csv was written, the partial result stays on
// disk.
//
// Output format: comma-delimited, one header row, no row index
// column. Quoting is handled by csv::Writer, so message text
// containing commas or quotes survives a round trip.
//
// Reference: csv crate documentation
//            Rust Book §12 (I/O and File Handling)

use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use crate::domain::dataset::Dataset;
use crate::domain::error::IngestError;

/// Subdirectory of the output root holding the split artifacts.
const RAW_DIR: &str = "raw";

/// Writes the two split files under an output root.
pub struct SplitWriter {
    output_root: PathBuf,
}

impl SplitWriter {
    /// Create a new SplitWriter rooted at `output_root`.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self { output_root: output_root.into() }
    }

    /// Write `train` and `test` to `<output_root>/raw/`.
    /// Returns the raw directory path on success.
    pub fn write(&self, train: &Dataset, test: &Dataset) -> Result<PathBuf, IngestError> {
        let raw_dir = self.output_root.join(RAW_DIR);

        if let Err(e) = self.write_inner(&raw_dir, train, test) {
            tracing::error!("Unexpected error occurred while saving the data: {}", e);
            return Err(e);
        }

        tracing::debug!("Train and test data saved to {}", raw_dir.display());
        Ok(raw_dir)
    }

    fn write_inner(
        &self,
        raw_dir: &Path,
        train:   &Dataset,
        test:    &Dataset,
    ) -> Result<(), IngestError> {
        fs::create_dir_all(raw_dir).map_err(|e| IngestError::Io {
            path:   raw_dir.to_path_buf(),
            source: e,
        })?;

        write_csv_file(&raw_dir.join("train.csv"), train)?;
        write_csv_file(&raw_dir.join("test.csv"), test)?;
        Ok(())
    }
}

/// Write one dataset to `path`, truncating any previous file.
fn write_csv_file(path: &Path, dataset: &Dataset) -> Result<(), IngestError> {
    let file = File::create(path).map_err(|e| IngestError::Io {
        path:   path.to_path_buf(),
        source: e,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(&dataset.columns)
        .map_err(|e| csv_write_error(path, e))?;
    for row in &dataset.rows {
        writer.write_record(row).map_err(|e| csv_write_error(path, e))?;
    }

    writer.flush().map_err(|e| IngestError::Io {
        path:   path.to_path_buf(),
        source: e,
    })
}

/// A csv error while writing is almost always the underlying
/// file failing; unwrap it back to its I/O cause.
fn csv_write_error(path: &Path, err: csv::Error) -> IngestError {
    let source = match err.into_kind() {
        csv::ErrorKind::Io(io_err) => io_err,
        other => io::Error::new(io::ErrorKind::Other, format!("{:?}", other)),
    };
    IngestError::Io { path: path.to_path_buf(), source }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample(rows: &[&str]) -> Dataset {
        Dataset::new(
            vec!["Target".to_string(), "Text".to_string()],
            rows.iter()
                .map(|r| vec!["ham".to_string(), r.to_string()])
                .collect(),
        )
    }

    #[test]
    fn test_creates_raw_tree_with_both_files() {
        let dir    = tempfile::tempdir().unwrap();
        let writer = SplitWriter::new(dir.path());

        let raw_dir = writer.write(&sample(&["a", "b"]), &sample(&["c"])).unwrap();
        assert_eq!(raw_dir, dir.path().join("raw"));
        assert!(raw_dir.join("train.csv").exists());
        assert!(raw_dir.join("test.csv").exists());
    }

    #[test]
    fn test_header_row_but_no_index_column() {
        let dir = tempfile::tempdir().unwrap();
        SplitWriter::new(dir.path())
            .write(&sample(&["hello"]), &sample(&["bye"]))
            .unwrap();

        let train = std::fs::read_to_string(dir.path().join("raw/train.csv")).unwrap();
        assert_eq!(train, "Target,Text\nham,hello\n");
    }

    #[test]
    fn test_rerun_overwrites_instead_of_appending() {
        let dir    = tempfile::tempdir().unwrap();
        let writer = SplitWriter::new(dir.path());

        writer.write(&sample(&["one", "two", "three"]), &sample(&["x"])).unwrap();
        writer.write(&sample(&["only"]), &sample(&["y"])).unwrap();

        let train = std::fs::read_to_string(dir.path().join("raw/train.csv")).unwrap();
        // header plus the single row from the second run
        assert_eq!(train.lines().count(), 2);
    }

    #[test]
    fn test_comma_in_text_is_quoted() {
        let dir = tempfile::tempdir().unwrap();
        SplitWriter::new(dir.path())
            .write(&sample(&["hi, there"]), &sample(&["z"]))
            .unwrap();

        let train = std::fs::read_to_string(dir.path().join("raw/train.csv")).unwrap();
        assert!(train.contains("\"hi, there\""));
    }
}
