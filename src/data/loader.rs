// ============================================================
// Layer 4 — CSV Loader
// ============================================================
// Loads a Dataset from a locator that is either a local file
// path or an HTTP(S) URL.
//
// How loading works:
//   1. Decide local vs remote from the locator prefix
//   2. Remote → blocking GET, fail on a non-success status,
//      read the whole body into memory
//      Local  → open the file
//   3. Feed either source to the same csv parser
//   4. The first record becomes the column header, every
//      following record becomes one row of string cells
//
// The csv crate rejects ragged input (a record whose field
// count differs from the header) with an UnequalLengths error,
// so a rectangular Dataset comes out or the load fails; there
// is no partially valid table.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};

use crate::domain::dataset::Dataset;
use crate::domain::error::IngestError;
use crate::domain::traits::DatasetSource;

/// Loads a Dataset from one CSV resource, local or remote.
/// Implements the DatasetSource trait from Layer 3.
pub struct CsvSource {
    /// Filesystem path or HTTP(S) URL of the resource
    locator: String,
}

impl CsvSource {
    /// Create a new CsvSource pointed at a path or URL.
    pub fn new(locator: impl Into<String>) -> Self {
        Self { locator: locator.into() }
    }

    /// True when the locator addresses a remote HTTP(S) resource.
    fn is_remote(&self) -> bool {
        self.locator.starts_with("http://") || self.locator.starts_with("https://")
    }

    /// Fetch the resource body over HTTP.
    /// A 4xx/5xx status is a failure, not a body to parse.
    fn fetch_remote(&self) -> Result<String, IngestError> {
        let response = reqwest::blocking::get(&self.locator)
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| IngestError::Http { url: self.locator.clone(), source: e })?;

        response
            .text()
            .map_err(|e| IngestError::Http { url: self.locator.clone(), source: e })
    }

    fn open_local(&self) -> Result<File, IngestError> {
        File::open(&self.locator).map_err(|e| IngestError::Io {
            path:   PathBuf::from(&self.locator),
            source: e,
        })
    }

    /// Parse CSV bytes into a Dataset: header first, then rows.
    fn parse_csv<R: Read>(&self, reader: R) -> Result<Dataset, IngestError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let columns: Vec<String> = csv_reader
            .headers()
            .map_err(|e| self.csv_read_error(e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record.map_err(|e| self.csv_read_error(e))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Dataset::new(columns, rows))
    }

    /// A csv error carrying an I/O kind is the source failing
    /// mid-read, not bad syntax; unwrap it back to the I/O class.
    /// Everything else really is malformed content.
    fn csv_read_error(&self, err: csv::Error) -> IngestError {
        if !err.is_io_error() {
            return IngestError::Parse { locator: self.locator.clone(), source: err };
        }
        let source = match err.into_kind() {
            csv::ErrorKind::Io(io_err) => io_err,
            other => io::Error::new(io::ErrorKind::Other, format!("{:?}", other)),
        };
        IngestError::Io { path: PathBuf::from(&self.locator), source }
    }

    fn read_dataset(&self) -> Result<Dataset, IngestError> {
        if self.is_remote() {
            let body = self.fetch_remote()?;
            self.parse_csv(body.as_bytes())
        } else {
            let file = self.open_local()?;
            self.parse_csv(file)
        }
    }
}

/// Implement the DatasetSource trait so the application layer
/// can call load() without knowing about CSV or HTTP internals
impl DatasetSource for CsvSource {
    fn load(&self) -> Result<Dataset, IngestError> {
        let dataset = self.read_dataset().map_err(log_load_error)?;

        tracing::debug!("Data loaded from {}", self.locator);
        tracing::debug!(
            "Parsed {} rows across {} columns",
            dataset.row_count(),
            dataset.column_count(),
        );
        Ok(dataset)
    }
}

/// Log a loading failure in its class before passing it on.
fn log_load_error(err: IngestError) -> IngestError {
    match &err {
        IngestError::Parse { .. } => {
            tracing::error!("Failed to parse the CSV file: {}", err)
        }
        _ => tracing::error!("Unexpected error occurred while loading the data: {}", err),
    }
    err
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_loads_local_csv() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "ok.csv", "v1,v2\nham,hello\nspam,win cash\n");

        let dataset = CsvSource::new(path).load().unwrap();
        assert_eq!(dataset.columns, vec!["v1", "v2"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.rows[1], vec!["spam", "win cash"]);
    }

    #[test]
    fn test_quoted_comma_stays_in_one_cell() {
        let dir  = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "quoted.csv", "v1,v2\nham,\"hello, world\"\n");

        let dataset = CsvSource::new(path).load().unwrap();
        assert_eq!(dataset.rows[0][1], "hello, world");
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = CsvSource::new("definitely/not/here.csv").load().unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }

    #[test]
    fn test_ragged_rows_are_a_parse_error() {
        let dir  = tempfile::tempdir().unwrap();
        // header has two fields, the record has three
        let path = write_fixture(&dir, "ragged.csv", "v1,v2\nham,hello,extra\n");

        let err = CsvSource::new(path).load().unwrap_err();
        assert!(matches!(err, IngestError::Parse { .. }));
    }

    #[test]
    fn test_unbalanced_quote_is_a_parse_error() {
        let dir  = tempfile::tempdir().unwrap();
        // the stray quote swallows the rest of the file into one
        // field, so the record comes up short against the header
        let path = write_fixture(&dir, "unbalanced.csv", "v1,v2\n\"ham,hello\nspam,win cash\n");

        let err = CsvSource::new(path).load().unwrap_err();
        assert!(matches!(err, IngestError::Parse { .. }));
    }

    #[test]
    fn test_unterminated_quote_in_final_field_reads_to_eof() {
        let dir  = tempfile::tempdir().unwrap();
        // a quote opening the last field and never closed is not a
        // syntax error to the csv reader: the remaining lines land
        // inside that cell and the load succeeds with one long row
        let path = write_fixture(&dir, "trailing.csv", "v1,v2\nham,\"win cash\nspam,more\n");

        let dataset = CsvSource::new(path).load().unwrap();
        assert_eq!(dataset.row_count(), 1);
        assert!(dataset.rows[0][1].contains("spam,more"));
    }

    #[test]
    fn test_directory_locator_is_an_io_error() {
        // opening a directory succeeds on Linux; the failure only
        // surfaces on the first read, inside the csv reader
        let dir = tempfile::tempdir().unwrap();

        let err = CsvSource::new(dir.path().to_string_lossy()).load().unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }

    #[test]
    fn test_url_locators_are_remote() {
        assert!(CsvSource::new("https://example.com/data.csv").is_remote());
        assert!(CsvSource::new("http://example.com/data.csv").is_remote());
        assert!(!CsvSource::new("data/spam.csv").is_remote());
    }
}
