// ============================================================
// Layer 3 — Dataset Domain Type
// ============================================================
// The in-memory table every pipeline stage works on: named
// columns over ordered rows of string cells. Mostly a plain
// data struct; the only schema operations are the two the
// preprocessor needs, dropping a column and renaming one.
//
// Using #[derive(Debug, Clone)] gives us:
//   - Debug: lets us print the struct with {:?}
//   - Clone: lets us make copies of the struct
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §8 (Vectors)

use crate::domain::error::IngestError;

/// An in-memory table: named columns plus ordered rows of string
/// cells. Rows are rectangular, exactly one cell per column.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows:    Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by name, or None if absent.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Remove a column and its cell in every row.
    /// Order of the remaining columns is unchanged.
    pub fn drop_column(&mut self, name: &str) -> Result<(), IngestError> {
        let index = self
            .column_index(name)
            .ok_or_else(|| IngestError::MissingColumn { name: name.to_string() })?;

        self.columns.remove(index);
        for row in &mut self.rows {
            row.remove(index);
        }
        Ok(())
    }

    /// Rename a column in place, keeping its position.
    pub fn rename_column(&mut self, from: &str, to: &str) -> Result<(), IngestError> {
        let index = self
            .column_index(from)
            .ok_or_else(|| IngestError::MissingColumn { name: from.to_string() })?;

        self.columns[index] = to.to_string();
        Ok(())
    }
}
