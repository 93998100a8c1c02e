//! Review source interfaces and the loaded-table contract.
//!
//! Ownership model:
//! - `ReviewSource` is the loader-facing interface; it maps source columns
//!   onto canonical `Review` fields and nothing more.
//! - `ReviewTable` carries the rows plus dataset-level column presence, which
//!   the normalizer needs for its batch-wide decisions.
//! - Label reconciliation and filtering happen downstream, never in a source.

use crate::data::Review;
use crate::errors::ReviewError;
use crate::types::SourceId;

/// CSV-backed review source.
pub mod csv_source;

pub use csv_source::CsvReviewSource;

/// Rows loaded from one source, with the columns that were present.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewTable {
    /// Source that produced the rows.
    pub source_id: SourceId,
    /// Rows in source order.
    pub rows: Vec<Review>,
    /// Whether the source had a cleaned-text column at all.
    pub has_clean_text_column: bool,
    /// Whether the source had a numeric score column at all.
    pub has_score_column: bool,
}

impl ReviewTable {
    /// Build a table, inferring column presence from the rows.
    ///
    /// A column counts as present when any row carries a value for it. Use
    /// [`ReviewTable::with_column_presence`] when the source knows better.
    pub fn new(source_id: impl Into<SourceId>, rows: Vec<Review>) -> Self {
        let has_clean_text_column = rows.iter().any(|row| row.clean_text.is_some());
        let has_score_column = rows.iter().any(|row| row.score.is_some());
        Self {
            source_id: source_id.into(),
            rows,
            has_clean_text_column,
            has_score_column,
        }
    }

    /// Override inferred column presence.
    pub fn with_column_presence(mut self, clean_text: bool, score: bool) -> Self {
        self.has_clean_text_column = clean_text;
        self.has_score_column = score;
        self
    }

    /// Number of loaded rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when the source yielded no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Loader-facing source interface.
///
/// For a fixed underlying resource, `load` must return the same rows in the
/// same order; corpus order downstream depends on it.
pub trait ReviewSource: Send + Sync {
    /// Stable source identifier used in errors and logs.
    fn id(&self) -> &str;
    /// Load every row, mapped onto canonical fields.
    ///
    /// Return [`ReviewError::DataUnavailable`] when the resource cannot be
    /// located or read.
    fn load(&self) -> Result<ReviewTable, ReviewError>;
}

/// Source backed by a prebuilt table.
#[derive(Clone, Debug)]
pub struct InMemorySource {
    table: ReviewTable,
}

impl InMemorySource {
    /// Wrap an existing table.
    pub fn new(table: ReviewTable) -> Self {
        Self { table }
    }

    /// Build from rows with inferred column presence.
    pub fn from_rows(source_id: impl Into<SourceId>, rows: Vec<Review>) -> Self {
        Self::new(ReviewTable::new(source_id, rows))
    }
}

impl ReviewSource for InMemorySource {
    fn id(&self) -> &str {
        &self.table.source_id
    }

    fn load(&self) -> Result<ReviewTable, ReviewError> {
        Ok(self.table.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_infers_column_presence_from_rows() {
        let table = ReviewTable::new(
            "inline",
            vec![
                Review::new("A", "one").with_label("pos"),
                Review::new("A", "two").with_clean_text("dua"),
            ],
        );
        assert!(table.has_clean_text_column);
        assert!(!table.has_score_column);
        assert_eq!(table.len(), 2);

        let table = table.with_column_presence(false, true);
        assert!(!table.has_clean_text_column);
        assert!(table.has_score_column);
    }

    #[test]
    fn in_memory_source_returns_table_unchanged() {
        let source = InMemorySource::from_rows("inline", vec![Review::new("A", "x")]);
        assert_eq!(source.id(), "inline");
        let table = source.load().unwrap();
        assert_eq!(table.rows, vec![Review::new("A", "x")]);
    }
}
