use std::path::PathBuf;

use crate::constants::columns::{
    APP_COLUMN, CLEAN_TEXT_COLUMN, LABEL_COLUMN, RAW_TEXT_COLUMN, SCORE_COLUMN,
};
use crate::constants::report::{
    CHART_COLUMNS_PER_ROW, DEFAULT_APP_FALLBACK_COUNT, DEFAULT_APPS,
};
use crate::types::{AppId, ColumnName, SourceId};

/// Maps source header names onto canonical review fields.
///
/// `app`, `label`, and `raw_text` are required in the source; `clean_text`
/// and `score` are optional and their absence is recorded on the loaded table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColumnMapping {
    /// Header holding the app identifier.
    pub app: ColumnName,
    /// Header holding the textual sentiment label.
    pub label: ColumnName,
    /// Header holding the original review text.
    pub raw_text: ColumnName,
    /// Header holding the preprocessed text.
    pub clean_text: ColumnName,
    /// Header holding the numeric sentiment score.
    pub score: ColumnName,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            app: APP_COLUMN.to_string(),
            label: LABEL_COLUMN.to_string(),
            raw_text: RAW_TEXT_COLUMN.to_string(),
            clean_text: CLEAN_TEXT_COLUMN.to_string(),
            score: SCORE_COLUMN.to_string(),
        }
    }
}

impl ColumnMapping {
    /// Override the app column name.
    pub fn with_app_column(mut self, name: impl Into<ColumnName>) -> Self {
        self.app = name.into();
        self
    }

    /// Override the label column name.
    pub fn with_label_column(mut self, name: impl Into<ColumnName>) -> Self {
        self.label = name.into();
        self
    }

    /// Override the raw text column name.
    pub fn with_raw_text_column(mut self, name: impl Into<ColumnName>) -> Self {
        self.raw_text = name.into();
        self
    }

    /// Override the cleaned text column name.
    pub fn with_clean_text_column(mut self, name: impl Into<ColumnName>) -> Self {
        self.clean_text = name.into();
        self
    }

    /// Override the score column name.
    pub fn with_score_column(mut self, name: impl Into<ColumnName>) -> Self {
        self.score = name.into();
        self
    }
}

/// Configuration for a CSV-backed review source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CsvSourceConfig {
    /// Stable id used in errors and logs.
    pub source_id: SourceId,
    /// Path to the CSV file.
    pub path: PathBuf,
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Header-to-field mapping.
    pub columns: ColumnMapping,
}

impl CsvSourceConfig {
    /// Create a comma-delimited config with the default column mapping.
    pub fn new(source_id: impl Into<SourceId>, path: impl Into<PathBuf>) -> Self {
        Self {
            source_id: source_id.into(),
            path: path.into(),
            delimiter: b',',
            columns: ColumnMapping::default(),
        }
    }

    /// Override the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Override the column mapping.
    pub fn with_columns(mut self, columns: ColumnMapping) -> Self {
        self.columns = columns;
        self
    }
}

/// Selection defaults and layout settings used when assembling reports.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Apps selected by default when present, in layout order.
    pub preferred_apps: Vec<AppId>,
    /// How many sorted apps to select when no preferred app is present.
    pub fallback_app_count: usize,
    /// Count charts per grid row.
    pub chart_columns_per_row: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preferred_apps: DEFAULT_APPS.iter().map(|app| app.to_string()).collect(),
            fallback_app_count: DEFAULT_APP_FALLBACK_COUNT,
            chart_columns_per_row: CHART_COLUMNS_PER_ROW,
        }
    }
}
