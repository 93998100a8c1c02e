use std::fs::File;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::config::{ColumnMapping, CsvSourceConfig};
use crate::data::Review;
use crate::errors::ReviewError;
use crate::source::{ReviewSource, ReviewTable};
use crate::transport::fs::is_csv_file;

/// Review source that reads a headered CSV file.
///
/// Empty (or whitespace-only) cells become `None`. Scores parse as `f64`;
/// unparseable or non-finite scores become `None`. Malformed rows and
/// invalid UTF-8 make the whole dataset unavailable.
#[derive(Clone, Debug)]
pub struct CsvReviewSource {
    config: CsvSourceConfig,
}

impl CsvReviewSource {
    /// Create a source from its config.
    pub fn new(config: CsvSourceConfig) -> Self {
        Self { config }
    }

    /// Access the source config.
    pub fn config(&self) -> &CsvSourceConfig {
        &self.config
    }

    /// Parse CSV from any reader using this source's delimiter and mapping.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<ReviewTable, ReviewError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.config.delimiter)
            .from_reader(reader);
        let headers = csv_reader
            .headers()
            .map_err(|err| self.unreadable(err))?
            .clone();
        let layout = HeaderLayout::resolve(&headers, &self.config.columns, &self.config.source_id)?;
        debug!(
            source = %self.config.source_id,
            clean_text_column = layout.clean_text.is_some(),
            score_column = layout.score.is_some(),
            "resolved review columns"
        );

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record.map_err(|err| self.unreadable(err))?;
            rows.push(layout.review_from(&record));
        }
        info!(
            source = %self.config.source_id,
            rows = rows.len(),
            "loaded review rows"
        );
        Ok(ReviewTable::new(self.config.source_id.clone(), rows)
            .with_column_presence(layout.clean_text.is_some(), layout.score.is_some()))
    }

    fn unreadable(&self, err: csv::Error) -> ReviewError {
        warn!(source = %self.config.source_id, error = %err, "dataset is not readable as CSV");
        self.unavailable(format!("unreadable CSV: {err}"))
    }

    fn unavailable(&self, reason: impl Into<String>) -> ReviewError {
        ReviewError::DataUnavailable {
            source_id: self.config.source_id.clone(),
            reason: reason.into(),
        }
    }
}

impl ReviewSource for CsvReviewSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn load(&self) -> Result<ReviewTable, ReviewError> {
        let path = &self.config.path;
        if !path.is_file() {
            return Err(self.unavailable(format!("file not found: {}", path.display())));
        }
        if !is_csv_file(path) {
            warn!(path = %path.display(), "dataset file does not have a .csv extension");
        }
        let file = File::open(path)
            .map_err(|err| self.unavailable(format!("cannot open {}: {err}", path.display())))?;
        self.read_from(file)
    }
}

/// Column indices resolved from the header row.
struct HeaderLayout {
    app: usize,
    label: usize,
    raw_text: usize,
    clean_text: Option<usize>,
    score: Option<usize>,
}

impl HeaderLayout {
    fn resolve(
        headers: &StringRecord,
        columns: &ColumnMapping,
        source_id: &str,
    ) -> Result<Self, ReviewError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim_start_matches('\u{feff}').trim() == name)
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| ReviewError::MissingColumn {
                source_id: source_id.to_string(),
                column: name.to_string(),
            })
        };
        Ok(Self {
            app: require(&columns.app)?,
            label: require(&columns.label)?,
            raw_text: require(&columns.raw_text)?,
            clean_text: find(&columns.clean_text),
            score: find(&columns.score),
        })
    }

    fn review_from(&self, record: &StringRecord) -> Review {
        Review {
            app: record.get(self.app).unwrap_or_default().to_string(),
            raw_text: record.get(self.raw_text).unwrap_or_default().to_string(),
            clean_text: self.clean_text.and_then(|idx| non_empty_cell(record, idx)),
            label_raw: non_empty_cell(record, self.label),
            score: self
                .score
                .and_then(|idx| non_empty_cell(record, idx))
                .and_then(|cell| cell.trim().parse::<f64>().ok())
                .filter(|score| score.is_finite()),
        }
    }
}

fn non_empty_cell(record: &StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .filter(|cell| !cell.trim().is_empty())
        .map(str::to_string)
}
