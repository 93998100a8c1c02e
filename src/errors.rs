use thiserror::Error;

use crate::types::{ColumnName, SourceId};

/// Error type for dataset loading and caller configuration failures.
///
/// Only fatal conditions live here. Degenerate but legitimate states (no
/// usable labels, empty selections, empty corpora) are reported through
/// [`crate::report::Notice`].
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("review dataset '{source_id}' is unavailable: {reason}")]
    DataUnavailable { source_id: SourceId, reason: String },
    #[error("review dataset '{source_id}' is missing required column '{column}'")]
    MissingColumn {
        source_id: SourceId,
        column: ColumnName,
    },
    #[error("configuration error: {0}")]
    Configuration(String),
}
