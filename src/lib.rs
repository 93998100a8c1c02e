#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Per-app sentiment counts and per-app/per-sentiment corpora.
pub mod aggregate;
/// Source, column-mapping, and report configuration types.
pub mod config;
/// Centralized constants: label synonyms, default columns, report defaults.
pub mod constants;
/// Review, normalized review, and aggregate value types.
pub mod data;
/// Runnable report CLI shared with the demo binary.
pub mod example_apps;
/// Selection and stable row filtering.
pub mod filter;
/// Load-once dataset caching keyed on file modification time.
pub mod ingestion;
/// Label normalization and batch-level text selection.
pub mod normalize;
/// Report assembly and non-fatal notices.
pub mod report;
/// Review source traits and built-in loaders.
pub mod source;
/// Input transports used by sources.
pub mod transport;
/// Shared type aliases.
pub mod types;
/// Text helpers.
pub mod utils;

mod errors;

pub use aggregate::{build_corpus, count_by_app};
pub use config::{ColumnMapping, CsvSourceConfig, ReportConfig};
pub use data::{CountSummary, NormalizedReview, Review, Sentiment, TextCorpus};
pub use errors::ReviewError;
pub use filter::{Selection, filter_reviews};
pub use ingestion::DatasetCache;
pub use normalize::{CanonicalLabel, LabelOrigin, NormalizedDataset, TextField, normalize};
pub use report::{CorpusCell, Notice, SentimentReport, build_report};
pub use source::{CsvReviewSource, InMemorySource, ReviewSource, ReviewTable};
pub use types::{AppId, ColumnName, RawLabel, ReviewText, SourceId, Term};
