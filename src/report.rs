//! Report assembly: filter then aggregate, with non-fatal states made explicit.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::aggregate::{build_corpus, count_by_app};
use crate::data::{CountSummary, Sentiment, TextCorpus};
use crate::filter::{Selection, filter_reviews};
use crate::normalize::NormalizedDataset;
use crate::types::{AppId, SourceId};

/// Informational states a renderer must branch on. None of these is an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Normalization left zero rows in the binary taxonomy.
    NoUsableLabel,
    /// No app or no sentiment was selected.
    EmptySelection,
    /// One app/sentiment cell has no text to render.
    EmptyCorpus { app: AppId, sentiment: Sentiment },
}

/// Corpus for one app and one sentiment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CorpusCell {
    pub app: AppId,
    pub sentiment: Sentiment,
    pub corpus: TextCorpus,
}

impl CorpusCell {
    /// Corpus text if it is fit for a word-frequency renderer.
    pub fn renderable(&self) -> Option<&str> {
        (!self.corpus.is_blank()).then(|| self.corpus.as_str())
    }
}

/// Aggregates handed to rendering collaborators.
///
/// `counts` holds an entry only for apps that were computed; a zero count is
/// a real tally, never a placeholder.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SentimentReport {
    pub source_id: SourceId,
    /// Rows in the normalized dataset.
    pub total_rows: usize,
    /// Rows left after applying the selection.
    pub filtered_rows: usize,
    pub selection: Selection,
    /// Per-app counts in selection order.
    pub counts: IndexMap<AppId, CountSummary>,
    /// Per-app cells in selection order, positive then negative.
    pub corpora: Vec<CorpusCell>,
    pub notices: Vec<Notice>,
}

impl SentimentReport {
    /// Counts for one app, if it was selected.
    pub fn counts_for(&self, app: &str) -> Option<&CountSummary> {
        self.counts.get(app)
    }

    /// Corpus cell for one app and sentiment, if it was built.
    pub fn corpus_for(&self, app: &str, sentiment: Sentiment) -> Option<&CorpusCell> {
        self.corpora
            .iter()
            .find(|cell| cell.app == app && cell.sentiment == sentiment)
    }

    /// Whether the given notice was raised.
    pub fn has_notice(&self, notice: &Notice) -> bool {
        self.notices.contains(notice)
    }
}

/// Run filter and aggregation over a normalized dataset.
///
/// Corpora are built for every selected app and both sentiments, so a cell
/// for an unselected sentiment is present but empty (and flagged). When the
/// selection is empty no corpus is built at all.
pub fn build_report(dataset: &NormalizedDataset, selection: &Selection) -> SentimentReport {
    let mut notices = Vec::new();
    if dataset.is_empty() {
        notices.push(Notice::NoUsableLabel);
    }

    let filtered = filter_reviews(&dataset.rows, selection);
    let counts = count_by_app(&filtered, selection.apps());

    let mut corpora = Vec::new();
    if selection.is_empty() {
        notices.push(Notice::EmptySelection);
    } else {
        for app in selection.apps() {
            for sentiment in Sentiment::ALL {
                let corpus = build_corpus(&filtered, app, sentiment);
                if corpus.is_blank() {
                    notices.push(Notice::EmptyCorpus {
                        app: app.clone(),
                        sentiment,
                    });
                }
                corpora.push(CorpusCell {
                    app: app.clone(),
                    sentiment,
                    corpus,
                });
            }
        }
    }

    debug!(
        source = %dataset.source_id,
        filtered_rows = filtered.len(),
        apps = counts.len(),
        notices = notices.len(),
        "built sentiment report"
    );

    SentimentReport {
        source_id: dataset.source_id.clone(),
        total_rows: dataset.len(),
        filtered_rows: filtered.len(),
        selection: selection.clone(),
        counts,
        corpora,
        notices,
    }
}

/// Group items into grid rows of `columns_per_row` (minimum one).
pub fn chart_rows<T>(items: &[T], columns_per_row: usize) -> Vec<&[T]> {
    items.chunks(columns_per_row.max(1)).collect()
}
