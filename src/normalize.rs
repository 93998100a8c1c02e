//! Label reconciliation, score fallback, class restriction, and text choice.
//!
//! Every decision with dataset-wide scope (whether the score fallback runs,
//! which text field feeds the corpora) is made once per table, never per row.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::constants::labels::{NEGATIVE_VARIANTS, NEUTRAL_VARIANTS, POSITIVE_VARIANTS};
use crate::constants::scores::{NEGATIVE_SCORE, POSITIVE_SCORE};
use crate::data::{NormalizedReview, Review, Sentiment};
use crate::errors::ReviewError;
use crate::source::ReviewTable;
use crate::types::{AppId, SourceId};
use crate::utils::normalize_label_token;

/// Label class recognized by the synonym table.
///
/// `Neutral` is recognized so it can be dropped deliberately; it never maps
/// to a [`Sentiment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalLabel {
    Positive,
    Negative,
    Neutral,
}

impl CanonicalLabel {
    /// Binary sentiment for this class, if it has one.
    pub fn sentiment(self) -> Option<Sentiment> {
        match self {
            CanonicalLabel::Positive => Some(Sentiment::Positive),
            CanonicalLabel::Negative => Some(Sentiment::Negative),
            CanonicalLabel::Neutral => None,
        }
    }
}

/// Where the surviving sentiments came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelOrigin {
    /// Labels came from the text label column.
    TextLabel,
    /// No positive text label existed; labels derive from unit scores.
    ScoreFallback,
}

/// Which review field feeds `NormalizedReview::text` for the whole batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    /// Preprocessed text column.
    CleanText,
    /// Original review text.
    RawText,
}

/// Output of [`normalize`]: surviving rows plus the batch-level decisions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedDataset {
    /// Source the rows were loaded from.
    pub source_id: SourceId,
    /// Rows in source order, every one in the binary taxonomy.
    pub rows: Vec<NormalizedReview>,
    /// Whether labels came from text or from the score fallback.
    pub label_origin: LabelOrigin,
    /// Field used for `text` on every row.
    pub text_field: TextField,
    /// Row count before class restriction.
    pub input_rows: usize,
}

impl NormalizedDataset {
    /// Number of surviving rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when no row survived; the report surfaces this as `NoUsableLabel`.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows dropped by class restriction.
    pub fn dropped_rows(&self) -> usize {
        self.input_rows.saturating_sub(self.rows.len())
    }

    /// Sorted, de-duplicated app identifiers present after normalization.
    pub fn apps(&self) -> Vec<AppId> {
        self.rows
            .iter()
            .map(|row| row.app.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Map a raw label through the synonym table.
///
/// Returns `None` for empty or unrecognized encodings.
pub fn canonical_label(raw: &str) -> Option<CanonicalLabel> {
    let token = normalize_label_token(raw);
    let token = token.as_str();
    if POSITIVE_VARIANTS.contains(&token) {
        Some(CanonicalLabel::Positive)
    } else if NEGATIVE_VARIANTS.contains(&token) {
        Some(CanonicalLabel::Negative)
    } else if NEUTRAL_VARIANTS.contains(&token) {
        Some(CanonicalLabel::Neutral)
    } else {
        None
    }
}

/// Map a numeric score: `+1` is positive, `-1` is negative, anything else is unlabeled.
pub fn label_from_score(score: f64) -> Option<CanonicalLabel> {
    if score == POSITIVE_SCORE {
        Some(CanonicalLabel::Positive)
    } else if score == NEGATIVE_SCORE {
        Some(CanonicalLabel::Negative)
    } else {
        None
    }
}

/// Normalize a loaded table into the binary taxonomy.
///
/// 1. Canonicalize every text label.
/// 2. If no row is positive and the table has a score column, relabel every
///    row from its score.
/// 3. Drop rows outside `{positive, negative}`.
/// 4. Use cleaned text for every row when any surviving row has some,
///    otherwise raw text for every row. Rows lacking cleaned text in a
///    cleaned-text batch contribute an empty string.
///
/// An empty table is [`ReviewError::DataUnavailable`]. A table whose rows are
/// all dropped is not an error; the result is simply empty.
pub fn normalize(table: ReviewTable) -> Result<NormalizedDataset, ReviewError> {
    if table.is_empty() {
        return Err(ReviewError::DataUnavailable {
            source_id: table.source_id,
            reason: "dataset contains no rows".to_string(),
        });
    }
    let ReviewTable {
        source_id,
        rows,
        has_clean_text_column,
        has_score_column,
    } = table;
    let input_rows = rows.len();

    let mut labels: Vec<Option<CanonicalLabel>> = rows
        .iter()
        .map(|row| row.label_raw.as_deref().and_then(canonical_label))
        .collect();
    let has_positive = labels.contains(&Some(CanonicalLabel::Positive));
    let label_origin = if !has_positive && has_score_column {
        info!(
            source = %source_id,
            "no positive text label found; deriving sentiment from score"
        );
        labels = rows
            .iter()
            .map(|row| row.score.and_then(label_from_score))
            .collect();
        LabelOrigin::ScoreFallback
    } else {
        LabelOrigin::TextLabel
    };

    let survivors: Vec<(Review, Sentiment)> = rows
        .into_iter()
        .zip(labels)
        .filter_map(|(row, label)| {
            label
                .and_then(CanonicalLabel::sentiment)
                .map(|sentiment| (row, sentiment))
        })
        .collect();

    let has_clean_text = has_clean_text_column
        && survivors.iter().any(|(row, _)| {
            row.clean_text
                .as_deref()
                .is_some_and(|text| !text.trim().is_empty())
        });
    let text_field = if has_clean_text {
        TextField::CleanText
    } else {
        TextField::RawText
    };

    let rows: Vec<NormalizedReview> = survivors
        .into_iter()
        .map(|(row, sentiment)| NormalizedReview {
            text: match text_field {
                TextField::CleanText => row.clean_text.unwrap_or_default(),
                TextField::RawText => row.raw_text,
            },
            app: row.app,
            sentiment,
        })
        .collect();

    if rows.is_empty() {
        warn!(
            source = %source_id,
            input_rows,
            "no row maps to the positive/negative taxonomy"
        );
    }
    debug!(
        source = %source_id,
        input_rows,
        kept = rows.len(),
        dropped = input_rows - rows.len(),
        ?label_origin,
        ?text_field,
        "normalized review rows"
    );

    Ok(NormalizedDataset {
        source_id,
        rows,
        label_origin,
        text_field,
        input_rows,
    })
}
