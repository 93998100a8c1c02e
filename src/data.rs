use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::labels::{NEGATIVE, POSITIVE};
use crate::errors::ReviewError;

pub use crate::types::{AppId, RawLabel, ReviewText};

/// One input row, already mapped onto canonical field names by a loader.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Source application identifier.
    pub app: AppId,
    /// Original free-text review (always present, possibly empty).
    pub raw_text: ReviewText,
    /// Preprocessed text; `None` when the cell was missing or empty.
    pub clean_text: Option<ReviewText>,
    /// Sentiment label as given by the source.
    pub label_raw: Option<RawLabel>,
    /// Precomputed numeric sentiment score.
    pub score: Option<f64>,
}

impl Review {
    /// Create a review with only app and raw text populated.
    pub fn new(app: impl Into<AppId>, raw_text: impl Into<ReviewText>) -> Self {
        Self {
            app: app.into(),
            raw_text: raw_text.into(),
            ..Self::default()
        }
    }

    /// Set the raw sentiment label.
    pub fn with_label(mut self, label: impl Into<RawLabel>) -> Self {
        self.label_raw = Some(label.into());
        self
    }

    /// Set the preprocessed text.
    pub fn with_clean_text(mut self, text: impl Into<ReviewText>) -> Self {
        self.clean_text = Some(text.into());
        self
    }

    /// Set the numeric score.
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// Binary sentiment taxonomy. Nothing else survives normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// `positive`
    Positive,
    /// `negative`
    Negative,
}

impl Sentiment {
    /// Both classes in their fixed emission order.
    pub const ALL: [Sentiment; 2] = [Sentiment::Positive, Sentiment::Negative];

    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => POSITIVE,
            Sentiment::Negative => NEGATIVE,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ReviewError;

    /// Parse a canonical name only; variant encodings belong to the normalizer.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            POSITIVE => Ok(Sentiment::Positive),
            NEGATIVE => Ok(Sentiment::Negative),
            other => Err(ReviewError::Configuration(format!(
                "unknown sentiment '{other}': expected '{POSITIVE}' or '{NEGATIVE}'"
            ))),
        }
    }
}

/// Row that passed normalization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedReview {
    /// Source application identifier (unchanged).
    pub app: AppId,
    /// Text used for corpus building, chosen once per batch.
    pub text: ReviewText,
    /// Canonical sentiment.
    pub sentiment: Sentiment,
}

impl NormalizedReview {
    /// Build a normalized row directly (tests and in-memory pipelines).
    pub fn new(app: impl Into<AppId>, text: impl Into<ReviewText>, sentiment: Sentiment) -> Self {
        Self {
            app: app.into(),
            text: text.into(),
            sentiment,
        }
    }
}

/// Per-app tally over the full sentiment domain.
///
/// Both keys are always present; unobserved classes count zero. Field order
/// is fixed (positive, then negative) and carries no ranking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSummary {
    /// Rows labeled positive.
    pub positive: usize,
    /// Rows labeled negative.
    pub negative: usize,
}

impl CountSummary {
    /// Count for one class.
    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
        }
    }

    pub(crate) fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    /// `(sentiment, count)` pairs in fixed positive-then-negative order.
    pub fn entries(&self) -> [(Sentiment, usize); 2] {
        Sentiment::ALL.map(|sentiment| (sentiment, self.get(sentiment)))
    }

    /// Sum over both classes.
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }

    /// Largest single count; the scale a count chart is drawn against.
    pub fn max_count(&self) -> usize {
        self.positive.max(self.negative)
    }
}

/// Space-joined review texts for one app and one sentiment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextCorpus(String);

impl TextCorpus {
    /// Wrap an already-joined corpus string.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the corpus text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// `true` when no rows contributed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `true` when the corpus holds no visible characters.
    ///
    /// Blank corpora must not reach a word-frequency renderer.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TextCorpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
