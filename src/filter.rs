use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::data::{NormalizedReview, Sentiment};
use crate::normalize::NormalizedDataset;
use crate::types::AppId;

/// Caller-chosen apps and sentiments.
///
/// App order is preserved and drives layout downstream. Empty sets select
/// nothing; there is no implicit "select all".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    apps: IndexSet<AppId>,
    sentiments: IndexSet<Sentiment>,
}

impl Selection {
    /// Build a selection; duplicate apps keep their first position.
    pub fn new<A, S>(apps: A, sentiments: S) -> Self
    where
        A: IntoIterator,
        A::Item: Into<AppId>,
        S: IntoIterator<Item = Sentiment>,
    {
        Self {
            apps: apps.into_iter().map(Into::into).collect(),
            sentiments: sentiments.into_iter().collect(),
        }
    }

    /// Default selection for a dataset.
    ///
    /// Apps are the configured preferred apps that exist in the dataset, in
    /// preferred order; when none exist, the first
    /// `config.fallback_app_count` apps in sorted order. Both sentiments are
    /// selected.
    pub fn defaults(dataset: &NormalizedDataset, config: &ReportConfig) -> Self {
        let available = dataset.apps();
        let preferred: Vec<AppId> = config
            .preferred_apps
            .iter()
            .filter(|app| available.contains(app))
            .cloned()
            .collect();
        let apps = if preferred.is_empty() {
            available
                .into_iter()
                .take(config.fallback_app_count)
                .collect()
        } else {
            preferred
        };
        Self::new(apps, Sentiment::ALL)
    }

    /// Replace the app selection.
    pub fn with_apps<A>(mut self, apps: A) -> Self
    where
        A: IntoIterator,
        A::Item: Into<AppId>,
    {
        self.apps = apps.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the sentiment selection.
    pub fn with_sentiments<S>(mut self, sentiments: S) -> Self
    where
        S: IntoIterator<Item = Sentiment>,
    {
        self.sentiments = sentiments.into_iter().collect();
        self
    }

    /// Selected apps in layout order.
    pub fn apps(&self) -> &IndexSet<AppId> {
        &self.apps
    }

    /// Selected sentiments.
    pub fn sentiments(&self) -> &IndexSet<Sentiment> {
        &self.sentiments
    }

    /// `true` when either set is empty, so no row can match.
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty() || self.sentiments.is_empty()
    }

    /// Whether a row falls inside this selection.
    pub fn matches(&self, row: &NormalizedReview) -> bool {
        self.apps.contains(row.app.as_str()) && self.sentiments.contains(&row.sentiment)
    }
}

/// Keep rows whose app and sentiment are both selected, in input order.
pub fn filter_reviews(rows: &[NormalizedReview], selection: &Selection) -> Vec<NormalizedReview> {
    if selection.is_empty() {
        return Vec::new();
    }
    rows.iter()
        .filter(|row| selection.matches(row))
        .cloned()
        .collect()
}
