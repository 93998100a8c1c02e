use std::collections::HashMap;

use indexmap::IndexMap;

use crate::constants::report::CORPUS_SEPARATOR;
use crate::data::{CountSummary, NormalizedReview, Sentiment, TextCorpus};
use crate::types::AppId;

/// Tally sentiments per app for each app of interest, in the given order.
///
/// Every requested app gets a fully populated [`CountSummary`], zeroed when
/// it has no rows. Rows for apps not requested are ignored. Repeated apps
/// keep their first position.
pub fn count_by_app<'a, I>(
    rows: &[NormalizedReview],
    apps_of_interest: I,
) -> IndexMap<AppId, CountSummary>
where
    I: IntoIterator<Item = &'a AppId>,
{
    let mut tallies: HashMap<&str, CountSummary> = HashMap::new();
    for row in rows {
        tallies.entry(row.app.as_str()).or_default().record(row.sentiment);
    }
    apps_of_interest
        .into_iter()
        .map(|app| {
            let summary = tallies.get(app.as_str()).copied().unwrap_or_default();
            (app.clone(), summary)
        })
        .collect()
}

/// Join the text of rows matching `app` and `sentiment` with single spaces.
///
/// Row order is preserved. No matching rows yields an empty corpus, which
/// callers must treat as "no data" rather than render.
pub fn build_corpus(rows: &[NormalizedReview], app: &str, sentiment: Sentiment) -> TextCorpus {
    let texts: Vec<&str> = rows
        .iter()
        .filter(|row| row.app == app && row.sentiment == sentiment)
        .map(|row| row.text.as_str())
        .collect();
    TextCorpus::new(texts.join(CORPUS_SEPARATOR))
}
