use reviewlens::{
    AppId, CountSummary, LabelOrigin, NormalizedReview, Notice, Review, ReviewTable, Selection,
    Sentiment, build_corpus, build_report, count_by_app, filter_reviews, normalize,
};

fn mixed_table() -> ReviewTable {
    ReviewTable::new(
        "invariants",
        vec![
            Review::new("BCA Mobile", "Bagus!").with_label(" Positive").with_clean_text("bagus"),
            Review::new("BRImo", "Lemot").with_label("NEG").with_clean_text("lemot"),
            Review::new("BCA Mobile", "Biasa").with_label("neutral").with_clean_text("biasa"),
            Review::new("BRImo", "Mantap").with_label("positif").with_clean_text("mantap"),
            Review::new("BCA Mobile", "Error").with_label("negative").with_clean_text("error"),
            Review::new("BRImo", "???").with_label("sarcastic").with_clean_text("sarkas"),
            Review::new("BCA Mobile", "Cepat").with_label("pos").with_clean_text("cepat"),
            Review::new("BRImo", "Tanpa label").with_clean_text("tanpa label"),
        ],
    )
}

fn apps(names: &[&str]) -> Vec<AppId> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn every_normalized_row_is_positive_or_negative() {
    let dataset = normalize(mixed_table()).unwrap();
    assert_eq!(dataset.len(), 5);
    assert!(
        dataset
            .rows
            .iter()
            .all(|row| Sentiment::ALL.contains(&row.sentiment))
    );
    let texts: Vec<&str> = dataset.rows.iter().map(|row| row.text.as_str()).collect();
    assert!(!texts.contains(&"biasa"));
    assert!(!texts.contains(&"sarkas"));
    assert!(!texts.contains(&"tanpa label"));
}

#[test]
fn score_fallback_labels_unit_scores_and_drops_the_rest() {
    let table = ReviewTable::new(
        "fallback",
        vec![
            Review::new("X", "a").with_label("neg").with_score(1.0),
            Review::new("X", "b").with_score(-1.0),
            Review::new("X", "c").with_label("netral").with_score(1.0),
            Review::new("X", "d").with_score(0.0),
            Review::new("X", "e").with_score(-1.0),
            Review::new("X", "f").with_score(3.0),
        ],
    );
    let dataset = normalize(table).unwrap();
    assert_eq!(dataset.label_origin, LabelOrigin::ScoreFallback);
    assert_eq!(
        dataset.rows,
        vec![
            NormalizedReview::new("X", "a", Sentiment::Positive),
            NormalizedReview::new("X", "b", Sentiment::Negative),
            NormalizedReview::new("X", "c", Sentiment::Positive),
            NormalizedReview::new("X", "e", Sentiment::Negative),
        ]
    );
}

#[test]
fn counts_total_the_filtered_rows_of_each_app() {
    let dataset = normalize(mixed_table()).unwrap();
    for sentiments in [
        vec![Sentiment::Positive],
        vec![Sentiment::Negative],
        Sentiment::ALL.to_vec(),
    ] {
        let selection = Selection::new(["BCA Mobile", "BRImo"], sentiments);
        let filtered = filter_reviews(&dataset.rows, &selection);
        let counts = count_by_app(&filtered, selection.apps());
        for (app, summary) in &counts {
            let expected = filtered.iter().filter(|row| &row.app == app).count();
            assert_eq!(summary.total(), expected, "{app}");
        }
    }
}

#[test]
fn count_summary_always_has_both_keys() {
    let dataset = normalize(mixed_table()).unwrap();
    let selection = Selection::new(["BRImo", "Jenius"], [Sentiment::Negative]);
    let filtered = filter_reviews(&dataset.rows, &selection);
    let counts = count_by_app(&filtered, selection.apps());

    assert_eq!(counts["BRImo"], CountSummary { positive: 0, negative: 1 });
    assert_eq!(counts["Jenius"], CountSummary::default());
    for summary in counts.values() {
        let json = serde_json::to_value(summary).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert!(json.get("positive").is_some());
        assert!(json.get("negative").is_some());
    }
}

#[test]
fn filter_is_idempotent() {
    let dataset = normalize(mixed_table()).unwrap();
    let selection = Selection::new(["BRImo"], Sentiment::ALL);
    let once = filter_reviews(&dataset.rows, &selection);
    assert_eq!(filter_reviews(&once, &selection), once);
}

#[test]
fn corpus_preserves_filtered_row_order() {
    let dataset = normalize(mixed_table()).unwrap();
    let selection = Selection::new(["BCA Mobile"], Sentiment::ALL);
    let filtered = filter_reviews(&dataset.rows, &selection);

    let expected: Vec<&str> = filtered
        .iter()
        .filter(|row| row.app == "BCA Mobile" && row.sentiment == Sentiment::Positive)
        .map(|row| row.text.as_str())
        .collect();
    assert_eq!(
        build_corpus(&filtered, "BCA Mobile", Sentiment::Positive).as_str(),
        expected.join(" ")
    );
    assert_eq!(
        build_corpus(&filtered, "BCA Mobile", Sentiment::Positive).as_str(),
        "bagus cepat"
    );
}

#[test]
fn empty_app_selection_yields_no_counts_and_no_corpora() {
    let dataset = normalize(mixed_table()).unwrap();
    let selection = Selection::new(apps(&[]), Sentiment::ALL);
    let filtered = filter_reviews(&dataset.rows, &selection);
    assert!(count_by_app(&filtered, selection.apps()).is_empty());

    let report = build_report(&dataset, &selection);
    assert!(report.counts.is_empty());
    assert!(report.corpora.is_empty());
    assert!(report.has_notice(&Notice::EmptySelection));
}

#[test]
fn three_row_scenario() {
    let table = ReviewTable::new(
        "scenario",
        vec![
            Review::new("X", "bagus").with_label("Positive"),
            Review::new("X", "buruk").with_label("neg"),
            Review::new("X", "biasa").with_label("Neutral"),
        ],
    );
    let dataset = normalize(table).unwrap();
    assert_eq!(dataset.len(), 2);

    let selection = Selection::new(["X"], Sentiment::ALL);
    let filtered = filter_reviews(&dataset.rows, &selection);
    let counts = count_by_app(&filtered, selection.apps());
    assert_eq!(counts["X"], CountSummary { positive: 1, negative: 1 });
    assert_eq!(build_corpus(&filtered, "X", Sentiment::Positive).as_str(), "bagus");
    assert_eq!(build_corpus(&filtered, "X", Sentiment::Negative).as_str(), "buruk");
}

#[test]
fn rerunning_the_pipeline_is_idempotent() {
    let selection = Selection::new(["BRImo", "BCA Mobile"], Sentiment::ALL);
    let first = build_report(&normalize(mixed_table()).unwrap(), &selection);
    let second = build_report(&normalize(mixed_table()).unwrap(), &selection);
    assert_eq!(first, second);
}

#[test]
fn concurrent_reports_over_a_shared_dataset_agree() {
    let dataset = std::sync::Arc::new(normalize(mixed_table()).unwrap());
    let selection = Selection::new(["BCA Mobile", "BRImo"], Sentiment::ALL);
    let expected = build_report(&dataset, &selection);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dataset = std::sync::Arc::clone(&dataset);
            let selection = selection.clone();
            std::thread::spawn(move || build_report(&dataset, &selection))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
