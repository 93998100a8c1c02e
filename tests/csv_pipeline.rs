use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};

use tempfile::tempdir;

use reviewlens::{
    CsvReviewSource, CsvSourceConfig, DatasetCache, LabelOrigin, Notice, ReportConfig,
    ReviewError, ReviewSource, Selection, Sentiment, TextField, build_report, normalize,
};

const DATASET: &str = "\
app_name,review,label,stemming,skor_sentimen
BCA Mobile,Aplikasinya bagus dan cepat,Positive,aplikasi bagus cepat,1
BCA Mobile,Sering gagal login,negative,sering gagal login,-1
BRImo,Transfer lancar,pos,transfer lancar,1
BRImo,Biasa saja,Neutral,biasa saja,0
BRImo,Update bikin lemot,NEG,update bikin lemot,-1
Jenius,Mantap,positive,mantap,1
";

fn write_dataset(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("dataset_sentimen.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn set_mtime(path: &Path, secs: u64) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}

#[test]
fn csv_dataset_flows_through_to_a_report() {
    let temp = tempdir().unwrap();
    let path = write_dataset(temp.path(), DATASET);
    let source = CsvReviewSource::new(CsvSourceConfig::new("dataset_sentimen", &path));

    let dataset = normalize(source.load().unwrap()).unwrap();
    assert_eq!(dataset.input_rows, 6);
    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.label_origin, LabelOrigin::TextLabel);
    assert_eq!(dataset.text_field, TextField::CleanText);

    let selection = Selection::defaults(&dataset, &ReportConfig::default());
    let apps: Vec<&str> = selection.apps().iter().map(String::as_str).collect();
    assert_eq!(apps, vec!["BCA Mobile", "BRImo"]);

    let report = build_report(&dataset, &selection);
    assert_eq!(report.filtered_rows, 4);
    assert_eq!(report.counts_for("BRImo").unwrap().positive, 1);
    assert_eq!(report.counts_for("BRImo").unwrap().negative, 1);
    assert!(report.counts_for("Jenius").is_none());
    assert_eq!(
        report
            .corpus_for("BCA Mobile", Sentiment::Positive)
            .unwrap()
            .renderable(),
        Some("aplikasi bagus cepat")
    );
    assert!(report.notices.is_empty());
}

#[test]
fn csv_without_positive_labels_uses_score_column() {
    let temp = tempdir().unwrap();
    let path = write_dataset(
        temp.path(),
        "app_name,review,label,skor_sentimen\n\
         BRImo,Bagus,,1\n\
         BRImo,Jelek,,-1.0\n\
         BRImo,Netral,,0\n",
    );
    let source = CsvReviewSource::new(CsvSourceConfig::new("scores_only", &path));
    let dataset = normalize(source.load().unwrap()).unwrap();

    assert_eq!(dataset.label_origin, LabelOrigin::ScoreFallback);
    assert_eq!(dataset.text_field, TextField::RawText);
    let report = build_report(&dataset, &Selection::new(["BRImo"], Sentiment::ALL));
    assert_eq!(report.counts_for("BRImo").unwrap().total(), 2);
    assert_eq!(
        report
            .corpus_for("BRImo", Sentiment::Negative)
            .unwrap()
            .corpus
            .as_str(),
        "Jelek"
    );
}

#[test]
fn header_only_csv_is_data_unavailable() {
    let temp = tempdir().unwrap();
    let path = write_dataset(temp.path(), "app_name,review,label\n");
    let source = CsvReviewSource::new(CsvSourceConfig::new("empty", &path));
    let err = normalize(source.load().unwrap()).unwrap_err();
    assert!(matches!(err, ReviewError::DataUnavailable { .. }));
}

#[test]
fn dataset_with_only_neutral_rows_reports_no_usable_label() {
    let temp = tempdir().unwrap();
    let path = write_dataset(temp.path(), "app_name,review,label\nBRImo,ok,netral\n");
    let source = CsvReviewSource::new(CsvSourceConfig::new("neutral_only", &path));
    let dataset = normalize(source.load().unwrap()).unwrap();
    let selection = Selection::defaults(&dataset, &ReportConfig::default());

    let report = build_report(&dataset, &selection);
    assert!(report.has_notice(&Notice::NoUsableLabel));
    assert!(report.has_notice(&Notice::EmptySelection));
}

#[test]
fn cache_reuses_until_the_file_changes() {
    let temp = tempdir().unwrap();
    let path = write_dataset(temp.path(), DATASET);
    set_mtime(&path, 1_700_000_000);
    let config = CsvSourceConfig::new("dataset_sentimen", &path);
    let cache = DatasetCache::new();

    let first = cache.load_csv(&config).unwrap();
    let again = cache.load_csv(&config).unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &again));

    fs::write(&path, "app_name,review,label\nBRImo,ok,pos\n").unwrap();
    set_mtime(&path, 1_700_000_100);
    let reloaded = cache.load_csv(&config).unwrap();
    assert!(!std::sync::Arc::ptr_eq(&first, &reloaded));
    assert_eq!(reloaded.len(), 1);
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn cache_surfaces_missing_files() {
    let temp = tempdir().unwrap();
    let config = CsvSourceConfig::new("missing", temp.path().join("nope.csv"));
    let err = DatasetCache::new().load_csv(&config).unwrap_err();
    assert!(matches!(err, ReviewError::DataUnavailable { .. }));
}
