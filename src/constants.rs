/// Canonical sentiment names and the variant encodings that map onto them.
pub mod labels {
    /// Canonical name of the positive class.
    pub const POSITIVE: &str = "positive";
    /// Canonical name of the negative class.
    pub const NEGATIVE: &str = "negative";
    /// Canonical name of the neutral class (recognized, never kept).
    pub const NEUTRAL: &str = "neutral";

    /// Lowercased, trimmed encodings that mean positive.
    pub const POSITIVE_VARIANTS: &[&str] = &["positive", "pos", "positif"];
    /// Lowercased, trimmed encodings that mean negative.
    pub const NEGATIVE_VARIANTS: &[&str] = &["negative", "neg", "negatif"];
    /// Lowercased, trimmed encodings that mean neutral.
    pub const NEUTRAL_VARIANTS: &[&str] = &["neutral", "netral"];
}

/// Numeric score values used by the label fallback.
pub mod scores {
    /// Score that derives a positive label.
    pub const POSITIVE_SCORE: f64 = 1.0;
    /// Score that derives a negative label.
    pub const NEGATIVE_SCORE: f64 = -1.0;
}

/// Default source column names of the review dataset.
pub mod columns {
    /// Column holding the app identifier.
    pub const APP_COLUMN: &str = "app_name";
    /// Column holding the textual sentiment label.
    pub const LABEL_COLUMN: &str = "label";
    /// Column holding the original review text.
    pub const RAW_TEXT_COLUMN: &str = "review";
    /// Column holding the preprocessed (stemmed) review text.
    pub const CLEAN_TEXT_COLUMN: &str = "stemming";
    /// Column holding the precomputed numeric sentiment score.
    pub const SCORE_COLUMN: &str = "skor_sentimen";
}

/// Defaults used when assembling reports.
pub mod report {
    /// Apps selected by default when present in the dataset, in layout order.
    pub const DEFAULT_APPS: &[&str] = &["BCA Mobile", "BRImo"];
    /// Number of apps taken from the sorted app list when no preferred app exists.
    pub const DEFAULT_APP_FALLBACK_COUNT: usize = 2;
    /// Count charts laid out per grid row.
    pub const CHART_COLUMNS_PER_ROW: usize = 2;
    /// Separator placed between review texts when building a corpus.
    pub const CORPUS_SEPARATOR: &str = " ";
}

/// Defaults used to locate and identify the dataset file.
pub mod dataset {
    /// Source id assigned to the default dataset.
    pub const DEFAULT_SOURCE_ID: &str = "dataset_sentimen";
    /// Environment variable that overrides the dataset path.
    pub const DATASET_ENV_VAR: &str = "REVIEWLENS_DATASET";
    /// Relative paths probed, in order, when no path is given.
    pub const DEFAULT_DATASET_CANDIDATES: &[&str] =
        &["data/dataset_sentimen.csv", "../data/dataset_sentimen.csv"];
}
