/// Identifier of the application a review was written for.
/// Examples: `BCA Mobile`, `BRImo`
pub type AppId = String;
/// Identifier for the dataset a table was loaded from.
/// Examples: `dataset_sentimen`, `inline`
pub type SourceId = String;
/// Review text, raw or preprocessed.
/// Example: `aplikasi bagus cepat`
pub type ReviewText = String;
/// Sentiment label exactly as it appears in the source.
/// Examples: `Positive`, ` neg `, `netral`
pub type RawLabel = String;
/// Source column (header) name.
/// Examples: `app_name`, `stemming`, `skor_sentimen`
pub type ColumnName = String;
/// Whitespace-delimited token counted by term-frequency helpers.
/// Example: `transfer`
pub type Term = String;
