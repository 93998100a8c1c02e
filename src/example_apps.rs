use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};

use crate::config::{CsvSourceConfig, ReportConfig};
use crate::constants::dataset::{DATASET_ENV_VAR, DEFAULT_DATASET_CANDIDATES, DEFAULT_SOURCE_ID};
use crate::data::Sentiment;
use crate::filter::Selection;
use crate::ingestion::DatasetCache;
use crate::normalize::NormalizedDataset;
use crate::report::{Notice, SentimentReport, build_report, chart_rows};
use crate::transport::fs::resolve_dataset_path;
use crate::utils::{preview, term_frequencies};

#[derive(Debug, Parser)]
#[command(
    name = "sentiment_report",
    disable_help_subcommand = true,
    about = "Per-app sentiment counts and word frequencies",
    long_about = "Normalize a labeled review dataset, filter it by app and sentiment, and print per-app sentiment counts plus the most frequent terms of each app/sentiment corpus.",
    after_help = "The dataset path resolves by explicit --data, then REVIEWLENS_DATASET, then data/dataset_sentimen.csv."
)]
/// CLI for `sentiment_report`.
///
/// Common usage:
/// - Default apps and both sentiments: no flags
/// - Explicit apps in layout order: `--app BRImo --app "BCA Mobile"`
/// - Negative reviews only: `--sentiment negative`
/// - Machine-readable aggregates: `--json`
struct SentimentReportCli {
    #[arg(long = "data", value_name = "PATH", help = "Optional dataset CSV path")]
    data: Option<PathBuf>,
    #[arg(
        long = "app",
        value_name = "APP",
        help = "App to include, repeat as needed in layout order"
    )]
    apps: Vec<String>,
    #[arg(
        long = "sentiment",
        value_name = "SENTIMENT",
        help = "Sentiment to include (positive or negative), repeat as needed (defaults to both)"
    )]
    sentiments: Vec<String>,
    #[arg(
        long = "top-terms",
        default_value_t = 10,
        value_parser = parse_positive_usize,
        help = "Number of terms listed per corpus"
    )]
    top_terms: usize,
    #[arg(
        long = "columns-per-row",
        default_value_t = 2,
        value_parser = parse_positive_usize,
        help = "Count charts per layout row"
    )]
    columns_per_row: usize,
    #[arg(long, help = "Emit the report as JSON instead of text")]
    json: bool,
}

/// Load, normalize, filter, aggregate, and print a sentiment report.
///
/// A missing or empty dataset aborts before any aggregation.
pub fn run_sentiment_report<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<SentimentReportCli, _>(
        std::iter::once("sentiment_report".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };
    let sentiments = cli
        .sentiments
        .iter()
        .map(|raw| raw.parse::<Sentiment>())
        .collect::<Result<Vec<_>, _>>()?;

    let path = resolve_dataset_path(cli.data, &[DATASET_ENV_VAR], DEFAULT_DATASET_CANDIDATES)?;
    let source = CsvSourceConfig::new(DEFAULT_SOURCE_ID, &path);
    let cache = DatasetCache::new();
    let dataset = cache.load_csv(&source)?;

    let report_config = ReportConfig {
        chart_columns_per_row: cli.columns_per_row,
        ..ReportConfig::default()
    };
    let mut selection = Selection::defaults(&dataset, &report_config);
    if !cli.apps.is_empty() {
        selection = selection.with_apps(cli.apps);
    }
    if !sentiments.is_empty() {
        selection = selection.with_sentiments(sentiments);
    }

    let report = build_report(&dataset, &selection);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_load_summary(&dataset);
    print_counts(&report, report_config.chart_columns_per_row);
    print_corpora(&report, cli.top_terms);
    Ok(())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let parsed = raw
        .parse::<usize>()
        .map_err(|_| format!("Could not parse '{}' as a positive integer", raw))?;
    if parsed == 0 {
        return Err("value must be greater than zero".to_string());
    }
    Ok(parsed)
}

fn print_load_summary(dataset: &NormalizedDataset) {
    println!("=== dataset ===");
    println!("source       : {}", dataset.source_id);
    println!(
        "rows         : {} kept of {} (two classes: positive & negative)",
        dataset.len(),
        dataset.input_rows
    );
    println!("labels from  : {:?}", dataset.label_origin);
    println!("text field   : {:?}", dataset.text_field);
    println!();
}

fn print_counts(report: &SentimentReport, columns_per_row: usize) {
    println!("=== sentiment distribution per app ===");
    if report.has_notice(&Notice::NoUsableLabel) {
        println!("No rows carry a usable positive/negative label.");
        return;
    }
    if report.has_notice(&Notice::EmptySelection) {
        println!("Nothing selected. Choose at least one app and one sentiment.");
        return;
    }
    let apps: Vec<&String> = report.counts.keys().collect();
    for (row_idx, row) in chart_rows(&apps, columns_per_row).into_iter().enumerate() {
        println!("--- row #{} ---", row_idx);
        for app in row {
            let Some(summary) = report.counts_for(app) else {
                continue;
            };
            let scale = summary.max_count().max(1);
            println!("{app}");
            for (sentiment, count) in summary.entries() {
                let width = count * 40 / scale;
                println!("  {:<9}| {:<40} {}", sentiment, "#".repeat(width), count);
            }
        }
    }
    println!();
}

fn print_corpora(report: &SentimentReport, top_terms: usize) {
    println!("=== top terms per app & sentiment ===");
    for cell in &report.corpora {
        println!("--- {} / {} ---", cell.app, cell.sentiment);
        match cell.renderable() {
            Some(text) => {
                println!("preview      : {}", preview(text, 80));
                for (term, count) in term_frequencies(text, top_terms) {
                    println!("  {term}: {count}");
                }
            }
            None => println!("No {} data.", cell.sentiment),
        }
    }
}
