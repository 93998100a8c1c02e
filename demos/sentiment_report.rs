use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    reviewlens::example_apps::run_sentiment_report(std::env::args().skip(1))
}
