//! Batch word-boundary restoration.
//!
//! Reads `id,text` records, predicts separator positions for every text and
//! writes an `id,predicted_positions` CSV.

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::{info, warn};

use probel::dataset::{SubmissionWriter, read_records_from_path};
use probel::lexicon::source::DEFAULT_MAX_ENTRIES;
use probel::{FrequencyList, JsonDictionary, SpaceRestorer};

#[derive(Parser, Debug)]
#[command(name = "probel", about = "Restores missing spaces in Russian text")]
struct Args {
    /// Input records: a header line, then `id,text` lines.
    #[arg(default_value = "filename.txt")]
    input: PathBuf,

    /// Tab-separated `word<TAB>count` frequency list.
    #[arg(short = 'f', long, default_value = "main_1grams.tsv")]
    frequency_list: PathBuf,

    /// JSON dictionary, either `{word: weight}` or `[word, ...]`.
    #[arg(short = 'j', long, default_value = "dictionary_output.json")]
    json_dict: PathBuf,

    /// Output CSV.
    #[arg(short = 'o', long, default_value = "submission.csv")]
    output: PathBuf,

    /// Maximum number of frequency-list lines to read.
    #[arg(short = 'M', long, default_value_t = DEFAULT_MAX_ENTRIES)]
    max_entries: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let start = Instant::now();
    let mut builder = SpaceRestorer::builder();
    match FrequencyList::from_path(&args.frequency_list, args.max_entries) {
        Ok(source) => builder = builder.source(source),
        Err(e) => warn!(error = %e, "skipping frequency list"),
    }
    match JsonDictionary::from_path(&args.json_dict) {
        Ok(source) => builder = builder.source(source),
        Err(e) => warn!(error = %e, "skipping json dictionary"),
    }
    let restorer = builder.curated().build();
    info!(
        words = restorer.lexicon().len(),
        elapsed = ?start.elapsed(),
        "lexicon ready"
    );

    let records = read_records_from_path(&args.input)?;
    info!(records = records.len(), input = %args.input.display(), "records loaded");

    let mut writer = SubmissionWriter::create(&args.output)?;
    let start = Instant::now();
    for record in &records {
        let positions = restorer.predict_space_positions(&record.text);
        writer.write(record.id, &positions)?;
    }
    writer.finish()?;

    let elapsed = start.elapsed();
    let mean = if records.is_empty() {
        0.0
    } else {
        elapsed.as_secs_f64() * 1000.0 / records.len() as f64
    };
    info!(
        records = records.len(),
        elapsed = ?elapsed,
        mean_ms = mean,
        output = %args.output.display(),
        "submission written"
    );

    Ok(())
}
