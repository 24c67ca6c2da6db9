//! Record source and submission sink used by the batch binary.
//!
//! The input file is a header line followed by `id,text` lines. Only the
//! first comma separates the fields, so the text itself may contain commas;
//! that rules out a regular CSV reader for this side.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: record id `{value}` is not an integer")]
    InvalidId { line: usize, value: String },
}

/// Characters replaced by a space before text reaches the engine.
pub const PUNCTUATION: &[char] = &[
    ',', ';', ':', '!', '?', '"', '\'', '(', ')', '[', ']', '{', '}', '«', '»', '„', '-',
    '—', '–', '.', '…',
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub text: String,
}

/// Replace [`PUNCTUATION`] with spaces, collapse whitespace runs and trim.
pub fn clean_text(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse records, skipping the header, blank lines and lines without a
/// comma.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Record>, DatasetError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let Some(comma) = memchr::memchr(b',', line.as_bytes()) else {
            continue;
        };
        let raw_id = line[..comma].trim();
        let id = raw_id.parse::<i64>().map_err(|_| DatasetError::InvalidId {
            line: idx + 1,
            value: raw_id.to_owned(),
        })?;
        records.push(Record {
            id,
            text: clean_text(&line[comma + 1..]),
        });
    }
    Ok(records)
}

pub fn read_records_from_path(path: impl AsRef<Path>) -> Result<Vec<Record>, DatasetError> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}

/// `[a, b, c]`, or `[]` for an empty list.
pub fn format_positions(positions: &[usize]) -> String {
    let inner: Vec<String> = positions.iter().map(usize::to_string).collect();
    format!("[{}]", inner.join(", "))
}

/// CSV writer for `id,predicted_positions` rows.
pub struct SubmissionWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl SubmissionWriter<File> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> SubmissionWriter<W> {
    /// Wrap `writer` and emit the header row.
    pub fn new(writer: W) -> Result<Self, DatasetError> {
        let mut inner = csv::Writer::from_writer(writer);
        inner.write_record(["id", "predicted_positions"])?;
        Ok(Self { inner })
    }

    pub fn write(&mut self, id: i64, positions: &[usize]) -> Result<(), DatasetError> {
        self.inner
            .write_record([id.to_string(), format_positions(positions)])?;
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> Result<W, DatasetError> {
        self.inner
            .into_inner()
            .map_err(|e| DatasetError::Io(e.into_error()))
    }
}
