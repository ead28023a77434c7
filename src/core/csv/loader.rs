//! Input file loading and validation
//!
//! The whole file is validated before any row is returned, so a bad file
//! never reaches the network stages.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::types::{InputRow, ResultRow};
use crate::utils::error::{LinkCheckError, Result};

/// Columns every input file must carry
pub const REQUIRED_COLUMNS: [&str; 2] = ["business_name", "URL"];

/// Invalid URLs listed in an error message before the rest are summarized
const MAX_REPORTED_URLS: usize = 5;

/// CSV loader for input files and previous result files
#[derive(Debug, Clone)]
pub struct CsvLoader {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load and validate an input file
    pub fn load_path(&self, path: &Path) -> Result<Vec<InputRow>> {
        debug!(path = %path.display(), "Loading input file");
        self.load_reader(open(path)?)
    }

    pub fn load_str(&self, content: &str) -> Result<Vec<InputRow>> {
        self.load_reader(content.as_bytes())
    }

    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Vec<InputRow>> {
        let mut reader = self.reader_builder().from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.iter().all(str::is_empty) {
            return Err(LinkCheckError::validation("CSV file is empty"));
        }
        let (name_idx, url_idx) = locate_columns(&headers)?;

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let line = index + 1;
            let business_name = cell(&record, name_idx);
            let url = cell(&record, url_idx);

            if business_name.is_empty() {
                return Err(missing_value(REQUIRED_COLUMNS[0], line));
            }
            if url.is_empty() {
                return Err(missing_value(REQUIRED_COLUMNS[1], line));
            }
            rows.push(InputRow::new(business_name, url));
        }

        if rows.is_empty() {
            return Err(LinkCheckError::validation("CSV file is empty"));
        }

        check_urls(rows.iter().map(|row| row.url.as_str()))?;
        debug!(rows = rows.len(), "Input file validated");
        Ok(rows)
    }

    /// Load a results file written by a previous run
    pub fn load_results_path(&self, path: &Path) -> Result<Vec<ResultRow>> {
        debug!(path = %path.display(), "Loading previous results");
        self.load_results_reader(open(path)?)
    }

    pub fn load_results_str(&self, content: &str) -> Result<Vec<ResultRow>> {
        self.load_results_reader(content.as_bytes())
    }

    pub fn load_results_reader<R: Read>(&self, reader: R) -> Result<Vec<ResultRow>> {
        let mut reader = self.reader_builder().from_reader(reader);
        let headers = reader.headers()?.clone();
        locate_columns(&headers)?;
        if !headers.iter().any(|h| h == "website_working") {
            return Err(LinkCheckError::validation(
                "Missing required columns: website_working. Expected a results file from a previous run",
            ));
        }

        let mut rows = Vec::new();
        for record in reader.deserialize::<ResultRow>() {
            rows.push(record?);
        }
        if rows.is_empty() {
            return Err(LinkCheckError::validation("CSV file is empty"));
        }
        check_urls(
            rows.iter()
                .filter(|row| row.needs_reprocessing())
                .map(|row| row.url.as_str()),
        )?;
        Ok(rows)
    }

    fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .flexible(true);
        builder
    }
}

fn open(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path).map_err(|e| {
        LinkCheckError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to open {}: {}", path.display(), e),
        ))
    })
}

fn cell(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("").trim()
}

fn missing_value(column: &str, line: usize) -> LinkCheckError {
    LinkCheckError::validation(format!(
        "Column '{}' contains missing values (row {})",
        column, line
    ))
}

/// Indices of `business_name` and `URL`
fn locate_columns(headers: &StringRecord) -> Result<(usize, usize)> {
    let position = |name: &str| headers.iter().position(|h| h == name);

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|&column| position(column).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(LinkCheckError::validation(format!(
            "Missing required columns: {}. Expected columns: {}",
            missing.join(", "),
            REQUIRED_COLUMNS.join(", ")
        )));
    }

    let extra: Vec<&str> = headers
        .iter()
        .filter(|h| !REQUIRED_COLUMNS.contains(h))
        .collect();
    if !extra.is_empty() {
        warn!(columns = ?extra, "Ignoring extra columns");
    }

    match (position(REQUIRED_COLUMNS[0]), position(REQUIRED_COLUMNS[1])) {
        (Some(name), Some(url)) => Ok((name, url)),
        _ => Err(LinkCheckError::validation("Missing required columns")),
    }
}

pub(crate) fn is_http_url(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://"))
        && url::Url::parse(value).is_ok_and(|url| url.host().is_some())
}

fn check_urls<'a>(urls: impl Iterator<Item = &'a str>) -> Result<()> {
    let invalid: Vec<&str> = urls.filter(|url| !is_http_url(url)).collect();
    if invalid.is_empty() {
        return Ok(());
    }

    let mut listed = invalid
        .iter()
        .take(MAX_REPORTED_URLS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if invalid.len() > MAX_REPORTED_URLS {
        listed.push_str(&format!(" and {} more", invalid.len() - MAX_REPORTED_URLS));
    }
    Err(LinkCheckError::validation(format!(
        "Invalid URLs found (must start with http:// or https://): {}",
        listed
    )))
}
