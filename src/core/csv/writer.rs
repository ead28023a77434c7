//! Results file output

use csv::WriterBuilder;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::types::ResultRow;
use crate::utils::error::{LinkCheckError, Result};

/// Header of every results file, in order
pub const OUTPUT_COLUMNS: [&str; 5] = [
    "business_name",
    "URL",
    "scraped_content",
    "website_working",
    "result",
];

/// Write `rows` as CSV with the five result columns.
///
/// Rows whose page was not retrieved are written with empty content and
/// result, whatever they carry in memory.
pub fn write_results<W: Write>(writer: W, rows: &[ResultRow]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(OUTPUT_COLUMNS)?;

    for row in rows {
        if row.website_working {
            writer.serialize(row)?;
        } else {
            writer.serialize(ResultRow::not_working(&row.input()))?;
        }
    }

    writer.flush()?;
    Ok(())
}

pub fn results_to_string(rows: &[ResultRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_results(&mut buffer, rows)?;
    String::from_utf8(buffer)
        .map_err(|e| LinkCheckError::Internal(format!("Results are not valid UTF-8: {}", e)))
}

/// Write results to `path`, replacing any existing file only once the new
/// contents are fully on disk.
pub fn write_results_path(path: &Path, rows: &[ResultRow]) -> Result<()> {
    let staging = staging_path(path);
    if let Err(e) = write_staged(&staging, path, rows) {
        let _ = std::fs::remove_file(&staging);
        return Err(e);
    }
    info!(path = %path.display(), rows = rows.len(), "Results written");
    Ok(())
}

fn write_staged(staging: &Path, path: &Path, rows: &[ResultRow]) -> Result<()> {
    let file = std::fs::File::create(staging).map_err(|e| {
        LinkCheckError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to create {}: {}", staging.display(), e),
        ))
    })?;
    write_results(std::io::BufWriter::new(&file), rows)?;
    file.sync_all()?;

    std::fs::rename(staging, path).map_err(|e| {
        LinkCheckError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to replace {}: {}", path.display(), e),
        ))
    })
}

/// Hidden sibling of `path` in the same directory, so the rename stays on one filesystem
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "results.csv".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
