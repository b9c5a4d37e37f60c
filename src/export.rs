//! CSV snapshots: each run's cache and report source.

use crate::error::{GpointsError, Result};
use crate::model::{CommitRecord, ContributorRecord, COMMIT_HEADERS, CONTRIBUTOR_HEADERS};
use csv::{ReaderBuilder, Writer, WriterBuilder};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;

/// Streams commit rows to disk as they are scored. Rows already written
/// stay on disk if the run aborts.
pub struct CommitCsvWriter {
    inner: Writer<File>,
}

impl CommitCsvWriter {
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut inner = WriterBuilder::new().has_headers(false).from_path(path)?;
        inner.write_record(COMMIT_HEADERS)?;
        Ok(Self { inner })
    }

    pub fn write(&mut self, record: &CommitRecord) -> Result<()> {
        self.inner.serialize(record)?;
        self.inner.flush()?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

pub fn write_contributors(path: &Path, contributors: &[ContributorRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(CONTRIBUTOR_HEADERS)?;
    for contributor in contributors {
        writer.serialize(contributor)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_commits(path: &Path) -> Result<Vec<CommitRecord>> {
    read_rows(path, &COMMIT_HEADERS)
}

pub fn read_contributors(path: &Path) -> Result<Vec<ContributorRecord>> {
    read_rows(path, &CONTRIBUTOR_HEADERS)
}

fn read_rows<T: DeserializeOwned>(path: &Path, expected: &[&str]) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let headers = reader.headers()?;
    for column in expected {
        if !headers.iter().any(|h| h == *column) {
            return Err(GpointsError::Parse(format!(
                "{} is missing column '{}'",
                path.display(),
                column
            )));
        }
    }

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
