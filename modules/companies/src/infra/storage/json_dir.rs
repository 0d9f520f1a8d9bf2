//! Loads JSON record arrays from every `*.json` file in a directory.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use crate::domain::model::RecordFields;

/// Extension a data file must end with to be picked up.
pub const DATA_FILE_SUFFIX: &str = ".json";

/// Why a single data file was skipped.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} does not contain a JSON array")]
    NotAnArray { path: PathBuf },
}

/// Reads every data file in one directory and concatenates their records.
///
/// Files are visited in the order the file system lists them. A file that
/// cannot be read or parsed is logged and skipped; an unreadable directory is
/// logged and yields no records.
#[derive(Debug, Clone)]
pub struct JsonDirLoader {
    dir: PathBuf,
}

impl JsonDirLoader {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Loads all records from the directory.
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub async fn load(&self) -> Vec<RecordFields> {
        let files = match self.data_files().await {
            Ok(files) => files,
            Err(e) => {
                error!(error = %e, "Error reading data directory");
                return Vec::new();
            }
        };

        let mut records = Vec::new();
        for path in files {
            match load_file(&path).await {
                Ok(file_records) => {
                    debug!(path = %path.display(), records = file_records.len(), "Loaded data file");
                    records.extend(file_records);
                }
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping data file"),
            }
        }
        records
    }

    async fn data_files(&self) -> std::io::Result<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(DATA_FILE_SUFFIX))
            {
                files.push(entry.path());
            }
        }
        Ok(files)
    }
}

/// Parses one data file into its object records, in array order.
///
/// Array elements that are not JSON objects are logged and dropped.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read, is not valid JSON, or
/// its top-level value is not an array.
pub async fn load_file(path: &Path) -> Result<Vec<RecordFields>, LoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_records(path, &content)
}

fn parse_records(path: &Path, content: &str) -> Result<Vec<RecordFields>, LoadError> {
    let value: Value = serde_json::from_str(content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Array(items) = value else {
        return Err(LoadError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let records = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::Object(fields) => Some(fields),
            other => {
                warn!(
                    path = %path.display(),
                    index,
                    kind = json_kind(&other),
                    "Skipping non-object record"
                );
                None
            }
        })
        .collect();
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
