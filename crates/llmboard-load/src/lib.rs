// llmboard - Coding LLM Benchmark Leaderboard
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Benchmark data loader for llmboard.
//!
//! Reads a YAML (or JSON) file holding a top-level sequence of benchmark
//! records into typed [`ModelRecord`]s. Unknown fields are ignored and
//! missing optional fields stay absent.
//!
//! Loading is all-or-nothing. [`load_file`] returns a `Result` for callers
//! that want to propagate the error; [`load`] is the page-building boundary
//! that never fails and instead hands back an empty collection plus the
//! error to show.
//!
//! # Examples
//!
//! ```no_run
//! use llmboard_load::{load, LoadConfig};
//!
//! let outcome = load("src/data/models.yaml", &LoadConfig::default());
//! if let Some(err) = &outcome.error {
//!     eprintln!("leaderboard unavailable: {}", err);
//! }
//! let board = outcome.into_leaderboard();
//! println!("{} runs", board.len());
//! ```
//!
//! # Security
//!
//! File size is checked from metadata before reading (configurable via
//! `LLMBOARD_MAX_FILE_SIZE`), and both document size and record count are
//! bounded by [`LoadConfig`].

mod config;
mod error;
mod json;
mod yaml;

pub use config::{
    LoadConfig, LoadConfigBuilder, SourceFormat, DEFAULT_MAX_DOCUMENT_SIZE, DEFAULT_MAX_RECORDS,
    MAX_FILE_SIZE_ENV,
};
pub use error::LoadError;
pub use json::from_json;
pub use yaml::from_yaml;

use llmboard_core::{Leaderboard, ModelRecord};
use std::fs;
use std::path::Path;
use tracing::{debug, error, warn};

/// Result of the one-shot load at the page-building boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    /// Parsed records; empty when `error` is set.
    pub records: Vec<ModelRecord>,
    pub error: Option<LoadError>,
}

impl LoadOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Deduplicate the records into a [`Leaderboard`].
    pub fn into_leaderboard(self) -> Leaderboard {
        Leaderboard::new(self.records)
    }
}

impl From<Result<Vec<ModelRecord>, LoadError>> for LoadOutcome {
    fn from(result: Result<Vec<ModelRecord>, LoadError>) -> Self {
        match result {
            Ok(records) => Self {
                records,
                error: None,
            },
            Err(err) => Self {
                records: Vec::new(),
                error: Some(err),
            },
        }
    }
}

/// Load a data file, never failing.
///
/// Any error is logged and returned in [`LoadOutcome::error`] alongside an
/// empty collection.
pub fn load(path: impl AsRef<Path>, config: &LoadConfig) -> LoadOutcome {
    let path = path.as_ref();
    let result = load_file(path, config);
    if let Err(err) = &result {
        error!(path = %path.display(), error = %err, "failed to load benchmark data");
    }
    result.into()
}

/// Load a data file.
///
/// The format comes from `config.format`, or the file extension when unset.
///
/// # Errors
///
/// Returns `Err` if:
/// - The format cannot be determined
/// - The file metadata cannot be accessed or the file cannot be read
/// - The file exceeds the size limit
/// - The content is not a sequence of well-formed records
pub fn load_file(path: impl AsRef<Path>, config: &LoadConfig) -> Result<Vec<ModelRecord>, LoadError> {
    let path = path.as_ref();
    let format = match config.format {
        Some(format) => format,
        None => SourceFormat::from_path(path)?,
    };
    let content = read_source(path, config)?;
    debug!(path = %path.display(), bytes = content.len(), ?format, "read benchmark data");
    load_str(&content, format, config)
}

/// Parse in-memory content of a known format.
pub fn load_str(
    content: &str,
    format: SourceFormat,
    config: &LoadConfig,
) -> Result<Vec<ModelRecord>, LoadError> {
    let records = match format {
        SourceFormat::Yaml => from_yaml(content, config)?,
        SourceFormat::Json => from_json(content, config)?,
    };
    debug!(count = records.len(), "parsed benchmark records");

    for record in &records {
        for violation in record.violations() {
            warn!(id = record.id, name = %record.name, %violation, "record violates invariant");
        }
    }
    Ok(records)
}

/// Read a file with size validation.
fn read_source(path: &Path, config: &LoadConfig) -> Result<String, LoadError> {
    let metadata = fs::metadata(path).map_err(|e| LoadError::io_error(path, e))?;
    let max = config.max_file_size();
    if metadata.len() > max {
        return Err(LoadError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max,
        });
    }
    fs::read_to_string(path).map_err(|e| LoadError::io_error(path, e))
}

pub(crate) fn check_limits(count: usize, config: &LoadConfig) -> Result<(), LoadError> {
    if count > config.max_records {
        return Err(LoadError::TooManyRecords {
            count,
            max_records: config.max_records,
        });
    }
    Ok(())
}
