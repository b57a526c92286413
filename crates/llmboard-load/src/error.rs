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

//! Error types for loading benchmark data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a benchmark data file.
///
/// Loading is all-or-nothing: any of these means no records were produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read '{path}': {message}")]
    Io { path: PathBuf, message: String },

    /// File size exceeds the configured limit. Checked before reading.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge { path: PathBuf, actual: u64, max: u64 },

    /// In-memory document exceeds the configured limit.
    #[error("Document size {size} bytes exceeds maximum of {max_size} bytes")]
    DocumentTooLarge { size: usize, max_size: usize },

    /// More records than the configured limit.
    #[error("Record count {count} exceeds maximum of {max_records}")]
    TooManyRecords { count: usize, max_records: usize },

    /// YAML or JSON syntax error, or a record with the wrong shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Top level of the document is not a sequence of records.
    #[error("Root must be a sequence of records, found {found}")]
    InvalidRoot { found: String },

    /// The source format could not be determined.
    #[error("Unsupported data format for '{path}': expected .yaml, .yml or .json")]
    UnsupportedFormat { path: PathBuf },
}

impl LoadError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(err: serde_yaml::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}
