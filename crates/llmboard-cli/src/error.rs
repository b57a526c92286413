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

//! Structured error types for the llmboard CLI.
//!
//! All commands return `Result<T, CliError>`; `main` prints the error as
//! `Error: ...` and exits with status 1.

use llmboard_load::LoadError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI commands.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    /// The data file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// No record with the requested id.
    #[error("No record with id {id}")]
    UnknownId { id: u64 },

    /// `validate` found records violating the data invariants.
    #[error("{count} invariant violation(s) found")]
    Violations { count: usize },

    /// Writing output failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Chart series could not be serialized.
    #[error("JSON serialization error: {0}")]
    Json(String),

    /// Inconsistent arguments.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err.to_string())
    }
}
