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

//! Loader configuration.

use crate::error::LoadError;
use std::path::Path;

/// Default maximum document size: 64 MB
///
/// Benchmark files hold a few hundred runs and stay well under a megabyte;
/// the limit only guards against pointing the loader at the wrong file.
pub const DEFAULT_MAX_DOCUMENT_SIZE: usize = 64 * 1024 * 1024;

/// Default maximum number of records: 100,000
pub const DEFAULT_MAX_RECORDS: usize = 100_000;

/// Environment variable overriding the file size limit, in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "LLMBOARD_MAX_FILE_SIZE";

/// Serialization format of a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Yaml,
    Json,
}

impl SourceFormat {
    /// Detect the format from a file extension.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llmboard_load::SourceFormat;
    ///
    /// assert_eq!(SourceFormat::from_path("src/data/models.yaml").unwrap(), SourceFormat::Yaml);
    /// assert_eq!(SourceFormat::from_path("models.JSON").unwrap(), SourceFormat::Json);
    /// assert!(SourceFormat::from_path("models.toml").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(SourceFormat::Yaml),
            Some("json") => Ok(SourceFormat::Json),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Configuration for loading benchmark data.
///
/// # Examples
///
/// ## Using Default Configuration
///
/// ```rust
/// use llmboard_load::LoadConfig;
///
/// let config = LoadConfig::default();
/// assert!(config.format.is_none()); // detected from the file extension
/// ```
///
/// ## Customizing Limits with Builder Pattern
///
/// ```rust
/// use llmboard_load::{LoadConfig, SourceFormat};
///
/// let config = LoadConfig::builder()
///     .format(SourceFormat::Json)
///     .max_document_size(1024 * 1024) // 1 MB
///     .max_records(1_000)
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    /// Explicit format. `None` detects it from the file extension.
    pub format: Option<SourceFormat>,
    /// Maximum allowed document size in bytes (default: 64 MB)
    pub max_document_size: usize,
    /// Maximum allowed number of records (default: 100,000)
    pub max_records: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            format: None,
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
            max_records: DEFAULT_MAX_RECORDS,
        }
    }
}

impl LoadConfig {
    /// Creates a new builder for `LoadConfig`.
    pub fn builder() -> LoadConfigBuilder {
        LoadConfigBuilder::new()
    }

    /// Size limit for files on disk.
    ///
    /// Reads [`MAX_FILE_SIZE_ENV`] and falls back to `max_document_size`
    /// when the variable is unset or not a number.
    pub fn max_file_size(&self) -> u64 {
        let raw = std::env::var(MAX_FILE_SIZE_ENV).ok();
        file_size_limit(raw.as_deref(), self.max_document_size as u64)
    }
}

fn file_size_limit(raw: Option<&str>, fallback: u64) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(fallback)
}

/// Builder for [`LoadConfig`].
#[derive(Debug, Clone)]
pub struct LoadConfigBuilder {
    format: Option<SourceFormat>,
    max_document_size: usize,
    max_records: usize,
}

impl LoadConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        let defaults = LoadConfig::default();
        Self {
            format: defaults.format,
            max_document_size: defaults.max_document_size,
            max_records: defaults.max_records,
        }
    }

    /// Forces the source format instead of detecting it.
    pub fn format(mut self, format: SourceFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the maximum allowed document size in bytes.
    pub fn max_document_size(mut self, size: usize) -> Self {
        self.max_document_size = size;
        self
    }

    /// Sets the maximum allowed number of records.
    pub fn max_records(mut self, count: usize) -> Self {
        self.max_records = count;
        self
    }

    /// Builds the `LoadConfig`.
    pub fn build(self) -> LoadConfig {
        LoadConfig {
            format: self.format,
            max_document_size: self.max_document_size,
            max_records: self.max_records,
        }
    }
}

impl Default for LoadConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
