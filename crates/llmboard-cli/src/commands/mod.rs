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

//! CLI command implementations

mod build;
mod charts;
mod detail;
mod show;
mod validate;

pub use build::{build, BuildArgs};
pub use charts::charts;
pub use detail::detail;
pub use show::show;
pub use validate::validate;

use crate::error::CliError;
use llmboard_core::Leaderboard;
use llmboard_load::{load_file, LoadConfig};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Load a data file into a deduplicated [`Leaderboard`].
///
/// The file size limit honours `LLMBOARD_MAX_FILE_SIZE`.
///
/// # Errors
///
/// Returns [`CliError::Load`] if the file cannot be read or parsed.
pub fn load_board(file: &str) -> Result<Leaderboard, CliError> {
    let records = load_file(file, &LoadConfig::default())?;
    let board = Leaderboard::new(records);
    debug!(file, records = board.len(), duplicates = board.duplicates(), "loaded leaderboard");
    Ok(board)
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns [`CliError::Io`] if writing fails.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Write `content` to `dir/name`, creating `dir` if needed.
pub(crate) fn write_into(dir: &Path, name: &str, content: &str) -> Result<(), CliError> {
    fs::create_dir_all(dir).map_err(|e| CliError::io_error(dir, e))?;
    let path = dir.join(name);
    fs::write(&path, content).map_err(|e| CliError::io_error(&path, e))
}
