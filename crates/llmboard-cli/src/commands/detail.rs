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

//! Detail command - every field of one record

use super::{load_board, write_output};
use crate::error::CliError;
use llmboard_site::render_detail;

/// Print the detail view of record `id`.
///
/// # Errors
///
/// Returns [`CliError::UnknownId`] if no record has that id.
pub fn detail(file: &str, id: u64) -> Result<(), CliError> {
    let board = load_board(file)?;
    let record = board.get(id).ok_or(CliError::UnknownId { id })?;
    write_output(&render_detail(record), None)
}
