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

//! Validate command - load errors and invariant violations

use super::load_board;
use crate::error::CliError;
use colored::Colorize;

/// Validate a benchmark data file.
///
/// Prints a summary to stdout including:
/// - File validation status (✓ or ✗)
/// - Record count and dropped duplicate ids
/// - Every invariant violation, by record id
///
/// Duplicate ids are reported but do not fail validation; they are dropped
/// on load with the first occurrence kept.
///
/// # Errors
///
/// Returns `Err` if the file does not load or any record violates an
/// invariant.
pub fn validate(file: &str) -> Result<(), CliError> {
    let board = match load_board(file) {
        Ok(board) => board,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            return Err(e);
        }
    };

    let violations = board.violations();
    if violations.is_empty() {
        println!("{} {}", "✓".green().bold(), file);
    } else {
        println!("{} {}", "✗".red().bold(), file);
    }
    println!("  Records: {}", board.len());
    if board.duplicates() > 0 {
        println!(
            "  {} {} duplicate id(s) dropped",
            "!".yellow().bold(),
            board.duplicates()
        );
    }
    if let Some(date) = board.most_recent_date() {
        println!("  Latest run: {}", date);
    }
    for (id, violation) in &violations {
        println!("  record {}: {}", id, violation);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(CliError::Violations {
            count: violations.len(),
        })
    }
}
