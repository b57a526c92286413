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

//! Plain-text rendering for terminals.

use crate::detail::detail_sections;
use crate::format;
use crate::options::ViewMode;
use llmboard_core::{ModelRecord, SortKey, ViewState};
use std::fmt::Write;

/// Render `rows` as an aligned table.
///
/// `rows` is expected in view order; ranks are positions in that order.
pub fn render_table(rows: &[&ModelRecord], state: &ViewState, mode: ViewMode) -> String {
    let mut header = vec![
        "#".to_string(),
        "Model".to_string(),
        header_label(state, SortKey::PassRate),
        header_label(state, SortKey::Speed),
        header_label(state, SortKey::Cost),
    ];
    if mode == ViewMode::Detailed {
        header.push(header_label(state, SortKey::SecondsPerCorrectCase));
        for label in ["First Pass", "Date", "Errors", "Timeouts", "Malformed"] {
            header.push(label.to_string());
        }
    }

    let mut table = vec![header];
    for (index, record) in rows.iter().enumerate() {
        table.push(row_cells(index, record, state, mode));
    }

    let widths: Vec<usize> = (0..table[0].len())
        .map(|column| {
            table
                .iter()
                .map(|row| row[column].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for (i, row) in table.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
        if i == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            let _ = writeln!(out, "{}", rule.join("  "));
        }
    }
    if rows.is_empty() {
        out.push_str("No models match the current filter.\n");
    }
    out
}

fn header_label(state: &ViewState, key: SortKey) -> String {
    let label = match key {
        SortKey::PassRate => match state.language.as_deref() {
            Some(language) => format!("Pass Rate ({})", format::language_label(language)),
            None => "Pass Rate".to_string(),
        },
        SortKey::Speed => "Speed".to_string(),
        SortKey::Cost => "Cost".to_string(),
        SortKey::SecondsPerCorrectCase => "Sec/Correct".to_string(),
    };
    if state.sort_key == key {
        format!("{} {}", label, state.direction.arrow())
    } else {
        label
    }
}

fn row_cells(index: usize, record: &ModelRecord, state: &ViewState, mode: ViewMode) -> Vec<String> {
    let mut name = record.name.clone();
    if mode == ViewMode::Detailed {
        let symbols: Vec<&str> = format::badges(record).iter().map(|b| b.symbol).collect();
        if !symbols.is_empty() {
            let _ = write!(name, " [{}]", symbols.join(","));
        }
    }

    let mut cells = vec![
        (index + 1).to_string(),
        name,
        format::pass_rate_cell(record, state),
        format::speed_cell(record),
        format::cost_cell(record),
    ];
    if mode == ViewMode::Detailed {
        let d = &record.details;
        cells.push(format::seconds_per_correct_cell(record));
        cells.push(format::percent(d.pass_rate_1));
        cells.push(format::text(d.date.as_deref()));
        cells.push(format::count(d.error_outputs));
        cells.push(format::count(d.test_timeouts));
        cells.push(format::count(d.num_malformed_responses));
    }
    cells
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{}{}", cell, " ".repeat(fill))
}

/// Render every detail section of `record`.
pub fn render_detail(record: &ModelRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (id {})", record.name, record.id);

    for section in detail_sections(record) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", section.title);
        let width = section
            .rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        for (label, value) in &section.rows {
            let _ = writeln!(out, "  {}  {}", pad(label, width), value);
        }
    }
    out
}
