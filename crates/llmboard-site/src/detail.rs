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

//! Detail view of a single record.

use crate::format::{self, NOT_APPLICABLE};
use llmboard_core::ModelRecord;

/// A titled group of label/value rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: &'static str,
    pub rows: Vec<(String, String)>,
}

impl DetailSection {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            rows: Vec::new(),
        }
    }

    /// Always shown; absent values read `N/A`.
    fn row(&mut self, label: &str, value: String) {
        self.rows.push((label.to_string(), value));
    }

    /// Shown only when the value is present.
    fn optional(&mut self, label: &str, value: Option<String>) {
        if let Some(value) = value {
            self.row(label, value);
        }
    }
}

/// Sections for the detail view of `record`.
///
/// Core fields are always listed; supplementary ones (editor model, API
/// usage, sponsor, language rates) only when recorded.
pub fn detail_sections(record: &ModelRecord) -> Vec<DetailSection> {
    let d = &record.details;

    let mut basic = DetailSection::new("Basic Information");
    basic.row("Model", format::text(d.model.as_deref()));
    basic.row("Edit Format", format::text(d.edit_format.as_deref()));
    basic.optional("Editor Model", d.editor_model.clone());
    basic.optional("Editor Edit Format", d.editor_edit_format.clone());
    basic.optional("Reasoning Effort", d.reasoning_effort.clone());
    basic.row("Date", format::text(d.date.as_deref()));
    basic.row("Command", format::text(d.command.as_deref()));
    basic.row("Version", format::text(d.versions.as_deref()));
    basic.row("Commit Hash", format::text(d.commit_hash.as_deref()));
    basic.optional("Languages", d.language.clone());
    basic.optional(
        "License",
        d.is_open_source
            .map(|open| if open { "Open Source" } else { "Proprietary" }.to_string()),
    );
    basic.optional("Sponsor", d.sponsor.clone());

    let mut performance = DetailSection::new("Performance Metrics");
    performance.row("Pass Rate", format::percent(d.pass_rate_2));
    performance.row("First Pass Rate", format::percent(d.pass_rate_1));
    performance.row("Passes", fraction(d.pass_num_2, d.total_tests));
    performance.row("First Passes", fraction(d.pass_num_1, d.total_tests));
    performance.row("Well-formed Responses", format::percent(d.percent_cases_well_formed));
    performance.row(
        "Speed",
        d.seconds_per_case
            .map_or_else(|| NOT_APPLICABLE.to_string(), |s| format!("{}s per case", s)),
    );
    performance.row("Seconds per Correct Case", format::seconds_per_correct_cell(record));
    performance.row(
        "Total Cost",
        d.total_cost
            .map_or_else(|| NOT_APPLICABLE.to_string(), |c| format!("${:.4}", c)),
    );
    performance.optional("Total API Calls", d.total_api_calls.map(|v| v.to_string()));
    performance.optional("Avg API Calls Per Test", d.avg_api_calls_per_test.map(|v| v.to_string()));
    performance.optional("Total Retries", d.total_retries.map(|v| v.to_string()));
    performance.optional("Avg Retries Per Test", d.avg_retries_per_test.map(|v| v.to_string()));
    performance.optional("Retry Rate", d.retry_rate_percent.map(|v| format!("{}%", v)));

    let mut errors = DetailSection::new("Error Analysis");
    errors.row("Error Outputs", format::count(d.error_outputs));
    errors.row("Malformed Responses", format::count(d.num_malformed_responses));
    errors.row(
        "Cases with Malformed Responses",
        format::count(d.num_with_malformed_responses),
    );
    errors.row("User Asks", format::count(d.user_asks));
    errors.row("Lazy Comments", format::count(d.lazy_comments));
    errors.row("Syntax Errors", format::count(d.syntax_errors));
    errors.row("Indentation Errors", format::count(d.indentation_errors));
    errors.row("Exhausted Context Windows", format::count(d.exhausted_context_windows));
    errors.row("Test Timeouts", format::count(d.test_timeouts));

    let mut sections = vec![basic, performance, errors];

    if let Some(rates) = d.language_pass_rates.as_ref().filter(|r| !r.is_empty()) {
        let mut languages = DetailSection::new("Language-Specific Pass Rates");
        for language in rates.languages() {
            languages.row(
                &format::language_label(language),
                format!(
                    "{} (first pass {})",
                    format::percent(rates.final_pass(language)),
                    format::percent(rates.first_pass(language))
                ),
            );
        }
        sections.push(languages);
    }

    sections
}

fn fraction(passed: Option<u64>, total: Option<u64>) -> String {
    match (passed, total) {
        (Some(passed), Some(total)) => format!("{}/{}", passed, total),
        (Some(passed), None) => passed.to_string(),
        _ => NOT_APPLICABLE.to_string(),
    }
}
