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

//! Cell formatting shared by the HTML and terminal renderers.
//!
//! Absent values render as [`NOT_APPLICABLE`], never as zero.

use llmboard_core::{metrics, Language, ModelRecord, ViewState};

/// Placeholder for an absent or undefined value.
pub const NOT_APPLICABLE: &str = "N/A";

/// Pass rate cell: the selected language's final pass rate, or the overall one.
///
/// The selected language is shown whatever column the view is ranked by. A
/// missing language entry shows as [`NOT_APPLICABLE`] even though it ranks as
/// zero.
pub fn pass_rate_cell(record: &ModelRecord, state: &ViewState) -> String {
    match state.language.as_deref() {
        Some(language) => percent(metrics::language_pass_rate_for_display(record, language)),
        None => format!("{}%", record.pass_rate),
    }
}

/// Speed in seconds, one decimal.
pub fn speed_cell(record: &ModelRecord) -> String {
    format!("{:.1}s", metrics::speed_seconds(record))
}

/// Cost in dollars, three decimals.
pub fn cost_cell(record: &ModelRecord) -> String {
    format!("${:.3}", record.cost)
}

pub fn seconds_per_correct_cell(record: &ModelRecord) -> String {
    match metrics::seconds_per_correct_case(record) {
        Some(seconds) => format!("{:.1}s", seconds),
        None => NOT_APPLICABLE.to_string(),
    }
}

pub fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_APPLICABLE.to_string(), |v| format!("{}%", v))
}

pub fn count(value: Option<u64>) -> String {
    value.map_or_else(|| NOT_APPLICABLE.to_string(), |v| v.to_string())
}

pub fn text(value: Option<&str>) -> String {
    value.unwrap_or(NOT_APPLICABLE).to_string()
}

/// Display name of a language key; unknown keys are shown as recorded.
pub fn language_label(key: &str) -> String {
    key.parse::<Language>()
        .map(|language| language.label().to_string())
        .unwrap_or_else(|_| key.to_string())
}

/// Short marker shown next to a model name in the detailed view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub symbol: &'static str,
    /// CSS class suffix.
    pub class: String,
    pub tooltip: String,
}

/// Badges for edit format, reasoning effort, license and sponsorship.
pub fn badges(record: &ModelRecord) -> Vec<Badge> {
    let details = &record.details;
    let mut badges = Vec::new();

    match details.edit_format.as_deref() {
        Some("architect") => badges.push(Badge {
            symbol: "A",
            class: "architect".to_string(),
            tooltip: "Architect mode with editor model".to_string(),
        }),
        Some("whole") => badges.push(Badge {
            symbol: "W",
            class: "whole".to_string(),
            tooltip: "Whole format mode".to_string(),
        }),
        Some("diff") => badges.push(Badge {
            symbol: "D",
            class: "diff".to_string(),
            tooltip: "Diff format mode".to_string(),
        }),
        _ => {}
    }

    if let Some(effort) = details.reasoning_effort.as_deref() {
        badges.push(Badge {
            symbol: "R",
            class: format!("reasoning reasoning-{}", effort.to_ascii_lowercase()),
            tooltip: format!("Reasoning effort: {}", effort),
        });
    }

    if let Some(open) = details.is_open_source {
        badges.push(if open {
            Badge {
                symbol: "OS",
                class: "opensource opensource-true".to_string(),
                tooltip: "Open Source Model".to_string(),
            }
        } else {
            Badge {
                symbol: "P",
                class: "opensource opensource-false".to_string(),
                tooltip: "Proprietary Model".to_string(),
            }
        });
    }

    if let Some(sponsor) = details.sponsor.as_deref() {
        badges.push(Badge {
            symbol: "S",
            class: "sponsor".to_string(),
            tooltip: format!("Sponsored by: {}", sponsor),
        });
    }

    badges
}

#[cfg(test)]
mod tests {
    use super::*;
    use llmboard_core::{LanguagePassRates, ModelDetails, SortKey};

    fn record() -> ModelRecord {
        ModelRecord::new(1, "m", 48.4, 45_200.0, 0.34).with_details(ModelDetails {
            edit_format: Some("diff".to_string()),
            reasoning_effort: Some("High".to_string()),
            is_open_source: Some(true),
            language_pass_rates: Some(LanguagePassRates::new().with_language("go", 15.4, 51.3)),
            ..Default::default()
        })
    }

    #[test]
    fn test_pass_rate_cell() {
        let state = ViewState::default();
        assert_eq!(pass_rate_cell(&record(), &state), "48.4%");
        let go = state.with_language(Some("go"));
        assert_eq!(pass_rate_cell(&record(), &go), "51.3%");
        let rust = ViewState::default().with_language(Some("rust"));
        assert_eq!(pass_rate_cell(&record(), &rust), NOT_APPLICABLE);
        let speed = ViewState::new(SortKey::Speed).with_language(Some("go"));
        assert_eq!(pass_rate_cell(&record(), &speed), "51.3%");
    }

    #[test]
    fn test_numeric_cells() {
        assert_eq!(speed_cell(&record()), "45.2s");
        assert_eq!(cost_cell(&record()), "$0.340");
        assert_eq!(seconds_per_correct_cell(&record()), NOT_APPLICABLE);
    }

    #[test]
    fn test_optional_cells() {
        assert_eq!(percent(None), "N/A");
        assert_eq!(percent(Some(2.7)), "2.7%");
        assert_eq!(count(Some(0)), "0");
        assert_eq!(text(None), "N/A");
        assert_eq!(language_label("cpp"), "C++");
        assert_eq!(language_label("kotlin"), "kotlin");
    }

    #[test]
    fn test_badges() {
        let symbols: Vec<&str> = badges(&record()).iter().map(|b| b.symbol).collect();
        assert_eq!(symbols, vec!["D", "R", "OS"]);
        assert_eq!(badges(&record())[1].class, "reasoning reasoning-high");
        assert!(badges(&ModelRecord::new(2, "bare", 1.0, 1.0, 0.0)).is_empty());
    }
}
