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

//! Derived metrics.
//!
//! Values computed from a record's stored fields for display and ranking.
//! Nothing here is persisted and nothing here fails: missing optional data
//! produces `None` or a documented zero.

use crate::model::ModelRecord;
use chrono::NaiveDate;

/// Costs above this are treated as outliers by [`cost_efficiency_score`].
pub const EXTREME_COST_THRESHOLD: f64 = 1000.0;

/// Lower bound of [`cost_efficiency_score`].
pub const MIN_COST_EFFICIENCY: f64 = 5.0;

/// Upper bound of [`cost_efficiency_score`].
pub const MAX_COST_EFFICIENCY: f64 = 500.0;

/// Wall-clock seconds spent per correctly solved case.
///
/// `(seconds_per_case * total_tests) / pass_num_2`. Returns `None` when
/// nothing was solved, since there is no meaningful rate to rank. Absent
/// `seconds_per_case` or `total_tests` count as zero.
///
/// # Examples
///
/// ```
/// use llmboard_core::{metrics, ModelDetails, ModelRecord};
///
/// let record = ModelRecord::new(1, "m", 50.0, 30_000.0, 1.0).with_details(ModelDetails {
///     seconds_per_case: Some(30.0),
///     total_tests: Some(200),
///     pass_num_2: Some(100),
///     ..Default::default()
/// });
/// assert_eq!(metrics::seconds_per_correct_case(&record), Some(60.0));
/// ```
pub fn seconds_per_correct_case(record: &ModelRecord) -> Option<f64> {
    let details = &record.details;
    let passed = details.pass_num_2.unwrap_or(0);
    if passed == 0 {
        return None;
    }
    let seconds = details.seconds_per_case.unwrap_or(0.0);
    let total = details.total_tests.unwrap_or(0) as f64;
    Some(seconds * total / passed as f64)
}

/// Visualization heuristic rewarding high pass rate per unit of cost.
///
/// Three regimes:
/// - free (`cost <= 0`): `passRate * 10`
/// - outlier (`cost > 1000`): `max(5, passRate / 1000 * 5)`
/// - otherwise: `passRate / cost * 5`
///
/// The result is clamped to `[5, 500]`. Not used for ranking.
pub fn cost_efficiency_score(record: &ModelRecord) -> f64 {
    let score = if record.cost <= 0.0 {
        record.pass_rate * 10.0
    } else if record.cost > EXTREME_COST_THRESHOLD {
        (record.pass_rate / EXTREME_COST_THRESHOLD * 5.0).max(MIN_COST_EFFICIENCY)
    } else {
        record.pass_rate / record.cost * 5.0
    };
    score.clamp(MIN_COST_EFFICIENCY, MAX_COST_EFFICIENCY)
}

/// Unclamped pass rate per unit of cost; the pass rate itself for free runs.
pub fn raw_value_score(record: &ModelRecord) -> f64 {
    if record.cost > 0.0 {
        record.pass_rate / record.cost
    } else {
        record.pass_rate
    }
}

/// Final pass rate for `language`, zero when the record has no such entry.
///
/// The zero is a ranking default only; use
/// [`language_pass_rate_for_display`] when absence must stay visible.
pub fn language_pass_rate(record: &ModelRecord, language: &str) -> f64 {
    language_pass_rate_for_display(record, language).unwrap_or(0.0)
}

/// Final pass rate for `language`, if recorded.
pub fn language_pass_rate_for_display(record: &ModelRecord, language: &str) -> Option<f64> {
    record
        .details
        .language_pass_rates
        .as_ref()
        .and_then(|rates| rates.final_pass(language))
}

/// Speed in seconds per case.
pub fn speed_seconds(record: &ModelRecord) -> f64 {
    record.speed / 1000.0
}

/// Parse a run date.
///
/// Accepts `YYYY-MM-DD`, optionally followed by a time part
/// (`2025-04-18T10:00:00`, `2025-04-18 10:00`). Anything else is `None`.
pub fn parse_run_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10)?;
    match trimmed.as_bytes().get(10) {
        None | Some(b'T') | Some(b' ') => {}
        Some(_) => return None,
    }
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Latest parseable `details.date` across `records`.
pub fn most_recent_date<'a, I>(records: I) -> Option<NaiveDate>
where
    I: IntoIterator<Item = &'a ModelRecord>,
{
    records
        .into_iter()
        .filter_map(|record| record.details.date.as_deref())
        .filter_map(parse_run_date)
        .max()
}

/// Long-form date for the page footer, e.g. `April 18, 2025`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
