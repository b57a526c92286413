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

//! Sort and filter engine.
//!
//! [`sort_and_filter`] turns a collection and a [`ViewState`] into an ordered,
//! filtered sequence of borrowed records. It is a pure function: the state is
//! an explicit value, the source slice is never reordered, and the same
//! inputs always produce the same output.
//!
//! # Ordering
//!
//! - Records are compared on a single numeric rank key chosen by
//!   [`SortKey`] (and, for pass rate, an optional language).
//! - The sort is stable in both directions: equal keys keep input order.
//! - Undefined keys (seconds per correct case with no solved cases, or a
//!   NaN in the source data) are placed after every defined key regardless
//!   of direction.
//!
//! # Examples
//!
//! ```
//! use llmboard_core::{sort_and_filter, ModelRecord, ViewState};
//!
//! let records = vec![
//!     ModelRecord::new(1, "a", 30.0, 1000.0, 0.0),
//!     ModelRecord::new(2, "b", 90.0, 1000.0, 0.02),
//!     ModelRecord::new(3, "c", 90.0, 1000.0, 0.02),
//! ];
//! let ids: Vec<u64> = sort_and_filter(&records, &ViewState::default())
//!     .iter()
//!     .map(|r| r.id)
//!     .collect();
//! assert_eq!(ids, vec![2, 3, 1]);
//! ```

use crate::metrics;
use crate::model::ModelRecord;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Column a view is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    PassRate,
    Speed,
    Cost,
    SecondsPerCorrectCase,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::PassRate,
        SortKey::Speed,
        SortKey::Cost,
        SortKey::SecondsPerCorrectCase,
    ];

    /// Direction applied when this key is newly selected.
    ///
    /// Lower is better for speed and seconds per correct case.
    pub fn default_direction(self) -> Direction {
        match self {
            SortKey::PassRate | SortKey::Cost => Direction::Descending,
            SortKey::Speed | SortKey::SecondsPerCorrectCase => Direction::Ascending,
        }
    }

    /// Stable name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::PassRate => "pass-rate",
            SortKey::Speed => "speed",
            SortKey::Cost => "cost",
            SortKey::SecondsPerCorrectCase => "seconds-per-correct",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pass-rate" | "passrate" => Ok(SortKey::PassRate),
            "speed" => Ok(SortKey::Speed),
            "cost" => Ok(SortKey::Cost),
            "seconds-per-correct" | "seconds-per-correct-case" | "secondspercorrect" => {
                Ok(SortKey::SecondsPerCorrectCase)
            }
            other => Err(format!(
                "Unknown sort key '{}'. Expected one of: pass-rate, speed, cost, seconds-per-correct",
                other
            )),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Descending, Direction::Ascending];

    pub fn flip(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }

    /// Arrow shown next to the active column header.
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Ascending => "↑",
            Direction::Descending => "↓",
        }
    }
}

/// Which records a view keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    OpenSource,
    /// Records flagged closed, or not flagged at all.
    Proprietary,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 3] = [
        CategoryFilter::All,
        CategoryFilter::OpenSource,
        CategoryFilter::Proprietary,
    ];

    pub fn matches(self, record: &ModelRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::OpenSource => record.is_open_source(),
            CategoryFilter::Proprietary => !record.is_open_source(),
        }
    }

    /// Stable name used on the command line and in page names.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::OpenSource => "open-source",
            CategoryFilter::Proprietary => "proprietary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::OpenSource => "Open Source",
            CategoryFilter::Proprietary => "Proprietary",
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "all" => Ok(CategoryFilter::All),
            "open-source" | "opensource" | "open" => Ok(CategoryFilter::OpenSource),
            "proprietary" | "closed" => Ok(CategoryFilter::Proprietary),
            other => Err(format!(
                "Unknown category '{}'. Expected one of: all, open-source, proprietary",
                other
            )),
        }
    }
}

/// Everything that determines a view.
///
/// The default is the landing view of the leaderboard: overall pass rate,
/// descending, all categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewState {
    pub sort_key: SortKey,
    /// Lowercase language name. Only consulted when ranking by pass rate.
    pub language: Option<String>,
    pub direction: Direction,
    pub category: CategoryFilter,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort_key: SortKey::PassRate,
            language: None,
            direction: Direction::Descending,
            category: CategoryFilter::All,
        }
    }
}

impl ViewState {
    /// State ranked by `sort_key` in its default direction.
    pub fn new(sort_key: SortKey) -> Self {
        Self {
            sort_key,
            direction: sort_key.default_direction(),
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.language = normalize_language(language);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Column-header click.
    ///
    /// Selecting the current `(sort_key, language)` pair again flips the
    /// direction. Any other pair becomes current with its key's default
    /// direction. The category filter is kept.
    pub fn select(&self, sort_key: SortKey, language: Option<&str>) -> Self {
        let language = normalize_language(language);
        if self.sort_key == sort_key && self.language == language {
            Self {
                direction: self.direction.flip(),
                ..self.clone()
            }
        } else {
            Self {
                sort_key,
                language,
                direction: sort_key.default_direction(),
                category: self.category,
            }
        }
    }

    /// Language whose pass rate is the rank key, if any.
    pub fn ranking_language(&self) -> Option<&str> {
        match self.sort_key {
            SortKey::PassRate => self.language.as_deref(),
            _ => None,
        }
    }
}

fn normalize_language(language: Option<&str>) -> Option<String> {
    language
        .map(|l| l.trim().to_ascii_lowercase())
        .filter(|l| !l.is_empty())
}

/// Numeric value two records are compared on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RankKey {
    Defined(f64),
    /// Sorts after every defined key in both directions.
    Undefined,
}

impl RankKey {
    fn from_value(value: f64) -> Self {
        if value.is_nan() {
            RankKey::Undefined
        } else {
            RankKey::Defined(value)
        }
    }

    fn compare(self, other: Self, direction: Direction) -> Ordering {
        match (self, other) {
            (RankKey::Defined(a), RankKey::Defined(b)) => {
                let ordering = three_way(a, b);
                match direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            }
            (RankKey::Defined(_), RankKey::Undefined) => Ordering::Less,
            (RankKey::Undefined, RankKey::Defined(_)) => Ordering::Greater,
            (RankKey::Undefined, RankKey::Undefined) => Ordering::Equal,
        }
    }
}

fn three_way(a: f64, b: f64) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Rank key of `record` under `state`.
pub fn rank_key(record: &ModelRecord, state: &ViewState) -> RankKey {
    match state.sort_key {
        SortKey::PassRate => match state.language.as_deref() {
            Some(language) => RankKey::from_value(metrics::language_pass_rate(record, language)),
            None => RankKey::from_value(record.pass_rate),
        },
        SortKey::Speed => RankKey::from_value(record.speed),
        SortKey::Cost => RankKey::from_value(record.cost),
        SortKey::SecondsPerCorrectCase => metrics::seconds_per_correct_case(record)
            .map(RankKey::from_value)
            .unwrap_or(RankKey::Undefined),
    }
}

/// Filter `records` by category and order them by the state's rank key.
///
/// Returns a new sequence; `records` is untouched. The output is a
/// permutation of the filtered subset.
pub fn sort_and_filter<'a>(records: &'a [ModelRecord], state: &ViewState) -> Vec<&'a ModelRecord> {
    let mut keyed: Vec<(RankKey, &'a ModelRecord)> = records
        .iter()
        .filter(|record| state.category.matches(record))
        .map(|record| (rank_key(record, state), record))
        .collect();

    // `sort_by` is stable, which keeps ties in input order.
    keyed.sort_by(|(a, _), (b, _)| a.compare(*b, state.direction));

    keyed.into_iter().map(|(_, record)| record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LanguagePassRates, ModelDetails};

    fn ids(view: &[&ModelRecord]) -> Vec<u64> {
        view.iter().map(|r| r.id).collect()
    }

    fn record(id: u64, pass_rate: f64, speed: f64, cost: f64) -> ModelRecord {
        ModelRecord::new(id, format!("model-{}", id), pass_rate, speed, cost)
    }

    fn solved(id: u64, seconds_per_case: f64, total: u64, passed: u64) -> ModelRecord {
        record(id, 10.0, 1000.0, 0.0).with_details(ModelDetails {
            seconds_per_case: Some(seconds_per_case),
            total_tests: Some(total),
            pass_num_2: Some(passed),
            ..Default::default()
        })
    }

    fn flagged(id: u64, open: Option<bool>) -> ModelRecord {
        record(id, 10.0, 1000.0, 0.0).with_details(ModelDetails {
            is_open_source: open,
            ..Default::default()
        })
    }

    // ==================== Ordering ====================

    #[test]
    fn test_pass_rate_descending_is_stable() {
        let records = vec![record(1, 30.0, 1.0, 0.0), record(2, 90.0, 1.0, 0.02), record(3, 90.0, 1.0, 0.02)];
        let view = sort_and_filter(&records, &ViewState::default());
        assert_eq!(ids(&view), vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_input_order_ascending() {
        let records = vec![record(1, 30.0, 1.0, 0.0), record(2, 90.0, 1.0, 0.02), record(3, 90.0, 1.0, 0.02)];
        let state = ViewState::default().with_direction(Direction::Ascending);
        assert_eq!(ids(&sort_and_filter(&records, &state)), vec![1, 2, 3]);
    }

    #[test]
    fn test_speed_and_cost_keys() {
        let records = vec![record(1, 1.0, 300.0, 5.0), record(2, 1.0, 100.0, 0.0), record(3, 1.0, 200.0, 9.0)];
        assert_eq!(ids(&sort_and_filter(&records, &ViewState::new(SortKey::Speed))), vec![2, 3, 1]);
        assert_eq!(ids(&sort_and_filter(&records, &ViewState::new(SortKey::Cost))), vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_collection() {
        assert!(sort_and_filter(&[], &ViewState::default()).is_empty());
    }

    #[test]
    fn test_source_is_not_reordered() {
        let records = vec![record(1, 10.0, 1.0, 0.0), record(2, 20.0, 1.0, 0.0)];
        let _ = sort_and_filter(&records, &ViewState::default());
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 2);
    }

    // ==================== Language ranking ====================

    #[test]
    fn test_language_pass_rate_key() {
        let with_rate = |id, rate| {
            record(id, 50.0, 1.0, 0.0).with_details(ModelDetails {
                language_pass_rates: Some(LanguagePassRates::new().with_language("rust", 0.0, rate)),
                ..Default::default()
            })
        };
        let records = vec![with_rate(1, 10.0), record(2, 99.0, 1.0, 0.0), with_rate(3, 40.0)];
        let state = ViewState::default().with_language(Some("Rust"));
        assert_eq!(ids(&sort_and_filter(&records, &state)), vec![3, 1, 2]);
    }

    #[test]
    fn test_missing_language_metrics_keep_input_order() {
        let records = vec![record(1, 10.0, 1.0, 0.0), record(2, 90.0, 1.0, 0.0)];
        let state = ViewState::default().with_language(Some("go"));
        assert_eq!(ids(&sort_and_filter(&records, &state)), vec![1, 2]);
        let state = state.with_direction(Direction::Ascending);
        assert_eq!(ids(&sort_and_filter(&records, &state)), vec![1, 2]);
    }

    #[test]
    fn test_language_ignored_for_other_keys() {
        let state = ViewState::new(SortKey::Speed).with_language(Some("go"));
        let records = vec![record(1, 1.0, 20.0, 0.0), record(2, 1.0, 10.0, 0.0)];
        assert_eq!(ids(&sort_and_filter(&records, &state)), vec![2, 1]);
        assert_eq!(state.ranking_language(), None);
    }

    // ==================== Seconds per correct case ====================

    #[test]
    fn test_undefined_seconds_per_correct_sorts_last_both_directions() {
        let records = vec![solved(1, 10.0, 10, 0), solved(2, 10.0, 10, 5), solved(3, 10.0, 10, 10), solved(4, 1.0, 1, 0)];
        let asc = ViewState::new(SortKey::SecondsPerCorrectCase);
        assert_eq!(asc.direction, Direction::Ascending);
        assert_eq!(ids(&sort_and_filter(&records, &asc)), vec![3, 2, 1, 4]);

        let desc = asc.with_direction(Direction::Descending);
        assert_eq!(ids(&sort_and_filter(&records, &desc)), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_nan_key_sorts_last() {
        let records = vec![record(1, f64::NAN, 1.0, 0.0), record(2, 5.0, 1.0, 0.0), record(3, 9.0, 1.0, 0.0)];
        let desc = ViewState::default();
        assert_eq!(ids(&sort_and_filter(&records, &desc)), vec![3, 2, 1]);
        let asc = desc.with_direction(Direction::Ascending);
        assert_eq!(ids(&sort_and_filter(&records, &asc)), vec![2, 3, 1]);
    }

    // ==================== Filtering ====================

    #[test]
    fn test_category_filters() {
        let records = vec![flagged(1, Some(true)), flagged(2, Some(false)), flagged(3, None)];
        let open = ViewState::default().with_category(CategoryFilter::OpenSource);
        assert_eq!(ids(&sort_and_filter(&records, &open)), vec![1]);
        let closed = ViewState::default().with_category(CategoryFilter::Proprietary);
        assert_eq!(ids(&sort_and_filter(&records, &closed)), vec![2, 3]);
        assert_eq!(sort_and_filter(&records, &ViewState::default()).len(), 3);
    }

    // ==================== Toggle rule ====================

    #[test]
    fn test_select_same_pair_flips_direction() {
        let state = ViewState::default();
        let toggled = state.select(SortKey::PassRate, None);
        assert_eq!(toggled.direction, Direction::Ascending);
        assert_eq!(toggled.select(SortKey::PassRate, None).direction, Direction::Descending);
    }

    #[test]
    fn test_select_new_key_resets_to_default_direction() {
        let state = ViewState::default().with_category(CategoryFilter::OpenSource);
        let speed = state.select(SortKey::Speed, None);
        assert_eq!(speed.sort_key, SortKey::Speed);
        assert_eq!(speed.direction, Direction::Ascending);
        assert_eq!(speed.category, CategoryFilter::OpenSource);

        let cost = speed.select(SortKey::Cost, None);
        assert_eq!(cost.direction, Direction::Descending);

        let spc = cost.select(SortKey::SecondsPerCorrectCase, None);
        assert_eq!(spc.direction, Direction::Ascending);
    }

    #[test]
    fn test_select_new_language_resets_direction() {
        let state = ViewState::default().with_direction(Direction::Ascending);
        let python = state.select(SortKey::PassRate, Some("Python"));
        assert_eq!(python.language.as_deref(), Some("python"));
        assert_eq!(python.direction, Direction::Descending);
        let again = python.select(SortKey::PassRate, Some("python"));
        assert_eq!(again.direction, Direction::Ascending);
    }

    // ==================== Parsing ====================

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("passRate".parse::<SortKey>(), Ok(SortKey::PassRate));
        assert_eq!("seconds_per_correct".parse::<SortKey>(), Ok(SortKey::SecondsPerCorrectCase));
        assert!("latency".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("open-source".parse::<CategoryFilter>(), Ok(CategoryFilter::OpenSource));
        assert_eq!("Proprietary".parse::<CategoryFilter>(), Ok(CategoryFilter::Proprietary));
        assert!("free".parse::<CategoryFilter>().is_err());
        for category in CategoryFilter::ALL {
            assert_eq!(category.as_str().parse::<CategoryFilter>(), Ok(category));
        }
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
    }
}
