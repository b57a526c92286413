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

//! Chart series.
//!
//! Each function turns a [`Leaderboard`] into one visualization dataset:
//! overall pass rates, per-language comparison, cost against performance,
//! error breakdown and a normalized radar profile. Series are plain
//! serializable rows so any front end can plot them.
//!
//! Records are labelled `"{name} ({id})"` because names repeat across runs.

use crate::leaderboard::Leaderboard;
use crate::metrics;
use crate::model::{Language, ModelRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Records shown in the error breakdown.
pub const ERROR_SERIES_LIMIT: usize = 15;

/// Records shown in the radar profile.
pub const RADAR_SERIES_LIMIT: usize = 5;

/// Available charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    PassRate,
    Languages,
    CostEfficiency,
    ErrorAnalysis,
    Radar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::PassRate,
        ChartKind::Languages,
        ChartKind::CostEfficiency,
        ChartKind::ErrorAnalysis,
        ChartKind::Radar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::PassRate => "pass-rate",
            ChartKind::Languages => "languages",
            ChartKind::CostEfficiency => "cost-efficiency",
            ChartKind::ErrorAnalysis => "error-analysis",
            ChartKind::Radar => "radar",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| {
                format!(
                    "Unknown chart '{}'. Expected one of: pass-rate, languages, cost-efficiency, error-analysis, radar",
                    s
                )
            })
    }
}

/// Color band of a pass-rate bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PassRateTier {
    /// Above 40%.
    High,
    /// Above 20%.
    Mid,
    Low,
}

impl PassRateTier {
    pub fn of(pass_rate: f64) -> Self {
        if pass_rate > 40.0 {
            PassRateTier::High
        } else if pass_rate > 20.0 {
            PassRateTier::Mid
        } else {
            PassRateTier::Low
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            PassRateTier::High => "#00ff00",
            PassRateTier::Mid => "#88ff00",
            PassRateTier::Low => "#ffff00",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassRatePoint {
    pub label: String,
    pub pass_rate: f64,
    pub first_pass_rate: Option<f64>,
    pub tier: PassRateTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageRow {
    pub label: String,
    /// Final pass rate per language label, zero when not recorded.
    pub rates: BTreeMap<&'static str, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEfficiencyPoint {
    pub label: String,
    pub cost: f64,
    pub speed_seconds: f64,
    pub pass_rate: f64,
    /// Clamped bubble size, see [`metrics::cost_efficiency_score`].
    pub score: f64,
    pub raw_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRow {
    pub label: String,
    pub malformed_responses: u64,
    pub error_outputs: u64,
    pub user_asks: u64,
    pub timeouts: u64,
}

/// One model's radar profile. Every axis is on a 0-100 scale, higher is better.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarProfile {
    pub label: String,
    pub pass_rate: f64,
    pub speed: f64,
    pub cost_efficiency: f64,
    pub well_formed: f64,
    pub error_free: f64,
}

/// All series at once, as embedded in the static page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub pass_rate: Vec<PassRatePoint>,
    pub languages: Vec<LanguageRow>,
    pub cost_efficiency: Vec<CostEfficiencyPoint>,
    pub error_analysis: Vec<ErrorRow>,
    pub radar: Vec<RadarProfile>,
}

impl ChartData {
    pub fn build(board: &Leaderboard) -> Self {
        Self {
            pass_rate: pass_rate_series(board),
            languages: language_series(board),
            cost_efficiency: cost_efficiency_series(board),
            error_analysis: error_series(board),
            radar: radar_series(board),
        }
    }
}

/// Chart label for a record.
pub fn label(record: &ModelRecord) -> String {
    format!("{} ({})", record.name, record.id)
}

fn by_pass_rate_desc(board: &Leaderboard) -> Vec<&ModelRecord> {
    let mut records: Vec<&ModelRecord> = board.records().iter().collect();
    records.sort_by(|a, b| b.pass_rate.total_cmp(&a.pass_rate));
    records
}

pub fn pass_rate_series(board: &Leaderboard) -> Vec<PassRatePoint> {
    by_pass_rate_desc(board)
        .into_iter()
        .map(|record| PassRatePoint {
            label: label(record),
            pass_rate: record.pass_rate,
            first_pass_rate: record.details.pass_rate_1,
            tier: PassRateTier::of(record.pass_rate),
        })
        .collect()
}

/// Records that carry per-language data, best overall first.
pub fn language_series(board: &Leaderboard) -> Vec<LanguageRow> {
    by_pass_rate_desc(board)
        .into_iter()
        .filter(|record| record.details.language_pass_rates.is_some())
        .map(|record| LanguageRow {
            label: label(record),
            rates: Language::ALL
                .iter()
                .map(|language| {
                    (
                        language.label(),
                        metrics::language_pass_rate(record, language.key()),
                    )
                })
                .collect(),
        })
        .collect()
}

pub fn cost_efficiency_series(board: &Leaderboard) -> Vec<CostEfficiencyPoint> {
    by_pass_rate_desc(board)
        .into_iter()
        .map(|record| CostEfficiencyPoint {
            label: label(record),
            cost: record.cost,
            speed_seconds: metrics::speed_seconds(record),
            pass_rate: record.pass_rate,
            score: metrics::cost_efficiency_score(record),
            raw_value: metrics::raw_value_score(record),
        })
        .collect()
}

/// Error counts of the best [`ERROR_SERIES_LIMIT`] records. Absent counts plot as zero.
pub fn error_series(board: &Leaderboard) -> Vec<ErrorRow> {
    by_pass_rate_desc(board)
        .into_iter()
        .take(ERROR_SERIES_LIMIT)
        .map(|record| {
            let details = &record.details;
            ErrorRow {
                label: label(record),
                malformed_responses: details.num_malformed_responses.unwrap_or(0),
                error_outputs: details.error_outputs.unwrap_or(0),
                user_asks: details.user_asks.unwrap_or(0),
                timeouts: details.test_timeouts.unwrap_or(0),
            }
        })
        .collect()
}

/// Normalization bounds taken from the whole collection.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RadarScale {
    /// 95th percentile speed, so a single slow outlier does not flatten the axis.
    speed: f64,
    /// Largest cost at or under the outlier threshold.
    cost: f64,
    errors: f64,
}

impl RadarScale {
    fn of(records: &[ModelRecord]) -> Self {
        let mut speeds: Vec<f64> = records.iter().map(|r| r.speed).collect();
        speeds.sort_by(f64::total_cmp);
        let p95 = speeds
            .get((speeds.len() as f64 * 0.95).floor() as usize)
            .copied()
            .unwrap_or(0.0);
        let speed = if p95 == 0.0 || p95.is_nan() { 1.0 } else { p95 };

        let reasonable = records
            .iter()
            .map(|r| r.cost)
            .filter(|cost| *cost <= metrics::EXTREME_COST_THRESHOLD)
            .fold(None, |max: Option<f64>, cost| Some(max.map_or(cost, |m| m.max(cost))));
        let cost = match reasonable {
            Some(max) => max,
            None => records
                .iter()
                .map(|r| r.cost)
                .fold(1.0, f64::max)
                .min(metrics::EXTREME_COST_THRESHOLD),
        };

        let errors = records
            .iter()
            .map(|r| r.details.error_outputs.unwrap_or(0) as f64)
            .fold(1.0, f64::max);

        Self { speed, cost, errors }
    }

    fn speed_score(&self, record: &ModelRecord) -> f64 {
        (100.0 - record.speed / self.speed * 100.0).min(100.0)
    }

    fn cost_score(&self, record: &ModelRecord) -> f64 {
        if record.cost <= 0.0 {
            100.0
        } else if record.cost > self.cost {
            (100.0 - self.cost / record.cost * 100.0).max(10.0)
        } else {
            100.0 - record.cost / self.cost * 100.0
        }
    }

    fn error_free_score(&self, record: &ModelRecord) -> f64 {
        let errors = record.details.error_outputs.unwrap_or(0) as f64;
        (100.0 - errors / self.errors * 100.0).min(100.0)
    }
}

/// Radar profiles of the best [`RADAR_SERIES_LIMIT`] records.
pub fn radar_series(board: &Leaderboard) -> Vec<RadarProfile> {
    let scale = RadarScale::of(board.records());
    by_pass_rate_desc(board)
        .into_iter()
        .take(RADAR_SERIES_LIMIT)
        .map(|record| RadarProfile {
            label: label(record),
            pass_rate: record.pass_rate,
            speed: scale.speed_score(record),
            cost_efficiency: scale.cost_score(record),
            well_formed: record.details.percent_cases_well_formed.unwrap_or(0.0),
            error_free: scale.error_free_score(record),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LanguagePassRates, ModelDetails};

    fn board(records: Vec<ModelRecord>) -> Leaderboard {
        Leaderboard::new(records)
    }

    #[test]
    fn test_pass_rate_series_sorted_and_tiered() {
        let series = pass_rate_series(&board(vec![
            ModelRecord::new(1, "low", 10.0, 1.0, 0.0),
            ModelRecord::new(2, "high", 45.0, 1.0, 0.0),
            ModelRecord::new(3, "mid", 25.0, 1.0, 0.0),
        ]));
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["high (2)", "mid (3)", "low (1)"]);
        assert_eq!(series[0].tier, PassRateTier::High);
        assert_eq!(series[1].tier, PassRateTier::Mid);
        assert_eq!(series[2].tier, PassRateTier::Low);
        assert_eq!(series[0].first_pass_rate, None);
    }

    #[test]
    fn test_language_series_only_records_with_data() {
        let with_rates = ModelRecord::new(1, "polyglot", 20.0, 1.0, 0.0).with_details(ModelDetails {
            language_pass_rates: Some(LanguagePassRates::new().with_language("python", 10.0, 30.0)),
            ..Default::default()
        });
        let series = language_series(&board(vec![with_rates, ModelRecord::new(2, "plain", 50.0, 1.0, 0.0)]));
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].rates["Python"], 30.0);
        assert_eq!(series[0].rates["C++"], 0.0);
        assert_eq!(series[0].rates.len(), 6);
    }

    #[test]
    fn test_cost_efficiency_series() {
        let series = cost_efficiency_series(&board(vec![
            ModelRecord::new(1, "free", 50.0, 2000.0, 0.0),
            ModelRecord::new(2, "pricey", 20.0, 4000.0, 5000.0),
        ]));
        assert_eq!(series[0].score, 500.0);
        assert_eq!(series[0].speed_seconds, 2.0);
        assert_eq!(series[0].raw_value, 50.0);
        assert_eq!(series[1].score, 5.0);
    }

    #[test]
    fn test_error_series_limited_and_defaults_to_zero() {
        let records = (0..20)
            .map(|i| ModelRecord::new(i, "m", i as f64, 1.0, 0.0))
            .collect();
        let series = error_series(&board(records));
        assert_eq!(series.len(), ERROR_SERIES_LIMIT);
        assert_eq!(series[0].label, "m (19)");
        assert_eq!(series[0].error_outputs, 0);
    }

    #[test]
    fn test_radar_series_normalization() {
        let errors = |n| ModelDetails {
            error_outputs: Some(n),
            percent_cases_well_formed: Some(90.0),
            ..Default::default()
        };
        let series = radar_series(&board(vec![
            ModelRecord::new(1, "a", 60.0, 1000.0, 2.0).with_details(errors(10)),
            ModelRecord::new(2, "b", 40.0, 2000.0, 0.0).with_details(errors(0)),
            ModelRecord::new(3, "c", 20.0, 4000.0, 4.0).with_details(errors(5)),
        ]));
        assert_eq!(series.len(), 3);
        // p95 of [1000, 2000, 4000] is the element at index 2.
        assert_eq!(series[0].speed, 75.0);
        assert_eq!(series[0].cost_efficiency, 50.0);
        assert_eq!(series[0].error_free, 0.0);
        assert_eq!(series[0].well_formed, 90.0);
        assert_eq!(series[1].cost_efficiency, 100.0);
        assert_eq!(series[1].error_free, 100.0);
        assert_eq!(series[2].cost_efficiency, 0.0);
        assert_eq!(series[2].speed, 0.0);
    }

    #[test]
    fn test_radar_cost_above_reasonable_max() {
        let series = radar_series(&board(vec![
            ModelRecord::new(1, "normal", 50.0, 1.0, 10.0),
            ModelRecord::new(2, "outlier", 40.0, 1.0, 2000.0),
        ]));
        assert_eq!(series[1].cost_efficiency, 99.5);
    }

    #[test]
    fn test_radar_all_costs_extreme() {
        let series = radar_series(&board(vec![ModelRecord::new(1, "x", 50.0, 1.0, 4000.0)]));
        // Scale falls back to 1000; 100 - 1000/4000*100 = 75.
        assert_eq!(series[0].cost_efficiency, 75.0);
    }

    #[test]
    fn test_radar_limited() {
        let records = (0..8).map(|i| ModelRecord::new(i, "m", i as f64, 1.0, 0.0)).collect();
        assert_eq!(radar_series(&board(records)).len(), RADAR_SERIES_LIMIT);
    }

    #[test]
    fn test_chart_kind_from_str() {
        assert_eq!("radar".parse::<ChartKind>(), Ok(ChartKind::Radar));
        assert_eq!("Cost-Efficiency".parse::<ChartKind>(), Ok(ChartKind::CostEfficiency));
        assert!("pie".parse::<ChartKind>().is_err());
    }

    #[test]
    fn test_chart_data_serializes() {
        let data = ChartData::build(&board(vec![ModelRecord::new(1, "m", 50.0, 1000.0, 0.0)]));
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["pass_rate"][0]["tier"], "high");
        assert_eq!(json["radar"][0]["label"], "m (1)");
    }
}
