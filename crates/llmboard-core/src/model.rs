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

//! Benchmark record types.
//!
//! A [`ModelRecord`] is one benchmark run of one model configuration. The
//! headline metrics (`passRate`, `speed`, `cost`) are required; everything
//! else lives in [`ModelDetails`], where every field is optional. An absent
//! field means "not applicable" and is kept distinct from zero: callers
//! default to zero only inside arithmetic.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// One benchmark run.
///
/// `id` is the identity of the record inside a collection; `name` is only a
/// display label and may repeat across runs with different settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Unique identifier within the collection.
    pub id: u64,
    /// Display label.
    pub name: String,
    /// Final pass rate in percent (0-100).
    #[serde(rename = "passRate")]
    pub pass_rate: f64,
    /// Milliseconds per test case.
    pub speed: f64,
    /// Cost of a full run. Zero means free.
    pub cost: f64,
    /// Sparse extension fields.
    #[serde(default)]
    pub details: ModelDetails,
}

impl ModelRecord {
    /// Create a record with empty details.
    pub fn new(id: u64, name: impl Into<String>, pass_rate: f64, speed: f64, cost: f64) -> Self {
        Self {
            id,
            name: name.into(),
            pass_rate,
            speed,
            cost,
            details: ModelDetails::default(),
        }
    }

    /// Replace the details of this record.
    pub fn with_details(mut self, details: ModelDetails) -> Self {
        self.details = details;
        self
    }

    /// Whether the record is flagged as an open-source model.
    ///
    /// An absent flag counts as proprietary.
    pub fn is_open_source(&self) -> bool {
        self.details.is_open_source == Some(true)
    }

    /// Check the numeric invariants of the record.
    ///
    /// Returns every violation found; an empty vector means the record is
    /// consistent. Absent optional fields are never reported.
    pub fn violations(&self) -> Vec<Violation> {
        let mut found = Vec::new();

        if !is_percentage(self.pass_rate) {
            found.push(Violation::PassRateOutOfRange {
                field: "passRate".to_string(),
                value: self.pass_rate,
            });
        }
        for (field, value) in [
            ("pass_rate_1", self.details.pass_rate_1),
            ("pass_rate_2", self.details.pass_rate_2),
        ] {
            if let Some(value) = value {
                if !is_percentage(value) {
                    found.push(Violation::PassRateOutOfRange {
                        field: field.to_string(),
                        value,
                    });
                }
            }
        }
        if let Some(rates) = &self.details.language_pass_rates {
            for (key, value) in rates.iter() {
                if !is_percentage(value) {
                    found.push(Violation::PassRateOutOfRange {
                        field: key.to_string(),
                        value,
                    });
                }
            }
        }

        if self.cost.is_nan() || self.cost < 0.0 {
            found.push(Violation::NegativeCost { value: self.cost });
        }
        if self.speed.is_nan() || self.speed <= 0.0 {
            found.push(Violation::NonPositiveSpeed { value: self.speed });
        }

        if let (Some(total), Some(passed)) = (self.details.total_tests, self.details.pass_num_2) {
            if passed > total {
                found.push(Violation::PassCountExceedsTotal { passed, total });
            }
        }

        found
    }
}

fn is_percentage(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

/// Optional per-run fields.
///
/// Field names follow the benchmark harness output. Every field is optional;
/// see the module documentation for how absence is treated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelDetails {
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub dirname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_cases: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_format: Option<String>,
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// First-attempt pass rate in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_rate_1: Option<f64>,
    /// Final pass rate in percent, after the retry with test feedback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_rate_2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_num_1: Option<u64>,
    /// Number of cases solved after the final attempt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_num_2: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_cases_well_formed: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_outputs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_malformed_responses: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_with_malformed_responses: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_asks: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lazy_comments: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax_errors: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indentation_errors: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhausted_context_windows: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_timeouts: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tests: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Run date, `YYYY-MM-DD`.
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub versions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_per_case: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_api_calls: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_retries: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_api_calls_per_test: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_retries_per_test: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_rate_percent: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_edit_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<String>,
    #[serde(rename = "isOpenSource", skip_serializing_if = "Option::is_none")]
    pub is_open_source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_pass_rates: Option<LanguagePassRates>,
}

/// Per-language pass rates, keyed `{language}_pass_rate_1` and
/// `{language}_pass_rate_2`.
///
/// The set of languages is open: any key present in the source data is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguagePassRates(BTreeMap<String, f64>);

impl LanguagePassRates {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of both sub-metrics for `language`.
    pub fn with_language(mut self, language: &str, first: f64, second: f64) -> Self {
        self.insert(&first_pass_key(language), first);
        self.insert(&final_pass_key(language), second);
        self
    }

    /// Insert a raw key.
    pub fn insert(&mut self, key: &str, value: f64) {
        self.0.insert(key.to_string(), value);
    }

    /// Look up a raw key.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// First-attempt pass rate for `language`.
    pub fn first_pass(&self, language: &str) -> Option<f64> {
        self.get(&first_pass_key(language))
    }

    /// Final pass rate for `language`.
    pub fn final_pass(&self, language: &str) -> Option<f64> {
        self.get(&final_pass_key(language))
    }

    /// Distinct language names present in the map, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self
            .0
            .keys()
            .filter_map(|key| key.rsplit_once("_pass_rate_").map(|(lang, _)| lang))
            .collect();
        names.into_iter().collect()
    }

    /// Iterate over raw `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn first_pass_key(language: &str) -> String {
    format!("{}_pass_rate_1", language.to_ascii_lowercase())
}

fn final_pass_key(language: &str) -> String {
    format!("{}_pass_rate_2", language.to_ascii_lowercase())
}

/// Languages of the polyglot benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    JavaScript,
    Python,
    Java,
    Cpp,
    Go,
    Rust,
}

impl Language {
    /// All benchmark languages, in display order.
    pub const ALL: [Language; 6] = [
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::Go,
        Language::Rust,
    ];

    /// Lowercase key used in `language_pass_rates`.
    pub fn key(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Rust => "rust",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Go => "Go",
            Language::Rust => "Rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Language::JavaScript),
            "python" | "py" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "cpp" | "c++" => Ok(Language::Cpp),
            "go" => Ok(Language::Go),
            "rust" | "rs" => Ok(Language::Rust),
            other => Err(format!(
                "Unknown language '{}'. Expected one of: javascript, python, java, cpp, go, rust",
                other
            )),
        }
    }
}

/// A broken numeric invariant on a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// A pass rate outside `[0, 100]`.
    PassRateOutOfRange { field: String, value: f64 },
    /// `cost < 0`.
    NegativeCost { value: f64 },
    /// `speed <= 0`.
    NonPositiveSpeed { value: f64 },
    /// `pass_num_2 > total_tests`.
    PassCountExceedsTotal { passed: u64, total: u64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::PassRateOutOfRange { field, value } => {
                write!(f, "{} = {} is outside [0, 100]", field, value)
            }
            Violation::NegativeCost { value } => write!(f, "cost = {} is negative", value),
            Violation::NonPositiveSpeed { value } => {
                write!(f, "speed = {} is not positive", value)
            }
            Violation::PassCountExceedsTotal { passed, total } => write!(
                f,
                "pass_num_2 = {} exceeds total_tests = {}",
                passed, total
            ),
        }
    }
}

/// Deserializers that accept scalars YAML may type as numbers where the
/// harness meant text (short commit hashes, version strings).
mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringLike {
        Str(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<StringLike> = Option::deserialize(deserializer)?;
        Ok(value.map(|v| match v {
            StringLike::Str(s) => s,
            StringLike::Int(i) => i.to_string(),
            StringLike::Float(f) => f.to_string(),
            StringLike::Bool(b) => b.to_string(),
        }))
    }
}
