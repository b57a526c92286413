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

//! Integration tests for loading benchmark data files.

use llmboard_core::{Leaderboard, SortKey, ViewState};
use llmboard_load::{load, load_file, LoadConfig, LoadError, SourceFormat};
use std::fs;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn sample_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/models.yaml")
}

// Test helper to create a temporary file with content
fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Sample data =====

#[test]
fn test_load_sample_data() {
    let records = load_file(sample_data(), &LoadConfig::default()).unwrap();
    assert_eq!(records.len(), 6);

    let flash = &records[0];
    assert_eq!(flash.name, "Gemini Flash 1.5 8B");
    assert_eq!(flash.speed, 88_600.0);
    assert_eq!(flash.details.commit_hash.as_deref(), Some("490cab3"));
    assert_eq!(flash.details.date.as_deref(), Some("2025-04-18"));
    assert_eq!(flash.details.language_pass_rates, None);

    let deepseek = &records[1];
    let rates = deepseek.details.language_pass_rates.as_ref().unwrap();
    assert_eq!(rates.final_pass("python"), Some(55.9));
    assert_eq!(rates.languages().len(), 6);
}

#[test]
fn test_sample_data_has_no_violations() {
    let board = load(sample_data(), &LoadConfig::default()).into_leaderboard();
    assert!(board.violations().is_empty());
}

#[test]
fn test_sample_data_deduplicates_and_ranks() {
    let board = load(sample_data(), &LoadConfig::default()).into_leaderboard();
    assert_eq!(board.len(), 5);
    assert_eq!(board.duplicates(), 1);
    assert_eq!(board.get(2).unwrap().name, "DeepSeek V3");

    let ids: Vec<u64> = board.view(&ViewState::default()).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![4, 2, 3, 1, 5]);

    let ids: Vec<u64> = board
        .view(&ViewState::new(SortKey::SecondsPerCorrectCase))
        .iter()
        .map(|r| r.id)
        .collect();
    // Tiny Local solved nothing and sorts last.
    assert_eq!(ids.last(), Some(&5));
}

#[test]
fn test_sample_most_recent_date() {
    let board = load(sample_data(), &LoadConfig::default()).into_leaderboard();
    assert_eq!(
        board.most_recent_date().map(|d| d.to_string()),
        Some("2025-04-18".to_string())
    );
}

// ===== Formats =====

#[test]
fn test_load_json_file() {
    let file = create_temp_file(
        r#"[{"id": 1, "name": "a", "passRate": 10, "speed": 100, "cost": 0, "unknown": [1, 2]}]"#,
        ".json",
    );
    let records = load_file(file.path(), &LoadConfig::default()).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_explicit_format_overrides_extension() {
    let file = create_temp_file("- {id: 1, name: a, passRate: 1, speed: 1, cost: 0}\n", ".txt");
    assert!(matches!(
        load_file(file.path(), &LoadConfig::default()),
        Err(LoadError::UnsupportedFormat { .. })
    ));
    let config = LoadConfig::builder().format(SourceFormat::Yaml).build();
    assert_eq!(load_file(file.path(), &config).unwrap().len(), 1);
}

// ===== Failure boundary =====

#[test]
fn test_missing_file_yields_empty_outcome() {
    let outcome = load("/nonexistent/models.yaml", &LoadConfig::default());
    assert!(!outcome.is_ok());
    assert!(outcome.records.is_empty());
    assert!(matches!(outcome.error, Some(LoadError::Io { .. })));
    assert!(outcome.into_leaderboard().is_empty());
}

#[test]
fn test_malformed_file_is_all_or_nothing() {
    let file = create_temp_file(
        "- {id: 1, name: ok, passRate: 1, speed: 1, cost: 0}\n- {id: 2, name: broken, passRate: high, speed: 1, cost: 0}\n",
        ".yaml",
    );
    let outcome = load(file.path(), &LoadConfig::default());
    assert!(outcome.records.is_empty());
    assert!(matches!(outcome.error, Some(LoadError::Parse(_))));
}

#[test]
fn test_outcome_into_leaderboard() {
    let file = create_temp_file("[]", ".yaml");
    let outcome = load(file.path(), &LoadConfig::default());
    assert!(outcome.is_ok());
    assert_eq!(outcome.into_leaderboard(), Leaderboard::default());
}
