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

//! Property-based tests for the sort and filter engine.
//!
//! These tests check the ordering laws every view must obey:
//! - the output is a permutation of the filtered input
//! - applying the same state twice gives the same sequence
//! - descending is the exact reverse of ascending when keys are distinct
//! - equal keys keep their input order in both directions
//! - undefined seconds-per-correct keys sort last in both directions
//! - category filters keep exactly the matching records

use llmboard_core::{
    rank_key, sort_and_filter, CategoryFilter, Direction, LanguagePassRates, ModelDetails,
    ModelRecord, RankKey, SortKey, ViewState,
};
use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// Strategies
// =============================================================================

fn arb_language_rates() -> impl Strategy<Value = Option<LanguagePassRates>> {
    prop::option::of(
        (0.0..=100.0f64, 0.0..=100.0f64, prop::bool::ANY).prop_map(|(first, second, both)| {
            let rates = LanguagePassRates::new().with_language("python", first, second);
            if both {
                rates.with_language("rust", second, first)
            } else {
                rates
            }
        }),
    )
}

fn arb_details() -> impl Strategy<Value = ModelDetails> {
    (
        prop::option::of(prop::bool::ANY),
        prop::option::of(0u64..300),
        prop::option::of(0u64..300),
        prop::option::of(1.0..200.0f64),
        arb_language_rates(),
    )
        .prop_map(|(open, total, passed, seconds, rates)| ModelDetails {
            is_open_source: open,
            total_tests: total,
            pass_num_2: passed,
            seconds_per_case: seconds,
            language_pass_rates: rates,
            ..Default::default()
        })
}

/// Records with small value ranges so ties are common.
fn arb_records() -> impl Strategy<Value = Vec<ModelRecord>> {
    prop::collection::vec(
        (0u8..5, 1u8..5, 0u8..4, arb_details()),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (pass, speed, cost, details))| {
                ModelRecord::new(
                    i as u64,
                    format!("model-{}", i),
                    pass as f64 * 20.0,
                    speed as f64 * 1000.0,
                    cost as f64 * 0.5,
                )
                .with_details(details)
            })
            .collect()
    })
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::PassRate),
        Just(SortKey::Speed),
        Just(SortKey::Cost),
        Just(SortKey::SecondsPerCorrectCase),
    ]
}

fn arb_state() -> impl Strategy<Value = ViewState> {
    (
        arb_sort_key(),
        prop::option::of(prop_oneof![Just("python"), Just("rust"), Just("go")]),
        prop_oneof![Just(Direction::Ascending), Just(Direction::Descending)],
        prop_oneof![
            Just(CategoryFilter::All),
            Just(CategoryFilter::OpenSource),
            Just(CategoryFilter::Proprietary),
        ],
    )
        .prop_map(|(key, language, direction, category)| {
            ViewState::new(key)
                .with_language(language)
                .with_direction(direction)
                .with_category(category)
        })
}

fn ids(view: &[&ModelRecord]) -> Vec<u64> {
    view.iter().map(|r| r.id).collect()
}

fn key_of(record: &ModelRecord, state: &ViewState) -> Option<f64> {
    match rank_key(record, state) {
        RankKey::Defined(value) => Some(value),
        RankKey::Undefined => None,
    }
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_output_is_permutation_of_filtered_input(records in arb_records(), state in arb_state()) {
        let view = sort_and_filter(&records, &state);
        let mut got = ids(&view);
        let mut expected: Vec<u64> = records
            .iter()
            .filter(|r| state.category.matches(r))
            .map(|r| r.id)
            .collect();
        got.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_idempotent(records in arb_records(), state in arb_state()) {
        let first = ids(&sort_and_filter(&records, &state));
        let second = ids(&sort_and_filter(&records, &state));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_ordered_by_rank_key(records in arb_records(), state in arb_state()) {
        let view = sort_and_filter(&records, &state);
        for pair in view.windows(2) {
            match (key_of(pair[0], &state), key_of(pair[1], &state)) {
                (Some(a), Some(b)) => match state.direction {
                    Direction::Ascending => prop_assert!(a <= b),
                    Direction::Descending => prop_assert!(a >= b),
                },
                (None, Some(_)) => prop_assert!(false, "undefined key before a defined one"),
                _ => {}
            }
        }
    }

    #[test]
    fn prop_equal_keys_keep_input_order(records in arb_records(), state in arb_state()) {
        let view = sort_and_filter(&records, &state);
        for pair in view.windows(2) {
            if key_of(pair[0], &state) == key_of(pair[1], &state) {
                // ids were assigned in input order
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn prop_descending_reverses_ascending_for_distinct_keys(
        values in prop::collection::hash_set(0u32..10_000, 0..30),
        key in prop_oneof![Just(SortKey::PassRate), Just(SortKey::Speed), Just(SortKey::Cost)],
    ) {
        let records: Vec<ModelRecord> = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                let v = v as f64 / 100.0 + 0.01;
                ModelRecord::new(i as u64, "m", v, v, v)
            })
            .collect();
        let asc = ViewState::new(key).with_direction(Direction::Ascending);
        let desc = asc.clone().with_direction(Direction::Descending);
        let mut ascending = ids(&sort_and_filter(&records, &asc));
        ascending.reverse();
        prop_assert_eq!(ascending, ids(&sort_and_filter(&records, &desc)));
    }

    #[test]
    fn prop_unsolved_records_sort_last(records in arb_records(), direction in prop_oneof![Just(Direction::Ascending), Just(Direction::Descending)]) {
        let state = ViewState::new(SortKey::SecondsPerCorrectCase).with_direction(direction);
        let view = sort_and_filter(&records, &state);
        let unsolved = |r: &ModelRecord| r.details.pass_num_2.unwrap_or(0) == 0;
        if let Some(first_unsolved) = view.iter().position(|r| unsolved(*r)) {
            prop_assert!(view[first_unsolved..].iter().all(|r| unsolved(*r)));
        }
    }

    #[test]
    fn prop_category_filter_correct(records in arb_records()) {
        let open: HashSet<u64> = ids(&sort_and_filter(
            &records,
            &ViewState::default().with_category(CategoryFilter::OpenSource),
        ))
        .into_iter()
        .collect();
        let closed: HashSet<u64> = ids(&sort_and_filter(
            &records,
            &ViewState::default().with_category(CategoryFilter::Proprietary),
        ))
        .into_iter()
        .collect();

        for record in &records {
            let flagged_open = record.details.is_open_source == Some(true);
            prop_assert_eq!(open.contains(&record.id), flagged_open);
            prop_assert_eq!(closed.contains(&record.id), !flagged_open);
        }
    }
}
